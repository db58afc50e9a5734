use std::path::{Path, PathBuf};

/// Suffix Maven appends next to an artifact when a download attempt fails.
pub const SENTINEL_SUFFIX: &str = ".lastUpdated";

/// Verdict for a single regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Failure sentinel; removing it lets the next build retry the download.
    SentinelDelete,
    /// Anything else. Never touched.
    Skip,
}

/// Classify a file by its name alone. Case-sensitive, no I/O.
///
/// A file whose entire name is `.lastUpdated` still matches.
pub fn classify(path: &Path) -> Classification {
    let is_sentinel = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(SENTINEL_SUFFIX))
        .unwrap_or(false);

    if is_sentinel {
        Classification::SentinelDelete
    } else {
        Classification::Skip
    }
}

/// Sibling artifact a sentinel stands in for:
/// `foo-1.2.jar.lastUpdated` -> `foo-1.2.jar`.
///
/// Returns `None` when the name does not carry the suffix, or when the name
/// is nothing but the suffix and there is no artifact to probe.
pub fn artifact_path(sentinel: &Path) -> Option<PathBuf> {
    let name = sentinel.file_name()?.to_string_lossy().into_owned();
    let stripped = name.strip_suffix(SENTINEL_SUFFIX)?;
    if stripped.is_empty() {
        return None;
    }
    Some(sentinel.with_file_name(stripped))
}
