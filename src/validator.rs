use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal problems with the supplied repository root. The sweep never starts.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("repository path is empty")]
    EmptyPath,

    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Normalize and check the user-supplied root.
///
/// Relative input is resolved against the current working directory. The
/// final component is deliberately not canonicalized, so a symlinked
/// repository root stays targetable. Writability is not checked here;
/// permission problems surface later as per-file errors.
pub fn validate(raw: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPath);
    }

    let path = Path::new(trimmed);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    match std::fs::metadata(&absolute) {
        Ok(meta) if meta.is_dir() => Ok(absolute),
        Ok(_) => Err(ValidationError::NotADirectory { path: absolute }),
        Err(_) => Err(ValidationError::NotFound { path: absolute }),
    }
}
