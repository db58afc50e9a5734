use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One traversal observation, consumed synchronously by the sweeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    /// Regular file, or a symlink whose target is not a directory. For
    /// symlinks the path names the link itself, never the target.
    File(PathBuf),
    DirEnter(PathBuf),
    DirExit(PathBuf),
    /// Entry that could not be read; carries the I/O error text.
    Unreadable(PathBuf, String),
}

/// Visitor verdict after each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Continue,
    Stop,
}

/// Depth-first pre-order walk of `root`, visiting every regular file exactly
/// once. Per-entry I/O errors become `Unreadable` events; the walk itself
/// never aborts on them. Returns `false` when the visitor stopped early.
///
/// Symlinked directories are not descended unless `follow_symlinks` is set
/// (the root itself may be a symlink either way). FIFOs, sockets and device
/// nodes are skipped silently.
pub fn walk<F>(root: &Path, follow_symlinks: bool, mut visit: F) -> bool
where
    F: FnMut(FileEvent) -> WalkState,
{
    // Directories entered but not yet left. walkdir has no post-order
    // callback, so DirExit events are synthesized from depth transitions.
    let mut open_dirs: Vec<(PathBuf, usize)> = Vec::new();

    for entry in WalkDir::new(root).follow_links(follow_symlinks) {
        let (event, depth) = match entry {
            Ok(entry) => {
                let depth = entry.depth();
                let file_type = entry.file_type();
                if file_type.is_dir() {
                    (Some(FileEvent::DirEnter(entry.into_path())), depth)
                } else if file_type.is_file() {
                    (Some(FileEvent::File(entry.into_path())), depth)
                } else if file_type.is_symlink() {
                    // A link to a directory is neither descended nor
                    // reported. Anything else (file target or broken link)
                    // is a deletion candidate in its own right.
                    match std::fs::metadata(entry.path()) {
                        Ok(target) if target.is_dir() => (None, depth),
                        _ => (Some(FileEvent::File(entry.into_path())), depth),
                    }
                } else {
                    (None, depth)
                }
            }
            Err(err) => {
                let depth = err.depth();
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let reason = err
                    .io_error()
                    .map(|io| io.to_string())
                    .unwrap_or_else(|| err.to_string());
                (Some(FileEvent::Unreadable(path, reason)), depth)
            }
        };

        // Close every directory the traversal has moved out of.
        while open_dirs.last().is_some_and(|(_, d)| depth <= *d) {
            if let Some((dir, _)) = open_dirs.pop() {
                if visit(FileEvent::DirExit(dir)) == WalkState::Stop {
                    return false;
                }
            }
        }

        match event {
            Some(FileEvent::DirEnter(dir)) => {
                if visit(FileEvent::DirEnter(dir.clone())) == WalkState::Stop {
                    return false;
                }
                open_dirs.push((dir, depth));
            }
            Some(other) => {
                if visit(other) == WalkState::Stop {
                    return false;
                }
            }
            None => {}
        }
    }

    while let Some((dir, _)) = open_dirs.pop() {
        if visit(FileEvent::DirExit(dir)) == WalkState::Stop {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(root: &Path) -> Vec<FileEvent> {
        let mut events = Vec::new();
        let finished = walk(root, false, |event| {
            events.push(event);
            WalkState::Continue
        });
        assert!(finished);
        events
    }

    #[test]
    fn visits_every_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("org/example");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("a.jar"), b"a").unwrap();
        std::fs::write(sub.join("b.pom"), b"b").unwrap();

        let events = collect(dir.path());
        let files: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, FileEvent::File(_)))
            .collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn dir_enter_and_exit_balance() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        std::fs::create_dir_all(dir.path().join("d")).unwrap();

        let mut depth = 0i64;
        let mut max_depth = 0i64;
        let finished = walk(dir.path(), false, |event| {
            match event {
                FileEvent::DirEnter(_) => {
                    depth += 1;
                    max_depth = max_depth.max(depth);
                }
                FileEvent::DirExit(_) => depth -= 1,
                _ => {}
            }
            WalkState::Continue
        });
        assert!(finished);
        assert_eq!(depth, 0);
        assert_eq!(max_depth, 4); // root/a/b/c
    }

    #[test]
    fn enter_precedes_files_within_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("x.txt"), b"x").unwrap();

        let events = collect(dir.path());
        let enter = events
            .iter()
            .position(|e| *e == FileEvent::DirEnter(sub.clone()))
            .unwrap();
        let file = events
            .iter()
            .position(|e| *e == FileEvent::File(sub.join("x.txt")))
            .unwrap();
        let exit = events
            .iter()
            .position(|e| *e == FileEvent::DirExit(sub.clone()))
            .unwrap();
        assert!(enter < file && file < exit);
    }

    #[test]
    fn stop_ends_walk_early() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), b"a").unwrap();
        std::fs::write(dir.path().join("b"), b"b").unwrap();

        let mut seen = 0;
        let finished = walk(dir.path(), false, |_| {
            seen += 1;
            WalkState::Stop
        });
        assert!(!finished);
        assert_eq!(seen, 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_not_descended() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        std::fs::write(outside.path().join("secret.lastUpdated"), b"s").unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        let events = collect(dir.path());
        assert!(events
            .iter()
            .all(|e| !matches!(e, FileEvent::File(p) if p.starts_with(dir.path().join("link")))));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_reported_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.jar");
        std::fs::write(&target, b"jar").unwrap();
        let link = dir.path().join("alias.jar");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let events = collect(dir.path());
        assert!(events.contains(&FileEvent::File(link)));
    }
}
