use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::classifier::{self, Classification};
use crate::output;
use crate::walker::{self, FileEvent, WalkState};

/// Everything the engine needs for one sweep. The root must already have
/// passed [`crate::validator::validate`].
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub root: PathBuf,
    /// Classify and count, but delete nothing.
    pub dry_run: bool,
    /// Keep a sentinel when its sibling artifact made it to disk.
    pub conservative: bool,
    /// Print one line per deletion as it happens.
    pub verbose: bool,
    pub follow_symlinks: bool,
    /// Cap on error records kept in the report. Counters are exact either way.
    pub max_errors_retained: usize,
}

impl SweepRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            conservative: false,
            verbose: false,
            follow_symlinks: false,
            max_errors_retained: 32,
        }
    }
}

/// Aggregate outcome of one sweep. Deletes are permanent and the sweep is
/// not transactional; partial progress on failure is expected and reported.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Regular files visited.
    pub scanned: u64,
    /// Files classified as sentinels under the active policy.
    pub matched: u64,
    /// Sentinels actually removed. Stays 0 in dry-run mode.
    pub deleted: u64,
    /// Unreadable entries plus failed deletions.
    pub failed: u64,
    /// First `max_errors_retained` failures, in encounter order.
    pub errors: Vec<(PathBuf, String)>,
    /// False only when the sweep was cancelled before the walk finished.
    pub completed: bool,
}

impl SweepReport {
    pub fn ok(&self) -> bool {
        self.completed && self.failed == 0
    }

    fn record_error(&mut self, path: PathBuf, reason: String, cap: usize) {
        self.failed += 1;
        if self.errors.len() < cap {
            self.errors.push((path, reason));
        }
    }
}

/// Sweep without a cancellation signal.
pub fn sweep(request: &SweepRequest) -> SweepReport {
    let never = AtomicBool::new(false);
    sweep_with_cancel(request, &never)
}

/// Drive the walker over `request.root`, deleting every file the classifier
/// marks as a sentinel. The cancel flag is polled at each event boundary;
/// once set, no further file is visited and already-taken deletions stand.
pub fn sweep_with_cancel(request: &SweepRequest, cancel: &AtomicBool) -> SweepReport {
    let mut report = SweepReport::default();

    let finished = walker::walk(&request.root, request.follow_symlinks, |event| {
        if cancel.load(Ordering::Relaxed) {
            return WalkState::Stop;
        }

        match event {
            FileEvent::DirEnter(_) | FileEvent::DirExit(_) => {}
            FileEvent::Unreadable(path, reason) => {
                report.record_error(path, reason, request.max_errors_retained);
            }
            FileEvent::File(path) => {
                report.scanned += 1;
                if classify_under_policy(&path, request.conservative) != Classification::SentinelDelete {
                    return WalkState::Continue;
                }
                report.matched += 1;

                if request.dry_run {
                    if request.verbose {
                        output::print_would_delete(&path);
                    }
                    return WalkState::Continue;
                }

                match std::fs::remove_file(&path) {
                    Ok(()) => {
                        report.deleted += 1;
                        if request.verbose {
                            output::print_deleted(&path);
                        }
                    }
                    Err(e) => {
                        report.record_error(path, e.to_string(), request.max_errors_retained)
                    }
                }
            }
        }
        WalkState::Continue
    });

    report.completed = finished;
    report
}

fn classify_under_policy(path: &Path, conservative: bool) -> Classification {
    let verdict = classifier::classify(path);
    if verdict == Classification::SentinelDelete && conservative && sibling_artifact_exists(path) {
        // The artifact arrived after all; leave its marker for Maven.
        return Classification::Skip;
    }
    verdict
}

fn sibling_artifact_exists(sentinel: &Path) -> bool {
    classifier::artifact_path(sentinel)
        .map(|artifact| artifact.exists())
        .unwrap_or(false)
}
