use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mvntidy",
    about = "Sweep stale .lastUpdated failure markers from a local Maven repository",
    version
)]
pub struct Cli {
    /// Repository root to sweep. Defaults to ~/.m2/repository.
    pub root: Option<String>,

    /// Report what would be deleted without removing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep a sentinel when its artifact is present on disk.
    #[arg(long)]
    pub conservative: bool,

    /// Print one line per deleted file.
    #[arg(long)]
    pub verbose: bool,

    /// Exit 0 whenever the walk completed, even with per-file failures.
    #[arg(long)]
    pub lenient: bool,

    /// Maximum number of error records kept in the summary.
    #[arg(long, default_value_t = 32)]
    pub max_errors: usize,
}
