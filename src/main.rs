use std::process::ExitCode;

use clap::Parser;

use mvntidy::cli::Cli;
use mvntidy::output;
use mvntidy::sweeper::{self, SweepRequest};
use mvntidy::validator;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let raw_root = match cli.root {
        Some(root) => root,
        None => match default_repo_path() {
            Some(path) => path,
            None => {
                output::print_error("could not determine the home directory; pass a repository path");
                return ExitCode::from(2);
            }
        },
    };

    let root = match validator::validate(&raw_root) {
        Ok(root) => root,
        Err(e) => {
            output::print_error(&e.to_string());
            return ExitCode::from(2);
        }
    };

    let request = SweepRequest {
        root,
        dry_run: cli.dry_run,
        conservative: cli.conservative,
        verbose: cli.verbose,
        follow_symlinks: false,
        max_errors_retained: cli.max_errors,
    };

    output::print_banner(&request.root);
    let report = sweeper::sweep(&request);
    output::print_summary(&report);
    if cli.dry_run {
        output::print_dry_run_footer();
    }

    let ok = if cli.lenient { report.completed } else { report.ok() };
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Conventional local repository location.
fn default_repo_path() -> Option<String> {
    dirs::home_dir().map(|home| home.join(".m2/repository").display().to_string())
}
