use std::path::Path;

use colored::Colorize;

use crate::sweeper::SweepReport;

pub fn print_banner(root: &Path) {
    println!(
        "{} {}",
        "mvntidy — sweeping".bold().cyan(),
        root.display().to_string().bold()
    );
    println!();
}

pub fn print_deleted(path: &Path) {
    println!("  {} {}", "Deleted:".red(), path.display().to_string().dimmed());
}

pub fn print_would_delete(path: &Path) {
    println!(
        "  {} {}",
        "Would delete:".yellow(),
        path.display().to_string().dimmed()
    );
}

pub fn print_summary(report: &SweepReport) {
    println!("{}", "=== Sweep Summary ===".bold().white());
    println!("  {:<10} {}", "scanned", report.scanned.to_string().cyan());
    println!("  {:<10} {}", "matched", report.matched.to_string().yellow());
    println!("  {:<10} {}", "deleted", report.deleted.to_string().green());
    let failed = report.failed.to_string();
    println!(
        "  {:<10} {}",
        "failed",
        if report.failed == 0 { failed.green() } else { failed.red() }
    );

    for (path, reason) in &report.errors {
        println!("  {}: {}", path.display().to_string().dimmed(), reason.red());
    }

    if !report.completed {
        println!();
        print_warning("Sweep was cancelled before the walk finished.");
    }
    println!();
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg.red());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Re-run without --dry-run to delete."
            .yellow()
            .bold()
    );
}
