//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use quaylogs::HarvestReport;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print the per-repository table and totals of a finished harvest.
pub fn summary(report: &HarvestReport) {
    success(&format!(
        "Harvested {} repositories of {}",
        report.repositories.len(),
        report.namespace
    ));

    let width = report
        .repositories
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);

    for repo in &report.repositories {
        let line = format!(
            "{:<width$}  {:>4} pages  {:>7} entries",
            repo.name, repo.pages, repo.entries
        );
        match repo.stopped_at_status {
            Some(status) => println!(
                "  {}  {}",
                line,
                format!("stopped at HTTP {status}").yellow()
            ),
            None if repo.entries == 0 => println!("  {}", line.dimmed()),
            None => println!("  {}", line),
        }
    }

    field("Pages", &report.total_pages().to_string());
    field("Entries", &report.total_entries().to_string());

    let incomplete = report.incomplete().count();
    if incomplete > 0 {
        field("Incomplete", &incomplete.to_string());
    }
}
