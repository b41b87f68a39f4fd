//! Pages command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quaylogs::list_json_files;

use crate::output;

#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Directory to inspect, e.g. `./logs/<namespace>/<repository>`
    pub dir: PathBuf,

    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PagesArgs) -> Result<()> {
    let files = list_json_files(&args.dir)
        .await
        .with_context(|| format!("Failed to list pages in {}", args.dir.display()))?;

    if args.json {
        let paths: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        return output::json(&serde_json::json!(paths));
    }

    if files.is_empty() {
        eprintln!("{}", "No pages found.".dimmed());
        return Ok(());
    }

    for file in &files {
        println!("{}", file.display());
    }

    Ok(())
}
