//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::harvest::HarvestArgs;
use crate::commands::pages::PagesArgs;

/// Download the access logs of every repository in a registry namespace.
///
/// Without a subcommand the namespace is harvested.
#[derive(Parser, Debug)]
#[command(name = "quay-logs")]
#[command(author, version = env!("QUAY_LOGS_VERSION"), about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Debug logging, same as -vv
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub harvest: HarvestArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective verbosity once `--debug` is folded in.
    pub fn verbosity(&self) -> u8 {
        if self.debug {
            self.verbose.max(2)
        } else {
            self.verbose
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the page files saved by a previous harvest
    Pages(PagesArgs),
}
