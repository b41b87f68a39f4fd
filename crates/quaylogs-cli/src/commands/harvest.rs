//! Harvest command implementation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use quaylogs::config::DEFAULT_OUTPUT_DIR;
use quaylogs::{AuthToken, DEFAULT_REGISTRY, HarvestConfig, Harvester, PageWriter, RegistryUrl};

use crate::output;

#[derive(Args, Debug)]
pub struct HarvestArgs {
    /// Registry namespace (organization) whose repositories are harvested
    #[arg(long, env = "QUAY_NAMESPACE")]
    pub namespace: Option<String>,

    /// Bearer token for the registry API
    #[arg(long, env = "QUAY_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Directory receiving the downloaded pages
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub logs_file_path: PathBuf,

    /// Registry base URL
    #[arg(long, env = "QUAY_REGISTRY_URL", default_value = DEFAULT_REGISTRY)]
    pub registry_url: String,

    /// Only fetch logs of this repository, skipping the listing
    #[arg(long)]
    pub repo: Option<String>,

    /// Also save the repository listing page
    #[arg(long)]
    pub save_listing: bool,

    /// Do not save log pages, only count them
    #[arg(long)]
    pub no_save_logs: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl HarvestArgs {
    fn config(&self) -> Result<HarvestConfig> {
        let registry: RegistryUrl = self
            .registry_url
            .parse()
            .context("Invalid registry URL")?;

        let config = HarvestConfig::new(
            self.namespace.clone().unwrap_or_default(),
            AuthToken::new(self.auth_token.clone().unwrap_or_default()),
        )
        .with_registry(registry)
        .with_output_dir(&self.logs_file_path)
        .with_write_listing(self.save_listing)
        .with_write_logs(!self.no_save_logs)
        .with_timeout(self.timeout.map(Duration::from_secs));

        Ok(config)
    }
}

pub async fn run(args: HarvestArgs) -> Result<()> {
    let config = args.config()?;
    let harvester = Harvester::new(config).context("Invalid configuration")?;

    PageWriter::new()
        .ensure_dir(&args.logs_file_path)
        .await
        .context("Failed to create output directory")?;

    let report = match &args.repo {
        Some(repo) => {
            info!(repository = %repo, "Fetching a single repository");
            harvester.run_for(std::slice::from_ref(repo)).await
        }
        None => harvester.run().await,
    }
    .context("Harvest failed")?;

    output::summary(&report);
    if !args.no_save_logs {
        output::field("Output", &args.logs_file_path.display().to_string());
    }

    Ok(())
}
