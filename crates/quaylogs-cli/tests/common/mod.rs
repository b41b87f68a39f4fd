use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const ENV_VARS: &[&str] = &[
    "QUAY_NAMESPACE",
    "QUAY_AUTH_TOKEN",
    "QUAY_REGISTRY_URL",
    "RUST_LOG",
];

/// Run the CLI binary with arguments in an isolated environment.
pub async fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quay-logs"));
    cmd.args(args);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str]) -> String {
    let output = run_cli(args).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// `.json` files directly inside `dir`, sorted.
pub fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}
