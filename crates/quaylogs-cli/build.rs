//! Embeds the release version shown by `quay-logs --version`.
//!
//! Inside a git checkout this is `git describe` output (leading `v` dropped,
//! `-dirty` appended for uncommitted changes); from a packaged source tree
//! it is the crate version.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=QUAY_LOGS_VERSION_OVERRIDE");

    let version = std::env::var("QUAY_LOGS_VERSION_OVERRIDE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=QUAY_LOGS_VERSION={version}");
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    match described.trim() {
        "" => None,
        tag => Some(tag.trim_start_matches('v').to_string()),
    }
}
