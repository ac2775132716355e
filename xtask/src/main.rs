//! Custom cargo commands for the geohub crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask wasm      - Build the browser bindings
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests, clippy, feature matrix, catalogue smoke test)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  wasm      Build the wasm32 library with browser bindings
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("geohub Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/5] Checking without default features...");
    run_cargo(&["check", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build and ASCII normalization compile\n");

    println!("[4/5] Checking browser bindings...");
    run_cargo(&["check", "--quiet", "--no-default-features", "--features", "wasm"])?;
    println!("✓ wasm feature compiles\n");

    println!("[5/5] Loading the embedded catalogue through the CLI...");
    catalogue_smoke_test()?;
    println!("✓ Catalogue loads and every country view resolves\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the wasm32 library. Rayon is left out: browsers get the sequential build.
fn wasm() -> Result<()> {
    run_cargo(&[
        "build",
        "--release",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm,unicode-normalization",
    ])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// List every country, then every country's resources, through the binary.
fn catalogue_smoke_test() -> Result<()> {
    let root = project_root()?;

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "--json", "countries"])
        .current_dir(&root)
        .output()
        .context("Failed to run geohub countries")?;
    if !output.status.success() {
        bail!(
            "geohub countries failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let ids = country_ids(&output.stdout)?;
    if ids.is_empty() {
        bail!("geohub countries printed no country ids");
    }

    for id in &ids {
        run_cargo(&["run", "--quiet", "--", "--json", "list", "resources", "--country", id])?;
    }
    Ok(())
}

/// Country ids from a `geohub --json countries` result page.
fn country_ids(stdout: &[u8]) -> Result<Vec<String>> {
    let page: Value = serde_json::from_slice(stdout).context("geohub countries printed invalid JSON")?;
    let items = page["items"]
        .as_array()
        .context("geohub countries output has no items array")?;
    items
        .iter()
        .map(|item| {
            item["item"]["record"]["id"]
                .as_str()
                .map(str::to_string)
                .context("country record without an id")
        })
        .collect()
}
