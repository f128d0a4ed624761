//! Custom cargo commands for labkit.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Run every fuzz target for a short time
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["vector_ops", "rational_arith", "rational_parse"];

/// Seconds per fuzz target when run from `verify` or `fuzz`
const FUZZ_SECONDS: u32 = 30;

/// Constants that must agree between the crate and the Kani extraction
const SHARED_CONSTANTS: &[&str] = &["INITIAL_CAPACITY", "GROWTH_FACTOR"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
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
  verify        Run full verification suite (tests + clippy + Kani + constant alignment)
  test          Run all Rust tests
  check         Quick check (cargo check + test + clippy)
  kani          Run Kani proofs only
  fuzz [TARGET] Fuzz one target, or all of them, for {FUZZ_SECONDS}s each
  bench         Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("labkit Verification Suite");
    println!("==========================================\n");

    // Step 1: Check contract call sites
    println!("[1/5] Checking contract call sites...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    // Step 5: Verify constant alignment
    println!("[5/5] Verifying crate/Kani constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no Kani, no fuzzing)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if which("cargo-kani").is_none() {
        println!("  (cargo-kani not installed, running extraction tests instead)");
        return run_cargo_in(&kani_dir, &["test", "--quiet"]);
    }
    run_cargo_in(&kani_dir, &["kani"])
}

/// Run fuzz targets for a bounded time
fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("unknown fuzz target '{}', expected one of {:?}", t, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for t in targets {
        println!("Fuzzing {} for {}s...", t, FUZZ_SECONDS);
        run_cargo(&["+nightly", "fuzz", "run", t, "--", &max_time])?;
    }
    Ok(())
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn which(binary: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "contracts::check_", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 contract call sites, found {}. Someone may have removed invariant checks!",
            count
        );
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let crate_src = std::fs::read_to_string(root.join("src/vector/mod.rs"))
        .context("Failed to read src/vector/mod.rs")?;
    let kani_src = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in SHARED_CONSTANTS {
        let ours = extract_const(&crate_src, name)
            .with_context(|| format!("{} not found in src/vector/mod.rs", name))?;
        let theirs = extract_const(&kani_src, name)
            .with_context(|| format!("{} not found in kani-proofs", name))?;
        if ours != theirs {
            bail!("{}: crate has {}, Kani extraction has {}", name, ours, theirs);
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const NAME: usize = 10;"
    let prefix = format!("pub const {}: usize =", name);
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(&prefix))
        .and_then(|rest| rest.trim().trim_end_matches(';').trim().parse().ok())
}
