//! xtask - Development automation for folio
//!
//! Usage: cargo xtask <command>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "folio development automation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile, lint and test - fast pre-commit validation
    Check,

    /// Run tests
    Test {
        /// Run only lib tests (faster)
        #[arg(long)]
        lib: bool,
        /// Filter test name
        filter: Option<String>,
    },

    /// Format code
    Fmt {
        /// Check only, don't modify
        #[arg(long)]
        check: bool,
    },

    /// Build the folio-ui WASM bundle into web/pkg
    Wasm {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },

    /// Full CI pipeline (fmt, check, wasm)
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cli.command {
        Command::Check => check(&sh),
        Command::Test { lib, filter } => test(&sh, lib, filter),
        Command::Fmt { check } => fmt(&sh, check),
        Command::Wasm { release } => build_wasm(&sh, release),
        Command::Ci => {
            fmt(&sh, true)?;
            check(&sh)?;
            build_wasm(&sh, true)
        }
    }
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    PathBuf::from(manifest_dir)
        .parent()
        .map(PathBuf::from)
        .context("xtask has no parent directory")
}

fn check(sh: &Shell) -> Result<()> {
    println!("Running checks...");

    println!("  Checking compilation...");
    cmd!(sh, "cargo check --workspace").run()?;
    cmd!(sh, "cargo check -p folio-ui --target wasm32-unknown-unknown").run()?;

    println!("  Running clippy...");
    cmd!(sh, "cargo clippy --workspace -- -D warnings").run()?;

    println!("  Running tests...");
    cmd!(sh, "cargo test --workspace").run()?;

    println!("All checks passed!");
    Ok(())
}

fn test(sh: &Shell, lib: bool, filter: Option<String>) -> Result<()> {
    let mut args = vec!["test", "--workspace"];
    if lib {
        args.push("--lib");
    }
    if let Some(ref f) = filter {
        args.push("--");
        args.push(f);
    }
    cmd!(sh, "cargo {args...}").run()?;
    Ok(())
}

fn fmt(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
    }
    Ok(())
}

fn build_wasm(sh: &Shell, release: bool) -> Result<()> {
    let root = project_root()?;
    let out_dir = root.join("web/pkg");
    let out_dir = out_dir.to_str().context("Invalid wasm output path")?;

    if cmd!(sh, "which wasm-pack").run().is_err() {
        println!("Installing wasm-pack...");
        cmd!(sh, "cargo install wasm-pack").run()?;
    }

    println!("\n=== Building folio-ui WASM ===");
    let _dir = sh.push_dir(root.join("crates/folio-ui"));
    let profile = if release { "--release" } else { "--dev" };
    cmd!(sh, "wasm-pack build {profile} --target web --out-dir {out_dir}")
        .run()
        .context("Failed to build folio-ui WASM")?;

    println!("\nWASM bundle built to: {out_dir}");
    println!("Serve the web/ directory with any static file server.");
    Ok(())
}
