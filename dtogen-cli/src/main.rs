//! dtogen CLI tool
//!
//! # Usage
//!
//! ```bash
//! # Generate src/project/dto/* from src/project/schemas/project.schema.ts
//! dtogen project
//!
//! # Preview without writing
//! dtogen project --dry-run
//! dtogen project --diff
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use dtogen_cli_lib::{observability, GenerateCommand, OutputMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dtogen")]
#[command(version)]
#[command(about = "Generate NestJS DTOs from a Mongoose schema", long_about = None)]
struct Cli {
    /// Module name (e.g., `project`, `user-profile`)
    module: String,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long)]
    root: Option<PathBuf>,

    /// Config file (defaults to `<root>/dtogen.toml`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with template overrides (`*.hbs`), relative to the current directory
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Print generated files instead of writing them
    #[arg(long, conflicts_with = "diff")]
    dry_run: bool,

    /// Show differences against existing files instead of writing them
    #[arg(long)]
    diff: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the summary
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    const fn mode(&self) -> OutputMode {
        if self.dry_run {
            OutputMode::DryRun
        } else if self.diff {
            OutputMode::Diff
        } else {
            OutputMode::Write
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose)?;

    let root = match cli.root.clone() {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let cmd = GenerateCommand::new(cli.module.clone(), root)
        .with_config(cli.config.clone())
        .with_template_dir(cli.templates.clone())
        .with_mode(cli.mode())
        .quiet(cli.quiet);
    cmd.execute()?;

    Ok(())
}
