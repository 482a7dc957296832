//! Taxref — aggregate taxonomy README files into one canonical reference.
//!
//! # Usage
//!
//! ```text
//! taxref              write architecture_taxonomy_reference.md
//! taxref --dry-run    preview the generated document without writing
//! taxref --check      exit 1 when the reference on disk is out of sync
//! ```

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use taxref_core::catalog;
use taxref_sync::{run_at, CheckStatus, Outcome, RunMode};

#[derive(Parser, Debug)]
#[command(
    name = "taxref",
    version,
    about = "Sync the architecture taxonomy reference with README.md files",
    long_about = None,
)]
struct Cli {
    /// Preview changes without writing to file.
    #[arg(long)]
    dry_run: bool,

    /// Check if the taxonomy reference is in sync (exit code 1 if out of sync).
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,
}

impl Cli {
    fn mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else if self.check {
            RunMode::Check
        } else {
            RunMode::Write
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("could not determine working directory")?;

    println!(
        "Scanning README.md files in {}/...",
        catalog::CONTENT_DIR
    );

    let outcome = run_at(&root, cli.mode()).context("taxonomy reference sync failed")?;
    Ok(report(&root, outcome))
}

fn report(root: &Path, outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Preview {
            head,
            total_chars,
            truncated,
        } => {
            let separator = "─".repeat(60).bright_black().to_string();
            println!("\nGenerated content preview:\n");
            println!("{separator}");
            print!("{head}");
            if truncated {
                println!("\n... (truncated)");
            } else {
                println!();
            }
            println!("{separator}");
            println!(
                "{} Dry run complete. Total length: {} characters",
                "✓".green(),
                total_chars
            );
            ExitCode::SUCCESS
        }

        Outcome::Check(CheckStatus::InSync) => {
            println!(
                "{} Taxonomy reference is in sync with README.md files",
                "✓".green()
            );
            ExitCode::SUCCESS
        }
        Outcome::Check(CheckStatus::Drifted) => {
            println!(
                "{} Taxonomy reference is out of sync with README.md files",
                "✗".red()
            );
            println!("  Run `taxref` to update it");
            ExitCode::FAILURE
        }
        Outcome::Check(CheckStatus::Missing) => {
            println!(
                "{} Taxonomy reference does not exist at {}",
                "✗".red(),
                display_path(root, &catalog::reference_path_at(root))
            );
            println!("  Run `taxref` to create it");
            ExitCode::FAILURE
        }

        Outcome::Written {
            path,
            section_count,
            total_chars,
        } => {
            println!("{} Updated: {}", "✓".green(), display_path(root, &path));
            println!("  Total sections: {section_count}");
            println!("  Total characters: {total_chars}");
            ExitCode::SUCCESS
        }
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
