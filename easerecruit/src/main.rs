//! # easerecruit
//!
//! Builds the Ease Recruit homepage into a static `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Render into ./dist (or [build] out_dir from easerecruit.toml)
//! easerecruit build
//!
//! # Custom metadata and output
//! easerecruit --config site.toml build --out public
//!
//! # Watch the tagline animation in the terminal (Ctrl-C to stop)
//! easerecruit preview --loops 1
//! ```
//!
//! (c)2025 The Ease Recruit Team

mod build;
mod config;
mod preview;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::{Term, style};
use easerecruit_site::typewriter::Typewriter;
use easerecruit_site::types::TypewriterConfig;
use tracing::info;

use crate::config::ProjectConfig;
use crate::preview::Outcome;

#[derive(Parser, Debug)]
#[command(name = "easerecruit")]
#[command(about = "Build the Ease Recruit homepage into static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Site metadata file (default: ./easerecruit.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render index.html into the output directory
    Build {
        /// Output directory (overrides [build] out_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Play the tagline animation in the terminal
    Preview {
        /// Full passes over the word list, 0 cycles until Ctrl-C
        #[arg(long)]
        loops: Option<u32>,
    },
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run_build(config: ProjectConfig, out: Option<PathBuf>) -> Result<()> {
    let out_dir = out.unwrap_or(config.build.out_dir);
    let report = build::write_site(&config.site, &out_dir)?;
    println!(
        "{} Wrote {} ({} bytes, {} features)",
        style("✓").green().bold(),
        report.index.display(),
        report.bytes,
        report.features
    );
    Ok(())
}

async fn run_preview(config: ProjectConfig, loops: Option<u32>) -> Result<()> {
    let mut typewriter = TypewriterConfig::default();
    if let Some(loops) = loops {
        typewriter.loops = loops;
    }
    let cursor = typewriter.cursor.style.clone();
    let tagline = config.site.tagline;
    let term = Term::stdout();

    println!("{}", style(&config.site.title).bold());
    let mut failed = None;
    let outcome = preview::animate(
        Typewriter::new(typewriter),
        |tw| {
            if failed.is_some() {
                return;
            }
            let line = format!("{} {}{}", tagline, style(tw.text()).bold(), cursor);
            if let Err(err) = term.clear_line().and_then(|_| term.write_str(&line)) {
                failed = Some(err);
            }
        },
        preview::until_signal(tokio::signal::ctrl_c()),
    )
    .await;

    if let Some(err) = failed {
        return Err(err).context("failed to write preview to terminal");
    }
    println!();
    std::io::stdout().flush().context("failed to flush stdout")?;
    info!(?outcome, "preview ended");
    if outcome == Outcome::Cancelled {
        println!("{} Preview stopped", style("⚠").yellow().bold());
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = ProjectConfig::resolve(args.config.as_deref(), &cwd)?;

    match args.command {
        Command::Build { out } => run_build(config, out),
        Command::Preview { loops } => run_preview(config, loops).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("✗").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let args = Args::parse_from([
            "easerecruit",
            "build",
            "--config",
            "site.toml",
            "--out",
            "public",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("site.toml")));
        match args.command {
            Command::Build { out } => assert_eq!(out, Some(PathBuf::from("public"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn preview_loops_flag() {
        let args = Args::parse_from(["easerecruit", "preview", "--loops", "0"]);
        assert!(matches!(args.command, Command::Preview { loops: Some(0) }));
    }
}
