//! rescreen: resolves a grid-described monitor layout into absolute positions.
//!
//! # Usage
//!
//! ```text
//! rescreen [OPTIONS] --monitors <PATH>
//!
//! Options:
//!   --config    <PATH>   Layout configuration [default: platform config dir]
//!   --monitors  <PATH>   Snapshot of the connected monitors (TOML or JSON)
//!   --format    <FMT>    Output format: text or json [default: text]
//!   --log-level <LEVEL>  Log filter when RUST_LOG is unset [default: info]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable            | Description                         |
//! |---------------------|-------------------------------------|
//! | `RESCREEN_CONFIG`   | Layout configuration path           |
//! | `RESCREEN_MONITORS` | Monitor snapshot path               |
//! | `RESCREEN_LOG`      | Log filter                          |
//! | `RUST_LOG`          | Log filter, overrides `--log-level` |
//!
//! The report goes to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rescreen::application::arrange::arrange;
use rescreen::application::report::LayoutReport;
use rescreen::infrastructure::screen_info::SnapshotFileSource;
use rescreen::infrastructure::storage::config::{config_file_path, load_config};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Output format of the layout report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Resolves a monitor layout grid into absolute positions, canvas size and DPI.
#[derive(Debug, Parser)]
#[command(
    name = "rescreen",
    about = "Resolve a grid-described monitor layout into absolute positions",
    version
)]
struct Cli {
    /// Layout configuration file (TOML, or JSON with a `.json` extension).
    ///
    /// Defaults to `rescreen/config.toml` in the platform config directory.
    #[arg(long, env = "RESCREEN_CONFIG")]
    config: Option<PathBuf>,

    /// Snapshot of the connected monitors (TOML, or JSON with a `.json`
    /// extension).
    #[arg(long, env = "RESCREEN_MONITORS")]
    monitors: PathBuf,

    /// Output format of the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info", env = "RESCREEN_LOG")]
    log_level: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; an unparsable level falls back to info.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => config_file_path().context("no --config given")?,
    };
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load layout config {}", config_path.display()))?;

    let source = SnapshotFileSource::new(&cli.monitors);
    let layout = arrange(&config, &source).context("failed to arrange monitors")?;
    info!(config = %config_path.display(), monitors = %cli.monitors.display(), "layout arranged");

    let report = LayoutReport::from_layout(&layout);
    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json().context("failed to render report")?),
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
