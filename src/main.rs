//! ttyload — a live terminal graph of the 1/5/15-minute load averages.
//!
//! Run with:  `RUST_LOG=info ttyload`   (press Esc or `q` to quit)

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ttyload_config::TtyloadConfig;

/// Graph the system load averages in the terminal.
#[derive(Debug, Parser)]
#[command(name = "ttyload", version, disable_version_flag = true)]
struct Cli {
    /// Seconds between refreshes (default 4; the minimum of 1 is silently clamped).
    #[arg(short, long, value_name = "SECS")]
    interval: Option<u64>,

    /// Monochrome mode: digits instead of ANSI colors.
    #[arg(short, long)]
    monochrome: bool,

    /// Screen height, overriding auto-detection.
    #[arg(short, long)]
    rows: Option<u16>,

    /// Screen width, overriding auto-detection.
    #[arg(short, long)]
    cols: Option<u16>,

    /// Load value for the threshold line (default: number of cores).
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Config file (default: $XDG_CONFIG_HOME/ttyload/ttyload.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

impl Cli {
    /// Layer command-line flags over the file configuration.
    fn apply(self, mut config: TtyloadConfig) -> TtyloadConfig {
        if let Some(secs) = self.interval {
            config.interval_secs = secs;
        }
        config.monochrome |= self.monochrome;
        config.rows = self.rows.or(config.rows);
        config.cols = self.cols.or(config.cols);
        config.threshold = self.threshold.or(config.threshold);
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never land inside the graph on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("ttyload v{} starting", env!("CARGO_PKG_VERSION"));

    let path = cli.config.clone().unwrap_or_else(ttyload_config::default_path);
    let config = ttyload_config::load(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    ttyload_terminal::run(cli.apply(config))
        .await
        .context("ttyload stopped")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from(["ttyload", "-i", "2", "-m", "-t", "3.5", "-r", "40"]);
        let file = TtyloadConfig { cols: Some(100), threshold: Some(8.0), ..Default::default() };
        let config = cli.apply(file);

        assert_eq!(config.interval_secs, 2);
        assert!(config.monochrome);
        assert_eq!(config.threshold, Some(3.5));
        assert_eq!(config.rows, Some(40));
        assert_eq!(config.cols, Some(100));
    }

    #[test]
    fn no_flags_keep_file_values() {
        let cli = Cli::parse_from(["ttyload"]);
        let file = TtyloadConfig { interval_secs: 9, monochrome: true, ..Default::default() };
        assert_eq!(cli.apply(file.clone()), file);
    }

    #[test]
    fn non_finite_threshold_flag_fails_validation() {
        let cli = Cli::parse_from(["ttyload", "-t", "nan"]);
        let config = cli.apply(TtyloadConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn lowercase_v_is_version() {
        let err = Cli::try_parse_from(["ttyload", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
