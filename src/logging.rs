//! Logging setup for the command-line tool.
//!
//! Library code only emits `tracing` events; the binary picks where they go.

use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stdout,
    Stderr,
    /// Append to a file, without ANSI colours.
    File(PathBuf),
}

impl LogTarget {
    /// Parse `0`/`off`, `1`/`stdout`, `2`/`stderr`, or a filename.
    pub fn parse(value: &str) -> Self {
        match value {
            "0" | "off" => LogTarget::Off,
            "1" | "stdout" => LogTarget::Stdout,
            "2" | "stderr" => LogTarget::Stderr,
            filename => LogTarget::File(PathBuf::from(filename)),
        }
    }
}

/// Build the event filter.
///
/// A valid `RUST_LOG`-style directive string wins; otherwise `--verbose`
/// picks `debug` over `info`.
pub fn env_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget, verbose: bool) -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(verbose, directives.as_deref());

    match target {
        LogTarget::Off => {}
        LogTarget::Stdout => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
