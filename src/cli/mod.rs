//! CLI command definitions for tal-devices
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod device;

use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use device::{ElementArgs, NormalizeArgs, ShowArgs};
use std::path::PathBuf;

/// Device configuration and page strategy lookup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (replaces project and user settings)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Device configuration root (overrides settings)
    #[arg(short, long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Sub-directory of the configuration root holding device descriptors
    #[arg(short, long, global = true)]
    pub device_dir: Option<String>,

    /// Directory of on-disk page strategies, layered over the built-ins
    #[arg(long, global = true)]
    pub strategies_dir: Option<PathBuf>,

    /// Output format: json or markdown (overrides settings)
    #[arg(short, long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every page strategy element for a device
    Show(ShowArgs),

    /// Print a single page strategy element for a device
    Element(ElementArgs),

    /// Normalise device keys for comparison
    Normalize(NormalizeArgs),

    /// List known page strategies
    Strategies,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s)
        .ok_or_else(|| format!("Invalid format '{}'. Valid options: json, markdown", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Element;

    #[test]
    fn test_parse_show_with_globals() {
        let cli = Cli::try_parse_from([
            "tal-devices",
            "show",
            "generic-tv1",
            "--config-path",
            "tests/fixtures",
            "--format",
            "md",
        ])
        .unwrap();

        assert_eq!(cli.config_path, Some(PathBuf::from("tests/fixtures")));
        assert_eq!(cli.format, Some(OutputFormat::Markdown));
        assert_eq!(cli.log, "2");
        match cli.command {
            Command::Show(args) => assert_eq!(args.key, "generic-tv1"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_element() {
        let cli = Cli::try_parse_from(["tal-devices", "element", "lg-2012", "mimetype"]).unwrap();
        match cli.command {
            Command::Element(args) => {
                assert_eq!(args.key, "lg-2012");
                assert_eq!(args.element, Element::MimeType);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_element_and_format() {
        assert!(Cli::try_parse_from(["tal-devices", "element", "lg-2012", "footer"]).is_err());
        assert!(Cli::try_parse_from(["tal-devices", "strategies", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_parse_normalize_values() {
        let cli =
            Cli::try_parse_from(["tal-devices", "normalize", "Samsung-2013", "one$two(three"])
                .unwrap();
        match cli.command {
            Command::Normalize(args) => assert_eq!(args.values.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
