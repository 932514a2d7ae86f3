//! Device lookup subcommands.

use crate::strategy::Element;
use clap::Args;

/// Arguments for the show subcommand
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Device key, typically `brand-model`
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the element subcommand
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Device key, typically `brand-model`
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Element: doctype, mimetype, rootelement, header, or body
    #[arg(value_name = "ELEMENT")]
    pub element: Element,

    /// Fail when neither the device's strategy nor the default provides the element
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the normalize subcommand
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Values to normalise
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}
