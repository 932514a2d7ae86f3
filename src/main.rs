//! tal-devices
//!
//! Looks up device configurations and the page strategy fragments
//! (doctype, mimetype, root element, head and body markup) they select.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use std::process::ExitCode;
use tal_devices::cli::device::{ElementArgs, NormalizeArgs, ShowArgs};
use tal_devices::cli::{Cli, Command};
use tal_devices::config::{ConfigLoader, ConfigPaths, Settings};
use tal_devices::device::Tal;
use tal_devices::error::TalError;
use tal_devices::format::{OutputFormat, format_fragments_json, format_fragments_markdown};
use tal_devices::logging::{self, LogTarget};
use tal_devices::normalize::normalize_key_name;
use tal_devices::strategy::{LayeredStrategyStore, StrategyStore};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogTarget::parse(&cli.log), cli.verbose) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let body = match e.downcast_ref::<TalError>() {
                Some(tal_err) => tal_err.to_json(),
                None => json!({ "code": "INTERNAL_ERROR", "message": e.to_string() }),
            };
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut loader = match cli.settings {
        Some(ref path) => ConfigLoader::load_file(ConfigPaths::discover(), path.clone())?,
        None => ConfigLoader::load()?,
    };
    if let Some(path) = loader.settings_path() {
        debug!(path = %path.display(), "Using settings file");
    }

    // CLI flags override every settings tier
    let settings = loader.settings_mut();
    if let Some(config_path) = cli.config_path {
        settings.paths.config_path = config_path;
    }
    if let Some(device_dir) = cli.device_dir {
        settings.paths.device_dir = device_dir;
    }
    if let Some(strategies_dir) = cli.strategies_dir {
        settings.paths.strategies_dir = Some(strategies_dir);
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }
    let settings = loader.into_settings();

    let mut store = LayeredStrategyStore::new();
    if let Some(ref dir) = settings.paths.strategies_dir {
        store = store.with_dir(dir.clone());
    }
    let tal = Tal::new(settings.paths.config_path.clone(), store);

    match cli.command {
        Command::Show(args) => run_show(&tal, &settings, args),
        Command::Element(args) => run_element(&tal, &settings, args),
        Command::Normalize(args) => {
            run_normalize(&settings, args);
            Ok(())
        }
        Command::Strategies => {
            run_strategies(&tal, &settings);
            Ok(())
        }
    }
}

fn run_show<S: StrategyStore>(tal: &Tal<S>, settings: &Settings, args: ShowArgs) -> Result<()> {
    let config = tal.load_config(&args.key, &settings.paths.device_dir)?;
    let fragments = tal.fragments(&config);

    match settings.format {
        OutputFormat::Json => println!("{}", format_fragments_json(&args.key, &fragments)),
        OutputFormat::Markdown => print!("{}", format_fragments_markdown(&args.key, &fragments)),
    }
    Ok(())
}

fn run_element<S: StrategyStore>(
    tal: &Tal<S>,
    settings: &Settings,
    args: ElementArgs,
) -> Result<()> {
    let config = tal.load_config(&args.key, &settings.paths.device_dir)?;
    let value = if args.strict {
        tal.require(&config, args.element)?
    } else {
        tal.element(&config, args.element)
    };

    // Raw value, so it can be piped straight into a template
    print!("{}", value);
    Ok(())
}

fn run_normalize(settings: &Settings, args: NormalizeArgs) {
    let normalized: Vec<String> = args.values.iter().map(|v| normalize_key_name(v)).collect();

    match settings.format {
        OutputFormat::Json => println!("{}", json!(normalized)),
        OutputFormat::Markdown => {
            for (original, key) in args.values.iter().zip(&normalized) {
                println!("- `{}` -> `{}`", original, key);
            }
        }
    }
}

fn run_strategies<S: StrategyStore>(tal: &Tal<S>, settings: &Settings) {
    let names = tal.store().strategies();

    match settings.format {
        OutputFormat::Json => println!("{}", json!(names)),
        OutputFormat::Markdown => {
            for name in names {
                println!("- {}", name);
            }
        }
    }
}
