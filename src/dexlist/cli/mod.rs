//! Command-line driver: resolves configuration, loads the catalog, reads the
//! script from stdin and prints what the API returns.

mod print;
pub mod setup;

use directories::ProjectDirs;
use dexlist::api::DexApi;
use dexlist::catalog::Catalog;
use dexlist::commands::script::Script;
use dexlist::config::DexConfig;
use dexlist::error::Result;
use dexlist::list::{BoundedList, LinkedList, PositionalList, Strategy};
use dexlist::model::Record;
use setup::{Cli, OutputFormat};
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "dexlist=debug" } else { "dexlist=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path.clone());
    let catalog = Catalog::open(&catalog_path, config.catalog_limit)?;

    let input = io::read_to_string(io::stdin())?;
    let script = Script::parse(&input, &config.sentinel)?;
    debug!(
        selection = script.selection.len(),
        commands = script.commands.len(),
        strategy = %config.strategy,
        "script parsed"
    );

    match config.strategy {
        Strategy::Bounded => {
            let list = BoundedList::with_capacity(config.capacity)?;
            execute(DexApi::new(catalog, list), &script, cli.format)
        }
        Strategy::Linked => execute(DexApi::new(catalog, LinkedList::new()), &script, cli.format),
    }
}

/// Loads the config file and applies command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<DexConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => ProjectDirs::from("com", "dexlist", "dexlist")
            .map(|dirs| DexConfig::path_in(dirs.config_dir())),
    };

    let mut config = match path {
        Some(path) => {
            if cli.config.is_some() && !path.exists() {
                warn!(path = %path.display(), "config file not found, using defaults");
            }
            DexConfig::load(&path)?
        }
        None => DexConfig::default(),
    };

    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(limit) = cli.limit {
        config.catalog_limit = limit;
    }
    Ok(config)
}

fn execute<L: PositionalList<Record>>(
    mut api: DexApi<L>,
    script: &Script,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            api.select(&script.selection)?;
            // Removals are reported as they happen, so a later failure still
            // leaves the earlier lines on stdout.
            for command in &script.commands {
                let result = api.apply(command)?;
                print::print_removed(&result.removed);
            }
            let listing = api.list_entries()?;
            print::print_listing(&listing.listed);
        }
        OutputFormat::Json => {
            let result = api.run_script(script)?;
            print::print_json(&result)?;
        }
    }
    api.clear();
    Ok(())
}
