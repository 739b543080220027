//! dvbscan library - command-line front end for the DVB initial tuning catalog
//!
//! This library holds the argument parser, configuration handling and the
//! command handlers used by the `dvbscan` binary.

pub mod commands;
pub mod config;
pub mod context;
pub mod logging;

use colored::Colorize;
use log::{debug, error};

use dvbscan_catalog::{Catalog, DeliverySystem, DuplicatePolicy, ScanRequest};

pub use config::{ConfigError, ConfigFile, Settings};
pub use context::{Cli, Commands, OutputFormat};

/// Run a parsed command line and return the process exit code.
pub fn run(cli: Cli) -> i32 {
    let config_path = config::config_path(cli.config.clone());
    let settings = match config::load_settings(config_path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return 2;
        }
    };

    logging::init_logging(cli.verbose, settings.log_level.as_deref());
    if let Some(path) = &config_path {
        debug!("Loaded config from: {}", path.display());
    }

    execute(cli.command, cli.format, &settings, Catalog::builtin())
}

/// Dispatch a subcommand against `catalog`.
///
/// Command line values take precedence over `settings`.
pub fn execute(
    command: Commands,
    format: Option<OutputFormat>,
    settings: &Settings,
    catalog: &Catalog,
) -> i32 {
    let format = format.unwrap_or(settings.format);

    match command {
        Commands::Regions { system } => {
            commands::cmd_regions(catalog, system.or(settings.system), format)
        }
        Commands::Networks { system, region } => {
            let Some((system, region)) = selection(system, region, settings) else {
                return 2;
            };
            commands::cmd_networks(catalog, system, &region, format)
        }
        Commands::Muxes {
            system,
            region,
            network,
        } => {
            let Some((system, region)) = selection(system, region, settings) else {
                return 2;
            };
            commands::cmd_muxes(catalog, system, &region, &network, format)
        }
        Commands::Plan {
            system,
            region,
            network,
            skip_duplicates,
        } => {
            let Some((system, region)) = selection(system, region, settings) else {
                return 2;
            };
            let mut request = ScanRequest::new(system, region);
            if let Some(network) = network {
                request = request.with_network(network);
            }
            if skip_duplicates {
                request = request.with_duplicates(DuplicatePolicy::SkipRepeated);
            }
            commands::cmd_plan(catalog, &request, format)
        }
        Commands::Stats => commands::cmd_stats(catalog, format),
        Commands::Export { output } => commands::cmd_export(catalog, &output),
        Commands::Verify { input } => commands::cmd_verify(catalog, &input),
    }
}

/// Delivery system and region from the flags, falling back to the config file.
fn selection(
    system: Option<DeliverySystem>,
    region: Option<String>,
    settings: &Settings,
) -> Option<(DeliverySystem, String)> {
    let Some(system) = system.or(settings.system) else {
        error!("No delivery system given (use -s or set defaults.delivery_system)");
        return None;
    };
    let Some(region) = region.or_else(|| settings.region.clone()) else {
        error!("No region given (use -r or set defaults.region)");
        return None;
    };
    Some((system, region))
}
