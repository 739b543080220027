use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dvbscan_catalog::DeliverySystem;

#[derive(Debug, Parser)]
#[clap(name = "dvbscan")]
#[clap(about = "dvbscan browses the built-in DVB-S/T/C initial tuning tables and prints scan plans.", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Configuration file.{n}
    /// If omitted, `dvbscan.toml` in the working directory is used when present.
    #[clap(short = 'f', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[clap(value_enum, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging.
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List regions.{n}
    /// Without a delivery system every system is listed.
    #[clap(name = "regions")]
    Regions {
        /// Delivery system (dvb-s, dvb-t, dvb-c).
        #[clap(short, long)]
        system: Option<DeliverySystem>,
    },

    /// List the networks of a region.
    #[clap(name = "networks")]
    Networks {
        /// Delivery system (dvb-s, dvb-t, dvb-c).
        #[clap(short, long)]
        system: Option<DeliverySystem>,

        /// Region name, or its country code (e.g. `uk`).
        #[clap(short, long)]
        region: Option<String>,
    },

    /// List the muxes of a network.
    #[clap(name = "muxes")]
    Muxes {
        /// Delivery system (dvb-s, dvb-t, dvb-c).
        #[clap(short, long)]
        system: Option<DeliverySystem>,

        /// Region name, or its country code (e.g. `uk`).
        #[clap(short, long)]
        region: Option<String>,

        /// Network name.
        #[clap(short, long, required = true)]
        network: String,
    },

    /// Print the tuning attempts a scan would make.{n}
    /// Attempts follow network order, then mux order.
    #[clap(name = "plan")]
    Plan {
        /// Delivery system (dvb-s, dvb-t, dvb-c).
        #[clap(short, long)]
        system: Option<DeliverySystem>,

        /// Region name, or its country code (e.g. `uk`).
        #[clap(short, long)]
        region: Option<String>,

        /// Restrict the plan to one network.
        #[clap(short, long)]
        network: Option<String>,

        /// Skip muxes that repeat an earlier frequency/rate/polarisation.
        #[clap(long)]
        skip_duplicates: bool,
    },

    /// Show region, network and mux counts per delivery system.
    #[clap(name = "stats")]
    Stats,

    /// Write the catalog in binary form.
    #[clap(name = "export")]
    Export {
        /// Output file.
        #[clap(short, long, value_name = "FILE", required = true)]
        output: PathBuf,
    },

    /// Read an exported catalog and compare it with the built-in one.
    #[clap(name = "verify")]
    Verify {
        /// Input file.
        #[clap(short, long, value_name = "FILE", required = true)]
        input: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_muxes() {
        let cli = Cli::try_parse_from([
            "dvbscan", "muxes", "-s", "dvb-t", "-r", "United Kingdom", "-n", "Dover",
        ])
        .unwrap();

        match cli.command {
            Commands::Muxes {
                system,
                region,
                network,
            } => {
                assert_eq!(system, Some(DeliverySystem::Terrestrial));
                assert_eq!(region.as_deref(), Some("United Kingdom"));
                assert_eq!(network, "Dover");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dvbscan", "stats", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn test_parse_plan() {
        let cli =
            Cli::try_parse_from(["dvbscan", "plan", "-s", "satellite", "--skip-duplicates"])
                .unwrap();
        match cli.command {
            Commands::Plan {
                system,
                region,
                network,
                skip_duplicates,
            } => {
                assert_eq!(system, Some(DeliverySystem::Satellite));
                assert_eq!(region, None);
                assert_eq!(network, None);
                assert!(skip_duplicates);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reject_unknown_system() {
        assert!(Cli::try_parse_from(["dvbscan", "regions", "-s", "atsc"]).is_err());
    }

    #[test]
    fn test_muxes_requires_network() {
        assert!(Cli::try_parse_from(["dvbscan", "muxes", "-s", "dvb-c", "-r", "Germany"]).is_err());
    }
}
