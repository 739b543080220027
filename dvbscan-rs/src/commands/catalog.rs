//! Catalog browsing command handlers for regions, networks, muxes, plan, stats.

use colored::Colorize;
use log::{debug, error};
use serde::Serialize;

use dvbscan_catalog::{
    find_network, Catalog, CatalogError, DeliverySystem, Mux, Network, Region, ScanPlan,
    ScanRequest, SystemStats,
};

use crate::context::OutputFormat;

#[derive(Debug, Serialize)]
struct RegionRow<'a> {
    system: DeliverySystem,
    name: &'a str,
    code: Option<&'a str>,
    networks: usize,
    muxes: usize,
}

impl<'a> RegionRow<'a> {
    fn new(system: DeliverySystem, region: &'a Region) -> Self {
        Self {
            system,
            name: &region.name,
            code: region.code.as_deref(),
            networks: region.networks.len(),
            muxes: region.mux_count(),
        }
    }
}

#[derive(Debug, Serialize)]
struct NetworkRow<'a> {
    region: &'a str,
    name: &'a str,
    muxes: usize,
    duplicates: usize,
}

/// Regions command implementation.
pub fn cmd_regions(catalog: &Catalog, system: Option<DeliverySystem>, format: OutputFormat) -> i32 {
    let systems: Vec<DeliverySystem> = match system {
        Some(s) => vec![s],
        None => DeliverySystem::ALL.to_vec(),
    };

    let rows: Vec<RegionRow> = systems
        .iter()
        .flat_map(|&s| catalog.list_regions(s).iter().map(move |r| RegionRow::new(s, r)))
        .collect();

    match format {
        OutputFormat::Table => print_regions_table(&rows),
        OutputFormat::Json => return print_json(&rows),
        OutputFormat::Csv => print_regions_csv(&rows),
    }

    0
}

/// Networks command implementation.
pub fn cmd_networks(
    catalog: &Catalog,
    system: DeliverySystem,
    region: &str,
    format: OutputFormat,
) -> i32 {
    let region = match catalog.resolve_region(system, region) {
        Ok(r) => r,
        Err(e) => {
            report_lookup_error(catalog, system, &e);
            return 1;
        }
    };

    let rows: Vec<NetworkRow> = region
        .networks
        .iter()
        .map(|n| NetworkRow {
            region: &region.name,
            name: &n.name,
            muxes: n.muxes.len(),
            duplicates: n.duplicate_count(),
        })
        .collect();

    match format {
        OutputFormat::Table => print_networks_table(&rows),
        OutputFormat::Json => return print_json(&rows),
        OutputFormat::Csv => print_networks_csv(&rows),
    }

    0
}

/// Muxes command implementation.
pub fn cmd_muxes(
    catalog: &Catalog,
    system: DeliverySystem,
    region: &str,
    network: &str,
    format: OutputFormat,
) -> i32 {
    let network = match catalog
        .resolve_region(system, region)
        .and_then(|r| find_network(r, network))
    {
        Ok(n) => n,
        Err(e) => {
            report_lookup_error(catalog, system, &e);
            return 1;
        }
    };

    match format {
        OutputFormat::Table => print_muxes_table(network),
        OutputFormat::Json => return print_json(&network.muxes),
        OutputFormat::Csv => {
            println!("{}", MUX_CSV_HEADER);
            for mux in &network.muxes {
                println!("{}", mux_csv_row(mux));
            }
        }
    }

    0
}

/// Plan command implementation.
pub fn cmd_plan(catalog: &Catalog, request: &ScanRequest, format: OutputFormat) -> i32 {
    let plan = match ScanPlan::build(catalog, request) {
        Ok(p) => p,
        Err(e) => {
            report_lookup_error(catalog, request.system, &e);
            return 1;
        }
    };

    match format {
        OutputFormat::Table => print_plan_table(&plan),
        OutputFormat::Json => return print_json(&plan),
        OutputFormat::Csv => {
            println!("network,index,{}", MUX_CSV_HEADER);
            for attempt in &plan.attempts {
                println!(
                    "{},{},{}",
                    csv_field(&attempt.network),
                    attempt.index,
                    mux_csv_row(&attempt.mux)
                );
            }
        }
    }

    0
}

/// Stats command implementation.
pub fn cmd_stats(catalog: &Catalog, format: OutputFormat) -> i32 {
    let stats = catalog.stats();

    match format {
        OutputFormat::Table => print_stats_table(&stats),
        OutputFormat::Json => return print_json(&stats),
        OutputFormat::Csv => {
            println!("system,regions,networks,muxes,duplicates");
            for s in &stats {
                println!(
                    "{},{},{},{},{}",
                    s.system, s.regions, s.networks, s.muxes, s.duplicates
                );
            }
        }
    }

    0
}

/// Print a lookup failure with hints on stderr.
pub(crate) fn report_lookup_error(catalog: &Catalog, system: DeliverySystem, err: &CatalogError) {
    eprintln!("{} {}", "error:".red().bold(), err);

    match err {
        CatalogError::RegionNotFound { name, .. } => {
            let suggestions = catalog.suggest_regions(system, name);
            if suggestions.is_empty() {
                eprintln!(
                    "  run `dvbscan regions -s {}` to list the available regions",
                    system.standard_name().to_lowercase()
                );
            } else {
                let names: Vec<&str> = suggestions.iter().map(|r| r.name.as_str()).collect();
                eprintln!("  did you mean: {}", names.join(", ").yellow());
            }
        }
        CatalogError::NetworkNotFound { region, .. } => {
            if let Ok(r) = catalog.find_region(system, region) {
                let names: Vec<&str> = r.networks.iter().map(|n| n.name.as_str()).collect();
                eprintln!("  networks in {}: {}", region, names.join(", ").yellow());
            }
        }
        CatalogError::Invalid(_) => {}
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            1
        }
    }
}

fn print_regions_table(rows: &[RegionRow]) {
    if rows.is_empty() {
        println!("No regions found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:<6} {:<24} {:<5} {:>8} {:>6}",
            "System", "Region", "Code", "Networks", "Muxes"
        )
        .bold()
    );
    println!("{}", "-".repeat(53));

    for row in rows {
        println!(
            "{:<6} {:<24} {:<5} {:>8} {:>6}",
            row.system.to_string(),
            row.name,
            row.code.unwrap_or("-"),
            row.networks,
            row.muxes
        );
    }

    println!("\nTotal: {} regions", rows.len());
}

fn print_regions_csv(rows: &[RegionRow]) {
    println!("system,region,code,networks,muxes");
    for row in rows {
        println!(
            "{},{},{},{},{}",
            row.system,
            csv_field(row.name),
            row.code.unwrap_or(""),
            row.networks,
            row.muxes
        );
    }
}

fn print_networks_table(rows: &[NetworkRow]) {
    if rows.is_empty() {
        println!("No networks found.");
        return;
    }

    println!(
        "{}",
        format!("{:<24} {:>6} {:>10}", "Network", "Muxes", "Duplicates").bold()
    );
    println!("{}", "-".repeat(42));

    for row in rows {
        println!("{:<24} {:>6} {:>10}", row.name, row.muxes, row.duplicates);
    }

    println!("\nTotal: {} networks in {}", rows.len(), rows[0].region);
}

fn print_networks_csv(rows: &[NetworkRow]) {
    println!("region,network,muxes,duplicates");
    for row in rows {
        println!(
            "{},{},{},{}",
            csv_field(row.region),
            csv_field(row.name),
            row.muxes,
            row.duplicates
        );
    }
}

fn print_muxes_table(network: &Network) {
    if network.muxes.is_empty() {
        println!("No muxes found.");
        return;
    }

    println!("{}", format!("{:>3}  {}", "#", "Parameters").bold());
    println!("{}", "-".repeat(60));

    for (i, mux) in network.muxes.iter().enumerate() {
        println!("{:>3}  {}", i, mux);
    }

    let duplicates = network.duplicate_count();
    if duplicates > 0 {
        println!(
            "\nTotal: {} muxes ({} repeated)",
            network.muxes.len(),
            duplicates.to_string().yellow()
        );
    } else {
        println!("\nTotal: {} muxes", network.muxes.len());
    }
}

fn print_plan_table(plan: &ScanPlan) {
    println!("Scan Plan:");
    println!("  Delivery System: {}", plan.system);
    println!("  Region: {}", plan.region);
    println!("  Attempts: {}", plan.len());
    if plan.skipped > 0 {
        println!("  Skipped duplicates: {}", plan.skipped);
    }
    println!();

    if plan.is_empty() {
        println!("No muxes found.");
        return;
    }

    println!(
        "{}",
        format!("{:>4} {:<24} {:>3}  {}", "Step", "Network", "#", "Parameters").bold()
    );
    println!("{}", "-".repeat(70));

    for (step, attempt) in plan.attempts.iter().enumerate() {
        println!(
            "{:>4} {:<24} {:>3}  {}",
            step + 1,
            attempt.network,
            attempt.index,
            attempt.mux
        );
    }
    debug!("Printed {} attempts", plan.len());
}

fn print_stats_table(stats: &[SystemStats]) {
    println!(
        "{}",
        format!(
            "{:<6} {:>8} {:>9} {:>6} {:>11}",
            "System", "Regions", "Networks", "Muxes", "Duplicates"
        )
        .bold()
    );
    println!("{}", "-".repeat(44));

    for s in stats {
        println!(
            "{:<6} {:>8} {:>9} {:>6} {:>11}",
            s.system.to_string(),
            s.regions,
            s.networks,
            s.muxes,
            s.duplicates
        );
    }
}

/// Frequencies are written as listed: kHz for DVB-S, Hz for DVB-T and DVB-C.
const MUX_CSV_HEADER: &str = "system,frequency,symbol_rate,bandwidth,polarisation,fec,fec_lp,\
modulation,transmission_mode,guard_interval,hierarchy";

fn mux_csv_row(mux: &Mux) -> String {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    let (fec_lp, transmission_mode, guard_interval, hierarchy) = match mux {
        Mux::Terrestrial(m) => (
            m.code_rate_lp.to_string(),
            m.transmission_mode.to_string(),
            m.guard_interval.to_string(),
            m.hierarchy.to_string(),
        ),
        _ => Default::default(),
    };

    format!(
        "{},{},{},{},{},{},{},{},{},{},{}",
        mux.delivery_system(),
        mux.frequency(),
        opt(mux.symbol_rate()),
        opt(mux.bandwidth()),
        opt(mux.polarisation()),
        mux.fec(),
        fec_lp,
        opt(mux.modulation()),
        transmission_mode,
        guard_interval,
        hierarchy
    )
}

/// Quote a CSV field when it contains a separator or quote.
fn csv_field(value: &str) -> String {
    if value.contains(|c| matches!(c, ',' | '"' | '\n')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvbscan_catalog::{CatalogBuilder, DuplicatePolicy};

    #[test]
    fn test_mux_csv_row() {
        let region = Catalog::builtin()
            .find_region(DeliverySystem::Satellite, "Geosynchronous Orbit")
            .unwrap();
        let astra = find_network(region, "Astra-19.2E").unwrap();
        assert_eq!(
            mux_csv_row(&astra.muxes[0]),
            "DVB-S,12551500,22000000,,V,5/6,,,,,"
        );

        let region = Catalog::builtin()
            .find_region(DeliverySystem::Terrestrial, "United Kingdom")
            .unwrap();
        let dover = find_network(region, "Dover").unwrap();
        assert_eq!(
            mux_csv_row(&dover.muxes[0]),
            "DVB-T,850000000,,8MHz,,3/4,NONE,QAM16,2k,1/32,NONE"
        );

        let columns = MUX_CSV_HEADER.split(',').count();
        assert_eq!(mux_csv_row(&astra.muxes[0]).split(',').count(), columns);
        assert_eq!(mux_csv_row(&dover.muxes[0]).split(',').count(), columns);
    }

    #[test]
    fn test_plan_over_empty_networks_succeeds() {
        let catalog = CatalogBuilder::new()
            .region(
                DeliverySystem::Cable,
                Region::new("Quiet", None, vec![Network::new("Idle", Vec::new())]),
            )
            .build();

        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            let request = ScanRequest::new(DeliverySystem::Cable, "Quiet");
            assert_eq!(cmd_plan(&catalog, &request, format), 0);
            assert_eq!(cmd_muxes(&catalog, DeliverySystem::Cable, "Quiet", "Idle", format), 0);
        }
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Dover"), "Dover");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_lookup_exit_codes() {
        let catalog = Catalog::builtin();
        assert_eq!(
            cmd_muxes(
                catalog,
                DeliverySystem::Terrestrial,
                "Sweden",
                "Dover",
                OutputFormat::Table
            ),
            1
        );
        assert_eq!(
            cmd_networks(catalog, DeliverySystem::Cable, "Atlantis", OutputFormat::Csv),
            1
        );
        assert_eq!(
            cmd_muxes(
                catalog,
                DeliverySystem::Terrestrial,
                "uk",
                "Dover",
                OutputFormat::Json
            ),
            0
        );
    }

    #[test]
    fn test_listing_commands_succeed() {
        let catalog = Catalog::builtin();
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(cmd_regions(catalog, None, format), 0);
            assert_eq!(cmd_stats(catalog, format), 0);

            let request = ScanRequest::new(DeliverySystem::Cable, "Finland")
                .with_duplicates(DuplicatePolicy::SkipRepeated);
            assert_eq!(cmd_plan(catalog, &request, format), 0);
        }
    }
}
