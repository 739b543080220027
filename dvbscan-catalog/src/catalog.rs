//! Read-only tuning catalog and its lookup API.
//!
//! The built-in catalog is assembled from the compiled-in tables exactly
//! once, on first access, and is never mutated afterwards. Any number of
//! threads may read it without locking.
//!
//! # Example
//! ```
//! use dvbscan_catalog::catalog::{self, Catalog};
//! use dvbscan_catalog::DeliverySystem;
//!
//! let region = catalog::find_region(DeliverySystem::Satellite, "Geosynchronous Orbit").unwrap();
//! let network = catalog::find_network(region, "Astra-19.2E").unwrap();
//! assert_eq!(catalog::list_muxes(network).len(), 1);
//!
//! // Same data through the singleton handle
//! let builtin = Catalog::builtin();
//! assert!(!builtin.list_regions(DeliverySystem::Cable).is_empty());
//! ```

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::CatalogError;
use crate::tables;
use crate::types::{DeliverySystem, Mux, MuxSignature, Network, Region};

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::load_builtin);

fn slot(system: DeliverySystem) -> usize {
    match system {
        DeliverySystem::Satellite => 0,
        DeliverySystem::Terrestrial => 1,
        DeliverySystem::Cable => 2,
    }
}

/// Region lists of all three delivery systems plus a name index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    regions: [Vec<Region>; 3],
    /// Region name -> position, per delivery system. First declaration wins.
    index: [HashMap<String, usize>; 3],
}

/// Assembles a [`Catalog`] region by region.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    regions: [Vec<Region>; 3],
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region to the catalog of `system`.
    pub fn region(mut self, system: DeliverySystem, region: Region) -> Self {
        self.push_region(system, region);
        self
    }

    pub fn push_region(&mut self, system: DeliverySystem, region: Region) {
        self.regions[slot(system)].push(region);
    }

    pub fn build(self) -> Catalog {
        let mut index: [HashMap<String, usize>; 3] = Default::default();

        for (regions, names) in self.regions.iter().zip(index.iter_mut()) {
            for (i, region) in regions.iter().enumerate() {
                names.entry(region.name.clone()).or_insert(i);
            }
        }

        Catalog {
            regions: self.regions,
            index,
        }
    }
}

/// Per delivery system counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStats {
    pub system: DeliverySystem,
    pub regions: usize,
    pub networks: usize,
    pub muxes: usize,
    /// Muxes repeating an earlier signature within the same network.
    pub duplicates: usize,
}

impl Catalog {
    /// Get the process-wide catalog built from the compiled-in tables.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn load_builtin() -> Catalog {
        let mut builder = CatalogBuilder::new();
        for system in DeliverySystem::ALL {
            for table in tables::tables(system) {
                builder.push_region(system, table.to_region());
            }
        }
        let catalog = builder.build();

        for stats in catalog.stats() {
            debug!(
                "Loaded {} tables: {} regions, {} networks, {} muxes",
                stats.system, stats.regions, stats.networks, stats.muxes
            );
        }

        catalog
    }

    /// Regions of a delivery system in declaration order.
    pub fn list_regions(&self, system: DeliverySystem) -> &[Region] {
        &self.regions[slot(system)]
    }

    /// Find a region by exact, case-sensitive name.
    pub fn find_region(&self, system: DeliverySystem, name: &str) -> Result<&Region, CatalogError> {
        self.index[slot(system)]
            .get(name)
            .map(|&i| &self.regions[slot(system)][i])
            .ok_or_else(|| CatalogError::RegionNotFound {
                system,
                name: name.to_string(),
            })
    }

    /// Find a region by ISO 3166-1 alpha-2 code, ignoring case.
    ///
    /// `UK` is accepted as an alias of `GB`.
    pub fn find_region_by_code(
        &self,
        system: DeliverySystem,
        code: &str,
    ) -> Result<&Region, CatalogError> {
        let wanted = if code.eq_ignore_ascii_case("uk") {
            "GB"
        } else {
            code
        };

        self.list_regions(system)
            .iter()
            .find(|r| {
                r.code
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| CatalogError::RegionNotFound {
                system,
                name: code.to_string(),
            })
    }

    /// Find a region by exact name, falling back to its country code.
    pub fn resolve_region(
        &self,
        system: DeliverySystem,
        name_or_code: &str,
    ) -> Result<&Region, CatalogError> {
        self.find_region(system, name_or_code)
            .or_else(|e| self.find_region_by_code(system, name_or_code).map_err(|_| e))
    }

    /// Regions whose name contains `query` (or the reverse), ignoring case.
    ///
    /// Meant for "did you mean" hints after a failed lookup.
    pub fn suggest_regions(&self, system: DeliverySystem, query: &str) -> Vec<&Region> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.list_regions(system)
            .iter()
            .filter(|r| {
                let name = r.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
            .collect()
    }

    /// Region/network/mux counts per delivery system.
    pub fn stats(&self) -> Vec<SystemStats> {
        DeliverySystem::ALL
            .iter()
            .map(|&system| {
                let regions = self.list_regions(system);
                let networks = regions.iter().flat_map(|r| r.networks.iter());

                SystemStats {
                    system,
                    regions: regions.len(),
                    networks: networks.clone().count(),
                    muxes: regions.iter().map(Region::mux_count).sum(),
                    duplicates: networks.map(Network::duplicate_count).sum(),
                }
            })
            .collect()
    }

    /// Check the table invariants.
    ///
    /// Every mux must belong to the delivery system of its catalog, symbol
    /// rates must be non-zero and cable muxes must use a QAM modulation.
    /// Repeated muxes are allowed.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for system in DeliverySystem::ALL {
            for region in self.list_regions(system) {
                for network in &region.networks {
                    for mux in &network.muxes {
                        check_mux(system, mux).map_err(|reason| {
                            CatalogError::Invalid(format!(
                                "{} / {} / {}: {} ({})",
                                system, region.name, network.name, reason, mux
                            ))
                        })?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_mux(system: DeliverySystem, mux: &Mux) -> Result<(), &'static str> {
    if mux.delivery_system() != system {
        return Err("mux of another delivery system");
    }
    if mux.symbol_rate() == Some(0) {
        return Err("zero symbol rate");
    }
    if let Mux::Cable(m) = mux {
        if !m.modulation.is_qam() {
            return Err("cable mux without QAM modulation");
        }
    }
    Ok(())
}

/// Regions of a delivery system in the built-in catalog.
pub fn list_regions(system: DeliverySystem) -> &'static [Region] {
    Catalog::builtin().list_regions(system)
}

/// Find a region of the built-in catalog by exact name.
pub fn find_region(system: DeliverySystem, name: &str) -> Result<&'static Region, CatalogError> {
    Catalog::builtin().find_region(system, name)
}

/// Networks of a region in declaration order.
pub fn list_networks(region: &Region) -> &[Network] {
    &region.networks
}

/// Find a network of a region by exact, case-sensitive name.
pub fn find_network<'a>(region: &'a Region, name: &str) -> Result<&'a Network, CatalogError> {
    region
        .networks
        .iter()
        .find(|n| n.name == name)
        .ok_or_else(|| CatalogError::NetworkNotFound {
            region: region.name.clone(),
            name: name.to_string(),
        })
}

/// Muxes of a network in declaration order, repeated entries included.
pub fn list_muxes(network: &Network) -> &[Mux] {
    &network.muxes
}

/// Deduplication key of a mux.
pub fn mux_signature(mux: &Mux) -> MuxSignature {
    mux.signature()
}
