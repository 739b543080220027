//! Scan plan generation.
//!
//! A scan driver picks a delivery system and a region, optionally narrows
//! to one network, and then tries to lock every listed mux in turn. This
//! module produces that ordered list of tuning attempts.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{find_network, Catalog};
use crate::error::CatalogError;
use crate::types::{DeliverySystem, Mux, Network, Region};

/// What to do with muxes that repeat an earlier signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Attempt every listed mux.
    #[default]
    Keep,
    /// Skip muxes whose signature was already planned.
    SkipRepeated,
}

/// Selection a scan plan is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub system: DeliverySystem,
    /// Region name, or its country code.
    pub region: String,
    /// Restrict the plan to one network.
    pub network: Option<String>,
    pub duplicates: DuplicatePolicy,
}

impl ScanRequest {
    pub fn new(system: DeliverySystem, region: impl Into<String>) -> Self {
        Self {
            system,
            region: region.into(),
            network: None,
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// One mux the driver should try to lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TuningAttempt {
    pub region: String,
    pub network: String,
    /// Position of the mux inside its network.
    pub index: usize,
    pub mux: Mux,
}

/// Ordered tuning attempts for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanPlan {
    pub system: DeliverySystem,
    pub region: String,
    pub attempts: Vec<TuningAttempt>,
    /// Muxes left out by [`DuplicatePolicy::SkipRepeated`].
    pub skipped: usize,
}

impl ScanPlan {
    /// Build the plan for `request` from `catalog`.
    ///
    /// Fails only when the region or network does not exist.
    pub fn build(catalog: &Catalog, request: &ScanRequest) -> Result<Self, CatalogError> {
        let region = catalog.resolve_region(request.system, &request.region)?;

        let networks: Vec<&Network> = match &request.network {
            Some(name) => vec![find_network(region, name)?],
            None => region.networks.iter().collect(),
        };

        let mut plan = ScanPlan {
            system: request.system,
            region: region.name.clone(),
            attempts: Vec::new(),
            skipped: 0,
        };
        let mut seen = HashSet::new();

        for network in networks {
            for (index, mux) in network.muxes.iter().enumerate() {
                if request.duplicates == DuplicatePolicy::SkipRepeated
                    && !seen.insert(mux.signature())
                {
                    plan.skipped += 1;
                    continue;
                }
                plan.attempts.push(attempt(region, network, index, mux));
            }
        }

        debug!(
            "Scan plan for {} '{}': {} attempts, {} skipped",
            plan.system,
            plan.region,
            plan.attempts.len(),
            plan.skipped
        );

        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

fn attempt(region: &Region, network: &Network, index: usize, mux: &Mux) -> TuningAttempt {
    TuningAttempt {
        region: region.name.clone(),
        network: network.name.clone(),
        index,
        mux: *mux,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_single_network() {
        let request =
            ScanRequest::new(DeliverySystem::Terrestrial, "United Kingdom").with_network("Dover");
        let plan = ScanPlan::build(Catalog::builtin(), &request).unwrap();

        assert_eq!(plan.region, "United Kingdom");
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.skipped, 0);
        assert_eq!(plan.attempts[0].mux.frequency(), 850000000);
        assert!(plan.attempts.iter().all(|a| a.network == "Dover"));
        let indexes: Vec<usize> = plan.attempts.iter().map(|a| a.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_plan_whole_region_keeps_network_order() {
        let request = ScanRequest::new(DeliverySystem::Terrestrial, "Sweden");
        let plan = ScanPlan::build(Catalog::builtin(), &request).unwrap();
        let region = Catalog::builtin()
            .find_region(DeliverySystem::Terrestrial, "Sweden")
            .unwrap();

        assert_eq!(plan.len(), region.mux_count());
        assert_eq!(plan.attempts.first().unwrap().network, region.networks[0].name);
        assert_eq!(
            plan.attempts.last().unwrap().network,
            region.networks.last().unwrap().name
        );
    }

    #[test]
    fn test_plan_by_country_code() {
        let request = ScanRequest::new(DeliverySystem::Terrestrial, "uk").with_network("Dover");
        let plan = ScanPlan::build(Catalog::builtin(), &request).unwrap();
        assert_eq!(plan.region, "United Kingdom");
    }

    #[test]
    fn test_plan_keeps_duplicates_by_default() {
        let request = ScanRequest::new(DeliverySystem::Satellite, "Geosynchronous Orbit")
            .with_network("Astra-28.2E");
        let plan = ScanPlan::build(Catalog::builtin(), &request).unwrap();
        let repeated = plan
            .attempts
            .iter()
            .filter(|a| a.mux.frequency() == 11426500)
            .count();
        assert_eq!(repeated, 2);
    }

    #[test]
    fn test_plan_skip_repeated() {
        let keep = ScanRequest::new(DeliverySystem::Satellite, "Geosynchronous Orbit")
            .with_network("Astra-28.2E");
        let skip = keep.clone().with_duplicates(DuplicatePolicy::SkipRepeated);

        let full = ScanPlan::build(Catalog::builtin(), &keep).unwrap();
        let deduped = ScanPlan::build(Catalog::builtin(), &skip).unwrap();

        assert_eq!(deduped.skipped, 1);
        assert_eq!(deduped.len() + deduped.skipped, full.len());
        let mut signatures = HashSet::new();
        assert!(deduped.attempts.iter().all(|a| signatures.insert(a.mux.signature())));
    }

    #[test]
    fn test_plan_not_found() {
        let request = ScanRequest::new(DeliverySystem::Terrestrial, "Sweden").with_network("Dover");
        let err = ScanPlan::build(Catalog::builtin(), &request).unwrap_err();
        assert!(matches!(err, CatalogError::NetworkNotFound { .. }));

        let request = ScanRequest::new(DeliverySystem::Cable, "Atlantis");
        let err = ScanPlan::build(Catalog::builtin(), &request).unwrap_err();
        assert!(matches!(err, CatalogError::RegionNotFound { .. }));
    }
}
