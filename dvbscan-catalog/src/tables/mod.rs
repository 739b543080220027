//! Compiled-in initial tuning tables.
//!
//! The tables are plain `static` literal trees. [`crate::catalog`] turns
//! them into owned [`Region`]s once, on first use.
//!
//! Mux shorthands follow the column order of scan initial tuning files:
//!
//! ```text
//! S freq pol sr fec
//! T freq bw fec_hp fec_lp mod transmission-mode guard-interval hierarchy
//! C freq sr fec mod
//! ```

mod cable;
mod satellite;
mod terrestrial;

use crate::types::*;

/// Static form of a [`Region`].
pub(crate) struct RegionTable {
    pub name: &'static str,
    pub code: Option<&'static str>,
    pub networks: &'static [NetworkTable],
}

/// Static form of a [`Network`].
pub(crate) struct NetworkTable {
    pub name: &'static str,
    pub muxes: &'static [Mux],
}

impl RegionTable {
    pub(crate) fn to_region(&self) -> Region {
        Region::new(
            self.name,
            self.code.map(str::to_string),
            self.networks.iter().map(NetworkTable::to_network).collect(),
        )
    }
}

impl NetworkTable {
    pub(crate) fn to_network(&self) -> Network {
        Network::new(self.name, self.muxes.to_vec())
    }
}

/// Get the compiled-in table of a delivery system.
pub(crate) fn tables(system: DeliverySystem) -> &'static [RegionTable] {
    match system {
        DeliverySystem::Satellite => satellite::REGIONS,
        DeliverySystem::Terrestrial => terrestrial::REGIONS,
        DeliverySystem::Cable => cable::REGIONS,
    }
}

const fn s(frequency: u32, polarisation: Polarisation, symbol_rate: u32, fec: CodeRate) -> Mux {
    Mux::Satellite(SatelliteMux {
        frequency,
        polarisation,
        symbol_rate,
        fec,
    })
}

#[allow(clippy::too_many_arguments)]
const fn t(
    frequency: u32,
    bandwidth: Bandwidth,
    code_rate_hp: CodeRate,
    code_rate_lp: CodeRate,
    constellation: Modulation,
    transmission_mode: TransmissionMode,
    guard_interval: GuardInterval,
    hierarchy: Hierarchy,
) -> Mux {
    Mux::Terrestrial(TerrestrialMux {
        frequency,
        bandwidth,
        code_rate_hp,
        code_rate_lp,
        constellation,
        transmission_mode,
        guard_interval,
        hierarchy,
    })
}

const fn c(frequency: u32, symbol_rate: u32, fec: CodeRate, modulation: Modulation) -> Mux {
    Mux::Cable(CableMux {
        frequency,
        symbol_rate,
        fec,
        modulation,
    })
}

// Column tokens.
const H: Polarisation = Polarisation::Horizontal;
const V: Polarisation = Polarisation::Vertical;

const FEC_NONE: CodeRate = CodeRate::None;
const FEC_1_2: CodeRate = CodeRate::Fec1_2;
const FEC_2_3: CodeRate = CodeRate::Fec2_3;
const FEC_3_4: CodeRate = CodeRate::Fec3_4;
const FEC_5_6: CodeRate = CodeRate::Fec5_6;
const FEC_7_8: CodeRate = CodeRate::Fec7_8;
const FEC_AUTO: CodeRate = CodeRate::Auto;

const QAM16: Modulation = Modulation::Qam16;
const QAM64: Modulation = Modulation::Qam64;
const QAM128: Modulation = Modulation::Qam128;
const QAM256: Modulation = Modulation::Qam256;
const QAM_AUTO: Modulation = Modulation::Auto;

const BW8: Bandwidth = Bandwidth::Mhz8;
const BW7: Bandwidth = Bandwidth::Mhz7;
const BW6: Bandwidth = Bandwidth::Mhz6;

const TM2K: TransmissionMode = TransmissionMode::Mode2k;
const TM8K: TransmissionMode = TransmissionMode::Mode8k;

const GI1_32: GuardInterval = GuardInterval::Gi1_32;
const GI1_16: GuardInterval = GuardInterval::Gi1_16;
const GI1_8: GuardInterval = GuardInterval::Gi1_8;
const GI1_4: GuardInterval = GuardInterval::Gi1_4;
const GI_AUTO: GuardInterval = GuardInterval::Auto;

const HIER_NONE: Hierarchy = Hierarchy::None;
const HIER_2: Hierarchy = Hierarchy::Alpha2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_system_has_regions() {
        for system in DeliverySystem::ALL {
            assert!(!tables(system).is_empty(), "{} has no regions", system);
        }
    }

    #[test]
    fn test_mux_variants_match_table() {
        for system in DeliverySystem::ALL {
            for region in tables(system) {
                for network in region.networks {
                    for mux in network.muxes {
                        assert_eq!(
                            mux.delivery_system(),
                            system,
                            "{} / {}: {}",
                            region.name,
                            network.name,
                            mux
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_region_keeps_order() {
        let table = &tables(DeliverySystem::Terrestrial)[0];
        let region = table.to_region();
        assert_eq!(region.name, table.name);
        assert_eq!(region.networks.len(), table.networks.len());
        for (network, network_table) in region.networks.iter().zip(table.networks) {
            assert_eq!(network.name, network_table.name);
            assert_eq!(network.muxes.as_slice(), network_table.muxes);
        }
    }
}
