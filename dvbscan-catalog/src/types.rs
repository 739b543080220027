//! Data model of the initial tuning tables.
//!
//! The parameter enums mirror the closed value sets of the Linux DVB
//! frontend API (`linux/dvb/frontend.h`, DVB API v3). Each one converts to
//! and from its ABI number and to and from the token used in classic
//! `scan` initial tuning files (`5/6`, `QAM64`, `8MHz`, ...).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseParameterError;

/// Broadcast delivery system. Each one has its own catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeliverySystem {
    /// DVB-S
    Satellite = 0,
    /// DVB-T
    Terrestrial = 1,
    /// DVB-C
    Cable = 2,
}

impl DeliverySystem {
    /// All delivery systems in catalog order.
    pub const ALL: [DeliverySystem; 3] = [
        DeliverySystem::Satellite,
        DeliverySystem::Terrestrial,
        DeliverySystem::Cable,
    ];

    /// Get the standard name (`DVB-S`, `DVB-T`, `DVB-C`).
    pub fn standard_name(&self) -> &'static str {
        match self {
            DeliverySystem::Satellite => "DVB-S",
            DeliverySystem::Terrestrial => "DVB-T",
            DeliverySystem::Cable => "DVB-C",
        }
    }

    /// Line prefix used by scan initial tuning files.
    pub fn line_prefix(&self) -> char {
        match self {
            DeliverySystem::Satellite => 'S',
            DeliverySystem::Terrestrial => 'T',
            DeliverySystem::Cable => 'C',
        }
    }
}

impl TryFrom<u8> for DeliverySystem {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(DeliverySystem::Satellite),
            1 => Ok(DeliverySystem::Terrestrial),
            2 => Ok(DeliverySystem::Cable),
            _ => Err(value),
        }
    }
}

impl From<DeliverySystem> for u8 {
    fn from(value: DeliverySystem) -> Self {
        value as u8
    }
}

impl fmt::Display for DeliverySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name())
    }
}

impl FromStr for DeliverySystem {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dvb-s" | "dvbs" | "satellite" | "s" => Ok(DeliverySystem::Satellite),
            "dvb-t" | "dvbt" | "terrestrial" | "t" => Ok(DeliverySystem::Terrestrial),
            "dvb-c" | "dvbc" | "cable" | "c" => Ok(DeliverySystem::Cable),
            _ => Err(ParseParameterError::new("delivery system", s)),
        }
    }
}

/// Forward error correction code rate (`fe_code_rate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CodeRate {
    None = 0,
    Fec1_2 = 1,
    Fec2_3 = 2,
    Fec3_4 = 3,
    Fec4_5 = 4,
    Fec5_6 = 5,
    Fec6_7 = 6,
    Fec7_8 = 7,
    Fec8_9 = 8,
    Auto = 9,
}

impl CodeRate {
    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            CodeRate::None => "NONE",
            CodeRate::Fec1_2 => "1/2",
            CodeRate::Fec2_3 => "2/3",
            CodeRate::Fec3_4 => "3/4",
            CodeRate::Fec4_5 => "4/5",
            CodeRate::Fec5_6 => "5/6",
            CodeRate::Fec6_7 => "6/7",
            CodeRate::Fec7_8 => "7/8",
            CodeRate::Fec8_9 => "8/9",
            CodeRate::Auto => "AUTO",
        }
    }
}

impl TryFrom<u8> for CodeRate {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(CodeRate::None),
            1 => Ok(CodeRate::Fec1_2),
            2 => Ok(CodeRate::Fec2_3),
            3 => Ok(CodeRate::Fec3_4),
            4 => Ok(CodeRate::Fec4_5),
            5 => Ok(CodeRate::Fec5_6),
            6 => Ok(CodeRate::Fec6_7),
            7 => Ok(CodeRate::Fec7_8),
            8 => Ok(CodeRate::Fec8_9),
            9 => Ok(CodeRate::Auto),
            _ => Err(value),
        }
    }
}

impl From<CodeRate> for u8 {
    fn from(value: CodeRate) -> Self {
        value as u8
    }
}

impl fmt::Display for CodeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CodeRate {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(CodeRate::None),
            "1/2" => Ok(CodeRate::Fec1_2),
            "2/3" => Ok(CodeRate::Fec2_3),
            "3/4" => Ok(CodeRate::Fec3_4),
            "4/5" => Ok(CodeRate::Fec4_5),
            "5/6" => Ok(CodeRate::Fec5_6),
            "6/7" => Ok(CodeRate::Fec6_7),
            "7/8" => Ok(CodeRate::Fec7_8),
            "8/9" => Ok(CodeRate::Fec8_9),
            "AUTO" => Ok(CodeRate::Auto),
            _ => Err(ParseParameterError::new("code rate", s)),
        }
    }
}

/// Modulation / constellation (`fe_modulation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Modulation {
    Qpsk = 0,
    Qam16 = 1,
    Qam32 = 2,
    Qam64 = 3,
    Qam128 = 4,
    Qam256 = 5,
    Auto = 6,
}

impl Modulation {
    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            Modulation::Qpsk => "QPSK",
            Modulation::Qam16 => "QAM16",
            Modulation::Qam32 => "QAM32",
            Modulation::Qam64 => "QAM64",
            Modulation::Qam128 => "QAM128",
            Modulation::Qam256 => "QAM256",
            Modulation::Auto => "AUTO",
        }
    }

    /// Returns true for the QAM family (including automatic QAM detection).
    pub fn is_qam(&self) -> bool {
        !matches!(self, Modulation::Qpsk)
    }
}

impl TryFrom<u8> for Modulation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Modulation::Qpsk),
            1 => Ok(Modulation::Qam16),
            2 => Ok(Modulation::Qam32),
            3 => Ok(Modulation::Qam64),
            4 => Ok(Modulation::Qam128),
            5 => Ok(Modulation::Qam256),
            6 => Ok(Modulation::Auto),
            _ => Err(value),
        }
    }
}

impl From<Modulation> for u8 {
    fn from(value: Modulation) -> Self {
        value as u8
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Modulation {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "QPSK" => Ok(Modulation::Qpsk),
            "QAM16" | "QAM-16" => Ok(Modulation::Qam16),
            "QAM32" | "QAM-32" => Ok(Modulation::Qam32),
            "QAM64" | "QAM-64" => Ok(Modulation::Qam64),
            "QAM128" | "QAM-128" => Ok(Modulation::Qam128),
            "QAM256" | "QAM-256" => Ok(Modulation::Qam256),
            "AUTO" | "QAM" => Ok(Modulation::Auto),
            _ => Err(ParseParameterError::new("modulation", s)),
        }
    }
}

/// Terrestrial channel bandwidth (`fe_bandwidth`).
///
/// `BANDWIDTH_AUTO` is deliberately absent: every terrestrial table entry
/// names its bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bandwidth {
    Mhz8 = 0,
    Mhz7 = 1,
    Mhz6 = 2,
}

impl Bandwidth {
    /// Bandwidth in Hz.
    pub fn hz(&self) -> u32 {
        match self {
            Bandwidth::Mhz8 => 8_000_000,
            Bandwidth::Mhz7 => 7_000_000,
            Bandwidth::Mhz6 => 6_000_000,
        }
    }

    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            Bandwidth::Mhz8 => "8MHz",
            Bandwidth::Mhz7 => "7MHz",
            Bandwidth::Mhz6 => "6MHz",
        }
    }
}

impl TryFrom<u8> for Bandwidth {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Bandwidth::Mhz8),
            1 => Ok(Bandwidth::Mhz7),
            2 => Ok(Bandwidth::Mhz6),
            _ => Err(value),
        }
    }
}

impl From<Bandwidth> for u8 {
    fn from(value: Bandwidth) -> Self {
        value as u8
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Bandwidth {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "8MHZ" | "8" => Ok(Bandwidth::Mhz8),
            "7MHZ" | "7" => Ok(Bandwidth::Mhz7),
            "6MHZ" | "6" => Ok(Bandwidth::Mhz6),
            _ => Err(ParseParameterError::new("bandwidth", s)),
        }
    }
}

/// OFDM transmission mode (`fe_transmit_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransmissionMode {
    Mode2k = 0,
    Mode8k = 1,
    Auto = 2,
}

impl TransmissionMode {
    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            TransmissionMode::Mode2k => "2k",
            TransmissionMode::Mode8k => "8k",
            TransmissionMode::Auto => "AUTO",
        }
    }
}

impl TryFrom<u8> for TransmissionMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(TransmissionMode::Mode2k),
            1 => Ok(TransmissionMode::Mode8k),
            2 => Ok(TransmissionMode::Auto),
            _ => Err(value),
        }
    }
}

impl From<TransmissionMode> for u8 {
    fn from(value: TransmissionMode) -> Self {
        value as u8
    }
}

impl fmt::Display for TransmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TransmissionMode {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2K" => Ok(TransmissionMode::Mode2k),
            "8K" => Ok(TransmissionMode::Mode8k),
            "AUTO" => Ok(TransmissionMode::Auto),
            _ => Err(ParseParameterError::new("transmission mode", s)),
        }
    }
}

/// OFDM guard interval (`fe_guard_interval`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuardInterval {
    Gi1_32 = 0,
    Gi1_16 = 1,
    Gi1_8 = 2,
    Gi1_4 = 3,
    Auto = 4,
}

impl GuardInterval {
    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            GuardInterval::Gi1_32 => "1/32",
            GuardInterval::Gi1_16 => "1/16",
            GuardInterval::Gi1_8 => "1/8",
            GuardInterval::Gi1_4 => "1/4",
            GuardInterval::Auto => "AUTO",
        }
    }
}

impl TryFrom<u8> for GuardInterval {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(GuardInterval::Gi1_32),
            1 => Ok(GuardInterval::Gi1_16),
            2 => Ok(GuardInterval::Gi1_8),
            3 => Ok(GuardInterval::Gi1_4),
            4 => Ok(GuardInterval::Auto),
            _ => Err(value),
        }
    }
}

impl From<GuardInterval> for u8 {
    fn from(value: GuardInterval) -> Self {
        value as u8
    }
}

impl fmt::Display for GuardInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for GuardInterval {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1/32" => Ok(GuardInterval::Gi1_32),
            "1/16" => Ok(GuardInterval::Gi1_16),
            "1/8" => Ok(GuardInterval::Gi1_8),
            "1/4" => Ok(GuardInterval::Gi1_4),
            "AUTO" => Ok(GuardInterval::Auto),
            _ => Err(ParseParameterError::new("guard interval", s)),
        }
    }
}

/// Hierarchical modulation (`fe_hierarchy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Hierarchy {
    None = 0,
    Alpha1 = 1,
    Alpha2 = 2,
    Alpha4 = 3,
    Auto = 4,
}

impl Hierarchy {
    /// Scan table token.
    pub fn token(&self) -> &'static str {
        match self {
            Hierarchy::None => "NONE",
            Hierarchy::Alpha1 => "1",
            Hierarchy::Alpha2 => "2",
            Hierarchy::Alpha4 => "4",
            Hierarchy::Auto => "AUTO",
        }
    }
}

impl TryFrom<u8> for Hierarchy {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Hierarchy::None),
            1 => Ok(Hierarchy::Alpha1),
            2 => Ok(Hierarchy::Alpha2),
            3 => Ok(Hierarchy::Alpha4),
            4 => Ok(Hierarchy::Auto),
            _ => Err(value),
        }
    }
}

impl From<Hierarchy> for u8 {
    fn from(value: Hierarchy) -> Self {
        value as u8
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Hierarchy {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(Hierarchy::None),
            "1" => Ok(Hierarchy::Alpha1),
            "2" => Ok(Hierarchy::Alpha2),
            "4" => Ok(Hierarchy::Alpha4),
            "AUTO" => Ok(Hierarchy::Auto),
            _ => Err(ParseParameterError::new("hierarchy", s)),
        }
    }
}

/// Satellite polarisation. Only linear polarisations appear in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Polarisation {
    Horizontal = 0,
    Vertical = 1,
}

impl Polarisation {
    /// Scan table token (`H` / `V`).
    pub fn token(&self) -> &'static str {
        match self {
            Polarisation::Horizontal => "H",
            Polarisation::Vertical => "V",
        }
    }
}

impl TryFrom<u8> for Polarisation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Polarisation::Horizontal),
            1 => Ok(Polarisation::Vertical),
            _ => Err(value),
        }
    }
}

impl From<Polarisation> for u8 {
    fn from(value: Polarisation) -> Self {
        value as u8
    }
}

impl fmt::Display for Polarisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Polarisation {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "H" | "HORIZONTAL" => Ok(Polarisation::Horizontal),
            "V" | "VERTICAL" => Ok(Polarisation::Vertical),
            _ => Err(ParseParameterError::new("polarisation", s)),
        }
    }
}

/// DVB-S transponder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SatelliteMux {
    /// Transponder frequency, stored exactly as the tables list it.
    pub frequency: u32,
    pub polarisation: Polarisation,
    /// Symbols per second.
    pub symbol_rate: u32,
    pub fec: CodeRate,
}

/// DVB-T multiplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerrestrialMux {
    /// Centre frequency in Hz.
    pub frequency: u32,
    pub bandwidth: Bandwidth,
    pub code_rate_hp: CodeRate,
    pub code_rate_lp: CodeRate,
    pub constellation: Modulation,
    pub transmission_mode: TransmissionMode,
    pub guard_interval: GuardInterval,
    pub hierarchy: Hierarchy,
}

/// DVB-C multiplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CableMux {
    /// Frequency in Hz.
    pub frequency: u32,
    /// Symbols per second.
    pub symbol_rate: u32,
    pub fec: CodeRate,
    pub modulation: Modulation,
}

/// Tuning parameters of one physical multiplex.
///
/// Each delivery system has its own variant, so a satellite mux cannot
/// carry a bandwidth and a terrestrial mux cannot carry a polarisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum Mux {
    Satellite(SatelliteMux),
    Terrestrial(TerrestrialMux),
    Cable(CableMux),
}

impl Mux {
    /// Returns the delivery system this mux belongs to.
    pub fn delivery_system(&self) -> DeliverySystem {
        match self {
            Mux::Satellite(_) => DeliverySystem::Satellite,
            Mux::Terrestrial(_) => DeliverySystem::Terrestrial,
            Mux::Cable(_) => DeliverySystem::Cable,
        }
    }

    pub fn frequency(&self) -> u32 {
        match self {
            Mux::Satellite(m) => m.frequency,
            Mux::Terrestrial(m) => m.frequency,
            Mux::Cable(m) => m.frequency,
        }
    }

    /// Symbol rate, satellite and cable only.
    pub fn symbol_rate(&self) -> Option<u32> {
        match self {
            Mux::Satellite(m) => Some(m.symbol_rate),
            Mux::Terrestrial(_) => None,
            Mux::Cable(m) => Some(m.symbol_rate),
        }
    }

    /// Inner FEC. For terrestrial muxes this is the high priority stream rate.
    pub fn fec(&self) -> CodeRate {
        match self {
            Mux::Satellite(m) => m.fec,
            Mux::Terrestrial(m) => m.code_rate_hp,
            Mux::Cable(m) => m.fec,
        }
    }

    /// Modulation, terrestrial and cable only.
    pub fn modulation(&self) -> Option<Modulation> {
        match self {
            Mux::Satellite(_) => None,
            Mux::Terrestrial(m) => Some(m.constellation),
            Mux::Cable(m) => Some(m.modulation),
        }
    }

    /// Polarisation, satellite only.
    pub fn polarisation(&self) -> Option<Polarisation> {
        match self {
            Mux::Satellite(m) => Some(m.polarisation),
            _ => None,
        }
    }

    /// Bandwidth, terrestrial only.
    pub fn bandwidth(&self) -> Option<Bandwidth> {
        match self {
            Mux::Terrestrial(m) => Some(m.bandwidth),
            _ => None,
        }
    }

    /// Deduplication key: frequency, symbol rate or bandwidth, polarisation.
    pub fn signature(&self) -> MuxSignature {
        let rate = match self {
            Mux::Satellite(m) => SignatureRate::SymbolRate(m.symbol_rate),
            Mux::Terrestrial(m) => SignatureRate::Bandwidth(m.bandwidth),
            Mux::Cable(m) => SignatureRate::SymbolRate(m.symbol_rate),
        };

        MuxSignature {
            frequency: self.frequency(),
            rate,
            polarisation: self.polarisation(),
        }
    }
}

impl fmt::Display for Mux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.delivery_system().line_prefix())?;
        match self {
            Mux::Satellite(m) => write!(
                f,
                "{} {} {} {}",
                m.frequency, m.polarisation, m.symbol_rate, m.fec
            ),
            Mux::Terrestrial(m) => write!(
                f,
                "{} {} {} {} {} {} {} {}",
                m.frequency,
                m.bandwidth,
                m.code_rate_hp,
                m.code_rate_lp,
                m.constellation,
                m.transmission_mode,
                m.guard_interval,
                m.hierarchy
            ),
            Mux::Cable(m) => write!(
                f,
                "{} {} {} {}",
                m.frequency, m.symbol_rate, m.fec, m.modulation
            ),
        }
    }
}

/// Symbol rate or bandwidth half of a [`MuxSignature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureRate {
    SymbolRate(u32),
    Bandwidth(Bandwidth),
}

/// Canonical key for spotting repeated muxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxSignature {
    pub frequency: u32,
    pub rate: SignatureRate,
    pub polarisation: Option<Polarisation>,
}

/// One broadcaster, operator, transmitter site or orbital slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    /// Muxes in declaration order. Repeated entries are kept.
    pub muxes: Vec<Mux>,
}

impl Network {
    pub fn new(name: impl Into<String>, muxes: Vec<Mux>) -> Self {
        Self {
            name: name.into(),
            muxes,
        }
    }

    /// Iterate muxes, yielding only the first one of each signature.
    pub fn unique_muxes(&self) -> impl Iterator<Item = &Mux> + '_ {
        let mut seen = HashSet::new();
        self.muxes.iter().filter(move |m| seen.insert(m.signature()))
    }

    /// Number of muxes whose signature already appeared earlier in the network.
    pub fn duplicate_count(&self) -> usize {
        self.muxes.len() - self.unique_muxes().count()
    }
}

/// A country, or the orbit umbrella region for satellites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// ISO 3166-1 alpha-2 code. None for the satellite umbrella region.
    pub code: Option<String>,
    /// Networks in declaration order.
    pub networks: Vec<Network>,
}

impl Region {
    pub fn new(name: impl Into<String>, code: Option<String>, networks: Vec<Network>) -> Self {
        Self {
            name: name.into(),
            code,
            networks,
        }
    }

    /// Total number of muxes across all networks.
    pub fn mux_count(&self) -> usize {
        self.networks.iter().map(|n| n.muxes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sat(frequency: u32, polarisation: Polarisation) -> Mux {
        Mux::Satellite(SatelliteMux {
            frequency,
            polarisation,
            symbol_rate: 27_500_000,
            fec: CodeRate::Fec3_4,
        })
    }

    #[test]
    fn test_abi_values() {
        assert_eq!(u8::from(CodeRate::Auto), 9);
        assert_eq!(u8::from(Modulation::Qam256), 5);
        assert_eq!(u8::from(Bandwidth::Mhz6), 2);
        assert_eq!(u8::from(GuardInterval::Gi1_4), 3);
        assert_eq!(u8::from(Hierarchy::Alpha4), 3);
        assert_eq!(CodeRate::try_from(5), Ok(CodeRate::Fec5_6));
        assert_eq!(TransmissionMode::try_from(1), Ok(TransmissionMode::Mode8k));
        assert_eq!(Bandwidth::try_from(3), Err(3));
        assert_eq!(Polarisation::try_from(2), Err(2));
    }

    #[test]
    fn test_tokens_parse_back() {
        for token in ["NONE", "1/2", "2/3", "3/4", "4/5", "5/6", "6/7", "7/8", "8/9", "AUTO"] {
            let rate: CodeRate = token.parse().unwrap();
            assert_eq!(rate.to_string(), token);
        }
        assert_eq!("qam64".parse::<Modulation>().unwrap(), Modulation::Qam64);
        assert_eq!("8MHz".parse::<Bandwidth>().unwrap(), Bandwidth::Mhz8);
        assert_eq!("2k".parse::<TransmissionMode>().unwrap(), TransmissionMode::Mode2k);
        assert_eq!("1/32".parse::<GuardInterval>().unwrap(), GuardInterval::Gi1_32);
        assert_eq!("v".parse::<Polarisation>().unwrap(), Polarisation::Vertical);
        assert!("9/10".parse::<CodeRate>().is_err());
        assert!("5MHz".parse::<Bandwidth>().is_err());
    }

    #[test]
    fn test_delivery_system_from_str() {
        assert_eq!("DVB-S".parse::<DeliverySystem>().unwrap(), DeliverySystem::Satellite);
        assert_eq!("terrestrial".parse::<DeliverySystem>().unwrap(), DeliverySystem::Terrestrial);
        assert_eq!("c".parse::<DeliverySystem>().unwrap(), DeliverySystem::Cable);
        assert!("atsc".parse::<DeliverySystem>().is_err());
    }

    #[test]
    fn test_mux_field_subsets() {
        let s = sat(12_551_500, Polarisation::Vertical);
        assert_eq!(s.delivery_system(), DeliverySystem::Satellite);
        assert_eq!(s.polarisation(), Some(Polarisation::Vertical));
        assert_eq!(s.bandwidth(), None);
        assert_eq!(s.modulation(), None);

        let t = Mux::Terrestrial(TerrestrialMux {
            frequency: 850_000_000,
            bandwidth: Bandwidth::Mhz8,
            code_rate_hp: CodeRate::Fec3_4,
            code_rate_lp: CodeRate::None,
            constellation: Modulation::Qam16,
            transmission_mode: TransmissionMode::Mode2k,
            guard_interval: GuardInterval::Gi1_32,
            hierarchy: Hierarchy::None,
        });
        assert_eq!(t.polarisation(), None);
        assert_eq!(t.symbol_rate(), None);
        assert_eq!(t.bandwidth(), Some(Bandwidth::Mhz8));
        assert_eq!(t.fec(), CodeRate::Fec3_4);
    }

    #[test]
    fn test_mux_display() {
        let s = Mux::Satellite(SatelliteMux {
            frequency: 12_551_500,
            polarisation: Polarisation::Vertical,
            symbol_rate: 22_000_000,
            fec: CodeRate::Fec5_6,
        });
        assert_eq!(s.to_string(), "S 12551500 V 22000000 5/6");

        let c = Mux::Cable(CableMux {
            frequency: 362_000_000,
            symbol_rate: 6_875_000,
            fec: CodeRate::None,
            modulation: Modulation::Qam256,
        });
        assert_eq!(c.to_string(), "C 362000000 6875000 NONE QAM256");

        let t = Mux::Terrestrial(TerrestrialMux {
            frequency: 850_000_000,
            bandwidth: Bandwidth::Mhz8,
            code_rate_hp: CodeRate::Fec3_4,
            code_rate_lp: CodeRate::None,
            constellation: Modulation::Qam16,
            transmission_mode: TransmissionMode::Mode2k,
            guard_interval: GuardInterval::Gi1_32,
            hierarchy: Hierarchy::None,
        });
        assert_eq!(t.to_string(), "T 850000000 8MHz 3/4 NONE QAM16 2k 1/32 NONE");
    }

    #[test]
    fn test_line_prefix_and_bandwidth_hz() {
        let prefixes: String = DeliverySystem::ALL.iter().map(|s| s.line_prefix()).collect();
        assert_eq!(prefixes, "STC");

        assert_eq!(Bandwidth::Mhz8.hz(), 8_000_000);
        assert_eq!(Bandwidth::Mhz7.hz(), 7_000_000);
        assert_eq!(Bandwidth::Mhz6.hz(), 6_000_000);
    }

    #[test]
    fn test_signature_distinguishes_polarisation() {
        let h = sat(11_000_000, Polarisation::Horizontal);
        let v = sat(11_000_000, Polarisation::Vertical);
        assert_ne!(h.signature(), v.signature());
        assert_eq!(h.signature(), sat(11_000_000, Polarisation::Horizontal).signature());
    }

    #[test]
    fn test_network_duplicates_are_kept() {
        let network = Network::new(
            "Test",
            vec![
                sat(11_000_000, Polarisation::Horizontal),
                sat(11_500_000, Polarisation::Vertical),
                sat(11_000_000, Polarisation::Horizontal),
            ],
        );
        assert_eq!(network.muxes.len(), 3);
        assert_eq!(network.duplicate_count(), 1);

        let unique: Vec<u32> = network.unique_muxes().map(|m| m.frequency()).collect();
        assert_eq!(unique, vec![11_000_000, 11_500_000]);
    }
}
