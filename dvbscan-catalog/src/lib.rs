//! Initial tuning data for DVB scanning.
//!
//! This crate ships a compiled-in catalog of the muxes a channel scanner
//! should try first, organised per delivery system as
//! region → network → mux.
//!
//! # Catalog Layout
//!
//! ```text
//! DVB-S  Geosynchronous Orbit  ─┬─ Astra-19.2E   ── S 12551500 V 22000000 5/6
//!                               └─ Hotbird-13.0E ── ...
//! DVB-T  United Kingdom        ─┬─ Dover         ── T 850000000 8MHz 3/4 ...
//!                               └─ ...
//! DVB-C  Germany               ─── ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use dvbscan_catalog::{find_network, find_region, list_muxes, DeliverySystem, Mux};
//!
//! let region = find_region(DeliverySystem::Terrestrial, "United Kingdom").unwrap();
//! let dover = find_network(region, "Dover").unwrap();
//!
//! match list_muxes(dover)[0] {
//!     Mux::Terrestrial(m) => assert_eq!(m.frequency, 850000000),
//!     _ => unreachable!(),
//! }
//!
//! // Unknown names are reported, never guessed
//! let sweden = find_region(DeliverySystem::Terrestrial, "Sweden").unwrap();
//! assert!(find_network(sweden, "Dover").is_err());
//! ```
//!
//! # Scan Plans and Export
//!
//! ```rust
//! use dvbscan_catalog::{codec, Catalog, DeliverySystem, ScanPlan, ScanRequest};
//!
//! let request = ScanRequest::new(DeliverySystem::Cable, "DE");
//! let plan = ScanPlan::build(Catalog::builtin(), &request).unwrap();
//! assert_eq!(plan.region, "Germany");
//!
//! let bytes = codec::encode_catalog(Catalog::builtin()).unwrap();
//! let decoded = codec::decode_catalog(&bytes).unwrap();
//! assert_eq!(&decoded, Catalog::builtin());
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod plan;
mod tables;
pub mod types;

pub use catalog::{
    find_network, find_region, list_muxes, list_networks, list_regions, mux_signature, Catalog,
    CatalogBuilder, SystemStats,
};
pub use codec::{decode_catalog, decode_header, encode_catalog, FileHeader, FORMAT_VERSION, MAGIC};
pub use error::{CatalogError, CodecError, ParseParameterError};
pub use plan::{DuplicatePolicy, ScanPlan, ScanRequest, TuningAttempt};
pub use types::{
    Bandwidth, CableMux, CodeRate, DeliverySystem, GuardInterval, Hierarchy, Modulation, Mux,
    MuxSignature, Network, Polarisation, Region, SatelliteMux, SignatureRate, TerrestrialMux,
    TransmissionMode,
};
