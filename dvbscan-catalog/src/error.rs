//! Error types for the tuning catalog.

use thiserror::Error;

use crate::types::DeliverySystem;

/// Lookup and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No region with this name exists for the delivery system.
    #[error("Unknown {system} region '{name}'")]
    RegionNotFound { system: DeliverySystem, name: String },

    /// No network with this name exists in the region.
    #[error("Unknown network '{name}' in region '{region}'")]
    NetworkNotFound { region: String, name: String },

    /// An externally built catalog breaks a table invariant.
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// Returns true for the region/network not found cases.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::RegionNotFound { .. } | CatalogError::NetworkNotFound { .. }
        )
    }
}

/// Errors of the binary catalog codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid magic bytes in header.
    #[error("Invalid magic bytes: expected 'DVBI', got {0:?}")]
    InvalidMagic([u8; 4]),

    /// Format version mismatch.
    #[error("Format version mismatch: file={file}, supported={supported}")]
    VersionMismatch { file: u16, supported: u16 },

    /// Payload is too large.
    #[error("Payload too large: {0} bytes (max: {1})")]
    FrameTooLarge(u64, u32),

    /// Payload is incomplete.
    #[error("Incomplete payload: expected {expected} bytes, got {actual}")]
    IncompleteFrame { expected: usize, actual: usize },

    /// An enum field holds a value outside its closed set.
    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: u8 },

    /// A mux was found in the section of another delivery system.
    #[error("{found} mux in {expected} section")]
    DeliverySystemMismatch {
        expected: DeliverySystem,
        found: DeliverySystem,
    },

    /// Failed to decode payload.
    #[error("Failed to decode catalog: {0}")]
    DecodeError(String),

    /// Failed to encode payload.
    #[error("Failed to encode catalog: {0}")]
    EncodeError(String),
}

/// A scan table token that does not name a known parameter value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: {value:?}")]
pub struct ParseParameterError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseParameterError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
