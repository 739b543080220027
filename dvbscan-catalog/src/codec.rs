//! Binary interchange format for a whole catalog.
//!
//! File format:
//! ```text
//! +--------+---------+--------+------------------+
//! | Magic  | Version | Length |     Payload      |
//! | "DVBI" | u16 LE  | u32 LE |    (variable)    |
//! +--------+---------+--------+------------------+
//! | 4 bytes| 2 bytes | 4 bytes|  Length bytes    |
//! ```
//!
//! The payload holds the satellite, terrestrial and cable sections in that
//! order. Integers are little endian, enum fields are their DVB frontend
//! ABI values, so every frequency and symbol rate survives a round trip
//! bit for bit.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::catalog::{Catalog, CatalogBuilder};
use crate::error::CodecError;
use crate::types::*;

/// Magic bytes: "DVBI" (DVB initial tuning).
pub const MAGIC: [u8; 4] = *b"DVBI";

/// Format version.
pub const FORMAT_VERSION: u16 = 1;

/// Header size: 4 (magic) + 2 (version) + 4 (length) = 10 bytes.
pub const HEADER_SIZE: usize = 10;

/// Maximum payload size (64 MB).
pub const MAX_PAYLOAD_SIZE: u32 = 64 * 1024 * 1024;

/// Marker for an absent optional string.
const NONE_MARKER: u16 = 0xFFFF;

/// Parsed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub version: u16,
    pub payload_len: u32,
}

/// Encode a catalog into bytes.
pub fn encode_catalog(catalog: &Catalog) -> Result<Bytes, CodecError> {
    let mut payload = BytesMut::new();

    for system in DeliverySystem::ALL {
        let regions = catalog.list_regions(system);
        put_count_u16(&mut payload, regions.len(), "region")?;

        for region in regions {
            encode_region(&mut payload, region)?;
        }
    }

    let payload_len = payload.len() as u64;
    if payload_len > MAX_PAYLOAD_SIZE as u64 {
        return Err(CodecError::FrameTooLarge(payload_len, MAX_PAYLOAD_SIZE));
    }

    let mut out = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    out.put_slice(&MAGIC);
    out.put_u16_le(FORMAT_VERSION);
    out.put_u32_le(payload_len as u32);
    out.put_slice(&payload);

    Ok(out.freeze())
}

fn encode_region(buf: &mut BytesMut, region: &Region) -> Result<(), CodecError> {
    encode_string(buf, &region.name)?;
    encode_optional_string(buf, region.code.as_deref())?;
    put_count_u16(buf, region.networks.len(), "network")?;

    for network in &region.networks {
        encode_string(buf, &network.name)?;
        if network.muxes.len() > u32::MAX as usize {
            return Err(CodecError::EncodeError(format!(
                "too many muxes in network '{}'",
                network.name
            )));
        }
        buf.put_u32_le(network.muxes.len() as u32);

        for mux in &network.muxes {
            encode_mux(buf, mux);
        }
    }

    Ok(())
}

fn encode_mux(buf: &mut BytesMut, mux: &Mux) {
    buf.put_u8(mux.delivery_system().into());

    match mux {
        Mux::Satellite(m) => {
            buf.put_u32_le(m.frequency);
            buf.put_u32_le(m.symbol_rate);
            buf.put_u8(m.polarisation.into());
            buf.put_u8(m.fec.into());
        }
        Mux::Terrestrial(m) => {
            buf.put_u32_le(m.frequency);
            buf.put_u8(m.bandwidth.into());
            buf.put_u8(m.code_rate_hp.into());
            buf.put_u8(m.code_rate_lp.into());
            buf.put_u8(m.constellation.into());
            buf.put_u8(m.transmission_mode.into());
            buf.put_u8(m.guard_interval.into());
            buf.put_u8(m.hierarchy.into());
        }
        Mux::Cable(m) => {
            buf.put_u32_le(m.frequency);
            buf.put_u32_le(m.symbol_rate);
            buf.put_u8(m.fec.into());
            buf.put_u8(m.modulation.into());
        }
    }
}

fn put_count_u16(buf: &mut BytesMut, count: usize, what: &str) -> Result<(), CodecError> {
    if count > u16::MAX as usize {
        return Err(CodecError::EncodeError(format!("too many {} entries: {}", what, count)));
    }
    buf.put_u16_le(count as u16);
    Ok(())
}

fn encode_string(buf: &mut BytesMut, s: &str) -> Result<(), CodecError> {
    let bytes = s.as_bytes();
    if bytes.len() >= NONE_MARKER as usize {
        return Err(CodecError::EncodeError(format!(
            "string too long: {} bytes",
            bytes.len()
        )));
    }
    buf.put_u16_le(bytes.len() as u16);
    buf.put_slice(bytes);
    Ok(())
}

fn encode_optional_string(buf: &mut BytesMut, s: Option<&str>) -> Result<(), CodecError> {
    match s {
        Some(s) => encode_string(buf, s),
        None => {
            buf.put_u16_le(NONE_MARKER);
            Ok(())
        }
    }
}

/// Decode a file header from the beginning of `buf`.
///
/// Returns `Ok(None)` when fewer than [`HEADER_SIZE`] bytes are available.
pub fn decode_header(buf: &[u8]) -> Result<Option<FileHeader>, CodecError> {
    if buf.len() < HEADER_SIZE {
        return Ok(None);
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[0..4]);
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic(magic));
    }

    let mut rest = &buf[4..HEADER_SIZE];
    let version = rest.get_u16_le();
    let payload_len = rest.get_u32_le();

    if version != FORMAT_VERSION {
        return Err(CodecError::VersionMismatch {
            file: version,
            supported: FORMAT_VERSION,
        });
    }
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(CodecError::FrameTooLarge(payload_len as u64, MAX_PAYLOAD_SIZE));
    }

    Ok(Some(FileHeader {
        version,
        payload_len,
    }))
}

/// Decode a complete encoded catalog.
pub fn decode_catalog(data: &[u8]) -> Result<Catalog, CodecError> {
    let header = decode_header(data)?.ok_or(CodecError::IncompleteFrame {
        expected: HEADER_SIZE,
        actual: data.len(),
    })?;

    let expected = HEADER_SIZE + header.payload_len as usize;
    if data.len() < expected {
        return Err(CodecError::IncompleteFrame {
            expected,
            actual: data.len(),
        });
    }
    if data.len() > expected {
        return Err(CodecError::DecodeError(format!(
            "{} trailing bytes after payload",
            data.len() - expected
        )));
    }

    let mut payload = Bytes::copy_from_slice(&data[HEADER_SIZE..]);
    let mut builder = CatalogBuilder::new();

    for system in DeliverySystem::ALL {
        let region_count = get_u16(&mut payload)?;
        for _ in 0..region_count {
            builder.push_region(system, decode_region(&mut payload, system)?);
        }
    }

    if payload.has_remaining() {
        return Err(CodecError::DecodeError(format!(
            "{} unread bytes in payload",
            payload.remaining()
        )));
    }

    Ok(builder.build())
}

fn decode_region(buf: &mut Bytes, system: DeliverySystem) -> Result<Region, CodecError> {
    let name = decode_string(buf)?;
    let code = decode_optional_string(buf)?;
    let network_count = get_u16(buf)?;

    let mut networks = Vec::with_capacity(network_count as usize);
    for _ in 0..network_count {
        let network_name = decode_string(buf)?;
        let mux_count = get_u32(buf)?;

        let mut muxes = Vec::new();
        for _ in 0..mux_count {
            muxes.push(decode_mux(buf, system)?);
        }
        networks.push(Network::new(network_name, muxes));
    }

    Ok(Region::new(name, code, networks))
}

fn decode_mux(buf: &mut Bytes, expected: DeliverySystem) -> Result<Mux, CodecError> {
    let found: DeliverySystem = decode_enum(buf, "delivery system")?;
    if found != expected {
        return Err(CodecError::DeliverySystemMismatch { expected, found });
    }

    let mux = match found {
        DeliverySystem::Satellite => {
            let frequency = get_u32(buf)?;
            let symbol_rate = get_u32(buf)?;
            Mux::Satellite(SatelliteMux {
                frequency,
                symbol_rate,
                polarisation: decode_enum(buf, "polarisation")?,
                fec: decode_enum(buf, "code rate")?,
            })
        }
        DeliverySystem::Terrestrial => Mux::Terrestrial(TerrestrialMux {
            frequency: get_u32(buf)?,
            bandwidth: decode_enum(buf, "bandwidth")?,
            code_rate_hp: decode_enum(buf, "code rate")?,
            code_rate_lp: decode_enum(buf, "code rate")?,
            constellation: decode_enum(buf, "modulation")?,
            transmission_mode: decode_enum(buf, "transmission mode")?,
            guard_interval: decode_enum(buf, "guard interval")?,
            hierarchy: decode_enum(buf, "hierarchy")?,
        }),
        DeliverySystem::Cable => Mux::Cable(CableMux {
            frequency: get_u32(buf)?,
            symbol_rate: get_u32(buf)?,
            fec: decode_enum(buf, "code rate")?,
            modulation: decode_enum(buf, "modulation")?,
        }),
    };

    Ok(mux)
}

fn decode_enum<T>(buf: &mut Bytes, field: &'static str) -> Result<T, CodecError>
where
    T: TryFrom<u8, Error = u8>,
{
    need(buf, 1)?;
    T::try_from(buf.get_u8()).map_err(|value| CodecError::InvalidValue { field, value })
}

fn decode_string(buf: &mut Bytes) -> Result<String, CodecError> {
    decode_optional_string(buf)?
        .ok_or_else(|| CodecError::DecodeError("missing required string".to_string()))
}

fn decode_optional_string(buf: &mut Bytes) -> Result<Option<String>, CodecError> {
    let len = get_u16(buf)?;
    if len == NONE_MARKER {
        return Ok(None);
    }
    need(buf, len as usize)?;
    let bytes = buf.copy_to_bytes(len as usize);
    String::from_utf8(bytes.to_vec())
        .map(Some)
        .map_err(|e| CodecError::DecodeError(e.to_string()))
}

fn get_u16(buf: &mut Bytes) -> Result<u16, CodecError> {
    need(buf, 2)?;
    Ok(buf.get_u16_le())
}

fn get_u32(buf: &mut Bytes) -> Result<u32, CodecError> {
    need(buf, 4)?;
    Ok(buf.get_u32_le())
}

fn need(buf: &Bytes, n: usize) -> Result<(), CodecError> {
    if buf.remaining() < n {
        return Err(CodecError::IncompleteFrame {
            expected: n,
            actual: buf.remaining(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        let sat = Mux::Satellite(SatelliteMux {
            frequency: 12551500,
            polarisation: Polarisation::Vertical,
            symbol_rate: 22000000,
            fec: CodeRate::Fec5_6,
        });
        let ter = Mux::Terrestrial(TerrestrialMux {
            frequency: 505833333,
            bandwidth: Bandwidth::Mhz8,
            code_rate_hp: CodeRate::Fec3_4,
            code_rate_lp: CodeRate::None,
            constellation: Modulation::Qam16,
            transmission_mode: TransmissionMode::Mode2k,
            guard_interval: GuardInterval::Gi1_32,
            hierarchy: Hierarchy::None,
        });

        CatalogBuilder::new()
            .region(
                DeliverySystem::Satellite,
                Region::new("Orbit", None, vec![Network::new("Slot", vec![sat, sat])]),
            )
            .region(
                DeliverySystem::Terrestrial,
                Region::new(
                    "Somewhere",
                    Some("XX".to_string()),
                    vec![Network::new("Site", vec![ter]), Network::new("Empty", Vec::new())],
                ),
            )
            .build()
    }

    #[test]
    fn test_encode_decode_builtin() {
        let catalog = Catalog::builtin();
        let encoded = encode_catalog(catalog).unwrap();

        assert_eq!(&encoded[0..4], &MAGIC);
        let header = decode_header(&encoded).unwrap().unwrap();
        assert_eq!(header.version, FORMAT_VERSION);
        assert_eq!(header.payload_len as usize, encoded.len() - HEADER_SIZE);

        let decoded = decode_catalog(&encoded).unwrap();
        assert_eq!(&decoded, catalog);
    }

    #[test]
    fn test_encode_decode_keeps_empty_and_duplicate_entries() {
        let catalog = small_catalog();
        let decoded = decode_catalog(&encode_catalog(&catalog).unwrap()).unwrap();
        assert_eq!(decoded, catalog);

        let orbit = decoded.find_region(DeliverySystem::Satellite, "Orbit").unwrap();
        assert_eq!(orbit.code, None);
        assert_eq!(orbit.networks[0].muxes.len(), 2);
        let somewhere = decoded
            .find_region(DeliverySystem::Terrestrial, "Somewhere")
            .unwrap();
        assert!(somewhere.networks[1].muxes.is_empty());
        assert!(decoded.list_regions(DeliverySystem::Cable).is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin();
        let mut builder = CatalogBuilder::new();

        for system in DeliverySystem::ALL {
            let json = serde_json::to_string(catalog.list_regions(system)).unwrap();
            let regions: Vec<Region> = serde_json::from_str(&json).unwrap();
            for region in regions {
                builder.push_region(system, region);
            }
        }

        assert_eq!(&builder.build(), catalog);
    }

    #[test]
    fn test_invalid_magic() {
        let bad = b"BADP\x01\x00\x00\x00\x00\x00";
        assert!(matches!(decode_header(bad), Err(CodecError::InvalidMagic(_))));
    }

    #[test]
    fn test_incomplete_header() {
        assert_eq!(decode_header(b"DVBI\x01").unwrap(), None);
        assert!(matches!(
            decode_catalog(b"DVBI\x01"),
            Err(CodecError::IncompleteFrame { .. })
        ));
    }

    #[test]
    fn test_version_mismatch() {
        let mut encoded = encode_catalog(&small_catalog()).unwrap().to_vec();
        encoded[4] = 2;
        assert_eq!(
            decode_catalog(&encoded),
            Err(CodecError::VersionMismatch {
                file: 2,
                supported: FORMAT_VERSION,
            })
        );
    }

    #[test]
    fn test_truncated_payload() {
        let encoded = encode_catalog(&small_catalog()).unwrap();
        let truncated = &encoded[..encoded.len() - 3];
        assert!(matches!(
            decode_catalog(truncated),
            Err(CodecError::IncompleteFrame { .. })
        ));
    }

    #[test]
    fn test_payload_too_large() {
        let mut header = BytesMut::new();
        header.put_slice(&MAGIC);
        header.put_u16_le(FORMAT_VERSION);
        header.put_u32_le(MAX_PAYLOAD_SIZE + 1);

        let expected = CodecError::FrameTooLarge(MAX_PAYLOAD_SIZE as u64 + 1, MAX_PAYLOAD_SIZE);
        assert_eq!(decode_header(&header), Err(expected.clone()));
        assert_eq!(decode_catalog(&header), Err(expected));
    }

    #[test]
    fn test_invalid_utf8_name() {
        let mut payload = BytesMut::new();
        payload.put_u16_le(1); // one satellite region
        payload.put_u16_le(2);
        payload.put_slice(&[0xFF, 0xFE]);

        let mut frame = BytesMut::new();
        frame.put_slice(&MAGIC);
        frame.put_u16_le(FORMAT_VERSION);
        frame.put_u32_le(payload.len() as u32);
        frame.put_slice(&payload);

        assert!(matches!(
            decode_catalog(&frame),
            Err(CodecError::DecodeError(_))
        ));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut encoded = encode_catalog(&small_catalog()).unwrap().to_vec();
        encoded.push(0);
        assert!(matches!(
            decode_catalog(&encoded),
            Err(CodecError::DecodeError(_))
        ));
    }

    fn single_mux_frame(tag: u8, body: &[u8], section: DeliverySystem) -> Vec<u8> {
        let mut payload = BytesMut::new();
        for system in DeliverySystem::ALL {
            if system != section {
                payload.put_u16_le(0);
                continue;
            }
            payload.put_u16_le(1);
            encode_string(&mut payload, "R").unwrap();
            encode_optional_string(&mut payload, None).unwrap();
            payload.put_u16_le(1);
            encode_string(&mut payload, "N").unwrap();
            payload.put_u32_le(1);
            payload.put_u8(tag);
            payload.put_slice(body);
        }

        let mut frame = BytesMut::new();
        frame.put_slice(&MAGIC);
        frame.put_u16_le(FORMAT_VERSION);
        frame.put_u32_le(payload.len() as u32);
        frame.put_slice(&payload);
        frame.to_vec()
    }

    #[test]
    fn test_unknown_enum_value() {
        let mut body = BytesMut::new();
        body.put_u32_le(362000000);
        body.put_u32_le(6900000);
        body.put_u8(0); // FEC_NONE
        body.put_u8(42); // no such modulation

        let frame = single_mux_frame(2, &body, DeliverySystem::Cable);
        assert_eq!(
            decode_catalog(&frame),
            Err(CodecError::InvalidValue {
                field: "modulation",
                value: 42,
            })
        );
    }

    #[test]
    fn test_mux_in_wrong_section() {
        let mut body = BytesMut::new();
        body.put_u32_le(362000000);
        body.put_u32_le(6900000);
        body.put_u8(0);
        body.put_u8(5);

        // Cable mux inside the satellite section
        let frame = single_mux_frame(2, &body, DeliverySystem::Satellite);
        assert_eq!(
            decode_catalog(&frame),
            Err(CodecError::DeliverySystemMismatch {
                expected: DeliverySystem::Satellite,
                found: DeliverySystem::Cable,
            })
        );
    }
}
