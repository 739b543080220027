//! Export and verify the binary catalog file.

use std::path::Path;

use colored::Colorize;
use log::{error, info};

use dvbscan_catalog::{codec, Catalog, DeliverySystem};

/// Export command implementation.
pub fn cmd_export(catalog: &Catalog, output: &Path) -> i32 {
    let encoded = match codec::encode_catalog(catalog) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to encode catalog: {}", e);
            return 1;
        }
    };

    if let Err(e) = std::fs::write(output, &encoded) {
        error!("Failed to write {}: {}", output.display(), e);
        return 1;
    }

    info!("Wrote {} bytes to {}", encoded.len(), output.display());
    println!("Exported catalog to {}", output.display());
    0
}

/// Verify command implementation.
///
/// Exit code 0 when the file decodes, passes validation and equals
/// `expected`.
pub fn cmd_verify(expected: &Catalog, input: &Path) -> i32 {
    let data = match std::fs::read(input) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to read {}: {}", input.display(), e);
            return 1;
        }
    };

    let decoded = match codec::decode_catalog(&data) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return 1;
        }
    };

    if let Err(e) = decoded.validate() {
        eprintln!("{} {}", "error:".red().bold(), e);
        return 1;
    }

    for stats in decoded.stats() {
        println!(
            "  {}: {} regions, {} networks, {} muxes",
            stats.system, stats.regions, stats.networks, stats.muxes
        );
    }

    let differing: Vec<DeliverySystem> = DeliverySystem::ALL
        .iter()
        .copied()
        .filter(|&s| decoded.list_regions(s) != expected.list_regions(s))
        .collect();

    if differing.is_empty() {
        println!("{} {} matches the built-in catalog", "OK".green().bold(), input.display());
        0
    } else {
        let names: Vec<String> = differing.iter().map(|s| s.to_string()).collect();
        eprintln!(
            "{} {} differs from the built-in catalog in: {}",
            "MISMATCH".yellow().bold(),
            input.display(),
            names.join(", ")
        );
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvbscan_catalog::{CatalogBuilder, Network, Region};

    #[test]
    fn test_export_then_verify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.dvbi");

        assert_eq!(cmd_export(Catalog::builtin(), &path), 0);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"DVBI");

        assert_eq!(cmd_verify(Catalog::builtin(), &path), 0);
    }

    #[test]
    fn test_verify_detects_other_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.dvbi");

        let small = CatalogBuilder::new()
            .region(
                DeliverySystem::Cable,
                Region::new("Nowhere", None, vec![Network::new("Empty", Vec::new())]),
            )
            .build();
        assert_eq!(cmd_export(&small, &path), 0);

        assert_eq!(cmd_verify(&small, &path), 0);
        assert_eq!(cmd_verify(Catalog::builtin(), &path), 1);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"not a catalog file").unwrap();
        assert_eq!(cmd_verify(Catalog::builtin(), file.path()), 1);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cmd_verify(Catalog::builtin(), &dir.path().join("missing")), 1);
    }
}
