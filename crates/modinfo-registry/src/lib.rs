//! Static Mod Registry
//!
//! Typed, read-only view of the mod metadata bundled in `data/modinfo.json`.
//! The bundled data is parsed and validated once, on first access, and is
//! immutable for the rest of the process.

pub mod error;
pub mod loader;
pub mod registry;
pub mod types;

use once_cell::sync::Lazy;

pub use error::LoadError;
pub use loader::{load_embedded, load_from_path, load_from_str, EMBEDDED_SOURCE};
pub use registry::ModRegistry;
pub use types::{ModInfo, ModStatus, ParseStatusError};

static REGISTRY: Lazy<Result<ModRegistry, LoadError>> = Lazy::new(load_embedded);

/// The bundled registry, or the error that prevented it from loading
pub fn try_registry() -> Result<&'static ModRegistry, &'static LoadError> {
    REGISTRY.as_ref()
}

/// The bundled registry.
///
/// # Panics
///
/// Panics if the bundled data is malformed. The data ships with the build,
/// so this only happens for a broken build.
pub fn registry() -> &'static ModRegistry {
    match try_registry() {
        Ok(registry) => registry,
        Err(e) => panic!("bundled mod registry failed to load: {}", e),
    }
}

/// All bundled mod records, in source order
pub fn mods() -> &'static [ModInfo] {
    registry().as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_reads_are_stable() {
        let first = mods();
        let second = mods();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bundled_records_are_well_formed() {
        assert!(try_registry().is_ok());
        for info in mods() {
            assert!(!info.name.is_empty());
            assert!(ModStatus::ALL.contains(&info.status));
        }
    }

    #[test]
    fn test_bundled_round_trip() {
        let json = registry().to_json_pretty().unwrap();
        assert_eq!(&load_from_str(&json).unwrap(), registry());
    }

    #[test]
    fn test_bundled_scoped_record() {
        let minimap = registry().find("Xaero's Minimap").expect("minimap record");
        assert_eq!(minimap.status, ModStatus::PartiallyAllowed);
        assert_eq!(
            minimap.server.as_deref(),
            Some(&["Survival".to_string(), "Creative".to_string()][..])
        );
        assert!(registry().for_server("Creative").any(|m| m.name == "Litematica"));
        assert!(!registry().for_server("Survival").any(|m| m.name == "Litematica"));
    }
}
