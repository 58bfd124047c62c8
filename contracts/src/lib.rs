//! Contract artifacts bundled with the Dinari SBT contracts.
//!
//! The ABI definitions and compiled bytecode under `artifacts/` are embedded
//! into this crate at build time. [`get_abi`] and [`get_bin`] look them up by
//! file name:
//!
//! ```no_run
//! let abi = dinari_sbt_contracts::get_abi("MockToken.json")?;
//! let bytecode = dinari_sbt_contracts::get_bin("MockToken.bin")?;
//! assert!(bytecode.starts_with("0x"));
//! # Ok::<(), dinari_sbt_contracts::ArtifactError>(())
//! ```
//!
//! Artifacts stored elsewhere on disk can be read through a
//! [`LocalArtifactStore`], which implements the same [`ArtifactsResource`]
//! interface.

#[macro_use]
mod macros;
pub mod core;
pub mod resources;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde_json::Value;

pub use crate::core::resources::artifacts::{ArtifactError, ArtifactKind, ArtifactsResource};
pub use crate::resources::artifacts::LocalArtifactStore;
pub use crate::resources::bundled::BundledArtifactStore;

/// Get a bundled ABI, parsed as JSON.
pub fn get_abi(abi_name: &str) -> Result<Value, ArtifactError> {
    BundledArtifactStore.get_abi(abi_name)
}

/// Get a bundled bytecode, prefixed with `0x`.
pub fn get_bin(bin_name: &str) -> Result<String, ArtifactError> {
    BundledArtifactStore.get_bin(bin_name)
}

/// Get a bundled ABI as a typed [`JsonAbi`].
pub fn get_json_abi(abi_name: &str) -> Result<JsonAbi, ArtifactError> {
    BundledArtifactStore.get_json_abi(abi_name)
}

/// Get a bundled bytecode decoded into bytes.
pub fn get_bytecode(bin_name: &str) -> Result<Bytes, ArtifactError> {
    BundledArtifactStore.get_bytecode(bin_name)
}

#[cfg(test)]
mod tests {
    use crate::resources::bundled::BundledArtifactStore;
    use crate::ArtifactKind;

    #[test]
    fn can_get_bundled_abi() {
        let abi = super::get_abi("MockToken.json").unwrap();
        let raw = BundledArtifactStore::get_raw(ArtifactKind::Abi, "MockToken.json").unwrap();
        assert_eq!(abi, serde_json::from_str::<serde_json::Value>(raw).unwrap());
        assert!(abi
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry["name"] == "transfer"));
    }

    #[test]
    fn can_get_bundled_bin() {
        let bin = super::get_bin("MockToken.bin").unwrap();
        let raw = BundledArtifactStore::get_raw(ArtifactKind::Bin, "MockToken.bin").unwrap();
        assert_eq!(bin, format!("0x{}", raw));
        assert_eq!(bin, super::get_bin("MockToken.bin").unwrap());
    }

    #[test]
    fn typed_accessors_agree_with_raw_ones() {
        let abi = super::get_json_abi("MockToken.json").unwrap();
        assert_eq!(abi.functions().count(), 10);
        assert!(abi.constructor.is_some());

        let bytecode = super::get_bytecode("MockToken.bin").unwrap();
        let bin = super::get_bin("MockToken.bin").unwrap();
        assert_eq!(format!("0x{}", hex::encode(&bytecode)), bin);
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(super::get_abi("Unknown.json").unwrap_err().is_not_found());
        assert!(super::get_bin("Unknown.bin").unwrap_err().is_not_found());
        assert!(super::get_json_abi("Unknown.json").unwrap_err().is_not_found());
        assert!(super::get_bytecode("Unknown.bin").unwrap_err().is_not_found());
    }
}
