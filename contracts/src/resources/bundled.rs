use crate::core::resources::artifacts::{ArtifactError, ArtifactKind, ArtifactsResource};

mod tables {
    // Generated by build.rs from the `artifacts/` directory of this crate
    include!(concat!(env!("OUT_DIR"), "/bundled.rs"));
}

/// The Artifacts resource implementation backed by the artifacts that ship
/// with this crate.
///
/// Every file under `artifacts/abi` and `artifacts/bin` is embedded into the
/// library at build time, so lookups never touch the file system and the
/// contents can not change for the lifetime of the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledArtifactStore;

impl BundledArtifactStore {
    pub fn new() -> Self {
        BundledArtifactStore
    }

    fn table(kind: ArtifactKind) -> &'static [(&'static str, &'static str)] {
        match kind {
            ArtifactKind::Abi => tables::ABI_ARTIFACTS,
            ArtifactKind::Bin => tables::BIN_ARTIFACTS,
        }
    }

    /// Get the raw content of a bundled artifact without copying it.
    pub fn get_raw(kind: ArtifactKind, name: &str) -> Option<&'static str> {
        Self::table(kind)
            .iter()
            .find(|(artifact_name, _)| *artifact_name == name)
            .map(|(_, contents)| *contents)
    }
}

impl ArtifactsResource for BundledArtifactStore {
    fn read_artifact(&self, kind: ArtifactKind, name: &str) -> Result<String, ArtifactError> {
        log::debug!("Reading bundled artifact {}/{}", kind, name);
        Self::get_raw(kind, name)
            .map(str::to_owned)
            .ok_or_else(|| ArtifactError::NotFound {
                kind,
                name: name.to_owned(),
            })
    }

    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, ArtifactError> {
        Ok(Self::table(kind)
            .iter()
            .map(|(name, _)| name.to_string())
            .collect())
    }
}
