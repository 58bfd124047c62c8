use std::path::Path;

use dinari_sbt_contracts::{ArtifactsResource, BundledArtifactStore, LocalArtifactStore};

pub mod abi;
pub mod bin;
pub mod list;

/// Builds the artifacts resource used by every command.
///
/// Uses the artifacts bundled with the library unless a directory is given.
pub fn artifacts_resource(artifacts_dir: Option<&Path>) -> Box<dyn ArtifactsResource> {
    match artifacts_dir {
        Some(path) => {
            log::debug!("Using artifacts from {}", path.display());
            Box::new(LocalArtifactStore::new(path))
        }
        None => Box::new(BundledArtifactStore::new()),
    }
}
