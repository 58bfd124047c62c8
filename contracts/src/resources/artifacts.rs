use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::resources::artifacts::{ArtifactError, ArtifactKind, ArtifactsResource};
use crate::resources::files::artifact_files;

/// The Artifacts resource implementation that uses a directory on the
/// local file system as the artifact store.
///
/// ABI definitions are read from `<path>/abi/<name>` and bytecode from
/// `<path>/bin/<name>`. Files are read on every call.
#[derive(Clone, Debug)]
pub struct LocalArtifactStore {
    path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LocalArtifactStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactsResource for LocalArtifactStore {
    fn read_artifact(&self, kind: ArtifactKind, name: &str) -> Result<String, ArtifactError> {
        let file_path = self.path.join(kind.dir_name()).join(name);
        log::debug!("Reading artifact {}", file_path.display());
        fs::read_to_string(&file_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ArtifactError::NotFound {
                kind,
                name: name.to_owned(),
            },
            _ => ArtifactError::Io(e),
        })
    }

    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, ArtifactError> {
        let found = artifact_files(&self.path.join(kind.dir_name()))?;
        for name in found.skipped {
            log::warn!("Skipping artifact with non UTF-8 name: {:?}", name);
        }
        Ok(found.files.into_iter().map(|(name, _)| name).collect())
    }
}
