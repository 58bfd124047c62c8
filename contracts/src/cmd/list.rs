use std::fmt;

use clap::{Args, ValueEnum};
use dinari_sbt_contracts::{ArtifactError, ArtifactKind, ArtifactsResource};
use serde::Serialize;
use thiserror::Error;

#[derive(Args)]
pub struct List {
    /// Only list artifacts of this kind
    #[arg(long, value_enum)]
    pub kind: Option<Kind>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Abi,
    Bin,
}

impl From<Kind> for ArtifactKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Abi => ArtifactKind::Abi,
            Kind::Bin => ArtifactKind::Bin,
        }
    }
}

/// A single artifact in the listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEntry {
    pub kind: Kind,
    pub name: String,
}

impl fmt::Display for ArtifactEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", ArtifactKind::from(self.kind), self.name)
    }
}

#[derive(Error, Debug)]
pub enum ListError {
    /// Error related to the artifacts store
    #[error("ArtifactError: {0}")]
    ArtifactError(#[from] ArtifactError),
    /// Error while rendering the listing
    #[error("SerializationError: {0}")]
    SerializationError(#[source] serde_json::Error),
}

impl List {
    pub fn run(&self, artifacts_resource: &dyn ArtifactsResource) -> Result<(), ListError> {
        let entries = self.entries(artifacts_resource)?;
        if self.json {
            let value = serde_json::to_value(&entries).map_err(ListError::SerializationError)?;
            let pretty = colored_json::to_colored_json_auto(&value)
                .map_err(ListError::SerializationError)?;
            println!("{}", pretty);
        } else {
            for entry in entries {
                println!("{}", entry);
            }
        }
        Ok(())
    }

    fn entries(
        &self,
        artifacts_resource: &dyn ArtifactsResource,
    ) -> Result<Vec<ArtifactEntry>, ListError> {
        let kinds = match self.kind {
            Some(kind) => vec![kind],
            None => vec![Kind::Abi, Kind::Bin],
        };

        let mut entries = Vec::new();
        for kind in kinds {
            for name in artifacts_resource.list(kind.into())? {
                entries.push(ArtifactEntry { kind, name });
            }
        }
        Ok(entries)
    }
}
