use std::fmt;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde_json::Value;
use thiserror::Error;

/// The namespace an artifact is stored under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// ABI definitions, stored as JSON
    Abi,
    /// Compiled bytecode, stored as hex text without the `0x` prefix
    Bin,
}

impl ArtifactKind {
    /// Name of the directory holding artifacts of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ArtifactKind::Abi => "abi",
            ArtifactKind::Bin => "bin",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Represents an error that can occur while reading an artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// No artifact with the given name exists in the namespace
    #[error("NotFound: {kind}/{name}")]
    NotFound { kind: ArtifactKind, name: String },
    /// The ABI artifact is not valid JSON
    #[error("ParseError: {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    /// The bytecode artifact is not valid hex
    #[error("InvalidBytecode: {name}: {source}")]
    InvalidBytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
    /// Any other failure while reading from the artifact store
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
}

impl ArtifactError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArtifactError::NotFound { .. })
    }
}

/// The interface for interacting with a store of contract artifacts.
///
/// Implementors only need to know how to read the raw text of an artifact
/// and how to list a namespace. Parsing and formatting are shared by every
/// store through the provided methods.
pub trait ArtifactsResource {
    /// Read the full text content of an artifact.
    fn read_artifact(&self, kind: ArtifactKind, name: &str) -> Result<String, ArtifactError>;

    /// List the names of the artifacts in a namespace, sorted.
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, ArtifactError>;

    /// Get the ABI of a contract as a generic JSON value.
    ///
    /// The content is returned exactly as parsed; it is not checked against
    /// the ABI schema.
    fn get_abi(&self, name: &str) -> Result<Value, ArtifactError> {
        let contents = self.read_artifact(ArtifactKind::Abi, name)?;
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
            name: name.to_owned(),
            source,
        })
    }

    /// Get the bytecode of a contract as a `0x` prefixed string.
    ///
    /// The content is not validated, so this never fails for an artifact
    /// that exists and can be read.
    fn get_bin(&self, name: &str) -> Result<String, ArtifactError> {
        let contents = self.read_artifact(ArtifactKind::Bin, name)?;
        Ok(format!("0x{}", contents))
    }

    /// Get the ABI of a contract as a typed [`JsonAbi`].
    fn get_json_abi(&self, name: &str) -> Result<JsonAbi, ArtifactError> {
        let contents = self.read_artifact(ArtifactKind::Abi, name)?;
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
            name: name.to_owned(),
            source,
        })
    }

    /// Get the bytecode of a contract decoded into raw bytes.
    ///
    /// Surrounding whitespace and an existing `0x` prefix are tolerated.
    fn get_bytecode(&self, name: &str) -> Result<Bytes, ArtifactError> {
        let contents = self.read_artifact(ArtifactKind::Bin, name)?;
        let contents = contents.trim();
        let contents = contents.strip_prefix("0x").unwrap_or(contents);
        hex::decode(contents)
            .map(Bytes::from)
            .map_err(|source| ArtifactError::InvalidBytecode {
                name: name.to_owned(),
                source,
            })
    }
}
