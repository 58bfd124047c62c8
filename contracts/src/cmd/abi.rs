use clap::Args;
use dinari_sbt_contracts::{ArtifactError, ArtifactsResource};
use thiserror::Error;

#[derive(Args)]
pub struct Abi {
    /// The ABI artifact to print, eg MockToken.json
    pub name: String,

    /// Print the function and event signatures instead of the JSON
    #[arg(long)]
    pub signatures: bool,
}

#[derive(Error, Debug)]
pub enum AbiError {
    /// Error related to the artifacts store
    #[error("ArtifactError: {0}")]
    ArtifactError(#[from] ArtifactError),
    /// Error while rendering the ABI
    #[error("SerializationError: {0}")]
    SerializationError(#[source] serde_json::Error),
}

impl Abi {
    pub fn run(&self, artifacts_resource: &dyn ArtifactsResource) -> Result<(), AbiError> {
        for line in self.render(artifacts_resource)? {
            println!("{}", line);
        }
        Ok(())
    }

    fn render(&self, artifacts_resource: &dyn ArtifactsResource) -> Result<Vec<String>, AbiError> {
        if !self.signatures {
            let abi = artifacts_resource.get_abi(&self.name)?;
            let pretty =
                colored_json::to_colored_json_auto(&abi).map_err(AbiError::SerializationError)?;
            return Ok(vec![pretty]);
        }

        let abi = artifacts_resource.get_json_abi(&self.name)?;
        let functions = abi.functions().map(|f| format!("function {}", f.signature()));
        let events = abi.events().map(|e| format!("event {}", e.signature()));
        Ok(functions.chain(events).collect())
    }
}
