use clap::Args;
use dinari_sbt_contracts::{ArtifactError, ArtifactsResource};
use thiserror::Error;

#[derive(Args)]
pub struct Bin {
    /// The bytecode artifact to print, eg MockToken.bin
    pub name: String,

    /// Print the decoded size in bytes instead of the bytecode
    #[arg(long)]
    pub size: bool,
}

#[derive(Error, Debug)]
pub enum BinError {
    /// Error related to the artifacts store
    #[error("ArtifactError: {0}")]
    ArtifactError(#[from] ArtifactError),
}

impl Bin {
    pub fn run(&self, artifacts_resource: &dyn ArtifactsResource) -> Result<(), BinError> {
        println!("{}", self.render(artifacts_resource)?);
        Ok(())
    }

    fn render(&self, artifacts_resource: &dyn ArtifactsResource) -> Result<String, BinError> {
        if self.size {
            let bytecode = artifacts_resource.get_bytecode(&self.name)?;
            return Ok(bytecode.len().to_string());
        }
        Ok(artifacts_resource.get_bin(&self.name)?)
    }
}
