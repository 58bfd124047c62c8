mod cmd;
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Inspect the contract artifacts bundled with dinari-sbt-contracts")]
struct Cli {
    /// Read artifacts from this directory instead of the bundled ones.
    ///
    /// The directory must contain `abi/` and `bin/` subdirectories.
    #[arg(long, global = true, env = "SBT_ARTIFACTS_DIR")]
    artifacts_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ABI of a contract
    Abi(cmd::abi::Abi),
    /// Print the bytecode of a contract
    Bin(cmd::bin::Bin),
    /// List the available artifacts
    List(cmd::list::List),
}

/// Represents an error that can occur while running the CLI tool
#[derive(Error, Debug)]
enum CliError {
    /// Error related to the abi command
    AbiError(cmd::abi::AbiError),
    /// Error related to the bin command
    BinError(cmd::bin::BinError),
    /// Error related to the list command
    ListError(cmd::list::ListError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::AbiError(err) => write!(f, "Abi error: {}", err),
            CliError::BinError(err) => write!(f, "Bin error: {}", err),
            CliError::ListError(err) => write!(f, "List error: {}", err),
        }
    }
}

fn main() -> Result<(), CliError> {
    env_logger::builder().format_timestamp(None).init();

    let cli = Cli::parse();
    let artifacts_resource = cmd::artifacts_resource(cli.artifacts_dir.as_deref());

    match &cli.command {
        Commands::Abi(abi) => abi
            .run(&*artifacts_resource)
            .map_err(CliError::AbiError),
        Commands::Bin(bin) => bin
            .run(&*artifacts_resource)
            .map_err(CliError::BinError),
        Commands::List(list) => list
            .run(&*artifacts_resource)
            .map_err(CliError::ListError),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn can_parse_commands() {
        let cli = Cli::try_parse_from(["sbt-contracts", "abi", "MockToken.json"]).unwrap();
        assert!(cli.artifacts_dir.is_none());
        match cli.command {
            Commands::Abi(abi) => assert_eq!(abi.name, "MockToken.json"),
            _ => panic!("expected the abi command"),
        }

        let cli = Cli::try_parse_from([
            "sbt-contracts",
            "bin",
            "MockToken.bin",
            "--artifacts-dir",
            "contracts/out",
        ])
        .unwrap();
        assert_eq!(cli.artifacts_dir, Some(PathBuf::from("contracts/out")));
        assert!(matches!(cli.command, Commands::Bin(_)));

        assert!(Cli::try_parse_from(["sbt-contracts", "abi"]).is_err());
    }

    #[test]
    fn artifacts_dir_reads_environment() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "artifacts_dir")
            .unwrap();
        assert_eq!(arg.get_env(), Some(OsStr::new("SBT_ARTIFACTS_DIR")));
        assert!(arg.is_global_set());
    }
}
