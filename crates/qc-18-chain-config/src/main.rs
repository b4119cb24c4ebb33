//! qc-18-chain-config: inspect and check chain config files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qc_18_chain_config::{presets, BlockNumber, ForkSchedule};

/// Chain config tool
#[derive(Parser, Debug)]
#[command(name = "qc-18-chain-config")]
#[command(about = "Validate, compare and inspect chain fork schedules")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check fork ordering and consensus engine parameters
    Validate {
        /// Chain config JSON file
        file: PathBuf,
    },
    /// Check whether a new config can replace a stored one
    Compat {
        /// Stored chain config JSON file
        stored: PathBuf,
        /// Candidate chain config JSON file
        candidate: PathBuf,
        /// Current chain head
        #[arg(long)]
        head: BlockNumber,
    },
    /// Print the rules active at a height
    Rules {
        /// Chain config JSON file
        file: PathBuf,
        /// Block height
        #[arg(long)]
        height: BlockNumber,
    },
    /// Print a built-in network config as JSON
    Show {
        /// mainnet, testnet, dev-ethash, dev-clique or test
        network: String,
    },
}

fn load(path: &Path) -> Result<ForkSchedule> {
    ForkSchedule::from_file(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Validate { file } => {
            let schedule = load(&file)?;
            schedule.check_fork_order()?;
            schedule.validate_engine()?;
            println!("ok: {}", schedule);
        }
        Command::Compat {
            stored,
            candidate,
            head,
        } => {
            let stored = load(&stored)?;
            let candidate = load(&candidate)?;
            match stored.check_compatible(&candidate, head) {
                Ok(()) => println!("compatible at head {}", head),
                Err(err) => bail!(err),
            }
        }
        Command::Rules { file, height } => {
            let rules = load(&file)?.rules(height);
            println!("{:#?}", rules);
        }
        Command::Show { network } => {
            let Some(schedule) = presets::by_name(&network) else {
                bail!("unknown network: {}", network);
            };
            println!("{}", schedule.to_json()?);
        }
    }

    Ok(())
}
