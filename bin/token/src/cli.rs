use alloy_primitives::U256;
use clap::Parser;

use chainscript_core::cli::CommonArgs;

/// Deploys the ERC-20 token and reads its metadata back.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Total supply minted to the deployer, in the token's smallest unit
    #[arg(long, env = "INITIAL_SUPPLY_WEI", default_value = "1000000000000000000")]
    pub initial_supply: U256,
}
