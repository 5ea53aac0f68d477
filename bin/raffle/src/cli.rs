use alloy_primitives::{B256, U256};
use clap::Parser;

use chainscript_core::cli::CommonArgs;

/// Deploys the VRF lottery, wiring a mock coordinator and a fresh
/// subscription on development chains.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Existing VRF subscription id; required on live chains
    #[arg(long, env = "RAFFLE_SUBSCRIPTION_ID")]
    pub subscription_id: Option<u64>,

    /// Juels to fund a freshly created mock subscription with
    #[arg(long, env = "VRF_FUND_AMOUNT", default_value = "1000000000000000000")]
    pub subscription_fund: u64,

    /// Entrance fee in wei (dev chains; live chains use the profile)
    #[arg(long, env = "ENTRANCE_FEE_WEI", default_value = "10000000000000000")]
    pub entrance_fee: U256,

    /// Gas lane (key hash) for randomness requests
    #[arg(
        long,
        env = "GAS_LANE",
        default_value = "0x474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c"
    )]
    pub gas_lane: B256,

    /// Gas limit for the randomness callback
    #[arg(long, env = "CALLBACK_GAS_LIMIT", default_value = "500000")]
    pub callback_gas_limit: u32,

    /// Upkeep interval in seconds (dev chains)
    #[arg(long, env = "UPKEEP_INTERVAL_SECS", default_value = "30")]
    pub interval_secs: u64,
}
