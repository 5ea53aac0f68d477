use alloy_primitives::U256;
use clap::Parser;

use chainscript_core::cli::CommonArgs;

/// Deploys the crowdfunding contract, funds it, and withdraws.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Wei sent in the funding step; zero is rejected
    #[arg(long, env = "FUND_VALUE_WEI", default_value = "100000000000000000")]
    pub fund_value: U256,
}
