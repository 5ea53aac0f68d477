use alloy_primitives::U256;
use clap::Parser;

use chainscript_core::cli::CommonArgs;

/// Wraps ETH, deposits it as lending collateral, borrows DAI, and repays.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Wei wrapped and deposited as collateral; zero is rejected
    #[arg(long, env = "WETH_AMOUNT_WEI", default_value = "20000000000000000")]
    pub deposit_amount: U256,

    /// Percent of the available borrows to actually borrow
    #[arg(long, env = "BORROW_PERCENT", default_value = "95")]
    pub borrow_percent: u64,
}
