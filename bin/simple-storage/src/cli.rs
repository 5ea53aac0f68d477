use alloy_primitives::U256;
use clap::Parser;

use chainscript_core::cli::CommonArgs;

/// Deploys the storage demo and drives a read/write/read sequence against it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Value written in the update step
    #[arg(long, env = "STORE_VALUE", default_value = "7")]
    pub store_value: U256,
}
