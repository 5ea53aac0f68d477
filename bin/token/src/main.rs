//! ERC-20 deployment driver entry point.

mod cli;

use clap::Parser;
use cli::Args;
use dotenvy::dotenv;
use tracing::{error, info};

use chainscript_core::cli::init_tracing;
use chainscript_core::Driver;
use chainscript_scenarios::token::{self, TokenArgs};
use chainscript_scenarios::ScriptEnv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.common.log_level).expect("failed to initialize tracing");

    if let Err(e) = run(args).await {
        error!(error = %e, "token driver failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> eyre::Result<()> {
    let driver = Driver::connect(&args.common.driver_config()).await?;
    let env = ScriptEnv::new(driver, &args.common);

    let summary = token::run(&env, &TokenArgs { initial_supply: args.initial_supply }).await?;

    info!(
        address = %summary.address,
        name = %summary.name,
        symbol = %summary.symbol,
        total_supply = %summary.total_supply,
        "run complete"
    );
    Ok(())
}
