//! Lottery driver entry point.

mod cli;

use clap::Parser;
use cli::Args;
use dotenvy::dotenv;
use tracing::{error, info};

use chainscript_core::cli::init_tracing;
use chainscript_core::Driver;
use chainscript_scenarios::raffle::{self, RaffleArgs};
use chainscript_scenarios::ScriptEnv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.common.log_level).expect("failed to initialize tracing");

    if let Err(e) = run(args).await {
        error!(error = %e, "raffle driver failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> eyre::Result<()> {
    let driver = Driver::connect(&args.common.driver_config()).await?;
    let env = ScriptEnv::new(driver, &args.common);

    let scenario_args = RaffleArgs {
        subscription_id: args.subscription_id,
        subscription_fund: args.subscription_fund,
        entrance_fee: args.entrance_fee,
        gas_lane: args.gas_lane,
        callback_gas_limit: args.callback_gas_limit,
        interval_secs: args.interval_secs,
    };
    let summary = raffle::run(&env, &scenario_args).await?;

    info!(
        address = %summary.address,
        coordinator = %summary.coordinator,
        subscription_id = summary.subscription_id,
        entrance_fee = %summary.entrance_fee,
        "run complete"
    );
    Ok(())
}
