//! Lending flow driver entry point.

mod cli;

use clap::Parser;
use cli::Args;
use dotenvy::dotenv;
use tracing::{error, info};

use chainscript_core::cli::init_tracing;
use chainscript_core::Driver;
use chainscript_scenarios::aave_borrow::{self, AaveArgs};
use chainscript_scenarios::ScriptEnv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.common.log_level).expect("failed to initialize tracing");

    if let Err(e) = run(args).await {
        error!(error = %e, "aave-borrow driver failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> eyre::Result<()> {
    let driver = Driver::connect(&args.common.driver_config()).await?;
    let env = ScriptEnv::new(driver, &args.common);

    let scenario_args = AaveArgs {
        deposit_amount: args.deposit_amount,
        borrow_percent: args.borrow_percent,
    };
    let summary = aave_borrow::run(&env, &scenario_args).await?;

    info!(
        pool = %summary.lending_pool,
        deposited = %summary.deposited,
        borrowed = %summary.borrowed_dai,
        remaining_debt = %summary.remaining_debt_eth,
        "run complete"
    );
    Ok(())
}
