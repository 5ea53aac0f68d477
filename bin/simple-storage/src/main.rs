//! Storage demo driver entry point.

mod cli;

use clap::Parser;
use cli::Args;
use dotenvy::dotenv;
use tracing::{error, info};

use chainscript_core::cli::init_tracing;
use chainscript_core::Driver;
use chainscript_scenarios::simple_storage::{self, StorageArgs};
use chainscript_scenarios::ScriptEnv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.common.log_level).expect("failed to initialize tracing");

    if let Err(e) = run(args).await {
        error!(error = %e, "simple-storage driver failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> eyre::Result<()> {
    let driver = Driver::connect(&args.common.driver_config()).await?;
    let env = ScriptEnv::new(driver, &args.common);

    let summary =
        simple_storage::run(&env, &StorageArgs { store_value: args.store_value }).await?;

    info!(
        address = %summary.address,
        initial = %summary.initial_value,
        updated = %summary.updated_value,
        "run complete"
    );
    Ok(())
}
