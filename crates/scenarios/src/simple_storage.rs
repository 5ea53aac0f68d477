//! Deploy the storage demo, read the value, update it, read it back.

use alloy_primitives::{Address, Bytes, U256};
use tracing::info;

use chainscript_contracts::storage::SimpleStorage;
use chainscript_core::Result;

use crate::ScriptEnv;

/// Knobs for the storage flow.
#[derive(Debug, Clone)]
pub struct StorageArgs {
    /// Value written in the update step.
    pub store_value: U256,
}

impl Default for StorageArgs {
    fn default() -> Self {
        Self { store_value: U256::from(7) }
    }
}

/// What the flow observed, for logging and assertions.
#[derive(Debug, Clone)]
pub struct StorageSummary {
    /// Deployed contract address.
    pub address: Address,
    /// Value read immediately after deployment.
    pub initial_value: U256,
    /// Value read after the update was confirmed.
    pub updated_value: U256,
}

/// Runs the flow: deploy, read, `store`, read back, optionally verify.
pub async fn run(env: &ScriptEnv, args: &StorageArgs) -> Result<StorageSummary> {
    let driver = &env.driver;
    let block = driver.block_number().await?;
    info!(target: "simple_storage", block, "starting at current block");

    let artifact = env.artifact("SimpleStorage")?;
    let (address, _) = driver.deploy(&artifact, Vec::new(), driver.confirmations()).await?;

    let storage = SimpleStorage::new(address, driver.provider());

    let initial_value = storage.retrieve().call().await?;
    info!(target: "simple_storage", value = %initial_value, "current value");

    let pending = storage.store(args.store_value).send().await?;
    driver.confirm(pending, 1).await?;

    let updated_value = storage.retrieve().call().await?;
    info!(target: "simple_storage", value = %updated_value, "updated value");

    env.maybe_verify(&artifact, address, Bytes::new()).await;

    Ok(StorageSummary { address, initial_value, updated_value })
}
