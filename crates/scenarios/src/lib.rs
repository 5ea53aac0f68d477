//! The scripted contract flows.
//!
//! Each module is one scenario: a fixed sequence of reads and confirmed
//! writes against a remote chain, logging every step before moving to the
//! next. Scenarios share a [`ScriptEnv`] carrying the connected driver, the
//! artifact directory, and the optional explorer credentials.

use std::fs;
use std::path::PathBuf;

use alloy_primitives::{Address, Bytes};
use tracing::{debug, warn};

use chainscript_core::cli::CommonArgs;
use chainscript_core::{Artifact, Driver, ExplorerClient, Result, VerifyRequest};

/// Aave-style lending deposit/borrow/repay flow.
pub mod aave_borrow;
/// Crowdfunding fund/withdraw flow.
pub mod fund_me;
/// VRF lottery deployment and subscription wiring.
pub mod raffle;
/// Storage demo deploy/read/write flow.
pub mod simple_storage;
/// ERC-20 deployment flow.
pub mod token;

/// Everything a scenario needs besides its own knobs.
#[derive(Debug, Clone)]
pub struct ScriptEnv {
    /// Connected transaction driver.
    pub driver: Driver,
    /// Directory holding compiled contract artifacts.
    pub artifacts_dir: PathBuf,
    /// Explorer API key; verification is skipped when unset.
    pub etherscan_api_key: Option<String>,
    /// Compiler version reported alongside verification submissions.
    pub solc_version: String,
}

impl ScriptEnv {
    /// Builds the environment from the shared CLI args and a connected driver.
    pub fn new(driver: Driver, args: &CommonArgs) -> Self {
        Self {
            driver,
            artifacts_dir: args.artifacts_dir.clone(),
            etherscan_api_key: args.etherscan_api_key.clone(),
            solc_version: args.solc_version.clone(),
        }
    }

    /// Loads a compiled artifact by contract name.
    pub fn artifact(&self, name: &str) -> Result<Artifact> {
        Artifact::load(&self.artifacts_dir, name)
    }

    /// Best-effort explorer verification of a fresh deployment.
    ///
    /// Skipped on development chains and when no API key is configured. A
    /// failed verification is logged and swallowed; it never fails the run.
    pub async fn maybe_verify(
        &self,
        artifact: &Artifact,
        address: Address,
        constructor_args: Bytes,
    ) {
        if self.driver.is_development() {
            debug!(target: "verify", "development chain, skipping verification");
            return;
        }
        let Some(api_key) = &self.etherscan_api_key else {
            debug!(target: "verify", "no explorer api key, skipping verification");
            return;
        };

        let source_path = artifact.path.with_extension("sol");
        let source = match fs::read_to_string(&source_path) {
            Ok(source) => source,
            Err(e) => {
                warn!(
                    target: "verify",
                    path = %source_path.display(),
                    error = %e,
                    "no flattened source next to the artifact, skipping verification"
                );
                return;
            }
        };

        let request = VerifyRequest {
            address,
            contract_name: artifact.name.clone(),
            compiler_version: self.solc_version.clone(),
            source,
            constructor_args,
        };
        let client = ExplorerClient::new(api_key.clone(), self.driver.chain_id());
        if let Err(e) = client.verify_contract(&request).await {
            warn!(target: "verify", address = %address, error = %e, "verification failed, continuing");
        }
    }
}
