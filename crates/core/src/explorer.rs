//! Block-explorer source verification.
//!
//! Mirrors the scripts' post-deploy `verify` step: submit the source to an
//! Etherscan-compatible API, treat "already verified" as success, and poll
//! the returned GUID until the explorer settles. Verification is best-effort
//! for the scenarios; callers log failures and continue.

use std::time::Duration;

use alloy_primitives::{hex, Address, Bytes};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info};
use url::Url;

use crate::error::{DriverError, Result};

const DEFAULT_ENDPOINT: &str = "https://api.etherscan.io/v2/api";
const POLL_INTERVAL: Duration = Duration::from_secs(5);
const POLL_ATTEMPTS: u32 = 12;

/// One verification submission.
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// Deployed contract address.
    pub address: Address,
    /// Contract name as it appears in the source.
    pub contract_name: String,
    /// Full solc version string, e.g. `v0.8.7+commit.e28d00a7`.
    pub compiler_version: String,
    /// Flattened Solidity source.
    pub source: String,
    /// ABI-encoded constructor arguments, empty when there are none.
    pub constructor_args: Bytes,
}

/// Client for an Etherscan-compatible verification API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    message: String,
    result: String,
}

impl ExplorerClient {
    /// Creates a client against the default multi-chain endpoint.
    pub fn new(api_key: impl Into<String>, chain_id: u64) -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url");
        Self { http: reqwest::Client::new(), endpoint, api_key: api_key.into(), chain_id }
    }

    /// Submits a verification request and waits for the explorer's verdict.
    pub async fn verify_contract(&self, req: &VerifyRequest) -> Result<()> {
        info!(target: "explorer", address = %req.address, contract = %req.contract_name, "verifying contract");

        let params = [
            ("chainid", self.chain_id.to_string()),
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("apikey", self.api_key.clone()),
            ("contractaddress", req.address.to_string()),
            ("sourceCode", req.source.clone()),
            ("codeformat", "solidity-single-file".to_string()),
            ("contractname", req.contract_name.clone()),
            ("compilerversion", req.compiler_version.clone()),
            // the API spells it this way
            ("constructorArguements", hex::encode(&req.constructor_args)),
        ];

        let resp: ApiResponse = self
            .http
            .post(self.endpoint.clone())
            .form(&params)
            .send()
            .await?
            .json()
            .await?;

        if resp.status != "1" {
            if is_already_verified(&resp.result) {
                info!(target: "explorer", address = %req.address, "already verified");
                return Ok(());
            }
            return Err(DriverError::remote(format!(
                "verification submission rejected: {} ({})",
                resp.result, resp.message
            )));
        }

        self.poll_status(&resp.result, req.address).await
    }

    async fn poll_status(&self, guid: &str, address: Address) -> Result<()> {
        for attempt in 1..=POLL_ATTEMPTS {
            sleep(POLL_INTERVAL).await;

            let resp: ApiResponse = self
                .http
                .get(self.endpoint.clone())
                .query(&[
                    ("chainid", self.chain_id.to_string()),
                    ("module", "contract".to_string()),
                    ("action", "checkverifystatus".to_string()),
                    ("guid", guid.to_string()),
                    ("apikey", self.api_key.clone()),
                ])
                .send()
                .await?
                .json()
                .await?;

            debug!(target: "explorer", attempt, result = %resp.result, "verification status");

            if resp.result.contains("Pending") {
                continue;
            }
            if resp.result.contains("Pass") || is_already_verified(&resp.result) {
                info!(target: "explorer", address = %address, "verified");
                return Ok(());
            }
            return Err(DriverError::remote(format!(
                "verification failed: {} ({})",
                resp.result, resp.message
            )));
        }
        Err(DriverError::remote(format!(
            "verification still pending after {POLL_ATTEMPTS} status checks"
        )))
    }
}

fn is_already_verified(result: &str) -> bool {
    result.to_ascii_lowercase().contains("already verified")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_deserializes() {
        let resp: ApiResponse = serde_json::from_str(
            r#"{"status":"1","message":"OK","result":"guid-123"}"#,
        )
        .unwrap();
        assert_eq!(resp.status, "1");
        assert_eq!(resp.result, "guid-123");
    }

    #[test]
    fn already_verified_is_matched_case_insensitively() {
        assert!(is_already_verified("Contract source code already verified"));
        assert!(is_already_verified("Already Verified"));
        assert!(!is_already_verified("Pending in queue"));
    }
}
