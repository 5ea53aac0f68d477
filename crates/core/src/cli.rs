//! Shared CLI surface and tracing init for the driver binaries.
//!
//! Every argument doubles as an environment variable so a populated `.env`
//! runs any driver with no flags at all.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::DriverConfig;

/// Connection and policy arguments common to every driver.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// JSON-RPC endpoint of the target node
    #[arg(long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
    pub rpc_url: String,

    /// Hex-encoded signing key for the driver account
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true, default_value = "")]
    pub private_key: String,

    /// Confirmations to wait for each write; defaults to the chain profile
    #[arg(long, env = "CONFIRMATIONS")]
    pub confirmations: Option<u64>,

    /// Deadline in seconds for each confirmation wait
    #[arg(long, env = "TX_TIMEOUT_SECS", default_value = "60")]
    pub tx_timeout_secs: u64,

    /// Directory holding compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Explorer API key; source verification is skipped when unset
    #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
    pub etherscan_api_key: Option<String>,

    /// Compiler version reported with verification submissions
    #[arg(long, env = "SOLC_VERSION", default_value = "v0.8.7+commit.e28d00a7")]
    pub solc_version: String,

    /// Default log level, overridable per-target through RUST_LOG
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl CommonArgs {
    /// Connection-level settings for [`crate::Driver::connect`].
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            rpc_url: self.rpc_url.clone(),
            private_key: self.private_key.clone(),
            confirmations: self.confirmations,
            tx_timeout: Duration::from_secs(self.tx_timeout_secs),
        }
    }
}

/// Initializes the global fmt subscriber with an env-overridable filter.
///
/// Sets the global default; call once per process.
pub fn init_tracing(default_level: &str) -> eyre::Result<()> {
    let directive: Directive = default_level
        .parse()
        .map_err(|e| eyre::eyre!("invalid log level {default_level}: {e}"))?;
    let filter = EnvFilter::builder().with_default_directive(directive).from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_config_carries_timeout_seconds() {
        let args = CommonArgs {
            rpc_url: "http://127.0.0.1:8545".into(),
            private_key: String::new(),
            confirmations: Some(2),
            tx_timeout_secs: 90,
            artifacts_dir: PathBuf::from("artifacts"),
            etherscan_api_key: None,
            solc_version: "v0.8.7+commit.e28d00a7".into(),
            log_level: "info".into(),
        };
        let cfg = args.driver_config();
        assert_eq!(cfg.tx_timeout, Duration::from_secs(90));
        assert_eq!(cfg.confirmations, Some(2));
    }
}
