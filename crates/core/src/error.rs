//! Error taxonomy for the transaction drivers.

use alloy_primitives::TxHash;
use alloy_provider::{PendingTransactionError, WatchTxError};
use thiserror::Error;

/// Convenience alias used throughout the driver crates.
pub type Result<T, E = DriverError> = core::result::Result<T, E>;

/// Everything a scenario can fail with. Nothing is recovered locally; each
/// variant propagates to the binary boundary where it is logged and the
/// process exits non-zero.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The node or contract rejected a call, or a confirmed transaction
    /// reverted. Expected business failures (insufficient funds, over-spend
    /// of an allowance) surface here exactly like infrastructure failures.
    #[error("remote call failed: {0}")]
    RemoteCall(String),

    /// A required configuration value is missing or malformed.
    #[error("config error: {0}")]
    Config(String),

    /// The confirmation wait exceeded the environment's deadline.
    #[error("timed out waiting for {confirmations} confirmation(s) of {tx_hash}")]
    Timeout {
        /// Hash of the transaction that was being watched.
        tx_hash: TxHash,
        /// Confirmation count that was requested.
        confirmations: u64,
    },
}

impl DriverError {
    /// Remote rejection with a free-form context message.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteCall(msg.into())
    }

    /// Missing or malformed configuration.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Maps a pending-transaction failure to the taxonomy: the watcher's
    /// deadline becomes [`DriverError::Timeout`], everything else is a
    /// remote-call failure.
    pub(crate) fn from_pending(
        tx_hash: TxHash,
        confirmations: u64,
        err: PendingTransactionError,
    ) -> Self {
        match err {
            PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                Self::Timeout { tx_hash, confirmations }
            }
            other => Self::RemoteCall(format!("waiting for {tx_hash}: {other}")),
        }
    }
}

impl From<alloy_contract::Error> for DriverError {
    fn from(err: alloy_contract::Error) -> Self {
        Self::RemoteCall(err.to_string())
    }
}

impl From<alloy_transport::TransportError> for DriverError {
    fn from(err: alloy_transport::TransportError) -> Self {
        Self::RemoteCall(err.to_string())
    }
}

impl From<reqwest::Error> for DriverError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteCall(err.to_string())
    }
}
