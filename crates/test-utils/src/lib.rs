//! Helpers for exercising the drivers against a local development node.

/// Deterministic pre-funded accounts.
pub mod accounts;
/// Tracing initialization for tests.
pub mod tracing;

pub use accounts::{TestAccount, TestAccounts, ALICE, BOB, DEPLOYER};
pub use tracing::init_test_tracing;

/// Default endpoint of a locally running anvil node.
pub const LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";
