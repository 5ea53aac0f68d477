//! Driver primitives shared by the contract interaction scripts: a
//! wallet-backed sequential transaction driver, the error taxonomy, chain
//! profiles, artifact loading, and explorer verification.

/// Compiled-contract artifact loading.
pub mod artifact;
/// Shared clap args and tracing init for binaries.
pub mod cli;
/// Chain profiles, constants, and connection settings.
pub mod config;
/// The sequential transaction driver.
pub mod driver;
/// Error taxonomy.
pub mod error;
/// Block-explorer verification client.
pub mod explorer;

pub use artifact::Artifact;
pub use config::DriverConfig;
pub use driver::Driver;
pub use error::{DriverError, Result};
pub use explorer::{ExplorerClient, VerifyRequest};
