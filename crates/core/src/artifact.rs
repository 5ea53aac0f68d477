//! Compiled-contract artifacts.
//!
//! Compilation is owned by an external toolchain; drivers only consume its
//! output. Both the hardhat artifact shape (`"bytecode": "0x..."`) and the
//! forge shape (`"bytecode": {"object": "0x..."}`) are accepted.

use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::{hex, Bytes};
use serde::Deserialize;

use crate::error::{DriverError, Result};

/// A compiled contract ready to deploy.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Contract name, from the artifact or the file stem.
    pub name: String,
    /// ABI as raw JSON; kept for explorer verification payloads.
    pub abi: serde_json::Value,
    /// Creation bytecode.
    pub bytecode: Bytes,
    /// File the artifact was loaded from.
    pub path: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    #[serde(default)]
    abi: serde_json::Value,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Plain(String),
    Object { object: String },
}

impl RawBytecode {
    fn hex(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Object { object } => object,
        }
    }
}

impl Artifact {
    /// Loads `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{name}.json"));
        let contents = fs::read_to_string(&path).map_err(|e| {
            DriverError::config(format!("cannot read artifact {}: {e}", path.display()))
        })?;
        Self::parse(&contents, name).map(|mut artifact| {
            artifact.path = path;
            artifact
        })
    }

    /// Parses artifact JSON; `fallback_name` is used when the artifact does
    /// not carry a contract name of its own.
    pub fn parse(contents: &str, fallback_name: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(contents).map_err(|e| {
            DriverError::config(format!("artifact for {fallback_name} is not valid JSON: {e}"))
        })?;

        let code = raw.bytecode.hex();
        let code = code.strip_prefix("0x").unwrap_or(code);
        if code.is_empty() {
            return Err(DriverError::config(format!(
                "artifact for {fallback_name} has empty bytecode; was the contract compiled?"
            )));
        }
        let bytecode = hex::decode(code)
            .map(Bytes::from)
            .map_err(|e| {
                DriverError::config(format!("artifact for {fallback_name} has bad bytecode: {e}"))
            })?;

        Ok(Self {
            name: raw.contract_name.unwrap_or_else(|| fallback_name.to_string()),
            abi: raw.abi,
            bytecode,
            path: PathBuf::new(),
        })
    }
}
