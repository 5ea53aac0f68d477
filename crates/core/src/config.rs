//! Chain profiles and driver configuration.
//!
//! All runtime behavior is controlled by environment variables surfaced
//! through the binaries' clap args; this module holds the static per-chain
//! tables the scripts consult (which feed to read, which coordinator to use,
//! how many confirmations to wait for) plus the constants the mock
//! deployments need on development chains.

use std::time::Duration;

use alloy_primitives::{address, b256, Address, B256};
use alloy_signer_local::PrivateKeySigner;

use crate::error::{DriverError, Result};

/// Chain ids treated as local development chains. Mocks are deployed there
/// instead of resolving live addresses, and explorer verification is skipped.
pub const DEVELOPMENT_CHAIN_IDS: [u64; 2] = [31337, 1337];

/// Decimals of the mock price feed deployed on development chains.
pub const MOCK_FEED_DECIMALS: u8 = 8;
/// Initial answer of the mock price feed: 2000 USD at 8 decimals.
pub const MOCK_FEED_INITIAL_ANSWER: i64 = 200_000_000_000;

/// Flat fee the VRF coordinator mock charges per request, in juels (0.25 LINK).
pub const VRF_MOCK_BASE_FEE: u64 = 250_000_000_000_000_000;
/// LINK per gas used by the coordinator mock's payment calculation.
pub const VRF_MOCK_GAS_PRICE_LINK: u64 = 1_000_000_000;
/// Amount a fresh mock subscription is funded with, in juels.
pub const VRF_SUBSCRIPTION_FUND_AMOUNT: u64 = 1_000_000_000_000_000_000;

/// Per-chain VRF lottery parameters.
#[derive(Debug, Clone, Copy)]
pub struct VrfProfile {
    /// VRF coordinator contract.
    pub coordinator: Address,
    /// Gas lane (key hash) the lottery requests randomness on.
    pub gas_lane: B256,
    /// Lottery entrance fee in wei.
    pub entrance_fee_wei: u128,
    /// Gas limit for the randomness callback.
    pub callback_gas_limit: u32,
    /// Upkeep interval in seconds.
    pub interval_secs: u64,
}

/// Per-chain lending-market addresses.
#[derive(Debug, Clone, Copy)]
pub struct LendingProfile {
    /// Wrapped native token.
    pub weth: Address,
    /// Borrowable stablecoin.
    pub dai: Address,
    /// Lending pool addresses provider; the pool itself is resolved through it.
    pub addresses_provider: Address,
    /// DAI/ETH price feed.
    pub dai_eth_price_feed: Address,
}

/// Static description of a supported chain.
#[derive(Debug, Clone, Copy)]
pub struct ChainProfile {
    /// Human-readable network name.
    pub name: &'static str,
    /// Chain id the profile applies to.
    pub chain_id: u64,
    /// Confirmations to wait for state-changing calls on this chain.
    pub block_confirmations: u64,
    /// ETH/USD feed, where one is deployed.
    pub eth_usd_price_feed: Option<Address>,
    /// Lottery parameters, where a coordinator is deployed.
    pub vrf: Option<VrfProfile>,
    /// Lending market, where one is deployed.
    pub lending: Option<LendingProfile>,
}

static SEPOLIA: ChainProfile = ChainProfile {
    name: "sepolia",
    chain_id: 11_155_111,
    block_confirmations: 6,
    eth_usd_price_feed: Some(address!("694AA1769357215DE4FAC081bf1f309aDC325306")),
    vrf: Some(VrfProfile {
        coordinator: address!("8103B0A8A00be2DDC778e6e7eaa21791Cd364625"),
        gas_lane: b256!("474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c"),
        entrance_fee_wei: 10_000_000_000_000_000, // 0.01 ether
        callback_gas_limit: 500_000,
        interval_secs: 30,
    }),
    lending: None,
};

static MAINNET: ChainProfile = ChainProfile {
    name: "mainnet",
    chain_id: 1,
    block_confirmations: 6,
    eth_usd_price_feed: Some(address!("5f4eC3Df9cbd43714FE2740f5E3616155c5b8419")),
    vrf: None,
    lending: Some(LendingProfile {
        weth: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        dai: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
        addresses_provider: address!("B53C1a33016B2DC2fF3653530bfF1848a515c8c5"),
        dai_eth_price_feed: address!("773616E4d11A78F511299002da57A0a94577F1f4"),
    }),
};

/// Looks up the static profile for a chain id.
pub fn profile(chain_id: u64) -> Option<&'static ChainProfile> {
    match chain_id {
        1 => Some(&MAINNET),
        11_155_111 => Some(&SEPOLIA),
        _ => None,
    }
}

/// Looks up a profile, failing with [`DriverError::Config`] for unknown chains.
pub fn require_profile(chain_id: u64) -> Result<&'static ChainProfile> {
    profile(chain_id)
        .ok_or_else(|| DriverError::config(format!("no chain profile for chain id {chain_id}")))
}

/// Whether mocks should be deployed instead of resolving live addresses.
pub fn is_development(chain_id: u64) -> bool {
    DEVELOPMENT_CHAIN_IDS.contains(&chain_id)
}

/// Confirmations to wait on `chain_id` when the caller did not override them.
pub fn default_confirmations(chain_id: u64) -> u64 {
    profile(chain_id).map_or(1, |p| p.block_confirmations)
}

/// Connection-level settings shared by every driver binary.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// JSON-RPC endpoint of the target node.
    pub rpc_url: String,
    /// Hex-encoded secp256k1 signing key, with or without a `0x` prefix.
    pub private_key: String,
    /// Confirmations to wait for each state-changing call; `None` defers to
    /// the chain profile (1 on unknown/dev chains).
    pub confirmations: Option<u64>,
    /// Deadline for each confirmation wait.
    pub tx_timeout: Duration,
}

impl DriverConfig {
    /// Parses the configured signing key.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        if self.private_key.is_empty() {
            return Err(DriverError::config("PRIVATE_KEY is not set"));
        }
        self.private_key
            .trim_start_matches("0x")
            .parse::<PrivateKeySigner>()
            .map_err(|e| DriverError::config(format!("PRIVATE_KEY is not a valid key: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_split_matches_chain_ids() {
        assert!(is_development(31337));
        assert!(!is_development(11_155_111));
        assert!(!is_development(1));
    }

    #[test]
    fn sepolia_profile_has_feed_and_vrf() {
        let p = require_profile(11_155_111).unwrap();
        assert_eq!(p.name, "sepolia");
        assert!(p.eth_usd_price_feed.is_some());
        let vrf = p.vrf.unwrap();
        assert_eq!(vrf.callback_gas_limit, 500_000);
        assert_eq!(vrf.interval_secs, 30);
    }

    #[test]
    fn unknown_chain_is_a_config_error() {
        let err = require_profile(424242).unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }

    #[test]
    fn bad_private_key_is_a_config_error() {
        let cfg = DriverConfig {
            rpc_url: "http://127.0.0.1:8545".into(),
            private_key: "not-hex".into(),
            confirmations: None,
            tx_timeout: Duration::from_secs(60),
        };
        assert!(matches!(cfg.signer().unwrap_err(), DriverError::Config(_)));
    }

    #[test]
    fn signer_accepts_prefixed_keys() {
        let cfg = DriverConfig {
            rpc_url: "http://127.0.0.1:8545".into(),
            private_key: "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .into(),
            confirmations: Some(1),
            tx_timeout: Duration::from_secs(60),
        };
        assert!(cfg.signer().is_ok());
    }
}
