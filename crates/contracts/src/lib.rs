//! Typed Solidity bindings for every contract the scenario drivers touch.
//!
//! Bindings are grouped the way the upstream projects group their contracts.
//! Deployment bytecode is not embedded here; drivers load compiled artifacts
//! at runtime and only the call/return/event codecs live in this crate.

/// Crowdfunding contract.
pub mod fund_me;
/// Lending pool, addresses provider, WETH, and the generic ERC-20 surface.
pub mod lending;
/// Chainlink aggregator interface and the local mock used on dev chains.
pub mod price_feed;
/// VRF-backed lottery and the coordinator mock.
pub mod raffle;
/// Minimal storage demo contract.
pub mod storage;
/// The workspace's ERC-20 token.
pub mod token;
