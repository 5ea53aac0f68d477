//! ERC-20 deployment flow: deploy the token, read its metadata back.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolConstructor;
use tracing::info;

use chainscript_contracts::token::FocusToken;
use chainscript_core::Result;

use crate::ScriptEnv;

/// Knobs for the token flow.
#[derive(Debug, Clone)]
pub struct TokenArgs {
    /// Total supply minted to the deployer, in the token's smallest unit.
    pub initial_supply: U256,
}

impl Default for TokenArgs {
    fn default() -> Self {
        // 1e18, one whole token at 18 decimals
        Self { initial_supply: U256::from(1_000_000_000_000_000_000u64) }
    }
}

/// What the flow observed.
#[derive(Debug, Clone)]
pub struct TokenSummary {
    /// Deployed token address.
    pub address: Address,
    /// Token name read back from the chain.
    pub name: String,
    /// Token symbol read back from the chain.
    pub symbol: String,
    /// Total supply read back from the chain.
    pub total_supply: U256,
    /// Deployer balance; the whole supply on a fresh deployment.
    pub deployer_balance: U256,
}

/// Deploys the token and reads its metadata.
pub async fn run(env: &ScriptEnv, args: &TokenArgs) -> Result<TokenSummary> {
    let driver = &env.driver;

    let artifact = env.artifact("FocusToken")?;
    let ctor = FocusToken::constructorCall { initialSupply: args.initial_supply }.abi_encode();
    let (address, _) = driver.deploy(&artifact, ctor.clone(), driver.confirmations()).await?;

    let token = FocusToken::new(address, driver.provider());
    let name = token.name().call().await?;
    let symbol = token.symbol().call().await?;
    let decimals = token.decimals().call().await?;
    let total_supply = token.totalSupply().call().await?;
    let deployer_balance = token.balanceOf(driver.sender()).call().await?;

    info!(
        target: "token",
        address = %address,
        name = %name,
        symbol = %symbol,
        decimals,
        total_supply = %total_supply,
        "token deployed"
    );

    env.maybe_verify(&artifact, address, Bytes::from(ctor)).await;

    Ok(TokenSummary { address, name, symbol, total_supply, deployer_balance })
}
