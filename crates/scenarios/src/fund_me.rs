//! Crowdfunding flow: deploy (with a mock feed on dev chains), fund,
//! inspect the recorded funding, withdraw.

use alloy_primitives::{Address, Bytes, I256, U256};
use alloy_sol_types::SolConstructor;
use tracing::info;

use chainscript_contracts::fund_me::FundMe;
use chainscript_contracts::price_feed::MockV3Aggregator;
use chainscript_core::config::{
    self, MOCK_FEED_DECIMALS, MOCK_FEED_INITIAL_ANSWER,
};
use chainscript_core::driver::ensure_nonzero_value;
use chainscript_core::{DriverError, Result};

use crate::ScriptEnv;

/// Knobs for the crowdfunding flow.
#[derive(Debug, Clone)]
pub struct FundMeArgs {
    /// Wei sent in the funding step. Zero is rejected before submission.
    pub fund_value: U256,
}

impl Default for FundMeArgs {
    fn default() -> Self {
        // 0.1 ether
        Self { fund_value: U256::from(100_000_000_000_000_000u64) }
    }
}

/// What the flow observed.
#[derive(Debug, Clone)]
pub struct FundMeSummary {
    /// Deployed crowdfunding contract.
    pub address: Address,
    /// Price feed the contract was pointed at.
    pub price_feed: Address,
    /// Funding recorded for the driver account after the fund step.
    pub funded: U256,
    /// Contract balance after withdrawal; zero on a clean run.
    pub final_contract_balance: U256,
}

/// Runs the flow end to end.
pub async fn run(env: &ScriptEnv, args: &FundMeArgs) -> Result<FundMeSummary> {
    let driver = &env.driver;
    ensure_nonzero_value(args.fund_value, "FUND_VALUE_WEI")?;

    let price_feed = if driver.is_development() {
        info!(target: "fund_me", "development chain detected, deploying mock feed");
        let mock = env.artifact("MockV3Aggregator")?;
        let ctor = MockV3Aggregator::constructorCall {
            decimals: MOCK_FEED_DECIMALS,
            initialAnswer: I256::try_from(MOCK_FEED_INITIAL_ANSWER)
                .expect("mock feed answer fits in 256 bits"),
        }
        .abi_encode();
        let (address, _) = driver.deploy(&mock, ctor, 1).await?;
        let round = MockV3Aggregator::new(address, driver.provider())
            .latestRoundData()
            .call()
            .await?;
        info!(target: "fund_me", answer = %round.answer, "mock feed primed");
        address
    } else {
        config::require_profile(driver.chain_id())?
            .eth_usd_price_feed
            .ok_or_else(|| {
                DriverError::config(format!(
                    "no ETH/USD price feed configured for chain {}",
                    driver.chain_id()
                ))
            })?
    };

    let artifact = env.artifact("FundMe")?;
    let ctor = FundMe::constructorCall { priceFeed: price_feed }.abi_encode();
    let (address, _) = driver.deploy(&artifact, ctor.clone(), driver.confirmations()).await?;

    let fund_me = FundMe::new(address, driver.provider());
    let configured_feed = fund_me.priceFeed().call().await?;
    info!(target: "fund_me", feed = %configured_feed, "contract wired to price feed");

    info!(target: "fund_me", value = %args.fund_value, "funding");
    let pending = fund_me.fund().value(args.fund_value).send().await?;
    driver.confirm(pending, 1).await?;

    let funded = fund_me.addressToAmountFunded(driver.sender()).call().await?;
    let first_funder = fund_me.funders(U256::ZERO).call().await?;
    info!(target: "fund_me", funded = %funded, funder = %first_funder, "funding recorded");

    info!(target: "fund_me", "withdrawing");
    let pending = fund_me.withdraw().send().await?;
    driver.confirm(pending, 1).await?;

    let final_contract_balance = driver.balance(address).await?;
    info!(target: "fund_me", balance = %final_contract_balance, "contract drained");

    env.maybe_verify(&artifact, address, Bytes::from(ctor)).await;

    Ok(FundMeSummary { address, price_feed, funded, final_contract_balance })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fund_value_is_a_tenth_of_an_ether() {
        let args = FundMeArgs::default();
        assert_eq!(args.fund_value, U256::from(10).pow(U256::from(17)));
    }

    #[test]
    fn zero_fund_value_is_rejected() {
        let err = ensure_nonzero_value(U256::ZERO, "FUND_VALUE_WEI").unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }
}
