//! Lottery deployment flow.
//!
//! On a development chain the VRF coordinator mock is deployed first and a
//! fresh subscription is created, funded, and wired to the lottery. On live
//! chains the coordinator and subscription come from the chain profile and
//! the environment.

use alloy_consensus::TxReceipt;
use alloy_primitives::aliases::U96;
use alloy_primitives::{b256, Address, Bytes, B256, U256};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::{SolConstructor, SolEvent};
use tracing::info;

use chainscript_contracts::raffle::{Raffle, VRFCoordinatorV2Mock};
use chainscript_core::config::{
    self, VRF_MOCK_BASE_FEE, VRF_MOCK_GAS_PRICE_LINK, VRF_SUBSCRIPTION_FUND_AMOUNT,
};
use chainscript_core::{DriverError, Result};

use crate::ScriptEnv;

/// Knobs for the lottery flow. Defaults mirror the development-chain
/// parameters; live chains read everything except the subscription id from
/// their profile.
#[derive(Debug, Clone)]
pub struct RaffleArgs {
    /// Existing subscription id for live chains; ignored on dev chains.
    pub subscription_id: Option<u64>,
    /// Juels to fund a freshly created mock subscription with.
    pub subscription_fund: u64,
    /// Entrance fee in wei.
    pub entrance_fee: U256,
    /// Gas lane (key hash) for randomness requests.
    pub gas_lane: B256,
    /// Gas limit for the randomness callback.
    pub callback_gas_limit: u32,
    /// Upkeep interval in seconds.
    pub interval_secs: u64,
}

impl Default for RaffleArgs {
    fn default() -> Self {
        Self {
            subscription_id: None,
            subscription_fund: VRF_SUBSCRIPTION_FUND_AMOUNT,
            // 0.01 ether
            entrance_fee: U256::from(10_000_000_000_000_000u64),
            gas_lane: b256!("474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c"),
            callback_gas_limit: 500_000,
            interval_secs: 30,
        }
    }
}

/// What the flow observed.
#[derive(Debug, Clone)]
pub struct RaffleSummary {
    /// Coordinator the lottery consumes randomness from.
    pub coordinator: Address,
    /// Subscription paying for randomness requests.
    pub subscription_id: u64,
    /// Deployed lottery address.
    pub address: Address,
    /// Entrance fee read back from the chain.
    pub entrance_fee: U256,
    /// Raffle state read back from the chain; 0 is open.
    pub state: u8,
}

/// Runs the flow end to end.
pub async fn run(env: &ScriptEnv, args: &RaffleArgs) -> Result<RaffleSummary> {
    let driver = &env.driver;

    let (coordinator, subscription_id, entrance_fee, gas_lane, interval) =
        if driver.is_development() {
            info!(target: "raffle", "development chain detected, deploying coordinator mock");
            let mock = env.artifact("VRFCoordinatorV2Mock")?;
            let ctor = VRFCoordinatorV2Mock::constructorCall {
                baseFee: U96::from(VRF_MOCK_BASE_FEE),
                gasPriceLink: U96::from(VRF_MOCK_GAS_PRICE_LINK),
            }
            .abi_encode();
            let (coordinator, _) = driver.deploy(&mock, ctor, 1).await?;

            let coordinator_mock = VRFCoordinatorV2Mock::new(coordinator, driver.provider());
            let pending = coordinator_mock.createSubscription().send().await?;
            let receipt = driver.confirm(pending, 1).await?;
            let subscription_id = subscription_id_from_logs(receipt.inner.logs())?;
            info!(target: "raffle", subscription_id, "subscription created");

            let pending = coordinator_mock
                .fundSubscription(subscription_id, U96::from(args.subscription_fund))
                .send()
                .await?;
            driver.confirm(pending, 1).await?;
            info!(target: "raffle", fund = args.subscription_fund, "subscription funded");

            (coordinator, subscription_id, args.entrance_fee, args.gas_lane, args.interval_secs)
        } else {
            let profile = config::require_profile(driver.chain_id())?;
            let vrf = profile.vrf.ok_or_else(|| {
                DriverError::config(format!(
                    "no VRF coordinator configured for chain {}",
                    driver.chain_id()
                ))
            })?;
            let subscription_id = args
                .subscription_id
                .filter(|id| *id != 0)
                .ok_or_else(|| {
                    DriverError::config(
                        "RAFFLE_SUBSCRIPTION_ID must be set to an existing subscription \
                         on live chains",
                    )
                })?;
            (
                vrf.coordinator,
                subscription_id,
                U256::from(vrf.entrance_fee_wei),
                vrf.gas_lane,
                vrf.interval_secs,
            )
        };

    let artifact = env.artifact("Raffle")?;
    let ctor = Raffle::constructorCall {
        vrfCoordinatorV2: coordinator,
        entranceFee: entrance_fee,
        gasLane: gas_lane,
        subscriptionId: subscription_id,
        callbackGasLimit: args.callback_gas_limit,
        interval: U256::from(interval),
    }
    .abi_encode();
    let (address, _) = driver.deploy(&artifact, ctor.clone(), driver.confirmations()).await?;

    if driver.is_development() {
        // a mock subscription only pays for registered consumers
        let coordinator_mock = VRFCoordinatorV2Mock::new(coordinator, driver.provider());
        let pending = coordinator_mock.addConsumer(subscription_id, address).send().await?;
        driver.confirm(pending, 1).await?;
        info!(target: "raffle", consumer = %address, "consumer added");
    } else {
        env.maybe_verify(&artifact, address, Bytes::from(ctor)).await;
    }

    let raffle = Raffle::new(address, driver.provider());
    let entrance_fee = raffle.getEntranceFee().call().await?;
    let state = raffle.getRaffleState().call().await?;
    info!(
        target: "raffle",
        address = %address,
        entrance_fee = %entrance_fee,
        state,
        "lottery deployed"
    );

    Ok(RaffleSummary { coordinator, subscription_id, address, entrance_fee, state })
}

/// Pulls the subscription id out of the coordinator's `SubscriptionCreated`
/// event on the creation receipt.
fn subscription_id_from_logs(logs: &[Log]) -> Result<u64> {
    for log in logs {
        let data = &log.inner.data;
        if data.topics().first()
            == Some(&VRFCoordinatorV2Mock::SubscriptionCreated::SIGNATURE_HASH)
        {
            let event = VRFCoordinatorV2Mock::SubscriptionCreated::decode_log_data(data)
                .map_err(|e| {
                    DriverError::remote(format!("undecodable SubscriptionCreated event: {e}"))
                })?;
            return Ok(event.subId);
        }
    }
    Err(DriverError::remote(
        "subscription creation confirmed without a SubscriptionCreated event",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_log(sub_id: u64) -> Log {
        let event = VRFCoordinatorV2Mock::SubscriptionCreated {
            subId: sub_id,
            owner: Address::ZERO,
        };
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn subscription_id_is_extracted_from_the_event() {
        let logs = vec![created_log(42)];
        assert_eq!(subscription_id_from_logs(&logs).unwrap(), 42);
    }

    #[test]
    fn missing_event_is_a_remote_call_error() {
        let err = subscription_id_from_logs(&[]).unwrap_err();
        assert!(matches!(err, DriverError::RemoteCall(_)));
    }

    #[test]
    fn unrelated_logs_are_skipped() {
        let unrelated = Log::default();
        let logs = vec![unrelated, created_log(7)];
        assert_eq!(subscription_id_from_logs(&logs).unwrap(), 7);
    }
}
