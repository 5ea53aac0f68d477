//! End-to-end runs against a locally running development node.
//!
//! These tests need `anvil` listening on 127.0.0.1:8545 and compiled
//! artifacts under `ARTIFACTS_DIR` (default `artifacts/`), so they are
//! ignored by default. Run them with `cargo test -- --ignored`.

use std::path::PathBuf;
use std::time::Duration;

use alloy_consensus::TxReceipt;
use alloy_primitives::{Bytes, U256};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use chainscript_contracts::raffle::{Raffle, VRFCoordinatorV2Mock};
use chainscript_contracts::token::FocusToken;
use chainscript_core::{Driver, DriverConfig, DriverError};
use chainscript_scenarios::{aave_borrow, fund_me, raffle, simple_storage, token, ScriptEnv};
use chainscript_test_utils::{init_test_tracing, ALICE, BOB, LOCAL_RPC_URL};

fn find_event<E: SolEvent>(logs: &[Log]) -> Option<E> {
    logs.iter().find_map(|log| {
        let data = &log.inner.data;
        (data.topics().first() == Some(&E::SIGNATURE_HASH))
            .then(|| E::decode_log_data(data).ok())
            .flatten()
    })
}

fn driver_config(private_key: &str) -> DriverConfig {
    DriverConfig {
        rpc_url: LOCAL_RPC_URL.into(),
        private_key: private_key.into(),
        confirmations: Some(1),
        tx_timeout: Duration::from_secs(30),
    }
}

async fn script_env() -> eyre::Result<ScriptEnv> {
    init_test_tracing();
    let driver = Driver::connect(&driver_config(ALICE.private_key)).await?;
    let artifacts_dir = std::env::var("ARTIFACTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("artifacts"));
    Ok(ScriptEnv {
        driver,
        artifacts_dir,
        etherscan_api_key: None,
        solc_version: "v0.8.7+commit.e28d00a7".into(),
    })
}

// Requires a running anvil node
#[tokio::test]
#[ignore]
async fn storage_flow_updates_the_value() -> eyre::Result<()> {
    let env = script_env().await?;
    let args = simple_storage::StorageArgs { store_value: U256::from(7) };

    let summary = simple_storage::run(&env, &args).await?;

    assert_eq!(summary.initial_value, U256::ZERO);
    assert_eq!(summary.updated_value, U256::from(7));
    Ok(())
}

// Requires a running anvil node
#[tokio::test]
#[ignore]
async fn fund_me_flow_drains_the_contract() -> eyre::Result<()> {
    let env = script_env().await?;
    let fund_value = U256::from(100_000_000_000_000_000u64);

    let summary = fund_me::run(&env, &fund_me::FundMeArgs { fund_value }).await?;

    assert_eq!(summary.funded, fund_value);
    assert_eq!(summary.final_contract_balance, U256::ZERO);
    Ok(())
}

// Requires a running anvil node
#[tokio::test]
#[ignore]
async fn token_flow_mints_the_whole_supply_to_the_deployer() -> eyre::Result<()> {
    let env = script_env().await?;
    let initial_supply = U256::from(10).pow(U256::from(18));

    let summary = token::run(&env, &token::TokenArgs { initial_supply }).await?;

    assert_eq!(summary.total_supply, initial_supply);
    assert_eq!(summary.deployer_balance, initial_supply);
    Ok(())
}

// Requires a running anvil node. Same initial state, same sequence, same
// outcome: two runs from fresh deployments observe identical values.
#[tokio::test]
#[ignore]
async fn token_flow_is_deterministic_across_runs() -> eyre::Result<()> {
    let env = script_env().await?;
    let args = token::TokenArgs { initial_supply: U256::from(5_000u64) };

    let first = token::run(&env, &args).await?;
    let second = token::run(&env, &args).await?;

    assert_eq!(first.total_supply, second.total_supply);
    assert_eq!(first.deployer_balance, second.deployer_balance);
    assert_eq!(first.name, second.name);
    Ok(())
}

// Requires a running anvil node
#[tokio::test]
#[ignore]
async fn raffle_flow_wires_the_mock_coordinator() -> eyre::Result<()> {
    let env = script_env().await?;
    let args = raffle::RaffleArgs::default();

    let summary = raffle::run(&env, &args).await?;

    assert!(summary.subscription_id > 0);
    assert_eq!(summary.entrance_fee, args.entrance_fee);
    assert_eq!(summary.state, 0, "raffle should be open after deployment");
    Ok(())
}

// Requires a running anvil node. Spending more than the approved amount must
// surface as a remote rejection, not succeed quietly.
#[tokio::test]
#[ignore]
async fn overspending_an_allowance_is_rejected() -> eyre::Result<()> {
    let env = script_env().await?;
    let initial_supply = U256::from(1_000u64);
    let summary = token::run(&env, &token::TokenArgs { initial_supply }).await?;

    let approved = U256::from(100u64);
    let alice_token = FocusToken::new(summary.address, env.driver.provider());
    let pending = alice_token.approve(BOB.address, approved).send().await?;
    env.driver.confirm(pending, 1).await?;

    let bob = Driver::connect(&driver_config(BOB.private_key)).await?;
    let bob_token = FocusToken::new(summary.address, bob.provider());

    // within the allowance: succeeds and spends it down to zero
    let pending = bob_token
        .transferFrom(ALICE.address, BOB.address, approved)
        .send()
        .await?;
    bob.confirm(pending, 1).await?;
    let remaining = alice_token.allowance(ALICE.address, BOB.address).call().await?;
    assert_eq!(remaining, U256::ZERO);

    // allowance is spent; any further transfer must be rejected
    let result = bob_token
        .transferFrom(ALICE.address, BOB.address, U256::from(1u64))
        .send()
        .await;
    let err: DriverError = result.expect_err("overspend should be rejected").into();
    assert!(matches!(err, DriverError::RemoteCall(_)));

    // bob can still move what he holds outright
    let pending = bob_token.transfer(ALICE.address, approved).send().await?;
    let receipt = bob.confirm(pending, 1).await?;
    let transferred = find_event::<FocusToken::Transfer>(receipt.inner.logs())
        .expect("transfer emits Transfer");
    assert_eq!(transferred.value, approved);
    assert_eq!(bob_token.balanceOf(BOB.address).call().await?, U256::ZERO);
    Ok(())
}

// Requires a running anvil node. Full lottery round: enter, run upkeep once
// the interval has elapsed, feed the randomness back through the mock, and
// check the winner.
#[tokio::test]
#[ignore]
async fn raffle_picks_a_winner_after_upkeep() -> eyre::Result<()> {
    let env = script_env().await?;
    let args = raffle::RaffleArgs { interval_secs: 1, ..Default::default() };
    let summary = raffle::run(&env, &args).await?;

    let lottery = Raffle::new(summary.address, env.driver.provider());
    assert_eq!(lottery.getInterval().call().await?, U256::from(1));
    assert!(lottery.getLastTimeStamp().call().await? > U256::ZERO);

    let pending = lottery.enterRaffle().value(args.entrance_fee).send().await?;
    let receipt = env.driver.confirm(pending, 1).await?;
    let entered = find_event::<Raffle::RaffleEnter>(receipt.inner.logs())
        .expect("entering emits RaffleEnter");
    assert_eq!(entered.player, ALICE.address);
    assert_eq!(lottery.getNumberOfPlayers().call().await?, U256::from(1));
    assert_eq!(lottery.getPlayer(U256::ZERO).call().await?, ALICE.address);

    // let the upkeep interval elapse before asking for upkeep
    tokio::time::sleep(Duration::from_secs(2)).await;
    let upkeep = lottery.checkUpkeep(Bytes::new()).call().await?;
    assert!(upkeep.upkeepNeeded);

    let pending = lottery.performUpkeep(Bytes::new()).send().await?;
    let receipt = env.driver.confirm(pending, 1).await?;
    let requested = find_event::<Raffle::RequestedRaffleWinner>(receipt.inner.logs())
        .expect("upkeep emits RequestedRaffleWinner");

    let coordinator = VRFCoordinatorV2Mock::new(summary.coordinator, env.driver.provider());
    let pending = coordinator
        .fulfillRandomWords(requested.requestId, summary.address)
        .send()
        .await?;
    let receipt = env.driver.confirm(pending, 1).await?;
    let winner = find_event::<Raffle::WinnerPicked>(receipt.inner.logs())
        .expect("fulfillment emits WinnerPicked");

    assert_eq!(winner.winner, ALICE.address, "sole player wins");
    assert_eq!(lottery.getRecentWinner().call().await?, ALICE.address);
    assert_eq!(lottery.getRaffleState().call().await?, 0, "raffle reopens");
    assert_eq!(lottery.getNumberOfPlayers().call().await?, U256::ZERO);
    Ok(())
}

// Requires anvil forking mainnet: `anvil --fork-url <mainnet rpc>`
#[tokio::test]
#[ignore]
async fn aave_flow_repays_the_borrow() -> eyre::Result<()> {
    let env = script_env().await?;
    let args = aave_borrow::AaveArgs::default();

    let summary = aave_borrow::run(&env, &args).await?;

    assert!(summary.borrowed_dai > U256::ZERO);
    // interest accrued between borrow and repay leaves dust, nothing more
    assert!(summary.remaining_debt_eth < summary.deposited / U256::from(100));
    Ok(())
}

// Requires anvil started with `--block-time 1` so blocks advance without
// new transactions; a wait for k confirmations must span at least k blocks.
#[tokio::test]
#[ignore]
async fn confirmation_wait_spans_the_requested_blocks() -> eyre::Result<()> {
    let env = script_env().await?;
    let artifact = env.artifact("SimpleStorage")?;

    let before = env.driver.block_number().await?;
    let confirmations = 3;
    env.driver.deploy(&artifact, Vec::new(), confirmations).await?;
    let after = env.driver.block_number().await?;

    assert!(
        after >= before + confirmations,
        "waited for {confirmations} confirmations but only {} blocks elapsed",
        after - before
    );
    Ok(())
}
