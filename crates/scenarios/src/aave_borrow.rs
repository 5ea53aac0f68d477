//! Lending flow: wrap native currency, deposit it as collateral, borrow DAI
//! against it at a safety margin, then repay.
//!
//! Interest accrues between the borrow and the repay, so a small residual
//! debt is expected at the end of a run; it is logged, not treated as a
//! failure.

use alloy_primitives::{Address, I256, U256};
use alloy_provider::DynProvider;
use tracing::info;

use chainscript_contracts::lending::{
    IERC20, ILendingPool, ILendingPoolAddressesProvider, IWeth,
};
use chainscript_contracts::price_feed::AggregatorV3Interface;
use chainscript_core::config;
use chainscript_core::driver::ensure_nonzero_value;
use chainscript_core::{DriverError, Result};

use crate::ScriptEnv;

/// Knobs for the lending flow.
#[derive(Debug, Clone)]
pub struct AaveArgs {
    /// Wei wrapped and deposited as collateral.
    pub deposit_amount: U256,
    /// Share of the available borrows actually borrowed, to stay clear of
    /// the liquidation limit.
    pub borrow_percent: u64,
}

impl Default for AaveArgs {
    fn default() -> Self {
        // 0.02 ether
        Self { deposit_amount: U256::from(20_000_000_000_000_000u64), borrow_percent: 95 }
    }
}

/// What the flow observed.
#[derive(Debug, Clone)]
pub struct AaveSummary {
    /// Resolved lending pool address.
    pub lending_pool: Address,
    /// Collateral deposited, in wei of WETH.
    pub deposited: U256,
    /// DAI borrowed, in wei.
    pub borrowed_dai: U256,
    /// ETH-denominated debt remaining after repay (accrued interest).
    pub remaining_debt_eth: U256,
}

type LendingPool = ILendingPool::ILendingPoolInstance<DynProvider>;

/// Runs the flow end to end.
pub async fn run(env: &ScriptEnv, args: &AaveArgs) -> Result<AaveSummary> {
    let driver = &env.driver;
    ensure_nonzero_value(args.deposit_amount, "WETH_AMOUNT_WEI")?;

    let market = config::require_profile(driver.chain_id())?.lending.ok_or_else(|| {
        DriverError::config(format!(
            "no lending market configured for chain {}",
            driver.chain_id()
        ))
    })?;

    // wrap native currency so the pool can pull it
    let weth = IWeth::new(market.weth, driver.provider());
    let pending = weth.deposit().value(args.deposit_amount).send().await?;
    driver.confirm(pending, 1).await?;
    let weth_balance = weth.balanceOf(driver.sender()).call().await?;
    info!(target: "aave", balance = %weth_balance, "wrapped");

    // the addresses provider points at the current pool deployment
    let addresses_provider =
        ILendingPoolAddressesProvider::new(market.addresses_provider, driver.provider());
    let pool_address = addresses_provider.getLendingPool().call().await?;
    let pool = ILendingPool::new(pool_address, driver.provider());
    info!(target: "aave", pool = %pool_address, "lending pool resolved");

    driver
        .approve_then_act(market.weth, pool_address, args.deposit_amount, || async {
            info!(target: "aave", amount = %args.deposit_amount, "depositing");
            let pending = pool
                .deposit(market.weth, args.deposit_amount, driver.sender(), 0)
                .send()
                .await?;
            driver.confirm(pending, 1).await?;
            Ok::<(), DriverError>(())
        })
        .await?;
    info!(target: "aave", "deposited");

    let account = user_account_data(&pool, driver.sender()).await?;

    let feed = AggregatorV3Interface::new(market.dai_eth_price_feed, driver.provider());
    let round = feed.latestRoundData().call().await?;
    if round.answer <= I256::ZERO {
        return Err(DriverError::remote("price feed returned a non-positive price"));
    }
    let dai_price = round.answer.into_raw();
    info!(target: "aave", price = %dai_price, "DAI/ETH price");

    let borrow_amount =
        dai_to_borrow(account.availableBorrowsETH, dai_price, args.borrow_percent)?;
    info!(target: "aave", amount = %borrow_amount, "borrowing DAI");

    // stable rate mode (1), no referral
    let pending = pool
        .borrow(market.dai, borrow_amount, U256::from(1), 0, driver.sender())
        .send()
        .await?;
    driver.confirm(pending, 1).await?;
    let dai = IERC20::new(market.dai, driver.provider());
    let dai_balance = dai.balanceOf(driver.sender()).call().await?;
    info!(target: "aave", balance = %dai_balance, "DAI in hand");
    user_account_data(&pool, driver.sender()).await?;

    driver
        .approve_then_act(market.dai, pool_address, borrow_amount, || async {
            info!(target: "aave", amount = %borrow_amount, "repaying");
            let pending = pool
                .repay(market.dai, borrow_amount, U256::from(1), driver.sender())
                .send()
                .await?;
            driver.confirm(pending, 1).await?;
            Ok::<(), DriverError>(())
        })
        .await?;
    info!(target: "aave", "repaid");

    let final_account = user_account_data(&pool, driver.sender()).await?;

    Ok(AaveSummary {
        lending_pool: pool_address,
        deposited: args.deposit_amount,
        borrowed_dai: borrow_amount,
        remaining_debt_eth: final_account.totalDebtETH,
    })
}

/// Reads and logs the caller's position; the ETH-denominated triple drives
/// the borrow sizing.
async fn user_account_data(
    pool: &LendingPool,
    user: Address,
) -> Result<ILendingPool::getUserAccountDataReturn> {
    let data = pool.getUserAccountData(user).call().await?;
    info!(
        target: "aave",
        collateral_eth = %data.totalCollateralETH,
        debt_eth = %data.totalDebtETH,
        available_borrows_eth = %data.availableBorrowsETH,
        "account data"
    );
    Ok(data)
}

/// Wei of DAI worth `percent` percent of `available_borrows_eth`, at
/// `dai_price_wei` wei of ETH per whole DAI.
fn dai_to_borrow(
    available_borrows_eth: U256,
    dai_price_wei: U256,
    percent: u64,
) -> Result<U256> {
    if dai_price_wei.is_zero() {
        return Err(DriverError::remote("price feed returned a zero price"));
    }
    let headroom = available_borrows_eth * U256::from(percent) / U256::from(100);
    Ok(headroom * U256::from(10).pow(U256::from(18)) / dai_price_wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_amount_scales_with_price_and_margin() {
        // 1 ETH of headroom, 1 DAI = 0.0005 ETH, 95% margin: 1900 DAI
        let available = U256::from(10).pow(U256::from(18));
        let price = U256::from(500_000_000_000_000u64);
        let amount = dai_to_borrow(available, price, 95).unwrap();
        assert_eq!(amount, U256::from(1900) * U256::from(10).pow(U256::from(18)));
    }

    #[test]
    fn full_margin_borrows_everything_available() {
        let available = U256::from(2) * U256::from(10).pow(U256::from(18));
        let price = U256::from(10).pow(U256::from(18));
        assert_eq!(dai_to_borrow(available, price, 100).unwrap(), available);
    }

    #[test]
    fn zero_price_is_rejected() {
        let err = dai_to_borrow(U256::from(1), U256::ZERO, 95).unwrap_err();
        assert!(matches!(err, DriverError::RemoteCall(_)));
    }
}
