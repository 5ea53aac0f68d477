//! Sequential transaction driver.
//!
//! One driver per script invocation: a wallet-backed provider plus the
//! confirmation policy. Every state-changing call goes through
//! [`Driver::confirm`], which waits for the requested number of
//! confirmations under the environment's deadline and fails the whole run on
//! revert or timeout. There is no retry and no recovery; callers abort on the
//! first error.

use std::future::Future;
use std::time::Duration;

use alloy_network::{Ethereum, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use tracing::{debug, info};

use chainscript_contracts::lending::IERC20;

use crate::artifact::Artifact;
use crate::config::{self, DriverConfig};
use crate::error::{DriverError, Result};

/// Wallet-backed connection to a single chain.
#[derive(Debug, Clone)]
pub struct Driver {
    provider: DynProvider,
    sender: Address,
    chain_id: u64,
    confirmations: u64,
    tx_timeout: Duration,
}

impl Driver {
    /// Connects to the configured endpoint with the configured signing key
    /// and captures the chain id once for the life of the driver.
    pub async fn connect(config: &DriverConfig) -> Result<Self> {
        let signer = config.signer()?;
        let sender = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(&config.rpc_url)
            .await?
            .erased();
        let chain_id = provider.get_chain_id().await?;
        let confirmations = config
            .confirmations
            .unwrap_or_else(|| config::default_confirmations(chain_id));

        info!(target: "driver", chain_id, sender = %sender, "connected");

        Ok(Self { provider, sender, chain_id, confirmations, tx_timeout: config.tx_timeout })
    }

    /// A cloneable handle to the underlying provider, for contract bindings.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    /// The driver account used as caller identity.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Chain id captured at connect time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Confirmations applied to writes unless a call site overrides them.
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    /// Whether the connected chain is a local development chain.
    pub fn is_development(&self) -> bool {
        config::is_development(self.chain_id)
    }

    /// Current block height.
    pub async fn block_number(&self) -> Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    /// Native balance of an account.
    pub async fn balance(&self, account: Address) -> Result<U256> {
        Ok(self.provider.get_balance(account).await?)
    }

    /// Waits for `confirmations` confirmations of a submitted transaction
    /// under the driver's deadline, then checks the receipt for revert.
    pub async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
        confirmations: u64,
    ) -> Result<TransactionReceipt> {
        let tx_hash = *pending.tx_hash();
        debug!(target: "driver", tx_hash = %tx_hash, confirmations, "transaction submitted");

        let receipt = pending
            .with_required_confirmations(confirmations)
            .with_timeout(Some(self.tx_timeout))
            .get_receipt()
            .await
            .map_err(|e| DriverError::from_pending(tx_hash, confirmations, e))?;

        if !receipt.status() {
            return Err(DriverError::remote(format!("transaction reverted: {tx_hash}")));
        }

        debug!(target: "driver", tx_hash = %tx_hash, block = ?receipt.block_number(), "confirmed");
        Ok(receipt)
    }

    /// Submits a CREATE transaction from a compiled artifact plus ABI-encoded
    /// constructor args and returns the deployed address with its receipt.
    pub async fn deploy(
        &self,
        artifact: &Artifact,
        constructor_args: Vec<u8>,
        confirmations: u64,
    ) -> Result<(Address, TransactionReceipt)> {
        let mut code = artifact.bytecode.to_vec();
        code.extend_from_slice(&constructor_args);

        info!(target: "driver", contract = %artifact.name, "deploying");
        let tx = TransactionRequest::default().with_deploy_code(Bytes::from(code));
        let pending = self.provider.send_transaction(tx).await?;
        let receipt = self.confirm(pending, confirmations).await?;

        let address = receipt.contract_address().ok_or_else(|| {
            DriverError::remote(format!(
                "deployment of {} confirmed without a contract address",
                artifact.name
            ))
        })?;
        info!(target: "driver", contract = %artifact.name, address = %address, "deployed");
        Ok((address, receipt))
    }

    /// Approves `spender` for exactly `amount` of `token`, waits one
    /// confirmation, then runs the dependent action. The two legs are not
    /// atomic: if the action fails the approval stays in effect, which is
    /// acceptable since an allowance is an idempotent upper bound.
    pub async fn approve_then_act<F, Fut, T>(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        action: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let erc20 = IERC20::new(token, self.provider());
        let pending = erc20.approve(spender, amount).send().await?;
        let receipt = self.confirm(pending, 1).await?;
        info!(
            target: "driver",
            token = %token,
            spender = %spender,
            amount = %amount,
            tx_hash = %receipt.transaction_hash(),
            "approval confirmed"
        );
        action().await
    }
}

/// Rejects zero-valued funding up front with a descriptive error instead of
/// letting it reach the chain as a no-op.
pub fn ensure_nonzero_value(amount: U256, what: &str) -> Result<()> {
    if amount.is_zero() {
        return Err(DriverError::config(format!("{what} must be a nonzero amount of wei")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_is_rejected_with_context() {
        let err = ensure_nonzero_value(U256::ZERO, "FUND_VALUE_WEI").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("FUND_VALUE_WEI"));
        assert!(msg.contains("nonzero"));
    }

    #[test]
    fn nonzero_value_passes() {
        assert!(ensure_nonzero_value(U256::from(1), "FUND_VALUE_WEI").is_ok());
    }
}
