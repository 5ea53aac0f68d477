//! Deterministic test accounts with pre-funded balances.
//!
//! The keys are anvil's well-known accounts derived from the public test
//! mnemonic ("test test ... junk"); they hold funds on any freshly started
//! local node and must never be used anywhere else.

use alloy_primitives::{address, hex, Address, FixedBytes};
use alloy_signer_local::PrivateKeySigner;

/// A named account with a fixed, publicly known private key.
#[derive(Debug, Clone)]
pub struct TestAccount {
    /// Name for log output and lookups.
    pub name: &'static str,
    /// Account address.
    pub address: Address,
    /// Private key, hex without a `0x` prefix.
    pub private_key: &'static str,
}

impl TestAccount {
    /// Builds a signer for the account.
    pub fn signer(&self) -> PrivateKeySigner {
        let key_bytes = hex::decode(self.private_key).expect("test key is valid hex");
        let key: FixedBytes<32> = FixedBytes::from_slice(&key_bytes);
        PrivateKeySigner::from_bytes(&key).expect("test key is a valid secp256k1 key")
    }
}

/// First anvil account; used as the default caller in tests.
pub const ALICE: TestAccount = TestAccount {
    name: "Alice",
    address: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
    private_key: "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
};

/// Second anvil account; counterparty in transfer tests.
pub const BOB: TestAccount = TestAccount {
    name: "Bob",
    address: address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
    private_key: "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
};

/// Fourth anvil account; reserved for contract deployments.
pub const DEPLOYER: TestAccount = TestAccount {
    name: "Deployer",
    address: address!("90F79bf6EB2c4f870365E785982E1f101E93b906"),
    private_key: "7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
};

/// The full set of accounts a test can draw from.
#[derive(Debug, Clone)]
pub struct TestAccounts {
    /// Default caller.
    pub alice: TestAccount,
    /// Counterparty.
    pub bob: TestAccount,
    /// Contract deployer.
    pub deployer: TestAccount,
}

impl TestAccounts {
    /// All accounts with their well-known keys.
    pub fn new() -> Self {
        Self { alice: ALICE, bob: BOB, deployer: DEPLOYER }
    }

    /// Looks an account up by its lowercase name.
    pub fn get(&self, name: &str) -> Option<&TestAccount> {
        match name {
            "alice" => Some(&self.alice),
            "bob" => Some(&self.bob),
            "deployer" => Some(&self.deployer),
            _ => None,
        }
    }
}

impl Default for TestAccounts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signers_match_their_addresses() {
        for account in [ALICE, BOB, DEPLOYER] {
            assert_eq!(account.signer().address(), account.address, "{}", account.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let accounts = TestAccounts::new();
        assert_eq!(accounts.get("bob").unwrap().address, BOB.address);
        assert!(accounts.get("mallory").is_none());
    }
}
