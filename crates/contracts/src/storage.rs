use alloy_sol_types::sol;

sol!(
    #[sol(rpc)]
    contract SimpleStorage {
        function store(uint256 favoriteNumber) external;
        function retrieve() external view returns (uint256);
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    #[test]
    fn call_signatures() {
        assert_eq!(SimpleStorage::storeCall::SIGNATURE, "store(uint256)");
        assert_eq!(SimpleStorage::retrieveCall::SIGNATURE, "retrieve()");
    }

    #[test]
    fn store_calldata_roundtrip() {
        let call = SimpleStorage::storeCall { favoriteNumber: U256::from(7) };
        let encoded = call.abi_encode();
        let decoded = SimpleStorage::storeCall::abi_decode(&encoded).unwrap();
        assert_eq!(decoded.favoriteNumber, U256::from(7));
    }
}
