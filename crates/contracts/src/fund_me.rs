use alloy_sol_types::sol;

sol!(
    #[sol(rpc)]
    contract FundMe {
        constructor(address priceFeed);

        function fund() external payable;
        function withdraw() external;
        function priceFeed() external view returns (address);
        function addressToAmountFunded(address funder) external view returns (uint256);
        function funders(uint256 index) external view returns (address);
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address};
    use alloy_sol_types::{SolCall, SolConstructor};

    #[test]
    fn call_signatures() {
        assert_eq!(FundMe::fundCall::SIGNATURE, "fund()");
        assert_eq!(FundMe::withdrawCall::SIGNATURE, "withdraw()");
        assert_eq!(
            FundMe::addressToAmountFundedCall::SIGNATURE,
            "addressToAmountFunded(address)"
        );
    }

    #[test]
    fn constructor_encodes_feed_address() {
        let feed = address!("694AA1769357215DE4FAC081bf1f309aDC325306");
        let encoded = FundMe::constructorCall { priceFeed: feed }.abi_encode();
        // single static argument: exactly one 32-byte word, address right-aligned
        assert_eq!(encoded.len(), 32);
        assert_eq!(Address::from_slice(&encoded[12..]), feed);
    }
}
