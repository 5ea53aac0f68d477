use alloy_sol_types::sol;

sol!(
    /// Chainlink aggregator read surface. Only the round read the drivers
    /// consume is bound; the full interface carries more accessors.
    #[sol(rpc)]
    interface AggregatorV3Interface {
        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }

    /// Mock aggregator deployed on development chains in place of a live feed.
    #[sol(rpc)]
    contract MockV3Aggregator {
        constructor(uint8 decimals, int256 initialAnswer);

        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }
);
