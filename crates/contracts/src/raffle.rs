use alloy_sol_types::sol;

sol!(
    #[sol(rpc)]
    contract Raffle {
        event RaffleEnter(address indexed player);
        event RequestedRaffleWinner(uint256 indexed requestId);
        event WinnerPicked(address indexed winner);

        constructor(
            address vrfCoordinatorV2,
            uint256 entranceFee,
            bytes32 gasLane,
            uint64 subscriptionId,
            uint32 callbackGasLimit,
            uint256 interval
        );

        function enterRaffle() external payable;
        function checkUpkeep(bytes calldata checkData)
            external
            returns (bool upkeepNeeded, bytes performData);
        function performUpkeep(bytes calldata performData) external;
        function getEntranceFee() external view returns (uint256);
        function getRaffleState() external view returns (uint8);
        function getNumberOfPlayers() external view returns (uint256);
        function getPlayer(uint256 index) external view returns (address);
        function getRecentWinner() external view returns (address);
        function getInterval() external view returns (uint256);
        function getLastTimeStamp() external view returns (uint256);
    }

    /// Coordinator mock deployed on development chains so the lottery can be
    /// exercised without a live randomness subscription.
    #[sol(rpc)]
    contract VRFCoordinatorV2Mock {
        event SubscriptionCreated(uint64 indexed subId, address owner);

        constructor(uint96 baseFee, uint96 gasPriceLink);

        function createSubscription() external returns (uint64 subId);
        function fundSubscription(uint64 subId, uint96 amount) external;
        function addConsumer(uint64 subId, address consumer) external;
        function fulfillRandomWords(uint256 requestId, address consumer) external;
    }
);
