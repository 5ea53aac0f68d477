use alloy_sol_types::sol;

sol!(
    #[sol(rpc)]
    contract FocusToken {
        event Transfer(address indexed from, address indexed to, uint256 value);

        constructor(uint256 initialSupply);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
    }
);
