alloy::sol! {
    #[sol(rpc)]
    contract IFaucet {
        function mintAll() external;
        function lastMintTime(address user) external view returns (uint256);
    }
}
