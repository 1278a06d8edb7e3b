use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use cw2::ContractVersion;

/// Queries answered by a voting power ledger. Only heights strictly
/// before the current block may be queried.
#[cw_serde]
#[derive(QueryResponses)]
pub enum Query {
    /// Returns the voting power of an address at a past height.
    #[returns(VotingPowerAtHeightResponse)]
    VotingPowerAtHeight { address: String, height: u64 },
    /// Returns the total voting power at a past height.
    #[returns(TotalPowerAtHeightResponse)]
    TotalPowerAtHeight { height: u64 },
}

#[cw_serde]
pub struct VotingPowerAtHeightResponse {
    pub power: Uint128,
    pub height: u64,
}

#[cw_serde]
pub struct TotalPowerAtHeightResponse {
    pub power: Uint128,
    pub height: u64,
}

#[cw_serde]
pub struct InfoResponse {
    pub info: ContractVersion,
}

pub fn get_voting_power(
    querier: &QuerierWrapper,
    ledger: &Addr,
    address: &Addr,
    height: u64,
) -> StdResult<Uint128> {
    let response: VotingPowerAtHeightResponse = querier.query_wasm_smart(
        ledger,
        &Query::VotingPowerAtHeight {
            address: address.to_string(),
            height,
        },
    )?;
    Ok(response.power)
}

pub fn get_total_power(querier: &QuerierWrapper, ledger: &Addr, height: u64) -> StdResult<Uint128> {
    let response: TotalPowerAtHeightResponse =
        querier.query_wasm_smart(ledger, &Query::TotalPowerAtHeight { height })?;
    Ok(response.power)
}
