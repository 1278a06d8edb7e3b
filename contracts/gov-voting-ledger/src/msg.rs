use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

use crate::checkpoint::Checkpoint;

#[cw_serde]
pub struct InstantiateMsg {
    /// May update the ledger's config. Defaults to no owner.
    pub owner: Option<String>,
    /// The address allowed to move voting power.
    pub source: String,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Moves `amount` of balance from `from` to `to`. A missing `from`
    /// mints and a missing `to` burns. Only callable by the source.
    MoveVotingPower {
        from: Option<String>,
        to: Option<String>,
        amount: Uint128,
    },
    /// Delegates the sender's voting power to `delegatee`.
    Delegate { delegatee: String },
    /// Sets a new source. Only callable by the owner.
    UpdateConfig { source: String },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(gov_interface::voting::VotingPowerAtHeightResponse)]
    VotingPowerAtHeight { address: String, height: u64 },
    #[returns(gov_interface::voting::TotalPowerAtHeightResponse)]
    TotalPowerAtHeight { height: u64 },
    /// The voting power of an address after the latest checkpoint.
    #[returns(gov_interface::voting::VotingPowerAtHeightResponse)]
    CurrentVotingPower { address: String },
    #[returns(::cosmwasm_std::Addr)]
    Delegatee { address: String },
    #[returns(::cosmwasm_std::Uint128)]
    Balance { address: String },
    #[returns(CheckpointsResponse)]
    Checkpoints {
        address: String,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(crate::state::Config)]
    Config {},
    #[returns(gov_interface::voting::InfoResponse)]
    Info {},
}

#[cw_serde]
pub struct CheckpointsResponse {
    /// Number of checkpoints written for the address.
    pub count: u32,
    pub checkpoints: Vec<Checkpoint>,
}

#[cw_serde]
pub struct MigrateMsg {}
