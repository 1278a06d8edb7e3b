use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Decimal, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub ledger: String,
    pub timelock: String,
    pub guardian: Option<String>,
    pub voting_delay: u64,
    pub voting_period: u64,
    pub proposal_threshold: Uint128,
    pub quorum_fraction: Decimal,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Creates a proposal. The four lists describe one timelock
    /// action per index and must have the same length.
    Propose {
        targets: Vec<String>,
        values: Vec<Uint128>,
        signatures: Vec<String>,
        calldatas: Vec<Binary>,
        description: String,
    },
    /// Votes for (`support = true`) or against an active proposal.
    CastVote { proposal_id: u64, support: bool },
    /// Queues a succeeded proposal's actions in the timelock.
    Queue { proposal_id: u64 },
    /// Executes a queued proposal's actions through the timelock.
    Execute { proposal_id: u64 },
    /// Cancels an unfinished proposal, removing its actions from the
    /// timelock if they were queued.
    Cancel { proposal_id: u64 },
    /// Accepts a pending transfer of timelock admin rights to this
    /// contract. Guardian only.
    AcceptTimelockAdmin {},
    /// Removes the guardian. Guardian only.
    Abdicate {},
    /// Updates voting parameters for future proposals. Only callable
    /// by the timelock.
    UpdateConfig {
        voting_delay: u64,
        voting_period: u64,
        proposal_threshold: Uint128,
        quorum_fraction: Decimal,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Returns the current state of a proposal.
    #[returns(crate::proposal::ProposalState)]
    State { proposal_id: u64 },
    #[returns(crate::query::ProposalResponse)]
    Proposal { proposal_id: u64 },
    /// Lists proposals in ascending order of id.
    #[returns(crate::query::ProposalListResponse)]
    ListProposals {
        start_after: Option<u64>,
        limit: Option<u64>,
    },
    /// Lists proposals in descending order of id.
    #[returns(crate::query::ProposalListResponse)]
    ReverseProposals {
        start_before: Option<u64>,
        limit: Option<u64>,
    },
    /// Number of proposals created.
    #[returns(::std::primitive::u64)]
    ProposalCount {},
    #[returns(crate::query::ActionsResponse)]
    Actions { proposal_id: u64 },
    /// A voter's receipt. Voters that have not voted get an empty
    /// receipt.
    #[returns(crate::state::Receipt)]
    Receipt { proposal_id: u64, voter: String },
    #[returns(crate::query::ReceiptListResponse)]
    ListReceipts {
        proposal_id: u64,
        start_after: Option<String>,
        limit: Option<u64>,
    },
    /// Id of the proposer's most recent proposal, zero if none.
    #[returns(::std::primitive::u64)]
    LatestProposalId { proposer: String },
    #[returns(gov_interface::voting::VotingPowerAtHeightResponse)]
    VotingPowerAtHeight { address: String, height: u64 },
    #[returns(gov_interface::voting::TotalPowerAtHeightResponse)]
    TotalPowerAtHeight { height: u64 },
    #[returns(gov_interface::voting::InfoResponse)]
    Info {},
}

#[cw_serde]
pub struct MigrateMsg {}
