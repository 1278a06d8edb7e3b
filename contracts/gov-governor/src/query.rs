use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::proposal::{Proposal, ProposalState};
use crate::state::Receipt;

/// A proposal along with its state at the time of the query.
#[cw_serde]
pub struct ProposalResponse {
    pub id: u64,
    pub state: ProposalState,
    pub proposal: Proposal,
}

/// A list of proposals returned by `ListProposals` and
/// `ReverseProposals`.
#[cw_serde]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalResponse>,
}

/// A proposal's actions as parallel lists.
#[cw_serde]
pub struct ActionsResponse {
    pub targets: Vec<String>,
    pub values: Vec<Uint128>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Binary>,
}

#[cw_serde]
pub struct VoterReceipt {
    pub voter: Addr,
    pub receipt: Receipt,
}

#[cw_serde]
pub struct ReceiptListResponse {
    pub receipts: Vec<VoterReceipt>,
}
