use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, BlockInfo, StdResult, Storage, Uint128};
use gov_interface::action::Action;

use crate::query::ProposalResponse;
use crate::state::PROPOSAL_COUNT;

#[cw_serde]
#[derive(Copy)]
pub enum ProposalState {
    /// Created, voting has not started.
    Pending,
    /// Open for voting.
    Active,
    Canceled,
    /// Voting ended without a majority or without quorum.
    Defeated,
    /// Passed and waiting to be queued.
    Succeeded,
    /// Queued in the timelock.
    Queued,
    /// Queued, but the timelock's execution window has closed.
    Expired,
    Executed,
}

impl ProposalState {
    /// Terminal states never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalState::Canceled
                | ProposalState::Defeated
                | ProposalState::Expired
                | ProposalState::Executed
        )
    }
}

impl std::fmt::Display for ProposalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalState::Pending => write!(f, "pending"),
            ProposalState::Active => write!(f, "active"),
            ProposalState::Canceled => write!(f, "canceled"),
            ProposalState::Defeated => write!(f, "defeated"),
            ProposalState::Succeeded => write!(f, "succeeded"),
            ProposalState::Queued => write!(f, "queued"),
            ProposalState::Expired => write!(f, "expired"),
            ProposalState::Executed => write!(f, "executed"),
        }
    }
}

#[cw_serde]
pub struct Proposal {
    pub id: u64,
    /// The address that created this proposal.
    pub proposer: Addr,
    /// Timelock actions executed together should this proposal pass.
    pub actions: Vec<Action>,
    pub description: String,
    /// Voting opens after this height. Votes are weighted by voting
    /// power at this height.
    pub start_height: u64,
    /// Last height at which votes are accepted.
    pub end_height: u64,
    pub for_votes: Uint128,
    pub against_votes: Uint128,
    pub canceled: bool,
    pub executed: bool,
    /// Timestamp in seconds at which the proposal's actions become
    /// executable in the timelock. Zero until queued.
    pub eta: u64,
    /// Votes in favour needed for the proposal to pass, fixed at
    /// creation.
    pub quorum_votes: Uint128,
}

pub fn next_proposal_id(store: &dyn Storage) -> StdResult<u64> {
    Ok(PROPOSAL_COUNT.may_load(store)?.unwrap_or_default() + 1)
}

pub fn advance_proposal_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = next_proposal_id(store)?;
    PROPOSAL_COUNT.save(store, &id)?;
    Ok(id)
}

impl Proposal {
    /// The proposal's state at `block`. `grace_period` is the
    /// timelock's execution window in seconds.
    pub fn current_state(&self, block: &BlockInfo, grace_period: u64) -> ProposalState {
        if self.canceled {
            ProposalState::Canceled
        } else if block.height <= self.start_height {
            ProposalState::Pending
        } else if block.height <= self.end_height {
            ProposalState::Active
        } else if self.for_votes <= self.against_votes || self.for_votes < self.quorum_votes {
            ProposalState::Defeated
        } else if self.eta == 0 {
            ProposalState::Succeeded
        } else if block.time.seconds() >= self.eta.saturating_add(grace_period) {
            ProposalState::Expired
        } else if self.executed {
            ProposalState::Executed
        } else {
            ProposalState::Queued
        }
    }

    pub fn into_response(self, block: &BlockInfo, grace_period: u64) -> ProposalResponse {
        ProposalResponse {
            id: self.id,
            state: self.current_state(block, grace_period),
            proposal: self,
        }
    }
}
