use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::proposal::ProposalState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Voting period must be at least one block")]
    InvalidVotingPeriod {},

    #[error("Quorum fraction must be greater than zero and at most one")]
    InvalidQuorumFraction {},

    #[error("Proposal must contain at least one action")]
    EmptyAction {},

    #[error("Proposal targets, values, signatures and calldatas must have the same length")]
    MismatchedLength {},

    #[error("Proposal may contain at most {max} actions")]
    TooManyActions { max: usize },

    #[error("Proposer voting power ({power}) is below the proposal threshold ({threshold})")]
    ProposerUnderThreshold { power: Uint128, threshold: Uint128 },

    #[error("Proposer already has an unfinished proposal ({proposal_id})")]
    ActiveProposalExists { proposal_id: u64 },

    #[error("No such proposal ({id})")]
    NoSuchProposal { id: u64 },

    #[error("Proposal is not active ({state})")]
    ProposalNotActive { state: ProposalState },

    #[error("Already voted on this proposal")]
    AlreadyVoted {},

    #[error("Only succeeded proposals may be queued ({state})")]
    NotSucceeded { state: ProposalState },

    #[error("Action {index} is already queued in the timelock for this eta")]
    DuplicateAction { index: usize },

    #[error("Only queued proposals may be executed ({state})")]
    NotQueued { state: ProposalState },

    #[error("Proposal is already final ({state})")]
    AlreadyFinal { state: ProposalState },
}
