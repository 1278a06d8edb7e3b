use cosmwasm_std::{HexBinary, StdError};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Delay must be between 1 and {max} seconds, got {delay}")]
    InvalidDelay { delay: u64, max: u64 },

    #[error("Grace period must be non-zero")]
    ZeroGracePeriod {},

    #[error("Action eta must be at least {earliest}, got {eta}")]
    EtaTooSoon { eta: u64, earliest: u64 },

    #[error("Action ({hash}) is already queued")]
    AlreadyQueued { hash: HexBinary },

    #[error("Action ({hash}) is not queued")]
    NotQueued { hash: HexBinary },

    #[error("Action can not be executed before its eta ({eta})")]
    TooEarly { eta: u64 },

    #[error("Action is stale, its execution window closed at {expired_at}")]
    StaleAction { expired_at: u64 },

    #[error("Action execution reverted: {reason}")]
    ActionReverted { reason: String },

    #[error("Got a submessage reply with unknown id: {id}")]
    UnknownReplyId { id: u64 },
}
