use cosmwasm_std::{StdError, Uint128};
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

    #[error("Voting power is only known for heights before the current block ({current}), got {height}")]
    InvalidHeight { height: u64, current: u64 },

    #[error("Balance of {address} is {balance}, can not move {amount}")]
    InsufficientBalance {
        address: String,
        balance: Uint128,
        amount: Uint128,
    },

    #[error("A voting power movement needs a sender or a recipient")]
    NoAccounts {},

    #[error("Can not move zero voting power")]
    ZeroAmount {},
}
