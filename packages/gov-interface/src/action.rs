use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, HexBinary, Uint128};
use sha2::{Digest, Sha256};

/// A call made by the timelock on behalf of governance.
#[cw_serde]
pub struct Action {
    /// The contract the call is made against.
    pub target: String,
    /// Native funds sent along with the call, denominated in the
    /// timelock's configured denom.
    pub value: Uint128,
    /// The execute message variant to invoke on the target. If this
    /// is empty `data` is sent to the target unmodified.
    pub signature: String,
    /// Arguments to `signature`, or the complete execute message when
    /// no signature is given.
    pub data: Binary,
}

impl Action {
    /// The key under which this action is queued for execution at
    /// `eta`. Variable length fields are length prefixed so that no
    /// two distinct actions share an encoding.
    pub fn hash(&self, eta: u64) -> HexBinary {
        let mut hasher = Sha256::new();
        hasher.update((self.target.len() as u64).to_be_bytes());
        hasher.update(self.target.as_bytes());
        hasher.update(self.value.u128().to_be_bytes());
        hasher.update((self.signature.len() as u64).to_be_bytes());
        hasher.update(self.signature.as_bytes());
        hasher.update((self.data.len() as u64).to_be_bytes());
        hasher.update(self.data.as_slice());
        hasher.update(eta.to_be_bytes());
        HexBinary::from(hasher.finalize().to_vec())
    }
}
