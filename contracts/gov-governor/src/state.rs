use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};

use crate::proposal::Proposal;

/// The governor's configuration.
#[cw_serde]
pub struct Config {
    /// Ledger voting power is read from.
    pub ledger: Addr,
    /// Timelock passed proposals are queued in. Must have this
    /// contract as its admin.
    pub timelock: Addr,
    /// May cancel proposals and hand timelock admin rights to this
    /// contract.
    pub guardian: Option<Addr>,
    /// Blocks between a proposal's creation and the start of voting.
    pub voting_delay: u64,
    /// Blocks voting stays open for.
    pub voting_period: u64,
    /// Voting power needed to create a proposal.
    pub proposal_threshold: Uint128,
    /// Fraction of the total voting power that must vote for a
    /// proposal for it to pass.
    pub quorum_fraction: Decimal,
}

/// A vote cast on a proposal.
#[cw_serde]
#[derive(Default)]
pub struct Receipt {
    pub has_voted: bool,
    /// True for a vote in favour.
    pub support: bool,
    pub votes: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PROPOSAL_COUNT: Item<u64> = Item::new("proposal_count");
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
pub const RECEIPTS: Map<(u64, &Addr), Receipt> = Map::new("receipts");
pub const LATEST_PROPOSAL_IDS: Map<&Addr, u64> = Map::new("latest_proposal_ids");
