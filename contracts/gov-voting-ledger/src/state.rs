use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::checkpoint::{CheckpointItem, CheckpointMap};

#[cw_serde]
pub struct Config {
    /// The only address allowed to move voting power. Normally the
    /// governance token.
    pub source: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Token balances as reported by the source.
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Delegatee of each account. Accounts without an entry delegate to
/// themselves.
pub const DELEGATES: Map<&Addr, Addr> = Map::new("delegates");

/// Delegated voting power per delegatee.
pub const VOTES: CheckpointMap = CheckpointMap::new("votes", "votes__count");

/// Total of all balances.
pub const TOTAL_SUPPLY: CheckpointItem = CheckpointItem::new("total_supply", "total_supply__count");
