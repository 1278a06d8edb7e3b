use cw_storage_plus::{Item, Map};
use gov_interface::timelock::{Config, QueuedAction};

pub const CONFIG: Item<Config> = Item::new("config");

/// Queue entries keyed by action hash.
pub const QUEUE: Map<&[u8], QueuedAction> = Map::new("queue");
