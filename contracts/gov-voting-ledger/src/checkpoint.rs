use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Item, Map};

/// The weight of a key as of the end of block `height`.
#[cw_serde]
#[derive(Copy)]
pub struct Checkpoint {
    pub height: u64,
    pub votes: Uint128,
}

/// Per-account checkpoint sequences, stored as `(account, index)`
/// entries plus a per-account count.
pub struct CheckpointMap<'a> {
    checkpoints: Map<'a, (&'a Addr, u32), Checkpoint>,
    counts: Map<'a, &'a Addr, u32>,
}

/// A single checkpoint sequence.
pub struct CheckpointItem<'a> {
    checkpoints: Map<'a, u32, Checkpoint>,
    count: Item<'a, u32>,
}

impl<'a> CheckpointMap<'a> {
    pub const fn new(checkpoints_key: &'a str, counts_key: &'a str) -> Self {
        CheckpointMap {
            checkpoints: Map::new(checkpoints_key),
            counts: Map::new(counts_key),
        }
    }

    pub fn count(&self, store: &dyn Storage, account: &'a Addr) -> StdResult<u32> {
        Ok(self.counts.may_load(store, account)?.unwrap_or_default())
    }

    /// The most recently written weight of `account`.
    pub fn latest(&self, store: &dyn Storage, account: &'a Addr) -> StdResult<Uint128> {
        match self.count(store, account)? {
            0 => Ok(Uint128::zero()),
            count => Ok(self.checkpoints.load(store, (account, count - 1))?.votes),
        }
    }

    /// The weight of `account` at the end of block `height`.
    pub fn at_height(
        &self,
        store: &dyn Storage,
        account: &'a Addr,
        height: u64,
    ) -> StdResult<Uint128> {
        let count = self.count(store, account)?;
        let found = search(count, height, |index| {
            self.checkpoints.load(store, (account, index))
        })?;
        Ok(found.map(|checkpoint| checkpoint.votes).unwrap_or_default())
    }

    /// Records `votes` as the weight of `account` from `height` on.
    /// `height` must not precede the latest checkpoint.
    pub fn write(
        &self,
        store: &mut dyn Storage,
        account: &'a Addr,
        height: u64,
        votes: Uint128,
    ) -> StdResult<()> {
        let count = self.count(store, account)?;
        let last = match count {
            0 => None,
            count => Some(self.checkpoints.load(store, (account, count - 1))?),
        };
        let index = write_index(count, last.as_ref(), height)?;
        self.checkpoints
            .save(store, (account, index), &Checkpoint { height, votes })?;
        if index == count {
            self.counts.save(store, account, &(count + 1))?;
        }
        Ok(())
    }

    pub fn range(
        &self,
        store: &dyn Storage,
        account: &'a Addr,
        start_after: Option<u32>,
        limit: usize,
    ) -> StdResult<Vec<Checkpoint>> {
        self.checkpoints
            .prefix(account)
            .range(
                store,
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(limit)
            .map(|item| item.map(|(_, checkpoint)| checkpoint))
            .collect()
    }
}

impl<'a> CheckpointItem<'a> {
    pub const fn new(checkpoints_key: &'a str, count_key: &'a str) -> Self {
        CheckpointItem {
            checkpoints: Map::new(checkpoints_key),
            count: Item::new(count_key),
        }
    }

    pub fn latest(&self, store: &dyn Storage) -> StdResult<Uint128> {
        match self.count.may_load(store)?.unwrap_or_default() {
            0 => Ok(Uint128::zero()),
            count => Ok(self.checkpoints.load(store, count - 1)?.votes),
        }
    }

    pub fn at_height(&self, store: &dyn Storage, height: u64) -> StdResult<Uint128> {
        let count = self.count.may_load(store)?.unwrap_or_default();
        let found = search(count, height, |index| self.checkpoints.load(store, index))?;
        Ok(found.map(|checkpoint| checkpoint.votes).unwrap_or_default())
    }

    pub fn write(&self, store: &mut dyn Storage, height: u64, votes: Uint128) -> StdResult<()> {
        let count = self.count.may_load(store)?.unwrap_or_default();
        let last = match count {
            0 => None,
            count => Some(self.checkpoints.load(store, count - 1)?),
        };
        let index = write_index(count, last.as_ref(), height)?;
        self.checkpoints
            .save(store, index, &Checkpoint { height, votes })?;
        if index == count {
            self.count.save(store, &(count + 1))?;
        }
        Ok(())
    }
}

/// Where a checkpoint for `height` goes: over the last one if that
/// was taken in the same block, otherwise at the end.
fn write_index(count: u32, last: Option<&Checkpoint>, height: u64) -> StdResult<u32> {
    match last {
        Some(last) if last.height > height => Err(StdError::generic_err(format!(
            "checkpoint at height {height} precedes latest checkpoint at height {}",
            last.height
        ))),
        Some(last) if last.height == height => Ok(count - 1),
        _ => Ok(count),
    }
}

/// Binary search for the latest of `count` height-ordered checkpoints
/// taken at or before `height`.
fn search<F>(count: u32, height: u64, load: F) -> StdResult<Option<Checkpoint>>
where
    F: Fn(u32) -> StdResult<Checkpoint>,
{
    if count == 0 {
        return Ok(None);
    }

    // Most lookups are for recent heights.
    let last = load(count - 1)?;
    if last.height <= height {
        return Ok(Some(last));
    }
    let first = load(0)?;
    if first.height > height {
        return Ok(None);
    }

    // checkpoints[lower].height <= height < checkpoints[upper].height
    let (mut lower, mut upper) = (0, count - 1);
    let mut found = first;
    while upper - lower > 1 {
        let center = lower + (upper - lower) / 2;
        let checkpoint = load(center)?;
        if checkpoint.height <= height {
            lower = center;
            found = checkpoint;
        } else {
            upper = center;
        }
    }
    Ok(Some(found))
}
