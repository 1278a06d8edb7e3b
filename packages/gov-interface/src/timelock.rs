use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{BlockInfo, HexBinary};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

use crate::action::Action;

/// The timelock's configuration.
#[cw_serde]
pub struct Config {
    /// The minimum number of seconds between queueing an action and
    /// its eta. Governors queue actions exactly this far out.
    pub minimum_delay: u64,
    /// The number of seconds after its eta during which a queued
    /// action may still be executed.
    pub grace_period: u64,
    /// The native denom of an action's `value`.
    pub denom: String,
}

/// An entry in the timelock's queue.
#[cw_serde]
pub struct QueuedAction {
    pub hash: HexBinary,
    pub eta: u64,
    /// True until the action has been executed.
    pub queued: bool,
}

#[cw_serde]
#[derive(Copy)]
pub enum ActionStatus {
    /// Never queued, or canceled.
    Absent,
    /// Queued, eta not yet reached.
    Pending,
    /// Queued and inside its execution window.
    Ready,
    /// Executed successfully.
    Executed,
    /// Queued, but the execution window has closed.
    Expired,
}

impl QueuedAction {
    /// Expiry is never stored. It is derived from the eta, the grace
    /// period and the current block time.
    pub fn status(&self, block: &BlockInfo, grace_period: u64) -> ActionStatus {
        let now = block.time.seconds();
        if !self.queued {
            ActionStatus::Executed
        } else if now < self.eta {
            ActionStatus::Pending
        } else if now > self.eta.saturating_add(grace_period) {
            ActionStatus::Expired
        } else {
            ActionStatus::Ready
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionStatus::Absent => write!(f, "absent"),
            ActionStatus::Pending => write!(f, "pending"),
            ActionStatus::Ready => write!(f, "ready"),
            ActionStatus::Executed => write!(f, "executed"),
            ActionStatus::Expired => write!(f, "expired"),
        }
    }
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Schedules an action for execution at `eta`. Only the admin
    /// may queue actions and `eta` must be at least the minimum delay
    /// in the future.
    QueueAction { action: Action, eta: u64 },
    /// Runs a queued action. Only the admin may execute actions and
    /// only between `eta` and `eta + grace_period` inclusive.
    ExecuteAction { action: Action, eta: u64 },
    /// Removes an action from the queue. Only the admin may cancel
    /// actions. Canceling an action that is not queued does nothing.
    CancelAction { action: Action, eta: u64 },
    /// Updates the delay and grace period. May only be called by the
    /// timelock itself, so changes must pass through the queue.
    UpdateConfig {
        minimum_delay: u64,
        grace_period: u64,
    },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Returns the key an action would be queued under.
    #[returns(::cosmwasm_std::HexBinary)]
    ActionHash { action: Action, eta: u64 },
    #[returns(QueuedActionResponse)]
    QueuedAction { action: Action, eta: u64 },
    /// Lists queue entries in hash order.
    #[returns(QueuedActionListResponse)]
    ListQueuedActions {
        start_after: Option<HexBinary>,
        limit: Option<u32>,
    },
    #[returns(crate::voting::InfoResponse)]
    Info {},
}

#[cw_serde]
pub struct QueuedActionResponse {
    pub hash: HexBinary,
    pub entry: Option<QueuedAction>,
    pub status: ActionStatus,
}

#[cw_serde]
pub struct QueuedActionListResponse {
    pub actions: Vec<QueuedAction>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_env;

    use super::*;

    #[test]
    fn test_queued_action_status() {
        let mut block = mock_env().block;
        let now = block.time.seconds();
        let entry = QueuedAction {
            hash: HexBinary::from(vec![1; 32]),
            eta: now + 10,
            queued: true,
        };

        assert_eq!(entry.status(&block, 5), ActionStatus::Pending);

        block.time = block.time.plus_seconds(10);
        assert_eq!(entry.status(&block, 5), ActionStatus::Ready);

        block.time = block.time.plus_seconds(5);
        assert_eq!(entry.status(&block, 5), ActionStatus::Ready);

        block.time = block.time.plus_seconds(1);
        assert_eq!(entry.status(&block, 5), ActionStatus::Expired);

        let executed = QueuedAction {
            queued: false,
            ..entry
        };
        assert_eq!(executed.status(&block, 5), ActionStatus::Executed);
    }
}
