use cosmwasm_schema::cw_serde;

pub use gov_interface::timelock::{ExecuteMsg, QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// The only address allowed to queue, execute and cancel actions.
    pub admin: String,
    /// Minimum number of seconds between queueing an action and its
    /// eta.
    pub delay: u64,
    /// Number of seconds after its eta that an action stays
    /// executable.
    pub grace_period: u64,
    /// Native denom used for an action's `value`.
    pub denom: String,
}

#[cw_serde]
pub struct MigrateMsg {}
