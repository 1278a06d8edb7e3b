mod contracts;
mod execute;
mod instantiate;
mod queries;

/// Reports balance movements to the ledger.
pub(crate) const SOURCE_ADDR: &str = "token_source";
pub(crate) const GUARDIAN_ADDR: &str = "guardian";
pub(crate) const DEPLOYER_ADDR: &str = "deployer";
pub(crate) const RECIPIENT_ADDR: &str = "recipient";

/// Timelock delay in seconds.
pub(crate) const DELAY: u64 = 86400;
/// Timelock grace period in seconds.
pub(crate) const GRACE_PERIOD: u64 = 14 * 86400;
/// Voting period in blocks.
pub(crate) const VOTING_PERIOD: u64 = 17280;
/// Cw20 tokens held by the timelock.
pub(crate) const VAULT_BALANCE: u128 = 1_000_000;
