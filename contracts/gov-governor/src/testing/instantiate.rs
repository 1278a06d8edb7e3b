use cosmwasm_std::{Addr, Decimal, Uint128};
use cw20::Cw20Coin;
use cw_multi_test::{next_block, App, Executor};

use super::contracts::{cw20_base_contract, governor_contract, ledger_contract, timelock_contract};
use super::{DELAY, DEPLOYER_ADDR, GRACE_PERIOD, GUARDIAN_ADDR, SOURCE_ADDR, VAULT_BALANCE, VOTING_PERIOD};
use crate::msg::{ExecuteMsg, InstantiateMsg};

/// Addresses of a deployed governance system.
pub(crate) struct Governance {
    pub ledger: Addr,
    pub timelock: Addr,
    pub governor: Addr,
    /// A cw20 whose tokens are held by the timelock.
    pub token: Addr,
}

pub(crate) struct GovernorParams {
    pub voting_delay: u64,
    pub voting_period: u64,
    pub proposal_threshold: Uint128,
    pub quorum_fraction: Decimal,
}

pub(crate) fn default_params() -> GovernorParams {
    GovernorParams {
        voting_delay: 1,
        voting_period: VOTING_PERIOD,
        proposal_threshold: Uint128::new(100),
        quorum_fraction: Decimal::percent(1),
    }
}

pub(crate) fn governor_instantiate_msg(
    ledger: &Addr,
    timelock: &Addr,
    params: GovernorParams,
) -> InstantiateMsg {
    InstantiateMsg {
        ledger: ledger.to_string(),
        timelock: timelock.to_string(),
        guardian: Some(GUARDIAN_ADDR.to_string()),
        voting_delay: params.voting_delay,
        voting_period: params.voting_period,
        proposal_threshold: params.proposal_threshold,
        quorum_fraction: params.quorum_fraction,
    }
}

/// Deploys the ledger, the timelock and the governor, then hands the
/// timelock over to the governor the way a live deployment does: the
/// deployer proposes the governor as admin and the guardian accepts
/// on the governor's behalf.
pub(crate) fn instantiate_governance(app: &mut App, params: GovernorParams) -> Governance {
    let ledger_id = app.store_code(ledger_contract());
    let timelock_id = app.store_code(timelock_contract());
    let governor_id = app.store_code(governor_contract());
    let cw20_id = app.store_code(cw20_base_contract());

    let ledger = app
        .instantiate_contract(
            ledger_id,
            Addr::unchecked(DEPLOYER_ADDR),
            &gov_voting_ledger::msg::InstantiateMsg {
                owner: Some(DEPLOYER_ADDR.to_string()),
                source: SOURCE_ADDR.to_string(),
            },
            &[],
            "voting ledger",
            None,
        )
        .unwrap();

    let timelock = app
        .instantiate_contract(
            timelock_id,
            Addr::unchecked(DEPLOYER_ADDR),
            &gov_timelock::msg::InstantiateMsg {
                admin: DEPLOYER_ADDR.to_string(),
                delay: DELAY,
                grace_period: GRACE_PERIOD,
                denom: "ujuno".to_string(),
            },
            &[],
            "timelock",
            None,
        )
        .unwrap();

    let governor = app
        .instantiate_contract(
            governor_id,
            Addr::unchecked(DEPLOYER_ADDR),
            &governor_instantiate_msg(&ledger, &timelock, params),
            &[],
            "governor",
            None,
        )
        .unwrap();

    app.execute_contract(
        Addr::unchecked(DEPLOYER_ADDR),
        timelock.clone(),
        &gov_timelock::msg::ExecuteMsg::UpdateOwnership(cw_ownable::Action::TransferOwnership {
            new_owner: governor.to_string(),
            expiry: None,
        }),
        &[],
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked(GUARDIAN_ADDR),
        governor.clone(),
        &ExecuteMsg::AcceptTimelockAdmin {},
        &[],
    )
    .unwrap();

    let token = app
        .instantiate_contract(
            cw20_id,
            Addr::unchecked(DEPLOYER_ADDR),
            &cw20_base::msg::InstantiateMsg {
                name: "protocol token".to_string(),
                symbol: "PROTO".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: timelock.to_string(),
                    amount: Uint128::new(VAULT_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "protocol token",
            None,
        )
        .unwrap();

    app.update_block(next_block);

    Governance {
        ledger,
        timelock,
        governor,
        token,
    }
}
