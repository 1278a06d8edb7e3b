use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::App;
use gov_interface::action::Action;
use gov_interface::timelock::{self, QueuedActionResponse};

use super::RECIPIENT_ADDR;
use crate::msg::QueryMsg;
use crate::proposal::ProposalState;
use crate::query::{ActionsResponse, ProposalListResponse, ProposalResponse, ReceiptListResponse};
use crate::state::{Config, Receipt};

pub(crate) fn query_config(app: &App, governor: &Addr) -> Config {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::Config {})
        .unwrap()
}

pub(crate) fn query_state(app: &App, governor: &Addr, proposal_id: u64) -> ProposalState {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::State { proposal_id })
        .unwrap()
}

pub(crate) fn query_proposal(app: &App, governor: &Addr, proposal_id: u64) -> ProposalResponse {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::Proposal { proposal_id })
        .unwrap()
}

pub(crate) fn query_list_proposals(
    app: &App,
    governor: &Addr,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> ProposalListResponse {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::ListProposals { start_after, limit })
        .unwrap()
}

pub(crate) fn query_reverse_proposals(
    app: &App,
    governor: &Addr,
    start_before: Option<u64>,
    limit: Option<u64>,
) -> ProposalListResponse {
    app.wrap()
        .query_wasm_smart(
            governor,
            &QueryMsg::ReverseProposals {
                start_before,
                limit,
            },
        )
        .unwrap()
}

pub(crate) fn query_proposal_count(app: &App, governor: &Addr) -> u64 {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::ProposalCount {})
        .unwrap()
}

pub(crate) fn query_actions(app: &App, governor: &Addr, proposal_id: u64) -> ActionsResponse {
    app.wrap()
        .query_wasm_smart(governor, &QueryMsg::Actions { proposal_id })
        .unwrap()
}

pub(crate) fn query_receipt(app: &App, governor: &Addr, proposal_id: u64, voter: &str) -> Receipt {
    app.wrap()
        .query_wasm_smart(
            governor,
            &QueryMsg::Receipt {
                proposal_id,
                voter: voter.to_string(),
            },
        )
        .unwrap()
}

pub(crate) fn query_list_receipts(
    app: &App,
    governor: &Addr,
    proposal_id: u64,
    start_after: Option<String>,
) -> ReceiptListResponse {
    app.wrap()
        .query_wasm_smart(
            governor,
            &QueryMsg::ListReceipts {
                proposal_id,
                start_after,
                limit: None,
            },
        )
        .unwrap()
}

pub(crate) fn query_latest_proposal_id(app: &App, governor: &Addr, proposer: &str) -> u64 {
    app.wrap()
        .query_wasm_smart(
            governor,
            &QueryMsg::LatestProposalId {
                proposer: proposer.to_string(),
            },
        )
        .unwrap()
}

pub(crate) fn query_timelock_config(app: &App, timelock: &Addr) -> timelock::Config {
    app.wrap()
        .query_wasm_smart(timelock, &timelock::QueryMsg::Config {})
        .unwrap()
}

pub(crate) fn query_timelock_owner(app: &App, timelock: &Addr) -> Option<Addr> {
    let ownership: cw_ownable::Ownership<Addr> = app
        .wrap()
        .query_wasm_smart(timelock, &timelock::QueryMsg::Ownership {})
        .unwrap();
    ownership.owner
}

pub(crate) fn query_queued_action(
    app: &App,
    timelock: &Addr,
    action: &Action,
    eta: u64,
) -> QueuedActionResponse {
    app.wrap()
        .query_wasm_smart(
            timelock,
            &timelock::QueryMsg::QueuedAction {
                action: action.clone(),
                eta,
            },
        )
        .unwrap()
}

pub(crate) fn query_recipient_balance(app: &App, token: &Addr) -> Uint128 {
    let balance: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: RECIPIENT_ADDR.to_string(),
            },
        )
        .unwrap();
    balance.balance
}
