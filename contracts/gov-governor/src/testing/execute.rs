use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, Uint128};
use cw_multi_test::{App, Executor};
use gov_interface::action::Action;

use super::{RECIPIENT_ADDR, SOURCE_ADDR};
use crate::{msg::ExecuteMsg, ContractError};

pub(crate) fn mint_voting_power(app: &mut App, ledger: &Addr, to: &str, amount: u128) {
    app.execute_contract(
        Addr::unchecked(SOURCE_ADDR),
        ledger.clone(),
        &gov_voting_ledger::msg::ExecuteMsg::MoveVotingPower {
            from: None,
            to: Some(to.to_string()),
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
}

pub(crate) fn transfer_voting_power(
    app: &mut App,
    ledger: &Addr,
    from: &str,
    to: &str,
    amount: u128,
) {
    app.execute_contract(
        Addr::unchecked(SOURCE_ADDR),
        ledger.clone(),
        &gov_voting_ledger::msg::ExecuteMsg::MoveVotingPower {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
}

/// Arguments of a cw20 `transfer`. The timelock wraps them under the
/// action's signature.
#[cw_serde]
struct TransferArgs {
    recipient: String,
    amount: Uint128,
}

/// An action moving `amount` of the timelock's cw20 tokens to the
/// recipient.
pub(crate) fn vault_transfer(token: &Addr, amount: u128) -> Action {
    Action {
        target: token.to_string(),
        value: Uint128::zero(),
        signature: "transfer".to_string(),
        data: to_json_binary(&TransferArgs {
            recipient: RECIPIENT_ADDR.to_string(),
            amount: Uint128::new(amount),
        })
        .unwrap(),
    }
}

pub(crate) fn propose_msg(actions: &[Action], description: &str) -> ExecuteMsg {
    ExecuteMsg::Propose {
        targets: actions.iter().map(|a| a.target.clone()).collect(),
        values: actions.iter().map(|a| a.value).collect(),
        signatures: actions.iter().map(|a| a.signature.clone()).collect(),
        calldatas: actions.iter().map(|a| a.data.clone()).collect::<Vec<Binary>>(),
        description: description.to_string(),
    }
}

/// Creates a proposal and returns its id.
pub(crate) fn propose(app: &mut App, governor: &Addr, proposer: &str, actions: &[Action]) -> u64 {
    app.execute_contract(
        Addr::unchecked(proposer),
        governor.clone(),
        &propose_msg(actions, "a proposal"),
        &[],
    )
    .unwrap();
    super::queries::query_proposal_count(app, governor)
}

pub(crate) fn propose_should_fail(
    app: &mut App,
    governor: &Addr,
    proposer: &str,
    msg: ExecuteMsg,
) -> ContractError {
    app.execute_contract(Addr::unchecked(proposer), governor.clone(), &msg, &[])
        .unwrap_err()
        .downcast()
        .unwrap()
}

pub(crate) fn cast_vote(app: &mut App, governor: &Addr, voter: &str, proposal_id: u64, support: bool) {
    app.execute_contract(
        Addr::unchecked(voter),
        governor.clone(),
        &ExecuteMsg::CastVote {
            proposal_id,
            support,
        },
        &[],
    )
    .unwrap();
}

pub(crate) fn cast_vote_should_fail(
    app: &mut App,
    governor: &Addr,
    voter: &str,
    proposal_id: u64,
    support: bool,
) -> ContractError {
    app.execute_contract(
        Addr::unchecked(voter),
        governor.clone(),
        &ExecuteMsg::CastVote {
            proposal_id,
            support,
        },
        &[],
    )
    .unwrap_err()
    .downcast()
    .unwrap()
}

pub(crate) fn queue_proposal(
    app: &mut App,
    governor: &Addr,
    sender: &str,
    proposal_id: u64,
) -> anyhow::Result<()> {
    app.execute_contract(
        Addr::unchecked(sender),
        governor.clone(),
        &ExecuteMsg::Queue { proposal_id },
        &[],
    )?;
    Ok(())
}

pub(crate) fn execute_proposal(
    app: &mut App,
    governor: &Addr,
    sender: &str,
    proposal_id: u64,
) -> anyhow::Result<()> {
    app.execute_contract(
        Addr::unchecked(sender),
        governor.clone(),
        &ExecuteMsg::Execute { proposal_id },
        &[],
    )?;
    Ok(())
}

pub(crate) fn cancel_proposal(
    app: &mut App,
    governor: &Addr,
    sender: &str,
    proposal_id: u64,
) -> anyhow::Result<()> {
    app.execute_contract(
        Addr::unchecked(sender),
        governor.clone(),
        &ExecuteMsg::Cancel { proposal_id },
        &[],
    )?;
    Ok(())
}

pub(crate) fn advance_blocks(app: &mut App, blocks: u64) {
    app.update_block(|block| {
        block.height += blocks;
        block.time = block.time.plus_seconds(5 * blocks);
    });
}

pub(crate) fn advance_to_time(app: &mut App, seconds: u64) {
    app.update_block(|block| {
        block.height += 1;
        block.time = cosmwasm_std::Timestamp::from_seconds(seconds);
    });
}
