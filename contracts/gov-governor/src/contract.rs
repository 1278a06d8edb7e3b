use std::collections::HashSet;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Decimal, Deps, DepsMut, Env, MessageInfo, Order, QuerierWrapper,
    Response, StdResult, Uint128, Uint64, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::nonpayable;
use gov_interface::action::Action;
use gov_interface::timelock::{self, QueuedActionResponse};
use gov_interface::voting::{
    get_total_power, get_voting_power, InfoResponse, TotalPowerAtHeightResponse,
    VotingPowerAtHeightResponse,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::proposal::{advance_proposal_id, Proposal, ProposalState};
use crate::query::{
    ActionsResponse, ProposalListResponse, ProposalResponse, ReceiptListResponse, VoterReceipt,
};
use crate::state::{
    Config, Receipt, CONFIG, LATEST_PROPOSAL_IDS, PROPOSALS, PROPOSAL_COUNT, RECEIPTS,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:gov-governor";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The maximum number of actions a proposal may contain.
pub const MAX_OPERATIONS: usize = 10;

pub const DEFAULT_LIMIT: u64 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_voting_params(msg.voting_period, msg.quorum_fraction)?;
    let config = Config {
        ledger: deps.api.addr_validate(&msg.ledger)?,
        timelock: deps.api.addr_validate(&msg.timelock)?,
        guardian: msg
            .guardian
            .map(|guardian| deps.api.addr_validate(&guardian))
            .transpose()?,
        voting_delay: msg.voting_delay,
        voting_period: msg.voting_period,
        proposal_threshold: msg.proposal_threshold,
        quorum_fraction: msg.quorum_fraction,
    };

    // Initialize proposal count to zero so that queries return zero
    // instead of None.
    PROPOSAL_COUNT.save(deps.storage, &0)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("ledger", config.ledger)
        .add_attribute("timelock", config.timelock)
        .add_attribute(
            "guardian",
            config
                .guardian
                .map(String::from)
                .unwrap_or_else(|| "none".to_string()),
        ))
}

fn validate_voting_params(
    voting_period: u64,
    quorum_fraction: Decimal,
) -> Result<(), ContractError> {
    if voting_period == 0 {
        return Err(ContractError::InvalidVotingPeriod {});
    }
    if quorum_fraction.is_zero() || quorum_fraction > Decimal::one() {
        return Err(ContractError::InvalidQuorumFraction {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    match msg {
        ExecuteMsg::Propose {
            targets,
            values,
            signatures,
            calldatas,
            description,
        } => execute_propose(
            deps,
            env,
            info.sender,
            targets,
            values,
            signatures,
            calldatas,
            description,
        ),
        ExecuteMsg::CastVote {
            proposal_id,
            support,
        } => execute_cast_vote(deps, env, info, proposal_id, support),
        ExecuteMsg::Queue { proposal_id } => execute_queue(deps, env, proposal_id),
        ExecuteMsg::Execute { proposal_id } => execute_execute(deps, env, proposal_id),
        ExecuteMsg::Cancel { proposal_id } => execute_cancel(deps, env, info, proposal_id),
        ExecuteMsg::AcceptTimelockAdmin {} => execute_accept_timelock_admin(deps, info),
        ExecuteMsg::Abdicate {} => execute_abdicate(deps, info),
        ExecuteMsg::UpdateConfig {
            voting_delay,
            voting_period,
            proposal_threshold,
            quorum_fraction,
        } => execute_update_config(
            deps,
            info,
            voting_delay,
            voting_period,
            proposal_threshold,
            quorum_fraction,
        ),
    }
}

/// The timelock's delay and execution window, both in seconds.
fn timelock_config(querier: &QuerierWrapper, timelock: &Addr) -> StdResult<timelock::Config> {
    querier.query_wasm_smart(timelock, &timelock::QueryMsg::Config {})
}

fn load_proposal(deps: Deps, id: u64) -> Result<Proposal, ContractError> {
    PROPOSALS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::NoSuchProposal { id })
}

#[allow(clippy::too_many_arguments)]
pub fn execute_propose(
    deps: DepsMut,
    env: Env,
    proposer: Addr,
    targets: Vec<String>,
    values: Vec<Uint128>,
    signatures: Vec<String>,
    calldatas: Vec<Binary>,
    description: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if targets.is_empty() {
        return Err(ContractError::EmptyAction {});
    }
    let len = targets.len();
    if values.len() != len || signatures.len() != len || calldatas.len() != len {
        return Err(ContractError::MismatchedLength {});
    }
    if len > MAX_OPERATIONS {
        return Err(ContractError::TooManyActions {
            max: MAX_OPERATIONS,
        });
    }

    // Gating reads use the previous block so a proposer can not
    // raise their own weight in the same block.
    let snapshot = env.block.height.saturating_sub(1);
    let power = get_voting_power(&deps.querier, &config.ledger, &proposer, snapshot)?;
    if power < config.proposal_threshold {
        return Err(ContractError::ProposerUnderThreshold {
            power,
            threshold: config.proposal_threshold,
        });
    }

    if let Some(latest) = LATEST_PROPOSAL_IDS.may_load(deps.storage, &proposer)? {
        let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
        let state = PROPOSALS
            .load(deps.storage, latest)?
            .current_state(&env.block, grace_period);
        if !state.is_terminal() {
            return Err(ContractError::ActiveProposalExists {
                proposal_id: latest,
            });
        }
    }

    let total_power = get_total_power(&deps.querier, &config.ledger, snapshot)?;
    let quorum_votes = total_power.mul_floor(config.quorum_fraction);

    let actions = targets
        .into_iter()
        .zip(values)
        .zip(signatures)
        .zip(calldatas)
        .map(|(((target, value), signature), data)| {
            deps.api.addr_validate(&target)?;
            Ok(Action {
                target,
                value,
                signature,
                data,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let id = advance_proposal_id(deps.storage)?;
    let start_height = Uint64::from(env.block.height)
        .checked_add(config.voting_delay.into())?
        .u64();
    let end_height = Uint64::from(start_height)
        .checked_add(config.voting_period.into())?
        .u64();
    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        actions,
        description,
        start_height,
        end_height,
        for_votes: Uint128::zero(),
        against_votes: Uint128::zero(),
        canceled: false,
        executed: false,
        eta: 0,
        quorum_votes,
    };
    PROPOSALS.save(deps.storage, id, &proposal)?;
    LATEST_PROPOSAL_IDS.save(deps.storage, &proposer, &id)?;

    Ok(Response::default()
        .add_attribute("action", "propose")
        .add_attribute("proposal_id", id.to_string())
        .add_attribute("proposer", proposer)
        .add_attribute("start_height", start_height.to_string())
        .add_attribute("end_height", end_height.to_string())
        .add_attribute("quorum_votes", quorum_votes))
}

pub fn execute_cast_vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: u64,
    support: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), proposal_id)?;

    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    let state = proposal.current_state(&env.block, grace_period);
    if state != ProposalState::Active {
        return Err(ContractError::ProposalNotActive { state });
    }
    if RECEIPTS.has(deps.storage, (proposal_id, &info.sender)) {
        return Err(ContractError::AlreadyVoted {});
    }

    let votes = get_voting_power(
        &deps.querier,
        &config.ledger,
        &info.sender,
        proposal.start_height,
    )?;
    if support {
        proposal.for_votes = proposal.for_votes.checked_add(votes)?;
    } else {
        proposal.against_votes = proposal.against_votes.checked_add(votes)?;
    }
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;
    RECEIPTS.save(
        deps.storage,
        (proposal_id, &info.sender),
        &Receipt {
            has_voted: true,
            support,
            votes,
        },
    )?;

    Ok(Response::default()
        .add_attribute("action", "cast_vote")
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("voter", info.sender)
        .add_attribute("support", support.to_string())
        .add_attribute("votes", votes))
}

pub fn execute_queue(
    deps: DepsMut,
    env: Env,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), proposal_id)?;

    let timelock_config = timelock_config(&deps.querier, &config.timelock)?;
    let state = proposal.current_state(&env.block, timelock_config.grace_period);
    if state != ProposalState::Succeeded {
        return Err(ContractError::NotSucceeded { state });
    }

    let eta = env.block.time.seconds() + timelock_config.minimum_delay;

    let mut seen = HashSet::new();
    let mut msgs = Vec::with_capacity(proposal.actions.len());
    for (index, action) in proposal.actions.iter().enumerate() {
        let hash = action.hash(eta);
        let queued: QueuedActionResponse = deps.querier.query_wasm_smart(
            &config.timelock,
            &timelock::QueryMsg::QueuedAction {
                action: action.clone(),
                eta,
            },
        )?;
        if queued.entry.is_some() || !seen.insert(hash.to_vec()) {
            return Err(ContractError::DuplicateAction { index });
        }
        msgs.push(WasmMsg::Execute {
            contract_addr: config.timelock.to_string(),
            msg: to_json_binary(&timelock::ExecuteMsg::QueueAction {
                action: action.clone(),
                eta,
            })?,
            funds: vec![],
        });
    }

    proposal.eta = eta;
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "queue")
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("eta", eta.to_string()))
}

pub fn execute_execute(
    deps: DepsMut,
    env: Env,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), proposal_id)?;

    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    let state = proposal.current_state(&env.block, grace_period);
    if state != ProposalState::Queued {
        return Err(ContractError::NotQueued { state });
    }

    // Any failing action reverts this write along with the others.
    proposal.executed = true;
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    let msgs = proposal
        .actions
        .into_iter()
        .map(|action| {
            Ok(WasmMsg::Execute {
                contract_addr: config.timelock.to_string(),
                msg: to_json_binary(&timelock::ExecuteMsg::ExecuteAction {
                    action,
                    eta: proposal.eta,
                })?,
                funds: vec![],
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "execute")
        .add_attribute("proposal_id", proposal_id.to_string()))
}

/// The guardian and the proposer may always cancel. Anyone may
/// cancel once the proposer's voting power has dropped below the
/// proposal threshold.
fn can_cancel(
    deps: Deps,
    env: &Env,
    config: &Config,
    proposal: &Proposal,
    sender: &Addr,
) -> StdResult<bool> {
    if *sender == proposal.proposer || config.guardian.as_ref() == Some(sender) {
        return Ok(true);
    }
    let power = get_voting_power(
        &deps.querier,
        &config.ledger,
        &proposal.proposer,
        env.block.height.saturating_sub(1),
    )?;
    Ok(power < config.proposal_threshold)
}

pub fn execute_cancel(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), proposal_id)?;

    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    let state = proposal.current_state(&env.block, grace_period);
    if state.is_terminal() {
        return Err(ContractError::AlreadyFinal { state });
    }
    if !can_cancel(deps.as_ref(), &env, &config, &proposal, &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }

    proposal.canceled = true;
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    let msgs = if state == ProposalState::Queued {
        proposal
            .actions
            .into_iter()
            .map(|action| {
                Ok(WasmMsg::Execute {
                    contract_addr: config.timelock.to_string(),
                    msg: to_json_binary(&timelock::ExecuteMsg::CancelAction {
                        action,
                        eta: proposal.eta,
                    })?,
                    funds: vec![],
                })
            })
            .collect::<StdResult<Vec<_>>>()?
    } else {
        vec![]
    };

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "cancel")
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("sender", info.sender))
}

fn assert_guardian(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    match &config.guardian {
        Some(guardian) if guardian == sender => Ok(()),
        _ => Err(ContractError::Unauthorized {}),
    }
}

pub fn execute_accept_timelock_admin(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_guardian(&config, &info.sender)?;

    let msg = WasmMsg::Execute {
        contract_addr: config.timelock.to_string(),
        msg: to_json_binary(&timelock::ExecuteMsg::UpdateOwnership(
            cw_ownable::Action::AcceptOwnership,
        ))?,
        funds: vec![],
    };

    Ok(Response::default()
        .add_message(msg)
        .add_attribute("action", "accept_timelock_admin")
        .add_attribute("timelock", config.timelock))
}

pub fn execute_abdicate(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_guardian(&config, &info.sender)?;

    config.guardian = None;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "abdicate")
        .add_attribute("guardian", info.sender))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    voting_delay: u64,
    voting_period: u64,
    proposal_threshold: Uint128,
    quorum_fraction: Decimal,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.timelock {
        return Err(ContractError::Unauthorized {});
    }
    validate_voting_params(voting_period, quorum_fraction)?;

    config.voting_delay = voting_delay;
    config.voting_period = voting_period;
    config.proposal_threshold = proposal_threshold;
    config.quorum_fraction = quorum_fraction;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "update_config")
        .add_attribute("voting_delay", voting_delay.to_string())
        .add_attribute("voting_period", voting_period.to_string())
        .add_attribute("proposal_threshold", proposal_threshold)
        .add_attribute("quorum_fraction", quorum_fraction.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::State { proposal_id } => query_state(deps, env, proposal_id),
        QueryMsg::Proposal { proposal_id } => query_proposal(deps, env, proposal_id),
        QueryMsg::ListProposals { start_after, limit } => {
            query_list_proposals(deps, env, start_after, limit)
        }
        QueryMsg::ReverseProposals {
            start_before,
            limit,
        } => query_reverse_proposals(deps, env, start_before, limit),
        QueryMsg::ProposalCount {} => to_json_binary(&PROPOSAL_COUNT.load(deps.storage)?),
        QueryMsg::Actions { proposal_id } => query_actions(deps, proposal_id),
        QueryMsg::Receipt { proposal_id, voter } => query_receipt(deps, proposal_id, voter),
        QueryMsg::ListReceipts {
            proposal_id,
            start_after,
            limit,
        } => query_list_receipts(deps, proposal_id, start_after, limit),
        QueryMsg::LatestProposalId { proposer } => query_latest_proposal_id(deps, proposer),
        QueryMsg::VotingPowerAtHeight { address, height } => {
            query_voting_power_at_height(deps, address, height)
        }
        QueryMsg::TotalPowerAtHeight { height } => query_total_power_at_height(deps, height),
        QueryMsg::Info {} => query_info(deps),
    }
}

pub fn query_state(deps: Deps, env: Env, proposal_id: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let proposal = PROPOSALS.load(deps.storage, proposal_id)?;
    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    to_json_binary(&proposal.current_state(&env.block, grace_period))
}

pub fn query_proposal(deps: Deps, env: Env, proposal_id: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let proposal = PROPOSALS.load(deps.storage, proposal_id)?;
    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    to_json_binary(&proposal.into_response(&env.block, grace_period))
}

pub fn query_list_proposals(
    deps: Deps,
    env: Env,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let proposals = PROPOSALS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| item.map(|(_, proposal)| proposal.into_response(&env.block, grace_period)))
        .collect::<StdResult<Vec<ProposalResponse>>>()?;

    to_json_binary(&ProposalListResponse { proposals })
}

pub fn query_reverse_proposals(
    deps: Deps,
    env: Env,
    start_before: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let grace_period = timelock_config(&deps.querier, &config.timelock)?.grace_period;
    let max = start_before.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let proposals = PROPOSALS
        .range(deps.storage, None, max, Order::Descending)
        .take(limit as usize)
        .map(|item| item.map(|(_, proposal)| proposal.into_response(&env.block, grace_period)))
        .collect::<StdResult<Vec<ProposalResponse>>>()?;

    to_json_binary(&ProposalListResponse { proposals })
}

pub fn query_actions(deps: Deps, proposal_id: u64) -> StdResult<Binary> {
    let proposal = PROPOSALS.load(deps.storage, proposal_id)?;
    let mut response = ActionsResponse {
        targets: vec![],
        values: vec![],
        signatures: vec![],
        calldatas: vec![],
    };
    for action in proposal.actions {
        response.targets.push(action.target);
        response.values.push(action.value);
        response.signatures.push(action.signature);
        response.calldatas.push(action.data);
    }
    to_json_binary(&response)
}

pub fn query_receipt(deps: Deps, proposal_id: u64, voter: String) -> StdResult<Binary> {
    let voter = deps.api.addr_validate(&voter)?;
    let receipt = RECEIPTS
        .may_load(deps.storage, (proposal_id, &voter))?
        .unwrap_or_default();
    to_json_binary(&receipt)
}

pub fn query_list_receipts(
    deps: Deps,
    proposal_id: u64,
    start_after: Option<String>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::<&Addr>::exclusive);

    let receipts = RECEIPTS
        .prefix(proposal_id)
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let (voter, receipt) = item?;
            Ok(VoterReceipt { voter, receipt })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ReceiptListResponse { receipts })
}

pub fn query_latest_proposal_id(deps: Deps, proposer: String) -> StdResult<Binary> {
    let proposer = deps.api.addr_validate(&proposer)?;
    let id = LATEST_PROPOSAL_IDS
        .may_load(deps.storage, &proposer)?
        .unwrap_or_default();
    to_json_binary(&id)
}

pub fn query_voting_power_at_height(deps: Deps, address: String, height: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    let power = get_voting_power(&deps.querier, &config.ledger, &address, height)?;
    to_json_binary(&VotingPowerAtHeightResponse { power, height })
}

pub fn query_total_power_at_height(deps: Deps, height: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let power = get_total_power(&deps.querier, &config.ledger, height)?;
    to_json_binary(&TotalPowerAtHeightResponse { power, height })
}

pub fn query_info(deps: Deps) -> StdResult<Binary> {
    let info = get_contract_version(deps.storage)?;
    to_json_binary(&InfoResponse { info })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
