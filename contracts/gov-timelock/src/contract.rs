use std::collections::BTreeMap;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, from_json, to_json_binary, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Order,
    Reply, Response, StdError, StdResult, SubMsg, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::nonpayable;
use gov_interface::action::Action;
use gov_interface::timelock::{
    ActionStatus, Config, QueuedAction, QueuedActionListResponse, QueuedActionResponse,
};
use gov_interface::voting::InfoResponse;
use serde_cw_value::Value;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{CONFIG, QUEUE};

pub(crate) const CONTRACT_NAME: &str = "crates.io:gov-timelock";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Thirty days.
pub const MAXIMUM_DELAY: u64 = 30 * 24 * 60 * 60;

const EXECUTE_ACTION_REPLY_ID: u64 = 0;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_config(msg.delay, msg.grace_period)?;
    let admin = cw_ownable::initialize_owner(deps.storage, deps.api, Some(&msg.admin))?;
    CONFIG.save(
        deps.storage,
        &Config {
            minimum_delay: msg.delay,
            grace_period: msg.grace_period,
            denom: msg.denom,
        },
    )?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("delay", msg.delay.to_string())
        .add_attribute("grace_period", msg.grace_period.to_string())
        .add_attributes(admin.into_attributes()))
}

fn validate_config(delay: u64, grace_period: u64) -> Result<(), ContractError> {
    if delay == 0 || delay > MAXIMUM_DELAY {
        return Err(ContractError::InvalidDelay {
            delay,
            max: MAXIMUM_DELAY,
        });
    }
    if grace_period == 0 {
        return Err(ContractError::ZeroGracePeriod {});
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
    match msg {
        ExecuteMsg::QueueAction { action, eta } => {
            nonpayable(&info)?;
            execute_queue_action(deps, env, info, action, eta)
        }
        // Funds sent along are kept and may pay for the action's value.
        ExecuteMsg::ExecuteAction { action, eta } => {
            execute_execute_action(deps, env, info, action, eta)
        }
        ExecuteMsg::CancelAction { action, eta } => {
            nonpayable(&info)?;
            execute_cancel_action(deps, info, action, eta)
        }
        ExecuteMsg::UpdateConfig {
            minimum_delay,
            grace_period,
        } => {
            nonpayable(&info)?;
            execute_update_config(deps, env, info, minimum_delay, grace_period)
        }
        ExecuteMsg::UpdateOwnership(action) => {
            nonpayable(&info)?;
            // An executed action may hand the timelock to a new admin
            // with the current admin's authority.
            let sender = if info.sender == env.contract.address {
                cw_ownable::get_ownership(deps.storage)?
                    .owner
                    .unwrap_or(info.sender)
            } else {
                info.sender
            };
            let ownership = cw_ownable::update_ownership(deps, &env.block, &sender, action)?;
            Ok(Response::default().add_attributes(ownership.into_attributes()))
        }
    }
}

pub fn execute_queue_action(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: Action,
    eta: u64,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let earliest = env
        .block
        .time
        .seconds()
        .checked_add(config.minimum_delay)
        .ok_or_else(|| StdError::generic_err("eta overflow"))?;
    if eta < earliest {
        return Err(ContractError::EtaTooSoon { eta, earliest });
    }

    let hash = action.hash(eta);
    if QUEUE.has(deps.storage, hash.as_slice()) {
        return Err(ContractError::AlreadyQueued { hash });
    }
    QUEUE.save(
        deps.storage,
        hash.as_slice(),
        &QueuedAction {
            hash: hash.clone(),
            eta,
            queued: true,
        },
    )?;

    Ok(Response::default()
        .add_attribute("action", "queue_action")
        .add_attribute("hash", hash.to_hex())
        .add_attribute("target", action.target)
        .add_attribute("value", action.value)
        .add_attribute("signature", signature_attribute(&action.signature))
        .add_attribute("eta", eta.to_string()))
}

pub fn execute_execute_action(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: Action,
    eta: u64,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let hash = action.hash(eta);
    let mut entry = match QUEUE.may_load(deps.storage, hash.as_slice())? {
        Some(entry) if entry.queued => entry,
        _ => return Err(ContractError::NotQueued { hash }),
    };
    match entry.status(&env.block, config.grace_period) {
        ActionStatus::Pending => return Err(ContractError::TooEarly { eta }),
        ActionStatus::Expired => {
            return Err(ContractError::StaleAction {
                expired_at: eta.saturating_add(config.grace_period),
            })
        }
        _ => (),
    }

    entry.queued = false;
    QUEUE.save(deps.storage, hash.as_slice(), &entry)?;

    let call = WasmMsg::Execute {
        contract_addr: deps.api.addr_validate(&action.target)?.into_string(),
        msg: action_call(&action)?,
        funds: if action.value.is_zero() {
            vec![]
        } else {
            coins(action.value.u128(), config.denom)
        },
    };

    Ok(Response::default()
        .add_submessage(SubMsg::reply_on_error(call, EXECUTE_ACTION_REPLY_ID))
        .add_attribute("action", "execute_action")
        .add_attribute("hash", hash.to_hex())
        .add_attribute("target", action.target)
        .add_attribute("value", action.value)
        .add_attribute("signature", signature_attribute(&action.signature))
        .add_attribute("eta", eta.to_string()))
}

/// Raw-payload actions carry no signature. Attribute values may not be
/// empty.
fn signature_attribute(signature: &str) -> &str {
    if signature.is_empty() {
        "none"
    } else {
        signature
    }
}

/// The execute message sent to an action's target.
pub fn action_call(action: &Action) -> StdResult<Binary> {
    if action.signature.is_empty() {
        return Ok(action.data.clone());
    }
    let args: Value = if action.data.is_empty() {
        Value::Map(BTreeMap::new())
    } else {
        from_json(action.data.as_slice())?
    };
    let call = BTreeMap::from([(Value::String(action.signature.clone()), args)]);
    to_json_binary(&Value::Map(call))
}

pub fn execute_cancel_action(
    deps: DepsMut,
    info: MessageInfo,
    action: Action,
    eta: u64,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let hash = action.hash(eta);
    let canceled = QUEUE.has(deps.storage, hash.as_slice());
    QUEUE.remove(deps.storage, hash.as_slice());

    Ok(Response::default()
        .add_attribute("action", "cancel_action")
        .add_attribute("hash", hash.to_hex())
        .add_attribute("canceled", canceled.to_string())
        .add_attribute("eta", eta.to_string()))
}

pub fn execute_update_config(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    minimum_delay: u64,
    grace_period: u64,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized {});
    }
    validate_config(minimum_delay, grace_period)?;

    CONFIG.update(deps.storage, |config| -> StdResult<_> {
        Ok(Config {
            minimum_delay,
            grace_period,
            ..config
        })
    })?;

    Ok(Response::default()
        .add_attribute("action", "update_config")
        .add_attribute("minimum_delay", minimum_delay.to_string())
        .add_attribute("grace_period", grace_period.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        EXECUTE_ACTION_REPLY_ID => match msg.result.into_result() {
            Err(reason) => Err(ContractError::ActionReverted { reason }),
            Ok(_) => Ok(Response::default()),
        },
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::ActionHash { action, eta } => to_json_binary(&action.hash(eta)),
        QueryMsg::QueuedAction { action, eta } => {
            to_json_binary(&query_queued_action(deps, env, action, eta)?)
        }
        QueryMsg::ListQueuedActions { start_after, limit } => {
            to_json_binary(&query_list_queued_actions(deps, start_after, limit)?)
        }
        QueryMsg::Info {} => to_json_binary(&query_info(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

pub fn query_queued_action(
    deps: Deps,
    env: Env,
    action: Action,
    eta: u64,
) -> StdResult<QueuedActionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let hash = action.hash(eta);
    let entry = QUEUE.may_load(deps.storage, hash.as_slice())?;
    let status = entry
        .as_ref()
        .map(|entry| entry.status(&env.block, config.grace_period))
        .unwrap_or(ActionStatus::Absent);
    Ok(QueuedActionResponse {
        hash,
        entry,
        status,
    })
}

pub fn query_list_queued_actions(
    deps: Deps,
    start_after: Option<HexBinary>,
    limit: Option<u32>,
) -> StdResult<QueuedActionListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let actions = QUEUE
        .range(
            deps.storage,
            start_after.as_ref().map(|h| Bound::exclusive(h.as_slice())),
            None,
            Order::Ascending,
        )
        .take(limit as usize)
        .map(|item| item.map(|(_, entry)| entry))
        .collect::<StdResult<_>>()?;
    Ok(QueuedActionListResponse { actions })
}

pub fn query_info(deps: Deps) -> StdResult<InfoResponse> {
    let info = get_contract_version(deps.storage)?;
    Ok(InfoResponse { info })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
