#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Storage,
    Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_utils::nonpayable;
use gov_interface::voting::{InfoResponse, TotalPowerAtHeightResponse, VotingPowerAtHeightResponse};

use crate::error::ContractError;
use crate::msg::{CheckpointsResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, BALANCES, CONFIG, DELEGATES, TOTAL_SUPPLY, VOTES};

pub(crate) const CONTRACT_NAME: &str = "crates.io:gov-voting-ledger";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = cw_ownable::initialize_owner(deps.storage, deps.api, msg.owner.as_deref())?;
    let source = deps.api.addr_validate(&msg.source)?;
    CONFIG.save(deps.storage, &Config { source: source.clone() })?;
    TOTAL_SUPPLY.write(deps.storage, env.block.height, Uint128::zero())?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("source", source)
        .add_attributes(owner.into_attributes()))
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
        ExecuteMsg::MoveVotingPower { from, to, amount } => {
            execute_move_voting_power(deps, env, info, from, to, amount)
        }
        ExecuteMsg::Delegate { delegatee } => execute_delegate(deps, env, info, delegatee),
        ExecuteMsg::UpdateConfig { source } => execute_update_config(deps, info, source),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default().add_attributes(ownership.into_attributes()))
        }
    }
}

pub fn execute_move_voting_power(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: Option<String>,
    to: Option<String>,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.source {
        return Err(ContractError::Unauthorized {});
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if from.is_none() && to.is_none() {
        return Err(ContractError::NoAccounts {});
    }

    let from = from.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let to = to.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let height = env.block.height;

    if let Some(from) = &from {
        let balance = BALANCES.may_load(deps.storage, from)?.unwrap_or_default();
        let remaining =
            balance
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientBalance {
                    address: from.to_string(),
                    balance,
                    amount,
                })?;
        BALANCES.save(deps.storage, from, &remaining)?;
    }
    if let Some(to) = &to {
        BALANCES.update(deps.storage, to, |balance| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        })?;
    }

    // Mints and burns change the total supply.
    let supply = TOTAL_SUPPLY.latest(deps.storage)?;
    match (&from, &to) {
        (None, Some(_)) => TOTAL_SUPPLY.write(
            deps.storage,
            height,
            supply.checked_add(amount).map_err(StdError::overflow)?,
        )?,
        (Some(_), None) => TOTAL_SUPPLY.write(
            deps.storage,
            height,
            supply.checked_sub(amount).map_err(StdError::overflow)?,
        )?,
        _ => (),
    }

    let src = from
        .as_ref()
        .map(|a| delegatee_of(deps.storage, a))
        .transpose()?;
    let dst = to
        .as_ref()
        .map(|a| delegatee_of(deps.storage, a))
        .transpose()?;
    move_delegated_votes(deps.storage, height, src.as_ref(), dst.as_ref(), amount)?;

    Ok(Response::default()
        .add_attribute("action", "move_voting_power")
        .add_attribute("from", from.map(String::from).unwrap_or_else(|| "none".to_string()))
        .add_attribute("to", to.map(String::from).unwrap_or_else(|| "none".to_string()))
        .add_attribute("amount", amount))
}

pub fn execute_delegate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    delegatee: String,
) -> Result<Response, ContractError> {
    let delegatee = deps.api.addr_validate(&delegatee)?;
    let current = delegatee_of(deps.storage, &info.sender)?;
    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();

    if delegatee == info.sender {
        DELEGATES.remove(deps.storage, &info.sender);
    } else {
        DELEGATES.save(deps.storage, &info.sender, &delegatee)?;
    }
    move_delegated_votes(
        deps.storage,
        env.block.height,
        Some(&current),
        Some(&delegatee),
        balance,
    )?;

    Ok(Response::default()
        .add_attribute("action", "delegate")
        .add_attribute("delegator", info.sender)
        .add_attribute("from_delegatee", current)
        .add_attribute("to_delegatee", delegatee)
        .add_attribute("amount", balance))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    source: String,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let source = deps.api.addr_validate(&source)?;
    CONFIG.save(deps.storage, &Config { source: source.clone() })?;

    Ok(Response::default()
        .add_attribute("action", "update_config")
        .add_attribute("source", source))
}

fn delegatee_of(storage: &dyn Storage, account: &Addr) -> StdResult<Addr> {
    Ok(DELEGATES
        .may_load(storage, account)?
        .unwrap_or_else(|| account.clone()))
}

/// Moves `amount` of delegated weight from `src` to `dst`, writing a
/// checkpoint for each side at `height`.
fn move_delegated_votes(
    storage: &mut dyn Storage,
    height: u64,
    src: Option<&Addr>,
    dst: Option<&Addr>,
    amount: Uint128,
) -> StdResult<()> {
    if src == dst || amount.is_zero() {
        return Ok(());
    }
    if let Some(src) = src {
        let votes = VOTES.latest(storage, src)?.checked_sub(amount)?;
        VOTES.write(storage, src, height, votes)?;
    }
    if let Some(dst) = dst {
        let votes = VOTES.latest(storage, dst)?.checked_add(amount)?;
        VOTES.write(storage, dst, height, votes)?;
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::VotingPowerAtHeight { address, height } => Ok(to_json_binary(
            &query_voting_power_at_height(deps, env, address, height)?,
        )?),
        QueryMsg::TotalPowerAtHeight { height } => Ok(to_json_binary(
            &query_total_power_at_height(deps, env, height)?,
        )?),
        QueryMsg::CurrentVotingPower { address } => Ok(to_json_binary(
            &query_current_voting_power(deps, env, address)?,
        )?),
        QueryMsg::Delegatee { address } => {
            let address = deps.api.addr_validate(&address)?;
            Ok(to_json_binary(&delegatee_of(deps.storage, &address)?)?)
        }
        QueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            let balance = BALANCES.may_load(deps.storage, &address)?.unwrap_or_default();
            Ok(to_json_binary(&balance)?)
        }
        QueryMsg::Checkpoints {
            address,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_checkpoints(
            deps,
            address,
            start_after,
            limit,
        )?)?),
        QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),
        QueryMsg::Info {} => Ok(to_json_binary(&query_info(deps)?)?),
        QueryMsg::Ownership {} => Ok(to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?),
    }
}

/// Heights at or after the current block may still change.
fn assert_past_height(env: &Env, height: u64) -> Result<(), ContractError> {
    if height >= env.block.height {
        return Err(ContractError::InvalidHeight {
            height,
            current: env.block.height,
        });
    }
    Ok(())
}

pub fn query_voting_power_at_height(
    deps: Deps,
    env: Env,
    address: String,
    height: u64,
) -> Result<VotingPowerAtHeightResponse, ContractError> {
    assert_past_height(&env, height)?;
    let address = deps.api.addr_validate(&address)?;
    let power = VOTES.at_height(deps.storage, &address, height)?;
    Ok(VotingPowerAtHeightResponse { power, height })
}

pub fn query_total_power_at_height(
    deps: Deps,
    env: Env,
    height: u64,
) -> Result<TotalPowerAtHeightResponse, ContractError> {
    assert_past_height(&env, height)?;
    let power = TOTAL_SUPPLY.at_height(deps.storage, height)?;
    Ok(TotalPowerAtHeightResponse { power, height })
}

pub fn query_current_voting_power(
    deps: Deps,
    env: Env,
    address: String,
) -> StdResult<VotingPowerAtHeightResponse> {
    let address = deps.api.addr_validate(&address)?;
    let power = VOTES.latest(deps.storage, &address)?;
    Ok(VotingPowerAtHeightResponse {
        power,
        height: env.block.height,
    })
}

pub fn query_checkpoints(
    deps: Deps,
    address: String,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<CheckpointsResponse> {
    let address = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    Ok(CheckpointsResponse {
        count: VOTES.count(deps.storage, &address)?,
        checkpoints: VOTES.range(deps.storage, &address, start_after, limit as usize)?,
    })
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
