use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub(crate) fn cw20_base_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub(crate) fn ledger_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gov_voting_ledger::contract::execute,
        gov_voting_ledger::contract::instantiate,
        gov_voting_ledger::contract::query,
    );
    Box::new(contract)
}

pub(crate) fn timelock_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gov_timelock::contract::execute,
        gov_timelock::contract::instantiate,
        gov_timelock::contract::query,
    )
    .with_reply(gov_timelock::contract::reply);
    Box::new(contract)
}

pub(crate) fn governor_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}
