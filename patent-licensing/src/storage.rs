use shared::constants::{
    FIRST_PATENT_ID, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::errors::Error;
use shared::types::{Amount, Config, Contribution, Patent, PatentId, PauseState, RevenueSummary};
use soroban_sdk::{Address, Env, Vec};

use crate::types::DataKey;

/// Keep the contract instance (config, counter, pause flag) alive
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ==================== Configuration ====================

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Config>(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Next id the registry will assign, defaults to 1
pub fn get_next_patent_id(env: &Env) -> PatentId {
    env.storage()
        .instance()
        .get::<DataKey, PatentId>(&DataKey::NextPatentId)
        .unwrap_or(FIRST_PATENT_ID)
}

pub fn set_next_patent_id(env: &Env, id: PatentId) {
    env.storage().instance().set(&DataKey::NextPatentId, &id);
}

pub fn get_pause_state(env: &Env) -> PauseState {
    env.storage()
        .instance()
        .get::<DataKey, PauseState>(&DataKey::PauseState)
        .unwrap_or_default()
}

pub fn set_pause_state(env: &Env, state: &PauseState) {
    env.storage().instance().set(&DataKey::PauseState, state);
}

pub fn is_paused(env: &Env) -> bool {
    get_pause_state(env).paused
}

// ==================== Patent Registry ====================

pub fn set_patent(env: &Env, patent: &Patent) {
    set_persistent(env, &DataKey::Patent(patent.id), patent);
}

pub fn get_patent(env: &Env, patent_id: PatentId) -> Result<Patent, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, Patent>(&DataKey::Patent(patent_id))
        .ok_or(Error::PatentNotFound)
}

pub fn patent_exists(env: &Env, patent_id: PatentId) -> bool {
    env.storage().persistent().has(&DataKey::Patent(patent_id))
}

// ==================== Contribution Ledger ====================

pub fn set_contribution(env: &Env, patent_id: PatentId, contribution: &Contribution) {
    let key = DataKey::Contribution(patent_id, contribution.researcher.clone());
    set_persistent(env, &key, contribution);
}

pub fn get_contribution(
    env: &Env,
    patent_id: PatentId,
    researcher: &Address,
) -> Option<Contribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(patent_id, researcher.clone()))
}

/// Every researcher holding a contribution on the patent, lead researcher first
pub fn get_contributors(env: &Env, patent_id: PatentId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get::<DataKey, Vec<Address>>(&DataKey::Contributors(patent_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_contributors(env: &Env, patent_id: PatentId, contributors: &Vec<Address>) {
    set_persistent(env, &DataKey::Contributors(patent_id), contributors);
}

// ==================== Fee Distribution ====================

pub fn get_accumulated_fee(env: &Env, patent_id: PatentId, researcher: &Address) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::AccumulatedFee(patent_id, researcher.clone()))
        .unwrap_or(0)
}

pub fn set_accumulated_fee(
    env: &Env,
    patent_id: PatentId,
    researcher: &Address,
    balance: Amount,
) {
    let key = DataKey::AccumulatedFee(patent_id, researcher.clone());
    set_persistent(env, &key, &balance);
}

/// Tokens held by the contract on behalf of the patent's contributors.
/// Claims against the patent can never exceed it.
pub fn get_held_balance(env: &Env, patent_id: PatentId) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::HeldBalance(patent_id))
        .unwrap_or(0)
}

pub fn set_held_balance(env: &Env, patent_id: PatentId, balance: Amount) {
    set_persistent(env, &DataKey::HeldBalance(patent_id), &balance);
}

pub fn get_revenue_summary(env: &Env, patent_id: PatentId) -> RevenueSummary {
    env.storage()
        .persistent()
        .get::<DataKey, RevenueSummary>(&DataKey::Revenue(patent_id))
        .unwrap_or_default()
}

pub fn set_revenue_summary(env: &Env, patent_id: PatentId, summary: &RevenueSummary) {
    set_persistent(env, &DataKey::Revenue(patent_id), summary);
}
