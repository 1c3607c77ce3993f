//! Global counters.
//!
//! One `GlobalCounters` record in instance storage, read in O(1). Every
//! mutation happens in the same invocation as the position write it mirrors.

use crate::math;
use crate::types::{DataKey, GlobalCounters};
use buha_errors::ContractError;
use soroban_sdk::Env;

#[must_use]
pub fn get(e: &Env) -> GlobalCounters {
    e.storage()
        .instance()
        .get(&DataKey::Counters)
        .unwrap_or_default()
}

fn put(e: &Env, counters: &GlobalCounters) {
    e.storage().instance().set(&DataKey::Counters, counters);
}

pub fn init(e: &Env) {
    put(e, &GlobalCounters::default());
}

pub fn minter_added(e: &Env) -> Result<(), ContractError> {
    let mut c = get(e);
    c.active_minters = math::inc_u32(c.active_minters)?;
    put(e, &c);
    Ok(())
}

pub fn minter_removed(e: &Env) -> Result<(), ContractError> {
    let mut c = get(e);
    c.active_minters = math::dec_u32(c.active_minters)?;
    put(e, &c);
    Ok(())
}

pub fn stake_added(e: &Env, amount: i128) -> Result<(), ContractError> {
    let mut c = get(e);
    c.active_stakes = math::inc_u32(c.active_stakes)?;
    c.total_staked = math::add_i128(c.total_staked, amount)?;
    put(e, &c);
    Ok(())
}

/// `principal` only; rewards never enter `total_staked`.
pub fn stake_removed(e: &Env, principal: i128) -> Result<(), ContractError> {
    let mut c = get(e);
    c.active_stakes = math::dec_u32(c.active_stakes)?;
    c.total_staked = math::sub_i128(c.total_staked, principal)?;
    put(e, &c);
    Ok(())
}
