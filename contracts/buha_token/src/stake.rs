//! Stake registry.
//!
//! State machine per account: absent → `StakePosition` (stake) → absent
//! (withdraw or withdraw_early). Principal moves from spendable into the
//! locked state on open and back on close; the reward is new supply.

use crate::types::{AccrualConfig, DataKey, StakePosition};
use crate::{config, counters, events, ledger, math, reward, storage, validation};
use buha_errors::ContractError;
use soroban_sdk::{Address, Env};

fn key(account: &Address) -> DataKey {
    DataKey::Stake(account.clone())
}

#[must_use]
pub fn get(e: &Env, account: &Address) -> Option<StakePosition> {
    storage::load(e, &key(account))
}

/// Every precondition of `open`, evaluated against `spendable` instead of
/// the stored balance so a caller can check a stake funded by a credit it
/// has not applied yet.
pub fn check_open(
    e: &Env,
    cfg: &AccrualConfig,
    account: &Address,
    amount: i128,
    term_days: u32,
    spendable: i128,
) -> Result<(), ContractError> {
    validation::validate_stake(cfg, amount, term_days, spendable)?;
    if get(e, account).is_some() {
        return Err(ContractError::PositionExists);
    }
    Ok(())
}

pub fn open(
    e: &Env,
    account: &Address,
    amount: i128,
    term_days: u32,
    now: u64,
) -> Result<StakePosition, ContractError> {
    let cfg = config::get_config(e)?;
    check_open(e, &cfg, account, amount, term_days, ledger::balance(e, account))?;

    let position = StakePosition {
        amount,
        term_days,
        started_at: now,
        maturity_at: math::add_days(now, term_days)?,
    };
    ledger::lock(e, account, amount)?;
    storage::save(e, &key(account), &position);
    counters::stake_added(e, amount)?;

    events::emit_staked(e, account, amount, term_days);
    Ok(position)
}

fn accrued(cfg: &AccrualConfig, position: &StakePosition, now: u64) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(position.started_at);
    reward::stake_reward(cfg, position.amount, position.term_days, elapsed)
}

/// Close the position: return principal plus accrued reward, emit
/// `withdrawn`. Returns the reward.
pub fn close(e: &Env, account: &Address, now: u64) -> Result<i128, ContractError> {
    let position = get(e, account).ok_or(ContractError::NoPosition)?;
    let cfg = config::get_config(e)?;
    let reward = accrued(&cfg, &position, now)?;

    storage::remove(e, &key(account));
    counters::stake_removed(e, position.amount)?;
    ledger::unlock(e, account, position.amount)?;
    ledger::credit(e, account, reward)?;

    events::emit_withdrawn(e, account, position.amount, reward);
    Ok(reward)
}

pub fn preview(e: &Env, account: &Address, now: u64) -> Result<Option<i128>, ContractError> {
    let Some(position) = get(e, account) else {
        return Ok(None);
    };
    let cfg = config::get_config(e)?;
    accrued(&cfg, &position, now).map(Some)
}
