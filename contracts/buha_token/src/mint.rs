//! Mint registry.
//!
//! State machine per account: absent → `MintPosition` (start) → absent
//! (claim at/after maturity, or early claim before it). The reward is new
//! supply credited through the ledger.

use crate::types::{AccrualConfig, DataKey, MintPosition};
use crate::{config, counters, events, ledger, math, reward, storage, validation};
use buha_errors::ContractError;
use soroban_sdk::{Address, Env};

/// Which exit a settlement takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// `claim`: requires `now >= maturity_at`, pays the full-term reward.
    Matured,
    /// `claim_early`: requires `now < maturity_at`, pays the reduced reward.
    Early,
}

fn key(account: &Address) -> DataKey {
    DataKey::Mint(account.clone())
}

#[must_use]
pub fn get(e: &Env, account: &Address) -> Option<MintPosition> {
    storage::load(e, &key(account))
}

pub fn start(
    e: &Env,
    account: &Address,
    term_days: u32,
    now: u64,
) -> Result<MintPosition, ContractError> {
    let cfg = config::get_config(e)?;
    validation::validate_mint_term(&cfg, term_days)?;
    if get(e, account).is_some() {
        return Err(ContractError::PositionExists);
    }

    let position = MintPosition {
        term_days,
        started_at: now,
        maturity_at: math::add_days(now, term_days)?,
    };
    storage::save(e, &key(account), &position);
    counters::minter_added(e)?;

    events::emit_mint_started(e, account, term_days, position.maturity_at);
    Ok(position)
}

fn payout(cfg: &AccrualConfig, position: &MintPosition, now: u64) -> Result<i128, ContractError> {
    let matured = now >= position.maturity_at;
    let elapsed = now.saturating_sub(position.started_at);
    reward::mint_reward(cfg, position.term_days, elapsed, matured)
}

/// Check that `account` can settle by `how` at `now` and price the payout.
/// Read-only.
pub fn quote(
    e: &Env,
    account: &Address,
    now: u64,
    how: Settlement,
) -> Result<i128, ContractError> {
    let position = get(e, account).ok_or(ContractError::NoPosition)?;
    let cfg = config::get_config(e)?;
    match how {
        Settlement::Matured if now < position.maturity_at => Err(ContractError::NotMature),
        Settlement::Early if now >= position.maturity_at => Err(ContractError::AlreadyMature),
        _ => payout(&cfg, &position, now),
    }
}

/// Settle the position: clear it, credit the reward, emit `claimed`.
pub fn settle(
    e: &Env,
    account: &Address,
    now: u64,
    how: Settlement,
) -> Result<i128, ContractError> {
    let reward = quote(e, account, now, how)?;

    storage::remove(e, &key(account));
    counters::minter_removed(e)?;
    ledger::credit(e, account, reward)?;

    events::emit_claimed(e, account, reward);
    Ok(reward)
}

/// What the account would receive if it settled now, by whichever exit is
/// open at `now`.
pub fn preview(e: &Env, account: &Address, now: u64) -> Result<Option<i128>, ContractError> {
    let Some(position) = get(e, account) else {
        return Ok(None);
    };
    let cfg = config::get_config(e)?;
    payout(&cfg, &position, now).map(Some)
}
