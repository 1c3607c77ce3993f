//! Accrual Configuration Module
//!
//! The reward curve and term limits are policy, not code: they live in one
//! `AccrualConfig` record in instance storage, written with defaults at
//! `initialize` and replaceable by the admin through `set_config`.
//!
//! ## Bounds
//! Every write is validated against hard caps. The caps are what keep the
//! reward arithmetic in `reward.rs` below `i128::MAX` for any accepted
//! configuration, together with `MAX_STAKE_AMOUNT`.
//!
//! ## Event Emission
//! A successful update emits `config_updated` with the admin and new config.

use crate::events;
use crate::types::{AccrualConfig, DataKey};
use buha_errors::ContractError;
use soroban_sdk::{log, Address, Env};

// ============================================================================
// Bounds
// ============================================================================

/// Largest term, in days, either registry may be configured to accept.
pub const MAX_TERM_DAYS_CAP: u32 = 1_000;

/// Largest configurable full-term mint reward per day (10 000 tokens at 18 decimals).
pub const MAX_MINT_REWARD_PER_DAY: i128 = 10_000_000_000_000_000_000_000;

/// Upper bound for every bps field of the policy.
pub const MAX_POLICY_BPS: u32 = 10_000;

/// Largest principal a single stake may lock (10^10 tokens at 18 decimals).
pub const MAX_STAKE_AMOUNT: i128 = 10_000_000_000_000_000_000_000_000_000;

// ============================================================================
// Defaults
// ============================================================================

/// One whole token at 18 decimals.
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

pub const DEFAULT_MAX_MINT_TERM_DAYS: u32 = 500;
pub const DEFAULT_MAX_STAKE_TERM_DAYS: u32 = 1_000;
pub const DEFAULT_MIN_STAKE_AMOUNT: i128 = 1;
/// 100 tokens per committed day.
pub const DEFAULT_MINT_REWARD_PER_DAY: i128 = 100 * ONE_TOKEN;
/// +10 % per year of committed term.
pub const DEFAULT_MINT_TERM_BONUS_BPS: u32 = 1_000;
/// Early claims forfeit 25 % of the pro-rata reward.
pub const DEFAULT_MINT_EARLY_PENALTY_BPS: u32 = 2_500;
/// 20 % a year on staked principal.
pub const DEFAULT_STAKE_APY_BPS: u32 = 2_000;
/// +10 % yield per year of committed term.
pub const DEFAULT_STAKE_TERM_BONUS_BPS: u32 = 1_000;

#[must_use]
pub fn default_config() -> AccrualConfig {
    AccrualConfig {
        max_mint_term_days: DEFAULT_MAX_MINT_TERM_DAYS,
        max_stake_term_days: DEFAULT_MAX_STAKE_TERM_DAYS,
        min_stake_amount: DEFAULT_MIN_STAKE_AMOUNT,
        mint_reward_per_day: DEFAULT_MINT_REWARD_PER_DAY,
        mint_term_bonus_bps: DEFAULT_MINT_TERM_BONUS_BPS,
        mint_early_penalty_bps: DEFAULT_MINT_EARLY_PENALTY_BPS,
        stake_apy_bps: DEFAULT_STAKE_APY_BPS,
        stake_term_bonus_bps: DEFAULT_STAKE_TERM_BONUS_BPS,
    }
}

/// Reject any configuration outside the hard caps.
pub fn validate_config(cfg: &AccrualConfig) -> Result<(), ContractError> {
    let term_ok = |days: u32| (1..=MAX_TERM_DAYS_CAP).contains(&days);
    let bps_ok = |v: u32| v <= MAX_POLICY_BPS;

    if !term_ok(cfg.max_mint_term_days) || !term_ok(cfg.max_stake_term_days) {
        return Err(ContractError::InvalidConfig);
    }
    if cfg.min_stake_amount < 1 || cfg.min_stake_amount > MAX_STAKE_AMOUNT {
        return Err(ContractError::InvalidConfig);
    }
    if cfg.mint_reward_per_day < 1 || cfg.mint_reward_per_day > MAX_MINT_REWARD_PER_DAY {
        return Err(ContractError::InvalidConfig);
    }
    if cfg.stake_apy_bps == 0 {
        return Err(ContractError::InvalidConfig);
    }
    if !bps_ok(cfg.mint_term_bonus_bps)
        || !bps_ok(cfg.mint_early_penalty_bps)
        || !bps_ok(cfg.stake_apy_bps)
        || !bps_ok(cfg.stake_term_bonus_bps)
    {
        return Err(ContractError::InvalidConfig);
    }
    Ok(())
}

/// Active configuration, or `NotInitialized` before `initialize`.
pub fn get_config(e: &Env) -> Result<AccrualConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

/// Validate and store `cfg`. Caller is responsible for the admin check.
pub fn store_config(e: &Env, cfg: &AccrualConfig) -> Result<(), ContractError> {
    validate_config(cfg)?;
    e.storage().instance().set(&DataKey::Config, cfg);
    Ok(())
}

/// Admin-facing update: validate, store, announce.
pub fn update_config(e: &Env, admin: &Address, cfg: &AccrualConfig) -> Result<(), ContractError> {
    store_config(e, cfg)?;
    log!(
        e,
        "accrual config updated",
        cfg.max_mint_term_days,
        cfg.max_stake_term_days
    );
    events::emit_config_updated(e, admin, cfg);
    Ok(())
}
