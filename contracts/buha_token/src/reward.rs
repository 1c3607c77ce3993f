//! Reward calculator.
//!
//! Pure functions of (policy, term, elapsed time, principal). Nothing here
//! reads storage or the clock; the engine passes `now - started_at` in.
//!
//! Shape of the curve:
//! - a term multiplier `BPS + bonus_bps * term_days / 365`, never below `BPS`;
//! - full mint reward `reward_per_day * term_days * multiplier / BPS`;
//! - full stake reward `amount * apy_bps * term_days / (365 * BPS) * multiplier / BPS`;
//! - anything before maturity is pro-rata in seconds, floor division.

use crate::math::{self, BPS};
use crate::types::{AccrualConfig, SECONDS_PER_DAY};
use buha_errors::ContractError;

const YEAR_DAYS: i128 = 365;

fn term_secs(term_days: u32) -> i128 {
    term_days as i128 * SECONDS_PER_DAY as i128
}

/// `BPS + bonus_bps * term_days / 365`.
pub fn term_multiplier(term_days: u32, bonus_bps: u32) -> Result<i128, ContractError> {
    let bonus = math::mul_div(bonus_bps as i128, term_days as i128, YEAR_DAYS)?;
    math::add_i128(BPS, bonus)
}

/// Reward for holding a mint position for its whole term.
pub fn full_mint_reward(cfg: &AccrualConfig, term_days: u32) -> Result<i128, ContractError> {
    let base = math::mul_i128(cfg.mint_reward_per_day, term_days as i128)?;
    let multiplier = term_multiplier(term_days, cfg.mint_term_bonus_bps)?;
    math::mul_div(base, multiplier, BPS)
}

/// Mint payout.
///
/// `matured = true` pays the full-term reward regardless of `elapsed_secs`.
/// Otherwise the full reward is scaled by `elapsed / term` and then reduced
/// by `mint_early_penalty_bps`, which keeps it strictly below the full reward
/// whenever the full reward is positive.
pub fn mint_reward(
    cfg: &AccrualConfig,
    term_days: u32,
    elapsed_secs: u64,
    matured: bool,
) -> Result<i128, ContractError> {
    let full = full_mint_reward(cfg, term_days)?;
    if matured {
        return Ok(full);
    }
    let term = term_secs(term_days);
    let elapsed = (elapsed_secs as i128).min(term);
    let pro_rata = math::mul_div(full, elapsed, term)?;
    let penalty = math::bps(pro_rata, cfg.mint_early_penalty_bps)?;
    math::sub_i128(pro_rata, penalty)
}

/// Reward for holding `amount` staked for its whole term.
pub fn full_stake_reward(
    cfg: &AccrualConfig,
    amount: i128,
    term_days: u32,
) -> Result<i128, ContractError> {
    let yearly = math::mul_i128(cfg.stake_apy_bps as i128, term_days as i128)?;
    let base = math::mul_div(amount, yearly, YEAR_DAYS * BPS)?;
    let multiplier = term_multiplier(term_days, cfg.stake_term_bonus_bps)?;
    math::mul_div(base, multiplier, BPS)
}

/// Stake payout after `elapsed_secs`: zero at 0, the full reward from
/// maturity on, pro-rata in between.
///
/// Strictly inside the term the pro-rata share rounds up and is capped at
/// `full - 1`, so any full reward of at least 2 units pays `0 < r < full`.
pub fn stake_reward(
    cfg: &AccrualConfig,
    amount: i128,
    term_days: u32,
    elapsed_secs: u64,
) -> Result<i128, ContractError> {
    let full = full_stake_reward(cfg, amount, term_days)?;
    let term = term_secs(term_days);
    let elapsed = elapsed_secs as i128;
    if elapsed >= term {
        return Ok(full);
    }
    if elapsed == 0 || full < 2 {
        return math::mul_div(full, elapsed, term);
    }
    let scaled = math::add_i128(math::mul_i128(full, elapsed)?, term - 1)?;
    let pro_rata = math::div_i128(scaled, term)?;
    Ok(pro_rata.min(full - 1))
}
