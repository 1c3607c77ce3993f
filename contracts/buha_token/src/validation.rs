//! Term and Amount Validation Module
//!
//! Argument checks shared by the mint and stake registries. They run before
//! any storage write so a rejected call leaves no trace.
//!
//! ## Stake check order
//! `InsufficientBalance`, then `BelowMinStake`, then `AboveMaxStake`, then
//! `InvalidTerm` (zero term), then `AboveMaxTerm`. The registry adds
//! `PositionExists` afterwards.

use crate::config::MAX_STAKE_AMOUNT;
use crate::types::AccrualConfig;
use buha_errors::ContractError;

/// Largest `percentage` accepted by `claim_and_stake`.
pub const MAX_PERCENTAGE: u32 = 100;

/// A mint term must be in `1..=max_mint_term_days`.
pub fn validate_mint_term(cfg: &AccrualConfig, term_days: u32) -> Result<(), ContractError> {
    if term_days == 0 || term_days > cfg.max_mint_term_days {
        return Err(ContractError::InvalidTerm);
    }
    Ok(())
}

/// Validate a new stake of `amount` for `term_days` against `spendable`.
pub fn validate_stake(
    cfg: &AccrualConfig,
    amount: i128,
    term_days: u32,
    spendable: i128,
) -> Result<(), ContractError> {
    if amount > spendable {
        return Err(ContractError::InsufficientBalance);
    }
    if amount < cfg.min_stake_amount {
        return Err(ContractError::BelowMinStake);
    }
    if amount > MAX_STAKE_AMOUNT {
        return Err(ContractError::AboveMaxStake);
    }
    if term_days == 0 {
        return Err(ContractError::InvalidTerm);
    }
    if term_days > cfg.max_stake_term_days {
        return Err(ContractError::AboveMaxTerm);
    }
    Ok(())
}

pub fn validate_percentage(percentage: u32) -> Result<(), ContractError> {
    if percentage > MAX_PERCENTAGE {
        return Err(ContractError::InvalidPercentage);
    }
    Ok(())
}
