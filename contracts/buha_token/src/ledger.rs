//! Balance ledger.
//!
//! Owns spendable balances, allowances and total supply. The accrual engine
//! never writes these keys directly; it goes through `credit`, `lock`,
//! `unlock` and `burn` below.
//!
//! Supply accounting: locked stake principal stays part of the supply, so
//! `total_supply == Σ balance + total_staked` holds after every operation.
//! Only `credit` creates supply and only `burn` destroys it.

use crate::events;
use crate::math;
use crate::storage;
use crate::types::{AllowanceValue, DataKey};
use buha_errors::ContractError;
use soroban_sdk::{Address, Env};

/// Token name reported by `name()`.
pub const TOKEN_NAME: &str = "BuhaToken";
/// Token symbol reported by `symbol()`.
pub const TOKEN_SYMBOL: &str = "BUHA";
/// Token decimals reported by `decimals()`.
pub const TOKEN_DECIMALS: u32 = 18;

fn require_non_negative(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

// ─── Queries ───────────────────────────────────────────────────────────────

#[must_use]
pub fn balance(e: &Env, id: &Address) -> i128 {
    storage::load(e, &DataKey::Balance(id.clone())).unwrap_or(0)
}

#[must_use]
pub fn total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

/// Current allowance; zero once the expiration ledger has passed.
#[must_use]
pub fn allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match storage::load::<AllowanceValue>(e, &key) {
        Some(a) if a.expiration_ledger >= e.ledger().sequence() => a.amount,
        _ => 0,
    }
}

// ─── Internal writers ──────────────────────────────────────────────────────

fn set_balance(e: &Env, id: &Address, amount: i128) {
    storage::save(e, &DataKey::Balance(id.clone()), &amount);
}

fn set_total_supply(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &amount);
}

fn add_balance(e: &Env, id: &Address, amount: i128) -> Result<(), ContractError> {
    let next = math::add_i128(balance(e, id), amount)?;
    set_balance(e, id, next);
    Ok(())
}

fn take_balance(
    e: &Env,
    id: &Address,
    amount: i128,
    short: ContractError,
) -> Result<(), ContractError> {
    let current = balance(e, id);
    if amount > current {
        return Err(short);
    }
    set_balance(e, id, current - amount);
    Ok(())
}

// ─── Engine-facing contract ────────────────────────────────────────────────

/// Create `amount` of new supply in `to`'s spendable balance.
pub fn credit(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    if amount == 0 {
        return Ok(());
    }
    let supply = math::add_i128(total_supply(e), amount)?;
    add_balance(e, to, amount)?;
    set_total_supply(e, supply);
    events::emit_minted(e, to, amount);
    Ok(())
}

/// Move `amount` from spendable into the locked state. Supply is unchanged.
pub fn lock(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    take_balance(e, from, amount, ContractError::InsufficientBalance)
}

/// Return previously locked `amount` to spendable. Supply is unchanged.
pub fn unlock(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    add_balance(e, to, amount)
}

/// Destroy `amount` of `from`'s spendable balance.
pub fn burn(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    take_balance(e, from, amount, ContractError::ExceedsBalance)?;
    let supply = math::sub_i128(total_supply(e), amount)?;
    set_total_supply(e, supply);
    Ok(())
}

// ─── Token transfers ───────────────────────────────────────────────────────

pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    take_balance(e, from, amount, ContractError::InsufficientBalance)?;
    add_balance(e, to, amount)?;
    events::emit_transfer(e, from, to, amount);
    Ok(())
}

/// Set `spender`'s allowance over `from`'s balance.
///
/// A positive amount needs an expiration ledger no earlier than the current
/// ledger; `InvalidAmount` otherwise.
pub fn approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        return Err(ContractError::InvalidAmount);
    }
    let key = DataKey::Allowance(from.clone(), spender.clone());
    storage::save(
        e,
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    events::emit_approve(e, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Consume `amount` of `spender`'s allowance over `from`.
pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    require_non_negative(amount)?;
    let key = DataKey::Allowance(from.clone(), spender.clone());
    let available = allowance(e, from, spender);
    if amount > available {
        return Err(ContractError::InsufficientAllowance);
    }
    if amount == 0 {
        return Ok(());
    }
    let mut stored: AllowanceValue =
        storage::load(e, &key).ok_or(ContractError::InsufficientAllowance)?;
    stored.amount = available - amount;
    storage::save(e, &key, &stored);
    Ok(())
}
