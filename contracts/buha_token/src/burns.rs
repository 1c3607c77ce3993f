//! Burn ledger: cumulative burned amount per account.

use crate::types::DataKey;
use crate::{events, ledger, math, storage};
use buha_errors::ContractError;
use soroban_sdk::{Address, Env};

#[must_use]
pub fn user_burns(e: &Env, account: &Address) -> i128 {
    storage::load(e, &DataKey::Burned(account.clone())).unwrap_or(0)
}

/// Burn `amount` of spendable balance and record it. Returns the new total.
pub fn burn(e: &Env, account: &Address, amount: i128) -> Result<i128, ContractError> {
    let total = math::add_i128(user_burns(e, account), amount)?;
    ledger::burn(e, account, amount)?;
    storage::save(e, &DataKey::Burned(account.clone()), &total);
    events::emit_burned(e, account, amount, total);
    Ok(total)
}
