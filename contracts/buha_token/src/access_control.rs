//! Admin and upgrade-role checks.
//!
//! The admin manages configuration and role membership. The upgrade role is
//! the only capability that can replace the contract code; no accrual
//! operation consults it.

use crate::types::DataKey;
use crate::{events, storage};
use buha_errors::ContractError;
use soroban_sdk::{Address, Env};

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

/// `caller` must authorize and be the stored admin.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored = get_admin(e)?;
    if stored != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

#[must_use]
pub fn has_upgrade_role(e: &Env, account: &Address) -> bool {
    storage::load(e, &DataKey::UpgradeRole(account.clone())).unwrap_or(false)
}

pub fn grant_upgrade_role(e: &Env, account: &Address) {
    storage::save(e, &DataKey::UpgradeRole(account.clone()), &true);
    events::emit_role_granted(e, account);
}

pub fn revoke_upgrade_role(e: &Env, account: &Address) {
    storage::remove(e, &DataKey::UpgradeRole(account.clone()));
    events::emit_role_revoked(e, account);
}

/// `caller` must authorize and hold the upgrade role.
pub fn require_upgrade_role(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !has_upgrade_role(e, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
