use crate::types::AccrualConfig;
use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when an account starts a term mint.
///
/// # Topics
/// * `Symbol` - "mint_started"
/// * `Address` - The minting account
///
/// # Data
/// * `u32` - The committed term in days
/// * `u64` - The maturity timestamp
pub fn emit_mint_started(e: &Env, account: &Address, term_days: u32, maturity_at: u64) {
    let topics = (Symbol::new(e, "mint_started"), account.clone());
    e.events().publish(topics, (term_days, maturity_at));
}

/// Emitted when a mint position is settled by `claim`, `claim_early` or
/// `claim_and_stake`.
///
/// # Topics
/// * `Symbol` - "claimed"
/// * `Address` - The account
///
/// # Data
/// * `i128` - The reward credited as new supply
pub fn emit_claimed(e: &Env, account: &Address, reward: i128) {
    let topics = (Symbol::new(e, "claimed"), account.clone());
    e.events().publish(topics, reward);
}

/// Emitted when principal is locked into a stake position.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The staking account
///
/// # Data
/// * `i128` - The locked principal
/// * `u32` - The committed term in days
pub fn emit_staked(e: &Env, account: &Address, amount: i128, term_days: u32) {
    let topics = (Symbol::new(e, "staked"), account.clone());
    e.events().publish(topics, (amount, term_days));
}

/// Emitted when a stake position is closed.
///
/// # Topics
/// * `Symbol` - "withdrawn"
/// * `Address` - The account
///
/// # Data
/// * `i128` - The principal returned
/// * `i128` - The reward credited as new supply
pub fn emit_withdrawn(e: &Env, account: &Address, principal: i128, reward: i128) {
    let topics = (Symbol::new(e, "withdrawn"), account.clone());
    e.events().publish(topics, (principal, reward));
}

/// Emitted when an account burns part of its spendable balance.
///
/// # Data
/// * `i128` - The amount burned in this call
/// * `i128` - The account's cumulative burned amount
pub fn emit_burned(e: &Env, account: &Address, amount: i128, total_burned: i128) {
    let topics = (Symbol::new(e, "burned"), account.clone());
    e.events().publish(topics, (amount, total_burned));
}

pub fn emit_minted(e: &Env, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "mint"), to.clone());
    e.events().publish(topics, amount);
}

pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, amount);
}

pub fn emit_approve(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let topics = (Symbol::new(e, "approve"), from.clone(), spender.clone());
    e.events().publish(topics, (amount, expiration_ledger));
}

pub fn emit_initialized(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "initialized"),), admin.clone());
}

pub fn emit_config_updated(e: &Env, admin: &Address, cfg: &AccrualConfig) {
    let topics = (Symbol::new(e, "config_updated"), admin.clone());
    e.events().publish(topics, cfg.clone());
}

pub fn emit_role_granted(e: &Env, account: &Address) {
    let topics = (Symbol::new(e, "role_granted"), account.clone());
    e.events().publish(topics, Symbol::new(e, "upgrade"));
}

pub fn emit_role_revoked(e: &Env, account: &Address) {
    let topics = (Symbol::new(e, "role_revoked"), account.clone());
    e.events().publish(topics, Symbol::new(e, "upgrade"));
}

pub fn emit_upgraded(e: &Env, caller: &Address, new_wasm_hash: &BytesN<32>) {
    let topics = (Symbol::new(e, "upgraded"), caller.clone());
    e.events().publish(topics, new_wasm_hash.clone());
}
