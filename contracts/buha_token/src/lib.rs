//! BUHA Token Contract
//!
//! A fungible token whose supply grows only through two time-locked accrual
//! paths and shrinks only through burning:
//!
//! - **Term minting**: an account commits to a term (`start_mint`) and claims
//!   a reward at maturity (`claim`) or a reduced one before it
//!   (`claim_early`).
//! - **Term staking**: an account locks spendable balance (`stake`) and gets
//!   it back with a time-proportional reward (`withdraw` / `withdraw_early`).
//! - **Burning**: `burn` destroys spendable balance and records it per
//!   account.
//!
//! ## Key design decisions
//!
//! - **One position of each kind per account**: positions are optional
//!   storage entries keyed by account, never sentinel values.
//! - **Validate, then write**: every entry point runs all of its checks
//!   before the first storage write; a returned error also rolls back the
//!   whole invocation on the host.
//! - **One clock read per call**: `now` is taken once at the top of each
//!   entry point and passed down.
//! - **Incremental counters**: `active_minters`, `active_stakes` and
//!   `total_staked` are updated next to the position they describe.
//! - **Configurable reward policy**: see `config.rs` and `reward.rs`.
//! - **Upgrade role**: only role holders can swap the contract code.

#![no_std]

mod access_control;
mod burns;
mod config;
mod counters;
mod events;
mod ledger;
mod math;
mod mint;
mod reward;
mod stake;
mod storage;
mod types;
mod validation;

pub use buha_errors::ContractError;
pub use config::{
    default_config, MAX_MINT_REWARD_PER_DAY, MAX_POLICY_BPS, MAX_STAKE_AMOUNT, MAX_TERM_DAYS_CAP,
    ONE_TOKEN,
};
pub use ledger::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
pub use types::{AccrualConfig, GlobalCounters, MintPosition, StakePosition, SECONDS_PER_DAY};

use mint::Settlement;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};


#[cfg(test)]
mod test_mint;

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BuhaToken;

#[contractimpl]
impl BuhaToken {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin`, the default accrual config
    /// and zeroed counters, and grants `admin` the upgrade role.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&types::DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&types::DataKey::Admin, &admin);
        config::store_config(&e, &config::default_config())?;
        counters::init(&e);
        access_control::grant_upgrade_role(&e, &admin);

        events::emit_initialized(&e, &admin);
        Ok(())
    }

    /// Replace the accrual configuration (admin only).
    ///
    /// # Errors
    /// * `NotAdmin` - `admin` is not the stored admin
    /// * `InvalidConfig` - a field is outside its bounds
    pub fn set_config(
        e: Env,
        admin: Address,
        new_config: AccrualConfig,
    ) -> Result<(), ContractError> {
        access_control::require_admin(&e, &admin)?;
        config::update_config(&e, &admin, &new_config)
    }

    pub fn get_config(e: Env) -> Result<AccrualConfig, ContractError> {
        config::get_config(&e)
    }

    pub fn admin(e: Env) -> Result<Address, ContractError> {
        access_control::get_admin(&e)
    }

    // ── Roles and upgrade ──────────────────────────────────────────────────

    pub fn grant_upgrade_role(
        e: Env,
        admin: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        access_control::require_admin(&e, &admin)?;
        access_control::grant_upgrade_role(&e, &account);
        Ok(())
    }

    pub fn revoke_upgrade_role(
        e: Env,
        admin: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        access_control::require_admin(&e, &admin)?;
        access_control::revoke_upgrade_role(&e, &account);
        Ok(())
    }

    pub fn has_upgrade_role(e: Env, account: Address) -> bool {
        access_control::has_upgrade_role(&e, &account)
    }

    /// Swap the contract code for `new_wasm_hash`, keeping all storage.
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` does not hold the upgrade role
    pub fn upgrade(
        e: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        access_control::require_upgrade_role(&e, &caller)?;
        log!(&e, "contract code upgrade", caller.clone());
        events::emit_upgraded(&e, &caller, &new_wasm_hash);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ── Term minting ───────────────────────────────────────────────────────

    /// Commit `account` to a mint of `term_days`.
    ///
    /// # Errors
    /// * `InvalidTerm` - `term_days` is 0 or above `max_mint_term_days`
    /// * `PositionExists` - the account is already minting
    pub fn start_mint(
        e: Env,
        account: Address,
        term_days: u32,
    ) -> Result<MintPosition, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        mint::start(&e, &account, term_days, now)
    }

    /// Claim the full-term mint reward. Returns the reward.
    ///
    /// # Errors
    /// * `NoPosition` - the account is not minting
    /// * `NotMature` - maturity has not been reached
    pub fn claim(e: Env, account: Address) -> Result<i128, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        mint::settle(&e, &account, now, Settlement::Matured)
    }

    /// Claim a reduced mint reward before maturity. Returns the reward.
    ///
    /// # Errors
    /// * `NoPosition` - the account is not minting
    /// * `AlreadyMature` - maturity has been reached; use `claim`
    pub fn claim_early(e: Env, account: Address) -> Result<i128, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        mint::settle(&e, &account, now, Settlement::Early)
    }

    /// Claim a matured mint and stake `percentage` % of the reward for
    /// `staking_term` days. The rest of the reward stays spendable.
    ///
    /// Either both halves happen or neither does: the stake half is checked
    /// against the post-claim balance before the claim is applied.
    ///
    /// # Errors
    /// * `NoPosition`, `NotMature` - as for `claim`
    /// * `InvalidPercentage` - `percentage > 100`
    /// * everything `stake` returns for the derived amount and term
    pub fn claim_and_stake(
        e: Env,
        account: Address,
        percentage: u32,
        staking_term: u32,
    ) -> Result<StakePosition, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();

        let reward = mint::quote(&e, &account, now, Settlement::Matured)?;
        validation::validate_percentage(percentage)?;
        let stake_amount = math::mul_div(reward, percentage as i128, 100)?;

        let cfg = config::get_config(&e)?;
        let spendable_after = math::add_i128(ledger::balance(&e, &account), reward)?;
        stake::check_open(&e, &cfg, &account, stake_amount, staking_term, spendable_after)?;

        mint::settle(&e, &account, now, Settlement::Matured)?;
        stake::open(&e, &account, stake_amount, staking_term, now)
    }

    pub fn user_mints(e: Env, account: Address) -> Option<MintPosition> {
        mint::get(&e, &account)
    }

    /// Reward `account` would receive by settling its mint now.
    pub fn mint_reward_preview(e: Env, account: Address) -> Result<Option<i128>, ContractError> {
        mint::preview(&e, &account, e.ledger().timestamp())
    }

    // ── Term staking ───────────────────────────────────────────────────────

    /// Lock `amount` of spendable balance for `term_days`.
    ///
    /// # Errors
    /// * `InsufficientBalance` - `amount` exceeds the spendable balance
    /// * `BelowMinStake` - `amount < min_stake_amount`
    /// * `AboveMaxStake` - `amount > MAX_STAKE_AMOUNT`
    /// * `InvalidTerm` - `term_days == 0`
    /// * `AboveMaxTerm` - `term_days > max_stake_term_days`
    /// * `PositionExists` - the account is already staking
    pub fn stake(
        e: Env,
        account: Address,
        amount: i128,
        term_days: u32,
    ) -> Result<StakePosition, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        stake::open(&e, &account, amount, term_days, now)
    }

    /// Return principal plus accrued reward. Returns the reward.
    ///
    /// # Errors
    /// * `NoPosition` - the account is not staking
    pub fn withdraw(e: Env, account: Address) -> Result<i128, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        stake::close(&e, &account, now)
    }

    /// Same payout and bookkeeping as `withdraw`; the entry point for exits
    /// before maturity.
    pub fn withdraw_early(e: Env, account: Address) -> Result<i128, ContractError> {
        account.require_auth();
        let now = e.ledger().timestamp();
        stake::close(&e, &account, now)
    }

    pub fn user_stakes(e: Env, account: Address) -> Option<StakePosition> {
        stake::get(&e, &account)
    }

    /// Reward `account` would receive by withdrawing now.
    pub fn stake_reward_preview(e: Env, account: Address) -> Result<Option<i128>, ContractError> {
        stake::preview(&e, &account, e.ledger().timestamp())
    }

    // ── Burning ────────────────────────────────────────────────────────────

    /// Burn `amount` of spendable balance.
    ///
    /// # Errors
    /// * `ExceedsBalance` - `amount` exceeds the spendable balance
    /// * `InvalidAmount` - `amount` is negative
    pub fn burn(e: Env, account: Address, amount: i128) -> Result<(), ContractError> {
        account.require_auth();
        burns::burn(&e, &account, amount)?;
        Ok(())
    }

    pub fn user_burns(e: Env, account: Address) -> i128 {
        burns::user_burns(&e, &account)
    }

    // ── Global counters ────────────────────────────────────────────────────

    pub fn active_minters(e: Env) -> u32 {
        counters::get(&e).active_minters
    }

    pub fn active_stakes(e: Env) -> u32 {
        counters::get(&e).active_stakes
    }

    pub fn total_staked(e: Env) -> i128 {
        counters::get(&e).total_staked
    }

    pub fn counters(e: Env) -> GlobalCounters {
        counters::get(&e)
    }

    // ── Token ──────────────────────────────────────────────────────────────

    pub fn name(e: Env) -> String {
        String::from_str(&e, TOKEN_NAME)
    }

    pub fn symbol(e: Env) -> String {
        String::from_str(&e, TOKEN_SYMBOL)
    }

    pub fn decimals(_e: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(e: Env) -> i128 {
        ledger::total_supply(&e)
    }

    /// Spendable balance; locked stake principal is not included.
    pub fn balance(e: Env, id: Address) -> i128 {
        ledger::balance(&e, &id)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        ledger::transfer(&e, &from, &to, amount)
    }

    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();
        ledger::approve(&e, &from, &spender, amount, expiration_ledger)
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&e, &from, &spender)
    }

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        ledger::spend_allowance(&e, &from, &spender, amount)?;
        ledger::transfer(&e, &from, &to, amount)
    }
}
