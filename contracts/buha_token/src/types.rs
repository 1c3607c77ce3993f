use soroban_sdk::{contracttype, Address};

// ─── TTL constants ─────────────────────────────────────────────────────────

/// Minimum ledger TTL before a persistent entry is bumped (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

/// One day in seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ─── Positions ─────────────────────────────────────────────────────────────

/// An account's outstanding term mint. Absent from storage when the account
/// is not minting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintPosition {
    /// Committed term in days (`1..=max_mint_term_days`).
    pub term_days: u32,
    /// Ledger timestamp at creation.
    pub started_at: u64,
    /// `started_at + term_days * 86_400`.
    pub maturity_at: u64,
}

/// An account's locked principal. Absent from storage when the account is
/// not staking.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    /// Locked principal, moved out of the spendable balance.
    pub amount: i128,
    /// Committed term in days (`1..=max_stake_term_days`).
    pub term_days: u32,
    /// Ledger timestamp at creation.
    pub started_at: u64,
    /// `started_at + term_days * 86_400`.
    pub maturity_at: u64,
}

// ─── Aggregates ────────────────────────────────────────────────────────────

/// Process-wide aggregates, updated in the same invocation as the position
/// they describe.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalCounters {
    /// Accounts holding a `MintPosition`.
    pub active_minters: u32,
    /// Accounts holding a `StakePosition`.
    pub active_stakes: u32,
    /// Sum of `StakePosition.amount` over all accounts.
    pub total_staked: i128,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Reward policy and term limits. See `config.rs` for bounds and defaults.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccrualConfig {
    pub max_mint_term_days: u32,
    pub max_stake_term_days: u32,
    pub min_stake_amount: i128,
    /// Full-term mint reward per committed day, before the term bonus.
    pub mint_reward_per_day: i128,
    /// Extra mint reward in bps per 365 days of committed term.
    pub mint_term_bonus_bps: u32,
    /// Haircut applied to the pro-rata reward of an early claim.
    pub mint_early_penalty_bps: u32,
    /// Annual stake yield on principal.
    pub stake_apy_bps: u32,
    /// Extra stake yield in bps per 365 days of committed term.
    pub stake_term_bonus_bps: u32,
}

// ─── Token ─────────────────────────────────────────────────────────────────

/// Spender allowance with its expiry ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Active `AccrualConfig`.
    Config,
    /// `GlobalCounters`.
    Counters,
    /// Total token supply, locked stake principal included.
    TotalSupply,
    /// Per-account spendable balance.
    Balance(Address),
    /// Allowance keyed by (owner, spender).
    Allowance(Address, Address),
    /// Per-account mint position.
    Mint(Address),
    /// Per-account stake position.
    Stake(Address),
    /// Per-account cumulative burned amount.
    Burned(Address),
    /// Upgrade role membership.
    UpgradeRole(Address),
}
