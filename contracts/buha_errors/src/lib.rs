#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Mint and stake term errors (codes 200-299).
    Term,
    /// Mint and stake position lifecycle errors (codes 300-399).
    Position,
    /// Spendable balance, allowance and amount errors (codes 400-499).
    Balance,
    /// Accrual configuration errors (codes 500-599).
    Configuration,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the BUHA contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Term
///   300 - 399 : Position
///   400 - 499 : Balance
///   500 - 599 : Configuration
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller does not hold the upgrade role.
    Unauthorized = 100,

    /// Caller is not the admin.
    NotAdmin = 101,

    // --- Term (200-299) ---
    /// Mint term is zero or above the configured maximum; stake term is zero.
    InvalidTerm = 200,

    /// Stake term is above the configured maximum.
    AboveMaxTerm = 201,

    // --- Position (300-399) ---
    /// The account already holds a position of this kind.
    PositionExists = 300,

    /// The account holds no position of this kind.
    NoPosition = 301,

    /// The mint position has not reached maturity.
    NotMature = 302,

    /// The mint position has reached maturity; early claim is closed.
    AlreadyMature = 303,

    // --- Balance (400-499) ---
    /// Spendable balance is below the requested amount.
    InsufficientBalance = 400,

    /// Stake amount is below the configured minimum.
    BelowMinStake = 401,

    /// Burn amount exceeds the spendable balance.
    ExceedsBalance = 402,

    /// Spender allowance is below the requested amount.
    InsufficientAllowance = 403,

    /// Amount argument is negative.
    InvalidAmount = 404,

    /// Stake amount is above the largest principal the reward math supports.
    AboveMaxStake = 405,

    /// Claim-and-stake percentage is above 100.
    InvalidPercentage = 406,

    // --- Configuration (500-599) ---
    /// A configuration field is outside its allowed bounds.
    InvalidConfig = 500,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::Unauthorized | ContractError::NotAdmin => ErrorCategory::Authorization,

            ContractError::InvalidTerm | ContractError::AboveMaxTerm => ErrorCategory::Term,

            ContractError::PositionExists
            | ContractError::NoPosition
            | ContractError::NotMature
            | ContractError::AlreadyMature => ErrorCategory::Position,

            ContractError::InsufficientBalance
            | ContractError::BelowMinStake
            | ContractError::ExceedsBalance
            | ContractError::InsufficientAllowance
            | ContractError::InvalidAmount
            | ContractError::AboveMaxStake
            | ContractError::InvalidPercentage => ErrorCategory::Balance,

            ContractError::InvalidConfig => ErrorCategory::Configuration,

            ContractError::Overflow | ContractError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::Unauthorized => "Caller does not hold the upgrade role",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::InvalidTerm => "Term is zero or above the maximum mint term",
            ContractError::AboveMaxTerm => "Term is above the maximum stake term",
            ContractError::PositionExists => "Account already holds a position",
            ContractError::NoPosition => "Account holds no position",
            ContractError::NotMature => "Position has not reached maturity",
            ContractError::AlreadyMature => "Position has reached maturity",
            ContractError::InsufficientBalance => "Spendable balance is insufficient",
            ContractError::BelowMinStake => "Stake amount is below the minimum",
            ContractError::ExceedsBalance => "Burn amount exceeds the spendable balance",
            ContractError::InsufficientAllowance => "Spender allowance is insufficient",
            ContractError::InvalidAmount => "Amount must be non-negative",
            ContractError::AboveMaxStake => "Stake amount is above the supported maximum",
            ContractError::InvalidPercentage => "Percentage must be in range 0-100",
            ContractError::InvalidConfig => "Configuration value is out of bounds",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}
