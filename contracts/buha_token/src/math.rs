//! Overflow-safe arithmetic helpers for reward and balance calculations.
//!
//! Every helper uses checked arithmetic and reports failure as
//! `ContractError::Overflow` / `ContractError::Underflow`, so callers can
//! propagate with `?` instead of panicking.

use buha_errors::ContractError;

/// Basis-point denominator (100 bps = 1 %).
pub const BPS: i128 = 10_000;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division. A zero divisor is reported as `Overflow`.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `a * b / c` with checked intermediates, floor division.
#[inline]
pub fn mul_div(a: i128, b: i128, c: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(a, b)?, c)
}

/// Checked `u32` increment.
#[inline]
pub fn inc_u32(a: u32) -> Result<u32, ContractError> {
    a.checked_add(1).ok_or(ContractError::Overflow)
}

/// Checked `u32` decrement.
#[inline]
pub fn dec_u32(a: u32) -> Result<u32, ContractError> {
    a.checked_sub(1).ok_or(ContractError::Underflow)
}

/// Checked `u64` timestamp offset: `start + days * 86_400`.
#[inline]
pub fn add_days(start: u64, days: u32) -> Result<u64, ContractError> {
    let secs = (days as u64)
        .checked_mul(crate::types::SECONDS_PER_DAY)
        .ok_or(ContractError::Overflow)?;
    start.checked_add(secs).ok_or(ContractError::Overflow)
}

/// Basis-point share of an amount: `amount * bps / 10_000`.
#[inline]
pub fn bps(amount: i128, bps: u32) -> Result<i128, ContractError> {
    mul_div(amount, bps as i128, BPS)
}
