//! Maturity height arithmetic.
//!
//! Two different maturities come out of one deposit:
//!
//! - the **lock maturity** of the queue entry, a flat
//!   `height + minimal_lock_period`, which gates when the builder share
//!   can actually be released;
//! - the **stake horizon** of the commitment, scaled by how many multiples
//!   of the builder's threshold the aggregate stake covers, which is the
//!   advisory "subscription served until" signal.
//!
//! All arithmetic is checked; any step that would wrap rejects the whole
//! operation.

use stakegate_types::{BuilderConfig, EngineError, Height, Result, Value};

/// Advisory maturity horizon for a commitment's aggregate stake:
/// `height + minimal_lock_period * floor(total_stake / minimal_stake)`.
///
/// A zero threshold collapses the horizon to the current height — an open
/// builder is served immediately.
///
/// # Errors
/// Returns [`EngineError::ArithmeticOverflow`] if the scaled extension
/// exceeds the height range.
pub fn stake_horizon(
    height: Height,
    config: &BuilderConfig,
    total_stake: Value,
) -> Result<Height> {
    if config.minimal_stake.is_zero() {
        return Ok(height);
    }
    let multiplier = total_stake / config.minimal_stake;
    let extension = Value::from(config.minimal_lock_period)
        .checked_mul(multiplier)
        .ok_or(EngineError::ArithmeticOverflow)?;
    if extension > Value::from(u64::MAX) {
        return Err(EngineError::ArithmeticOverflow);
    }
    height
        .checked_add(extension.as_u64())
        .ok_or(EngineError::ArithmeticOverflow)
}

/// Release height for a single lock entry created at `height`.
///
/// # Errors
/// Returns [`EngineError::ArithmeticOverflow`] if the height range is
/// exceeded.
pub fn lock_maturity(height: Height, config: &BuilderConfig) -> Result<Height> {
    height
        .checked_add(config.minimal_lock_period)
        .ok_or(EngineError::ArithmeticOverflow)
}
