//! Amount and height primitives.
//!
//! Amounts are 256-bit unsigned integers in the ledger's native unit; the
//! engine never does fractional arithmetic. Heights come from the
//! substrate's monotonic counter — no wall-clock time anywhere.

pub use primitive_types::U256;

/// Amount in the ledger's native unit.
///
/// Every accumulation on a `Value` must use checked arithmetic; wrapping
/// is never acceptable in fund accounting.
pub type Value = U256;

/// Monotonically non-decreasing ledger height.
pub type Height = u64;
