//! # stakegate-core
//!
//! Pure deterministic core of the **StakeGate** engine — zero side
//! effects, no I/O, no clocks, no state.
//!
//! Three jobs:
//! 1. [`derive_commitment`] — bind a pseudonymous searcher account to a
//!    builder account in one opaque digest.
//! 2. [`fee::split`] — skim the fixed protocol cut from a deposit, exactly.
//! 3. [`horizon`] — the checked height arithmetic behind lock maturities
//!    and stake-scaled maturity horizons.
//!
//! Everything here is a function of its arguments alone, so every caller
//! (the settlement engine, tests, hosts re-deriving commitments off-line)
//! gets identical results.

pub mod commitment;
pub mod fee;
pub mod horizon;

pub use commitment::derive_commitment;
pub use fee::{FeeSplit, split};
pub use horizon::{lock_maturity, stake_horizon};
