//! # stakegate-settlement
//!
//! **Escrow plane**: stake intake, fee accrual, per-builder time-lock
//! queues, withdrawal release, and fund conservation for the StakeGate
//! engine.
//!
//! ## Architecture
//!
//! The [`SettlementEngine`] owns every piece of escrow state and applies
//! each operation as one atomic step:
//! 1. Validate everything (amounts, checked arithmetic, authorization)
//! 2. Move value across the [`LedgerAdapter`] boundary
//! 3. Commit the precomputed state and append the event
//!
//! A failure at any validation point leaves all state untouched. The
//! [`FundConservation`] books cross-check custody after the fact:
//! everything deposited is either withdrawn, still queued, or accrued to
//! the protocol balance.

pub mod conservation;
pub mod engine;
pub mod ledger;
pub mod lock_queue;
pub mod registry;
pub mod stake_ledger;

pub use conservation::FundConservation;
pub use engine::SettlementEngine;
pub use ledger::{InMemoryLedger, LedgerAdapter};
pub use lock_queue::LockQueue;
pub use registry::BuilderRegistry;
pub use stake_ledger::StakeLedger;
