//! # stakegate-types
//!
//! Shared types, errors, and configuration for the **StakeGate** escrow and
//! time-locked settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`Commitment`]
//! - **Amounts and heights**: [`Value`] (256-bit unsigned), [`Height`]
//! - **Builder configuration**: [`BuilderConfig`]
//! - **Stake model**: [`StakeRecord`]
//! - **Lock model**: [`LockEntry`]
//! - **Receipts**: [`DepositReceipt`]
//! - **Events**: [`EngineEvent`]
//! - **Errors**: [`EngineError`] with `SG_ERR_` prefix codes
//! - **Constants**: fee schedule and engine identity

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod lock;
pub mod receipt;
pub mod stake;
pub mod value;

// Re-export all primary types at crate root for ergonomic imports:
//   use stakegate_types::{AccountId, Commitment, StakeRecord, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use lock::*;
pub use receipt::*;
pub use stake::*;
pub use value::*;

// Constants are accessed via `stakegate_types::constants::FOO`
// (not re-exported to avoid name collisions).
