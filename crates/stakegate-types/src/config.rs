//! Builder-side escrow configuration.
//!
//! Each builder account owns one [`BuilderConfig`], created on first
//! configure and overwritten on every re-configure. A builder with no
//! record (or a zero threshold) is "open": any stake qualifies immediately
//! and nothing scales the maturity horizon.

use serde::{Deserialize, Serialize};

use crate::{Height, Value};

/// Per-builder escrow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Stake threshold a commitment must reach before the builder
    /// considers it eligible. Zero means any stake qualifies.
    pub minimal_stake: Value,
    /// Heights each deposit's builder share stays locked; also the unit
    /// scaled by the stake multiplier for the maturity horizon.
    pub minimal_lock_period: Height,
}

impl BuilderConfig {
    #[must_use]
    pub fn new(minimal_stake: Value, minimal_lock_period: Height) -> Self {
        Self {
            minimal_stake,
            minimal_lock_period,
        }
    }

    /// Whether this builder accepts any stake without a threshold.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.minimal_stake.is_zero()
    }
}
