//! Per-commitment stake accounting.
//!
//! A [`StakeRecord`] is the eligibility meter a builder reads for a
//! commitment, not a withdrawable balance: withdrawals drain the lock
//! queue and leave the record untouched.

use serde::{Deserialize, Serialize};

use crate::{Height, Value};

/// Aggregate stake state for one commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StakeRecord {
    /// Gross sum of every deposit addressed to this commitment.
    /// Never decremented.
    pub total_stake: Value,
    /// Advisory height at which this commitment's stake counts as mature.
    /// Only ever moves forward.
    pub maturity_horizon: Height,
}

impl StakeRecord {
    /// Zeroed record: the state of any commitment before its first deposit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the advisory horizon has been reached at `height`.
    #[must_use]
    pub fn horizon_reached(&self, height: Height) -> bool {
        height >= self.maturity_horizon
    }

    /// Whether this record has never been deposited to.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_stake.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_is_zero() {
        let record = StakeRecord::new();
        assert!(record.is_zero());
        assert_eq!(record.maturity_horizon, 0);
        assert!(record.horizon_reached(0));
    }

    #[test]
    fn horizon_boundary() {
        let record = StakeRecord {
            total_stake: Value::from(100),
            maturity_horizon: 50,
        };
        assert!(!record.horizon_reached(49));
        assert!(record.horizon_reached(50));
        assert!(record.horizon_reached(51));
    }

    #[test]
    fn stake_record_serde_roundtrip() {
        let record = StakeRecord {
            total_stake: Value::from(12_345),
            maturity_horizon: 777,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: StakeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
