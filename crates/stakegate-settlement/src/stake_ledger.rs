//! Per-commitment stake ledger.
//!
//! Gross deposits accumulate here and never leave: the record is the
//! eligibility meter builders read, not a balance anyone withdraws.
//! Records are created zeroed on first touch and never deleted.

use std::collections::HashMap;

use stakegate_types::{BuilderConfig, Commitment, StakeRecord};

/// Aggregate stake state, keyed by commitment.
pub struct StakeLedger {
    records: HashMap<Commitment, StakeRecord>,
}

impl StakeLedger {
    /// Create an empty stake ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Current record; zeroed for commitments never deposited to.
    #[must_use]
    pub fn record(&self, commitment: Commitment) -> StakeRecord {
        self.records.get(&commitment).copied().unwrap_or_default()
    }

    /// Store the successor record for a commitment.
    ///
    /// The engine computes the full successor up front, so this commit
    /// step cannot fail.
    pub fn commit(&mut self, commitment: Commitment, record: StakeRecord) {
        self.records.insert(commitment, record);
    }

    /// Eligibility read: has the commitment staked at least the builder's
    /// threshold? Open builders (zero threshold) always qualify.
    #[must_use]
    pub fn meets_threshold(&self, commitment: Commitment, config: &BuilderConfig) -> bool {
        self.record(commitment).total_stake >= config.minimal_stake
    }

    /// Number of commitments with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StakeLedger {
    fn default() -> Self {
        Self::new()
    }
}
