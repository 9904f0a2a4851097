//! Time-locked escrow entries.
//!
//! Entries are appended to a per-builder FIFO queue at deposit time and
//! released strictly from the front once matured. Queue position is
//! authoritative: a later entry is never released ahead of the head, even
//! if a configuration change gave it an earlier `matures_at`.

use serde::{Deserialize, Serialize};

use crate::{Height, Value};

/// One deposit's builder share, locked until a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEntry {
    /// Builder share of the deposit (gross minus protocol cut).
    pub net_amount: Value,
    /// First height at which this entry can be released.
    pub matures_at: Height,
}

impl LockEntry {
    #[must_use]
    pub fn new(net_amount: Value, matures_at: Height) -> Self {
        Self {
            net_amount,
            matures_at,
        }
    }

    /// Whether this entry can be released at `height`.
    #[must_use]
    pub fn is_matured_at(&self, height: Height) -> bool {
        height >= self.matures_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maturity_boundary() {
        let entry = LockEntry::new(Value::from(80), 100);
        assert!(!entry.is_matured_at(99));
        assert!(entry.is_matured_at(100));
        assert!(entry.is_matured_at(101));
    }

    #[test]
    fn zero_height_entry_is_immediately_matured() {
        let entry = LockEntry::new(Value::from(1), 0);
        assert!(entry.is_matured_at(0));
    }

    #[test]
    fn lock_entry_serde_roundtrip() {
        let entry = LockEntry::new(Value::from(999), 42);
        let json = serde_json::to_string(&entry).unwrap();
        let back: LockEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
