//! Deposit receipts.
//!
//! Every accepted deposit returns a [`DepositReceipt`] describing exactly
//! how the amount was split and what the commitment's stake state became.
//! Hosts forward receipts to callers; tests read them to check fee
//! exactness.

use serde::{Deserialize, Serialize};

use crate::{AccountId, Commitment, Height, Value};

/// The outcome of one accepted deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositReceipt {
    /// Builder the deposit was addressed to.
    pub builder: AccountId,
    /// Commitment the stake was credited to.
    pub commitment: Commitment,
    /// Amount the depositor paid.
    pub gross_amount: Value,
    /// Protocol share skimmed from the gross amount.
    pub protocol_cut: Value,
    /// Builder share pushed onto the lock queue.
    pub net_amount: Value,
    /// Commitment's aggregate stake after this deposit.
    pub total_stake: Value,
    /// Commitment's advisory maturity horizon after this deposit.
    pub maturity_horizon: Height,
    /// Height at which the lock entry for this deposit can be released.
    pub matures_at: Height,
}

impl DepositReceipt {
    /// The split is exact: cut plus net always reassembles the gross
    /// amount.
    #[must_use]
    pub fn split_is_exact(&self) -> bool {
        self.protocol_cut
            .checked_add(self.net_amount)
            .is_some_and(|sum| sum == self.gross_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(gross: u64, cut: u64, net: u64) -> DepositReceipt {
        DepositReceipt {
            builder: AccountId::from_bytes([1u8; 20]),
            commitment: Commitment::from_bytes([2u8; 32]),
            gross_amount: Value::from(gross),
            protocol_cut: Value::from(cut),
            net_amount: Value::from(net),
            total_stake: Value::from(gross),
            maturity_horizon: 10,
            matures_at: 10,
        }
    }

    #[test]
    fn exact_split_detected() {
        assert!(receipt(100, 20, 80).split_is_exact());
        assert!(receipt(99, 19, 80).split_is_exact());
    }

    #[test]
    fn inexact_split_detected() {
        assert!(!receipt(100, 20, 79).split_is_exact());
    }

    #[test]
    fn receipt_serde_roundtrip() {
        let r = receipt(1000, 200, 800);
        let json = serde_json::to_string(&r).unwrap();
        let back: DepositReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
