//! Engine event log.
//!
//! Every successful state change appends one [`EngineEvent`] to the
//! engine's append-only log. The host substrate forwards events to
//! whatever notification transport it runs; the engine itself never reads
//! them back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AccountId, Commitment, Height, Value};

/// A state-change notification emitted by the settlement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A builder created or overwrote its escrow configuration.
    ConfigUpdated {
        builder: AccountId,
        minimal_stake: Value,
        minimal_lock_period: Height,
    },
    /// A deposit changed a commitment's aggregate stake.
    StakeUpdated {
        builder: AccountId,
        commitment: Commitment,
        total_stake: Value,
        maturity_horizon: Height,
    },
    /// A builder drained the matured prefix of its lock queue.
    Withdrawal { builder: AccountId, amount: Value },
    /// Engine ownership moved to a new account.
    OwnershipTransferred {
        previous_owner: AccountId,
        new_owner: AccountId,
    },
    /// The owner collected the accrued protocol balance.
    ProtocolFeesCollected { recipient: AccountId, amount: Value },
}

impl EngineEvent {
    /// Stable uppercase tag for log filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigUpdated { .. } => "CONFIG_UPDATED",
            Self::StakeUpdated { .. } => "STAKE_UPDATED",
            Self::Withdrawal { .. } => "WITHDRAWAL",
            Self::OwnershipTransferred { .. } => "OWNERSHIP_TRANSFERRED",
            Self::ProtocolFeesCollected { .. } => "PROTOCOL_FEES_COLLECTED",
        }
    }
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds() {
        let e = EngineEvent::Withdrawal {
            builder: AccountId::from_bytes([1u8; 20]),
            amount: Value::from(80),
        };
        assert_eq!(e.kind(), "WITHDRAWAL");
        assert_eq!(format!("{e}"), "WITHDRAWAL");

        let e = EngineEvent::StakeUpdated {
            builder: AccountId::from_bytes([1u8; 20]),
            commitment: Commitment::from_bytes([2u8; 32]),
            total_stake: Value::from(100),
            maturity_horizon: 5,
        };
        assert_eq!(e.kind(), "STAKE_UPDATED");
    }

    #[test]
    fn event_serde_roundtrip() {
        let e = EngineEvent::ConfigUpdated {
            builder: AccountId::from_bytes([3u8; 20]),
            minimal_stake: Value::from(1000),
            minimal_lock_period: 64,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
