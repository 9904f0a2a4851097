//! Account and commitment identifiers used throughout StakeGate.
//!
//! `AccountId` is the ledger substrate's fixed-width account handle;
//! `Commitment` is the digest binding a pseudonymous searcher account to a
//! builder. Both are opaque to the engine: compared, hashed, and displayed,
//! never interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Opaque 20-byte account handle supplied by the ledger substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    /// Random account handle for tests.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Commitment
// ---------------------------------------------------------------------------

/// 32-byte digest binding a pseudonymous searcher account to a builder.
///
/// Produced by `stakegate_core::derive_commitment`. The engine only ever
/// uses it as a mapping key and never attempts to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Commitment(pub [u8; 32]);

impl Commitment {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmt:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_display_prefix() {
        let id = AccountId::from_bytes([0xAB; 20]);
        let s = format!("{id}");
        assert!(s.starts_with("acct:"), "Got: {s}");
        assert_eq!(s, "acct:abababababababab");
    }

    #[test]
    fn account_id_short_is_four_bytes() {
        let id = AccountId::from_bytes([0x01; 20]);
        assert_eq!(id.short(), "01010101");
    }

    #[test]
    fn account_id_roundtrips_bytes() {
        let bytes = [7u8; 20];
        let id = AccountId::from_bytes(bytes);
        assert_eq!(*id.as_bytes(), bytes);
    }

    #[test]
    fn account_id_random_uniqueness() {
        let a = AccountId::random();
        let b = AccountId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn commitment_display_prefix() {
        let c = Commitment::from_bytes([0xCD; 32]);
        let s = format!("{c}");
        assert!(s.starts_with("cmt:"), "Got: {s}");
    }

    #[test]
    fn serde_roundtrips() {
        let id = AccountId::random();
        let json = serde_json::to_string(&id).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let c = Commitment::from_bytes([9u8; 32]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
