//! Commitment derivation.
//!
//! A commitment binds a pseudonymous searcher account to a builder:
//!
//! ```text
//! commitment = SHA-256("stakegate:commitment:v1:" || searcher || builder)
//! ```
//!
//! The digest is order-sensitive — swapping the operands yields a
//! different commitment — and is never reversed; the engine only ever uses
//! it as a mapping key.

use sha2::{Digest, Sha256};
use stakegate_types::{AccountId, Commitment};

/// ASCII domain prefix, versioned so future derivations can coexist.
const DOMAIN_PREFIX: &[u8] = b"stakegate:commitment:v1:";

/// Derive the commitment for a (searcher, builder) pair.
///
/// Deterministic and infallible: the same pair produces the same digest on
/// every node.
#[must_use]
pub fn derive_commitment(searcher: AccountId, builder: AccountId) -> Commitment {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_PREFIX);
    hasher.update(searcher.as_bytes());
    hasher.update(builder.as_bytes());
    let hash: [u8; 32] = hasher.finalize().into();
    Commitment(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let searcher = AccountId::from_bytes([1u8; 20]);
        let builder = AccountId::from_bytes([2u8; 20]);
        let a = derive_commitment(searcher, builder);
        let b = derive_commitment(searcher, builder);
        assert_eq!(a, b);
    }

    #[test]
    fn derivation_is_order_sensitive() {
        let searcher = AccountId::from_bytes([1u8; 20]);
        let builder = AccountId::from_bytes([2u8; 20]);
        assert_ne!(
            derive_commitment(searcher, builder),
            derive_commitment(builder, searcher)
        );
    }

    #[test]
    fn distinct_searchers_produce_distinct_commitments() {
        let builder = AccountId::from_bytes([9u8; 20]);
        let a = derive_commitment(AccountId::from_bytes([1u8; 20]), builder);
        let b = derive_commitment(AccountId::from_bytes([2u8; 20]), builder);
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_builders_produce_distinct_commitments() {
        let searcher = AccountId::from_bytes([7u8; 20]);
        let a = derive_commitment(searcher, AccountId::from_bytes([1u8; 20]));
        let b = derive_commitment(searcher, AccountId::from_bytes([2u8; 20]));
        assert_ne!(a, b);
    }

    #[test]
    fn random_pairs_never_collide_with_swap() {
        for _ in 0..16 {
            let searcher = AccountId::random();
            let builder = AccountId::random();
            if searcher == builder {
                continue;
            }
            assert_ne!(
                derive_commitment(searcher, builder),
                derive_commitment(builder, searcher)
            );
        }
    }
}
