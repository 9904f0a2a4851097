//! Error types for the StakeGate settlement engine.
//!
//! All errors use the `SG_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Authorization errors
//! - 2xx: Deposit / amount errors
//! - 3xx: Withdrawal / queue errors
//! - 4xx: Ledger transfer errors
//! - 8xx: Invariant errors

use thiserror::Error;

use crate::{Height, Value};

/// Central error enum for all StakeGate operations.
///
/// Every failure is an atomic rejection: the operation that returned it
/// has left no partial state behind.
#[derive(Debug, Error)]
pub enum EngineError {
    // =================================================================
    // Authorization Errors (1xx)
    // =================================================================
    /// The caller attempted an operation reserved for another account.
    #[error("SG_ERR_100: Unauthorized: {reason}")]
    Unauthorized { reason: String },

    // =================================================================
    // Deposit / Amount Errors (2xx)
    // =================================================================
    /// A zero-value deposit was attempted.
    #[error("SG_ERR_200: Invalid amount: deposit must be greater than zero")]
    InvalidAmount,

    /// An accumulation step would exceed the value or height range.
    #[error("SG_ERR_201: Arithmetic overflow")]
    ArithmeticOverflow,

    // =================================================================
    // Withdrawal / Queue Errors (3xx)
    // =================================================================
    /// Withdraw called with no lock entries queued for the caller.
    #[error("SG_ERR_300: No locked funds")]
    EmptyQueue,

    /// Withdraw called while the head lock entry is still immature.
    #[error(
        "SG_ERR_301: Nothing to withdraw: head entry matures at height \
         {matures_at}, current height {current}"
    )]
    NotYetMatured { matures_at: Height, current: Height },

    /// Protocol fee collection with a zero accrued balance.
    #[error("SG_ERR_302: No protocol fees accrued")]
    NoFeesAccrued,

    // =================================================================
    // Ledger Transfer Errors (4xx)
    // =================================================================
    /// The ledger account lacks the funds required for the transfer.
    #[error("SG_ERR_400: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Value, available: Value },

    /// The ledger substrate rejected an outbound transfer.
    #[error("SG_ERR_401: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // =================================================================
    // Invariant Errors (8xx)
    // =================================================================
    /// Fund conservation invariant violated — critical safety alert.
    #[error("SG_ERR_800: Conservation invariant violation: {reason}")]
    ConservationViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = EngineError::EmptyQueue;
        let msg = format!("{err}");
        assert!(msg.starts_with("SG_ERR_300"), "Got: {msg}");
    }

    #[test]
    fn empty_queue_names_no_locked_funds() {
        let msg = format!("{}", EngineError::EmptyQueue);
        assert!(msg.contains("No locked funds"), "Got: {msg}");
    }

    #[test]
    fn not_yet_matured_names_heights() {
        let err = EngineError::NotYetMatured {
            matures_at: 110,
            current: 100,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Nothing to withdraw"), "Got: {msg}");
        assert!(msg.contains("110"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn insufficient_funds_display() {
        let err = EngineError::InsufficientFunds {
            needed: Value::from(100),
            available: Value::from(50),
        };
        let msg = format!("{err}");
        assert!(msg.contains("SG_ERR_400"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn all_errors_have_sg_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(EngineError::Unauthorized {
                reason: "test".into(),
            }),
            Box::new(EngineError::InvalidAmount),
            Box::new(EngineError::ArithmeticOverflow),
            Box::new(EngineError::NoFeesAccrued),
            Box::new(EngineError::TransferFailed {
                reason: "test".into(),
            }),
            Box::new(EngineError::ConservationViolation {
                reason: "test".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SG_ERR_"),
                "Error missing SG_ERR_ prefix: {msg}"
            );
        }
    }
}
