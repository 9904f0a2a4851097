//! Fund conservation invariant checker.
//!
//! Mathematical invariant enforced at every observation point:
//! ```text
//! Σ(deposited) == Σ(withdrawn) + Σ(queued net amounts) + protocol balance
//! ```
//!
//! If this invariant ever breaks, the books disagree with custody and the
//! host must halt intake. This is the ultimate safety net.

use stakegate_types::{EngineError, Result, Value};

/// Cumulative intake/outflow books since genesis.
///
/// Updates are copy-on-validate: [`Self::with_deposit`] and
/// [`Self::with_withdrawal`] return the successor books, so the engine can
/// reject overflow before committing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundConservation {
    deposited: Value,
    withdrawn: Value,
}

impl FundConservation {
    /// Fresh books: nothing in, nothing out.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deposited: Value::zero(),
            withdrawn: Value::zero(),
        }
    }

    /// Successor books after a deposit of `amount`.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if cumulative intake
    /// would wrap.
    pub fn with_deposit(&self, amount: Value) -> Result<Self> {
        let deposited = self
            .deposited
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        Ok(Self {
            deposited,
            withdrawn: self.withdrawn,
        })
    }

    /// Successor books after a payout of `amount`.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if cumulative outflow
    /// would wrap.
    pub fn with_withdrawal(&self, amount: Value) -> Result<Self> {
        let withdrawn = self
            .withdrawn
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        Ok(Self {
            deposited: self.deposited,
            withdrawn,
        })
    }

    /// Cumulative intake since genesis.
    #[must_use]
    pub fn deposited(&self) -> Value {
        self.deposited
    }

    /// Cumulative outflow since genesis.
    #[must_use]
    pub fn withdrawn(&self) -> Value {
        self.withdrawn
    }

    /// Value the books say should still be in custody.
    ///
    /// # Errors
    /// Returns [`EngineError::ConservationViolation`] if outflow exceeds
    /// intake — value left that never entered.
    pub fn expected_outstanding(&self) -> Result<Value> {
        self.deposited
            .checked_sub(self.withdrawn)
            .ok_or_else(|| EngineError::ConservationViolation {
                reason: format!(
                    "withdrawn {} exceeds deposited {}",
                    self.withdrawn, self.deposited
                ),
            })
    }

    /// Verify the books against the actual outstanding value (queued net
    /// amounts plus protocol balance).
    ///
    /// # Errors
    /// Returns [`EngineError::ConservationViolation`] if actual ≠ expected.
    pub fn verify(&self, actual_outstanding: Value) -> Result<()> {
        let expected = self.expected_outstanding()?;
        if actual_outstanding != expected {
            return Err(EngineError::ConservationViolation {
                reason: format!(
                    "outstanding {actual_outstanding} != expected {expected} \
                     (deposited={}, withdrawn={})",
                    self.deposited, self.withdrawn
                ),
            });
        }
        Ok(())
    }
}

impl Default for FundConservation {
    fn default() -> Self {
        Self::new()
    }
}
