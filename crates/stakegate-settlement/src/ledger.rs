//! Ledger substrate boundary.
//!
//! The engine never holds value itself; it directs the host ledger to
//! move it. `transfer_in` models a value-bearing call (the caller's funds
//! enter engine custody), `transfer_out` pays custody out. Both are
//! atomic with the operation that triggered them, which the host
//! guarantees by running each engine operation as a single step.

use std::collections::HashMap;

use stakegate_types::{AccountId, EngineError, Height, Result, Value};

/// Host ledger contract: height source plus custody transfers.
pub trait LedgerAdapter {
    /// Current height of the substrate's monotonic counter.
    fn current_height(&self) -> Height;

    /// Move `amount` from `from` into engine custody.
    ///
    /// # Errors
    /// Returns [`EngineError::InsufficientFunds`] if the account cannot
    /// cover the amount.
    fn transfer_in(&mut self, from: AccountId, amount: Value) -> Result<()>;

    /// Pay `amount` out of engine custody to `to`.
    ///
    /// # Errors
    /// Returns [`EngineError::TransferFailed`] if the substrate rejects
    /// the payout.
    fn transfer_out(&mut self, to: AccountId, amount: Value) -> Result<()>;
}

/// Reference in-memory substrate used by tests and embedded hosts.
pub struct InMemoryLedger {
    height: Height,
    accounts: HashMap<AccountId, Value>,
    held: Value,
}

impl InMemoryLedger {
    /// Create a ledger starting at height zero.
    #[must_use]
    pub fn new() -> Self {
        Self::at_height(0)
    }

    /// Create a ledger with the counter at an arbitrary height.
    #[must_use]
    pub fn at_height(height: Height) -> Self {
        Self {
            height,
            accounts: HashMap::new(),
            held: Value::zero(),
        }
    }

    /// Credit an account with freshly issued funds.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if the account balance
    /// would wrap.
    pub fn fund(&mut self, account: AccountId, amount: Value) -> Result<()> {
        let balance = self.accounts.entry(account).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Advance the height counter. Saturates at the top of the range so
    /// the counter stays monotonic.
    pub fn advance(&mut self, heights: Height) {
        self.height = self.height.saturating_add(heights);
    }

    /// Spendable balance of an account.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Value {
        self.accounts.get(&account).copied().unwrap_or_default()
    }

    /// Value currently in engine custody.
    #[must_use]
    pub fn held(&self) -> Value {
        self.held
    }
}

impl LedgerAdapter for InMemoryLedger {
    fn current_height(&self) -> Height {
        self.height
    }

    fn transfer_in(&mut self, from: AccountId, amount: Value) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(EngineError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        let new_held = self
            .held
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        // available >= amount was just checked, the subtraction is exact
        self.accounts.insert(from, available - amount);
        self.held = new_held;
        Ok(())
    }

    fn transfer_out(&mut self, to: AccountId, amount: Value) -> Result<()> {
        if self.held < amount {
            let held = self.held;
            return Err(EngineError::TransferFailed {
                reason: format!("custody {held} cannot cover payout {amount}"),
            });
        }
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        self.accounts.insert(to, new_balance);
        self.held -= amount;
        Ok(())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}
