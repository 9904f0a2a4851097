//! The settlement engine.
//!
//! Owns every piece of escrow state and applies each operation as one
//! atomic step: validate everything, move value across the ledger
//! boundary, then commit the precomputed state and append the event. A
//! failure at any validation point leaves all state untouched.
//!
//! The host substrate authenticates `caller` before invoking; the engine
//! trusts the identity it is handed and enforces only role checks
//! (owner-gated operations).

use stakegate_core::{fee, horizon};
use stakegate_types::{
    AccountId, BuilderConfig, Commitment, DepositReceipt, EngineError, EngineEvent, Height,
    LockEntry, Result, StakeRecord, Value,
};

use crate::conservation::FundConservation;
use crate::ledger::LedgerAdapter;
use crate::lock_queue::LockQueue;
use crate::registry::BuilderRegistry;
use crate::stake_ledger::StakeLedger;

/// Escrow and time-locked settlement engine.
///
/// The only component with side effects on externally visible balances.
pub struct SettlementEngine {
    /// Protocol owner: collects accrued fees; transferable.
    owner: AccountId,
    /// Per-builder thresholds and lock periods.
    registry: BuilderRegistry,
    /// Per-commitment aggregate stake.
    stakes: StakeLedger,
    /// Per-builder FIFO lock queues.
    locks: LockQueue,
    /// Accrued protocol cut, not yet collected.
    protocol_balance: Value,
    /// Cumulative intake/outflow books.
    conservation: FundConservation,
    /// Append-only event log, forwarded by the host.
    events: Vec<EngineEvent>,
}

impl SettlementEngine {
    /// Create an engine owned by `owner`.
    #[must_use]
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            registry: BuilderRegistry::new(),
            stakes: StakeLedger::new(),
            locks: LockQueue::new(),
            protocol_balance: Value::zero(),
            conservation: FundConservation::new(),
            events: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Builder configuration
    // -----------------------------------------------------------------

    /// Create or overwrite the caller's builder configuration.
    ///
    /// Self-service and infallible: any values are accepted, including
    /// zero (an open builder). Deposits already queued keep the
    /// maturities they were created with.
    pub fn configure(
        &mut self,
        caller: AccountId,
        minimal_stake: Value,
        minimal_lock_period: Height,
    ) {
        self.registry
            .configure(caller, BuilderConfig::new(minimal_stake, minimal_lock_period));
        self.events.push(EngineEvent::ConfigUpdated {
            builder: caller,
            minimal_stake,
            minimal_lock_period,
        });
        tracing::info!(
            builder = %caller,
            minimal_stake = %minimal_stake,
            minimal_lock_period,
            "Builder configuration updated"
        );
    }

    // -----------------------------------------------------------------
    // Deposit
    // -----------------------------------------------------------------

    /// Deposit `amount` from `caller` toward `commitment` under `builder`.
    ///
    /// One atomic step:
    /// 1. Split the protocol cut from the gross amount
    /// 2. Accumulate the gross amount into the commitment's stake record
    ///    and recompute its (never-decreasing) maturity horizon
    /// 3. Queue the builder share until `height + minimal_lock_period`
    /// 4. Accrue the cut to the protocol balance
    /// 5. Take custody of the gross amount via the ledger
    ///
    /// The commitment is supplied by the caller, not re-derived from the
    /// caller's identity: distinct accounts may stake toward the same
    /// commitment. No threshold is enforced here — eligibility stays an
    /// advisory read.
    ///
    /// # Errors
    /// - [`EngineError::InvalidAmount`] for a zero amount
    /// - [`EngineError::ArithmeticOverflow`] if any accumulation would wrap
    /// - [`EngineError::InsufficientFunds`] if the ledger cannot cover it
    pub fn deposit<L: LedgerAdapter>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        builder: AccountId,
        commitment: Commitment,
        amount: Value,
    ) -> Result<DepositReceipt> {
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount);
        }

        let height = ledger.current_height();
        let config = self.registry.config(builder);
        let split = fee::split(amount);

        // Validate: compute the full successor state before touching anything.
        let previous = self.stakes.record(commitment);
        let total_stake = previous
            .total_stake
            .checked_add(amount)
            .ok_or(EngineError::ArithmeticOverflow)?;
        let maturity_horizon =
            horizon::stake_horizon(height, &config, total_stake)?.max(previous.maturity_horizon);
        let matures_at = horizon::lock_maturity(height, &config)?;
        let protocol_balance = self
            .protocol_balance
            .checked_add(split.protocol_cut)
            .ok_or(EngineError::ArithmeticOverflow)?;
        let conservation = self.conservation.with_deposit(amount)?;

        // Move value: the last fallible step.
        ledger.transfer_in(caller, amount)?;

        // Commit: nothing below can fail.
        self.stakes.commit(
            commitment,
            StakeRecord {
                total_stake,
                maturity_horizon,
            },
        );
        self.locks
            .push(builder, LockEntry::new(split.net_amount, matures_at));
        self.protocol_balance = protocol_balance;
        self.conservation = conservation;
        self.events.push(EngineEvent::StakeUpdated {
            builder,
            commitment,
            total_stake,
            maturity_horizon,
        });

        tracing::info!(
            builder = %builder,
            commitment = %commitment,
            gross = %amount,
            cut = %split.protocol_cut,
            net = %split.net_amount,
            total_stake = %total_stake,
            maturity_horizon,
            matures_at,
            "Deposit accepted"
        );

        Ok(DepositReceipt {
            builder,
            commitment,
            gross_amount: amount,
            protocol_cut: split.protocol_cut,
            net_amount: split.net_amount,
            total_stake,
            maturity_horizon,
            matures_at,
        })
    }

    // -----------------------------------------------------------------
    // Withdraw
    // -----------------------------------------------------------------

    /// Release the matured prefix of the caller's lock queue and pay out
    /// the summed net amount. Returns the released sum.
    ///
    /// FIFO: entries drain strictly from the head; an immature head
    /// blocks everything behind it regardless of later entries'
    /// maturities. The queue shrinks by exactly the drained count and the
    /// remainder keeps its order and maturities.
    ///
    /// # Errors
    /// - [`EngineError::EmptyQueue`] if the caller has no queued entries
    /// - [`EngineError::NotYetMatured`] if the head entry is still locked
    /// - [`EngineError::ArithmeticOverflow`] if an accumulation would wrap
    /// - [`EngineError::TransferFailed`] if the ledger rejects the payout
    pub fn withdraw<L: LedgerAdapter>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
    ) -> Result<Value> {
        let height = ledger.current_height();

        if self.locks.is_empty(caller) {
            return Err(EngineError::EmptyQueue);
        }
        let (count, amount) = self.locks.matured_prefix(caller, height)?;
        if count == 0 {
            // Queue is non-empty, so the head exists and is immature.
            let matures_at = self
                .locks
                .iter(caller)
                .next()
                .map_or(height, |entry| entry.matures_at);
            return Err(EngineError::NotYetMatured {
                matures_at,
                current: height,
            });
        }
        let conservation = self.conservation.with_withdrawal(amount)?;

        ledger.transfer_out(caller, amount)?;

        self.locks.release_front(caller, count);
        self.conservation = conservation;
        self.events.push(EngineEvent::Withdrawal {
            builder: caller,
            amount,
        });

        tracing::info!(
            builder = %caller,
            amount = %amount,
            released = count,
            remaining = self.locks.len(caller),
            "Withdrawal released"
        );

        Ok(amount)
    }

    // -----------------------------------------------------------------
    // Eligibility
    // -----------------------------------------------------------------

    /// Whether `commitment` has staked at least `builder`'s current
    /// threshold. Advisory read over committed state; re-configuration
    /// flips it without touching any record.
    #[must_use]
    pub fn has_minimal_stake(&self, builder: AccountId, commitment: Commitment) -> bool {
        let config = self.registry.config(builder);
        self.stakes.meets_threshold(commitment, &config)
    }

    // -----------------------------------------------------------------
    // Protocol fees and ownership
    // -----------------------------------------------------------------

    /// Pay the accrued protocol balance out to the owner. Returns the
    /// collected amount.
    ///
    /// # Errors
    /// - [`EngineError::Unauthorized`] unless `caller` is the owner
    /// - [`EngineError::NoFeesAccrued`] with a zero balance
    /// - [`EngineError::TransferFailed`] if the ledger rejects the payout
    pub fn collect_protocol_fees<L: LedgerAdapter>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
    ) -> Result<Value> {
        self.require_owner(caller, "collect protocol fees")?;
        if self.protocol_balance.is_zero() {
            return Err(EngineError::NoFeesAccrued);
        }
        let amount = self.protocol_balance;
        let conservation = self.conservation.with_withdrawal(amount)?;

        ledger.transfer_out(self.owner, amount)?;

        self.protocol_balance = Value::zero();
        self.conservation = conservation;
        self.events.push(EngineEvent::ProtocolFeesCollected {
            recipient: self.owner,
            amount,
        });

        tracing::info!(recipient = %self.owner, amount = %amount, "Protocol fees collected");

        Ok(amount)
    }

    /// Hand engine ownership to `new_owner`.
    ///
    /// # Errors
    /// Returns [`EngineError::Unauthorized`] unless `caller` is the owner.
    pub fn transfer_ownership(&mut self, caller: AccountId, new_owner: AccountId) -> Result<()> {
        self.require_owner(caller, "transfer ownership")?;
        let previous_owner = self.owner;
        self.owner = new_owner;
        self.events.push(EngineEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        tracing::info!(
            previous_owner = %previous_owner,
            new_owner = %new_owner,
            "Ownership transferred"
        );
        Ok(())
    }

    fn require_owner(&self, caller: AccountId, action: &str) -> Result<()> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(EngineError::Unauthorized {
                reason: format!("only the owner may {action}, caller is {caller}"),
            })
        }
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// Current owner account.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Accrued, uncollected protocol balance.
    #[must_use]
    pub fn protocol_balance(&self) -> Value {
        self.protocol_balance
    }

    /// Builder configuration; zeroed (open) for unknown builders.
    #[must_use]
    pub fn builder_config(&self, builder: AccountId) -> BuilderConfig {
        self.registry.config(builder)
    }

    /// Stake record; zeroed for commitments never deposited to.
    #[must_use]
    pub fn stake_record(&self, commitment: Commitment) -> StakeRecord {
        self.stakes.record(commitment)
    }

    /// Number of lock entries queued for the builder.
    #[must_use]
    pub fn queue_len(&self, builder: AccountId) -> usize {
        self.locks.len(builder)
    }

    /// Summed net amount queued for the builder.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if the sum would wrap.
    pub fn locked_total(&self, builder: AccountId) -> Result<Value> {
        self.locks.locked_total(builder)
    }

    /// The append-only event log, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Access the conservation books.
    #[must_use]
    pub fn conservation(&self) -> &FundConservation {
        &self.conservation
    }

    /// Check the books against what is actually outstanding (queued net
    /// amounts plus protocol balance).
    ///
    /// # Errors
    /// Returns [`EngineError::ConservationViolation`] if they disagree.
    pub fn verify_conservation(&self) -> Result<()> {
        let outstanding = self
            .locks
            .total_locked()?
            .checked_add(self.protocol_balance)
            .ok_or(EngineError::ArithmeticOverflow)?;
        self.conservation.verify(outstanding)
    }
}
