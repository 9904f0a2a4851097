//! Per-builder FIFO time-lock queues.
//!
//! Deposits append at the tail; withdrawals release strictly from the
//! head. Only the contiguous matured prefix is ever released — an entry
//! behind an immature head stays queued regardless of its own maturity.

use std::collections::{HashMap, VecDeque};

use stakegate_types::{AccountId, EngineError, Height, LockEntry, Result, Value};

/// All builders' lock queues.
pub struct LockQueue {
    queues: HashMap<AccountId, VecDeque<LockEntry>>,
}

impl LockQueue {
    /// Create an empty queue table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Append an entry at the tail of the builder's queue.
    pub fn push(&mut self, builder: AccountId, entry: LockEntry) {
        self.queues.entry(builder).or_default().push_back(entry);
    }

    /// Scan the matured prefix at `height`: how many head entries can be
    /// released, and their summed net amount. Stops at the first immature
    /// entry.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if the prefix sum would
    /// wrap.
    pub fn matured_prefix(&self, builder: AccountId, height: Height) -> Result<(usize, Value)> {
        let mut count = 0;
        let mut total = Value::zero();
        if let Some(queue) = self.queues.get(&builder) {
            for entry in queue {
                if !entry.is_matured_at(height) {
                    break;
                }
                total = total
                    .checked_add(entry.net_amount)
                    .ok_or(EngineError::ArithmeticOverflow)?;
                count += 1;
            }
        }
        Ok((count, total))
    }

    /// Remove exactly `count` entries from the head of the builder's
    /// queue. The caller sizes `count` from [`Self::matured_prefix`];
    /// anything past the queue length is ignored.
    pub fn release_front(&mut self, builder: AccountId, count: usize) {
        if let Some(queue) = self.queues.get_mut(&builder) {
            for _ in 0..count {
                if queue.pop_front().is_none() {
                    break;
                }
            }
        }
    }

    /// Number of entries queued for the builder.
    #[must_use]
    pub fn len(&self, builder: AccountId) -> usize {
        self.queues.get(&builder).map_or(0, VecDeque::len)
    }

    /// Whether the builder has no queued entries.
    #[must_use]
    pub fn is_empty(&self, builder: AccountId) -> bool {
        self.len(builder) == 0
    }

    /// Iterate the builder's queue from head to tail.
    pub fn iter(&self, builder: AccountId) -> impl Iterator<Item = &LockEntry> + '_ {
        self.queues.get(&builder).into_iter().flatten()
    }

    /// Summed net amount queued for one builder.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if the sum would wrap.
    pub fn locked_total(&self, builder: AccountId) -> Result<Value> {
        let mut total = Value::zero();
        for entry in self.iter(builder) {
            total = total
                .checked_add(entry.net_amount)
                .ok_or(EngineError::ArithmeticOverflow)?;
        }
        Ok(total)
    }

    /// Summed net amount queued across all builders.
    ///
    /// # Errors
    /// Returns [`EngineError::ArithmeticOverflow`] if the sum would wrap.
    pub fn total_locked(&self) -> Result<Value> {
        let mut total = Value::zero();
        for queue in self.queues.values() {
            for entry in queue {
                total = total
                    .checked_add(entry.net_amount)
                    .ok_or(EngineError::ArithmeticOverflow)?;
            }
        }
        Ok(total)
    }
}

impl Default for LockQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(net: u64, matures_at: Height) -> LockEntry {
        LockEntry::new(Value::from(net), matures_at)
    }

    #[test]
    fn push_appends_at_tail() {
        let mut locks = LockQueue::new();
        let builder = AccountId::random();
        locks.push(builder, entry(80, 10));
        locks.push(builder, entry(40, 20));

        assert_eq!(locks.len(builder), 2);
        let entries: Vec<_> = locks.iter(builder).copied().collect();
        assert_eq!(entries[0].net_amount, Value::from(80));
        assert_eq!(entries[1].net_amount, Value::from(40));
    }

    #[test]
    fn empty_queue_has_no_matured_prefix() {
        let locks = LockQueue::new();
        let (count, total) = locks.matured_prefix(AccountId::random(), 100).unwrap();
        assert_eq!(count, 0);
        assert!(total.is_zero());
    }

    #[test]
    fn matured_prefix_stops_at_first_immature() {
        let mut locks = LockQueue::new();
        let builder = AccountId::random();
        locks.push(builder, entry(10, 10));
        locks.push(builder, entry(20, 20));
        // matured at height 15, but blocked behind the entry maturing at 20
        locks.push(builder, entry(30, 15));

        let (count, total) = locks.matured_prefix(builder, 15).unwrap();
        assert_eq!(count, 1);
        assert_eq!(total, Value::from(10));

        let (count, total) = locks.matured_prefix(builder, 20).unwrap();
        assert_eq!(count, 3);
        assert_eq!(total, Value::from(60));
    }

    #[test]
    fn release_front_preserves_remainder_order() {
        let mut locks = LockQueue::new();
        let builder = AccountId::random();
        locks.push(builder, entry(1, 10));
        locks.push(builder, entry(2, 20));
        locks.push(builder, entry(3, 30));

        locks.release_front(builder, 2);

        assert_eq!(locks.len(builder), 1);
        let head = locks.iter(builder).next().unwrap();
        assert_eq!(head.net_amount, Value::from(3));
        assert_eq!(head.matures_at, 30);
    }

    #[test]
    fn release_front_past_length_is_tolerated() {
        let mut locks = LockQueue::new();
        let builder = AccountId::random();
        locks.push(builder, entry(1, 0));
        locks.release_front(builder, 10);
        assert!(locks.is_empty(builder));
    }

    #[test]
    fn locked_totals_per_builder_and_engine_wide() {
        let mut locks = LockQueue::new();
        let a = AccountId::random();
        let b = AccountId::random();
        locks.push(a, entry(80, 10));
        locks.push(a, entry(40, 20));
        locks.push(b, entry(800, 10));

        assert_eq!(locks.locked_total(a).unwrap(), Value::from(120));
        assert_eq!(locks.locked_total(b).unwrap(), Value::from(800));
        assert_eq!(locks.total_locked().unwrap(), Value::from(920));
    }

    #[test]
    fn prefix_sum_overflow_rejected() {
        let mut locks = LockQueue::new();
        let builder = AccountId::random();
        locks.push(builder, LockEntry::new(Value::MAX, 0));
        locks.push(builder, LockEntry::new(Value::from(1), 0));

        let err = locks.matured_prefix(builder, 0).unwrap_err();
        assert!(matches!(err, EngineError::ArithmeticOverflow));
        let err = locks.total_locked().unwrap_err();
        assert!(matches!(err, EngineError::ArithmeticOverflow));
    }
}
