use dashmap::DashMap;

use super::traits::HistoryRecorder;
use crate::domain::{AccountId, AmountType, HistoryEntry};

/// DashMap-backed history, one append-only log per account
pub struct InMemoryHistory<A: AmountType> {
    logs: DashMap<AccountId, Vec<HistoryEntry<A>>>,
}

impl<A: AmountType> InMemoryHistory<A> {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            logs: DashMap::new(),
        }
    }

    /// Total number of entries across all accounts
    pub fn len(&self) -> usize {
        self.logs.iter().map(|log| log.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: AmountType> Default for InMemoryHistory<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmountType> HistoryRecorder<A> for InMemoryHistory<A> {
    fn record(&self, entry: HistoryEntry<A>) {
        self.logs.entry(entry.account_id).or_default().push(entry);
    }

    fn entries(&self, account_id: AccountId) -> Vec<HistoryEntry<A>> {
        self.logs
            .get(&account_id)
            .map(|log| log.value().clone())
            .unwrap_or_default()
    }
}

/// Recorder that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl<A: AmountType> HistoryRecorder<A> for NoHistory {
    fn record(&self, _entry: HistoryEntry<A>) {}

    fn entries(&self, _account_id: AccountId) -> Vec<HistoryEntry<A>> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountType, Cents, OperationKind};
    use std::sync::Arc;
    use std::thread;

    fn entry(id: AccountId, kind: OperationKind, raw: i64) -> HistoryEntry<Cents> {
        HistoryEntry::now(id, kind, Cents::from_raw(raw), Cents::from_raw(raw))
    }

    #[test]
    fn new_history_is_empty() {
        let history = InMemoryHistory::<Cents>::new();
        assert!(history.is_empty());
        assert!(
            history
                .entries(AccountId::new(1, AccountType::Checking))
                .is_empty()
        );
    }

    #[test]
    fn entries_are_kept_per_account_in_order() {
        let history = InMemoryHistory::new();
        let first = AccountId::new(1, AccountType::Checking);
        let second = AccountId::new(2, AccountType::Savings);

        history.record(entry(first, OperationKind::Open, 100));
        history.record(entry(second, OperationKind::Open, 50));
        history.record(entry(first, OperationKind::Deposit, 25));

        let log = history.entries(first);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].kind, OperationKind::Open);
        assert_eq!(log[1].kind, OperationKind::Deposit);
        assert_eq!(history.entries(second).len(), 1);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let history = Arc::new(InMemoryHistory::new());
        let id = AccountId::new(1, AccountType::Checking);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let history = Arc::clone(&history);
                thread::spawn(move || {
                    for _ in 0..250 {
                        history.record(entry(id, OperationKind::Deposit, 1));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.entries(id).len(), 1_000);
    }

    #[test]
    fn no_history_discards_entries() {
        let id = AccountId::new(1, AccountType::Checking);
        let recorder = NoHistory;

        recorder.record(entry(id, OperationKind::Open, 1));
        assert!(HistoryRecorder::<Cents>::entries(&recorder, id).is_empty());
    }
}
