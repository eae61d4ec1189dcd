use crate::domain::{AccountId, AmountType, HistoryEntry};

/// Sink for the history of successful balance changes.
///
/// The registry calls `record` after every committed mutation; how entries are
/// kept is up to the implementation.
pub trait HistoryRecorder<A: AmountType>: Send + Sync {
    /// Append an entry (entries are immutable once recorded)
    fn record(&self, entry: HistoryEntry<A>);

    /// Entries for one account, oldest first
    fn entries(&self, account_id: AccountId) -> Vec<HistoryEntry<A>>;
}

// Lets several registries or tasks share one recorder
impl<A: AmountType, R: HistoryRecorder<A>> HistoryRecorder<A> for std::sync::Arc<R> {
    fn record(&self, entry: HistoryEntry<A>) {
        (**self).record(entry)
    }

    fn entries(&self, account_id: AccountId) -> Vec<HistoryEntry<A>> {
        (**self).entries(account_id)
    }
}
