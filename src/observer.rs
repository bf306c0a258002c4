use crate::transaction::Transaction;

/// Handle returned by `TransactionStore::subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Something that reacts to changes in a `TransactionStore`.
///
/// Observers are notified synchronously once an `add` or `remove` has completed, and
/// before that call returns. They always see the full collection, newest first, so they
/// should re-derive anything they need (e.g. chart series) from scratch.
pub trait StoreObserver {
    /// Called with the updated collection after every mutation
    fn collection_changed(&mut self, transactions: &[Transaction]);
}

impl<F> StoreObserver for F
where
    F: FnMut(&[Transaction]),
{
    fn collection_changed(&mut self, transactions: &[Transaction]) {
        self(transactions)
    }
}
