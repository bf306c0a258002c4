use crate::{
    observer::{StoreObserver, SubscriptionId},
    transaction::{validate, Transaction, TransactionError, TransactionId},
};
use chrono::{DateTime, Duration, Local};
use log::{debug, trace};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The in-memory collection of transactions for a session.
///
/// The store is the single writer for transaction data. All changes go through `add` and
/// `remove`, and every completed change is broadcast to subscribed observers. The
/// collection is always kept sorted by date, newest first.
#[derive(Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    observers: Vec<(SubscriptionId, Box<dyn StoreObserver>)>,
    next_id: u64,
    next_subscription: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a few demo expenses spread over the last three days
    pub fn with_sample_data(now: Option<DateTime<Local>>) -> Self {
        let now = now.unwrap_or_else(Local::now);
        let mut store = Self::new();

        store.insert("Conta de Luz".into(), dec!(120.50), now - Duration::days(2));
        store.insert("Supermercado".into(), dec!(350.75), now - Duration::days(1));
        store.insert("Aluguel".into(), dec!(1200.00), now);

        store
    }

    /// Record a new transaction and return a copy of it.
    ///
    /// Observers are notified before this returns.
    pub fn add<S: Into<String>>(
        &mut self,
        title: S,
        value: Decimal,
        date: DateTime<Local>,
    ) -> Result<Transaction, TransactionError> {
        let title = title.into();
        validate(&title, value)?;

        let transaction = self.insert(title, value, date);
        self.notify();

        Ok(transaction)
    }

    /// Remove the transaction with the given id.
    ///
    /// Removing an id that doesn't exist (or no longer exists) does nothing, which keeps
    /// deletion idempotent. Observers are only notified if something was removed.
    pub fn remove(&mut self, id: TransactionId) {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id() != id);

        if self.transactions.len() == before {
            trace!("ignoring removal of unknown transaction {}", id);
            return;
        }

        debug!("removed transaction {}", id);
        self.notify();
    }

    /// All transactions, newest first
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns the transactions dated no earlier than `window_days` days before `now`.
    ///
    /// The boundary is inclusive, so a transaction made exactly `window_days * 24` hours
    /// ago is still included. Store order (newest first) is preserved.
    pub fn recent(
        &self,
        window_days: u32,
        now: Option<DateTime<Local>>, // This allows overriding the current time for testing
    ) -> Vec<&Transaction> {
        let now = now.unwrap_or_else(Local::now);
        let cutoff = now - Duration::days(window_days as i64);

        self.transactions
            .iter()
            .filter(|t| t.date() >= cutoff)
            .collect()
    }

    /// Register an observer to be called after every change to the collection
    pub fn subscribe<O: StoreObserver + 'static>(&mut self, observer: O) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether an observer was registered under `id`
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != id);
        self.observers.len() != before
    }

    // Insert without validation or notification. Callers must have validated already.
    fn insert(&mut self, title: String, value: Decimal, date: DateTime<Local>) -> Transaction {
        let id = TransactionId(self.next_id);
        self.next_id += 1;

        let transaction = Transaction {
            id,
            title,
            value,
            date,
        };

        debug!("adding transaction {} for ${} on {}", id, value, date);

        // New transactions go to the front, so among same-dated entries the most recently
        // added one is listed first. `sort_by` is stable, so this holds after sorting.
        self.transactions.insert(0, transaction.clone());
        self.transactions.sort_by(|a, b| b.date().cmp(&a.date()));

        transaction
    }

    fn notify(&mut self) {
        trace!(
            "notifying {} observer(s) of {} transaction(s)",
            self.observers.len(),
            self.transactions.len()
        );

        let transactions = &self.transactions;
        for (_, observer) in self.observers.iter_mut() {
            observer.collection_changed(transactions);
        }
    }
}
