use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Identifies a single `Transaction` within a `TransactionStore`.
///
/// Ids are handed out by the store from a strictly increasing counter, so an id is never
/// reused for the lifetime of the store, even after the transaction is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub(crate) u64);

/// A recorded expense.
///
/// Only the calendar day of `date` matters to the chart aggregations. The time of day is
/// kept so that transactions on the same day still have a stable display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub(crate) id: TransactionId,
    pub(crate) title: String,
    pub(crate) value: Decimal,
    pub(crate) date: DateTime<Local>,
}

#[derive(Error, Debug, PartialEq)]
pub enum TransactionError {
    #[error("a transaction must have a title")]
    EmptyTitle,
    #[error("'{0}' is not a valid amount")]
    InvalidValue(String),
    #[error("transaction values must be greater than zero")]
    NonPositiveValue,
    #[error("currency values cannot have more than {0} decimal places")]
    CurrencyPrecision(u32),
    #[error("the date '{0}' is in the future")]
    FutureDate(NaiveDate),
    #[error("the date '{0}' is earlier than {1}")]
    DateTooEarly(NaiveDate, NaiveDate), // date, earliest allowed
}

impl TransactionId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl Transaction {
    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }

    /// The local calendar day this transaction falls on
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Reject input that could never be displayed or charted.
///
/// This is the store's last line of defence. Callers collecting user input should go
/// through `TransactionForm` first, which also catches malformed amounts and dates.
pub(crate) fn validate(title: &str, value: Decimal) -> Result<(), TransactionError> {
    if title.trim().is_empty() {
        return Err(TransactionError::EmptyTitle);
    }

    if value <= Decimal::ZERO {
        return Err(TransactionError::NonPositiveValue);
    }

    Ok(())
}
