//! In-memory expense tracking.
//!
//! A `TransactionStore` holds the session's expenses. The weekly bar chart and the
//! monthly line chart are derived from it on demand by `weekly_summary` and
//! `monthly_series`; neither caches anything, so they can be re-run whenever an observer
//! is told the store changed.

mod config;
mod day;
mod form;
mod format;
mod monthly;
mod observer;
mod store;
mod transaction;
mod weekly;

pub use config::{ChartConfig, FormConfig};
pub use day::{day_key, group_by, group_by_day};
pub use form::{parse_value, TransactionForm, ValidTransaction};
pub use format::{format_currency, DateFormatter, ListDate, NarrowWeekday, ShortDate};
pub use monthly::{monthly_series, MonthlySeries};
pub use observer::{StoreObserver, SubscriptionId};
pub use store::TransactionStore;
pub use transaction::{Transaction, TransactionError, TransactionId};
pub use weekly::{grand_total, weekly_summary, WeekdayBar};

// Re-exported so callers can pick a locale for the formatters without depending on chrono
pub use chrono::Locale;

// This represents the number of decimal places that a currency can validly express.
// @todo Support the full range of currency precisions specified in ISO 4217.
pub const CURRENCY_PRECISION: u32 = 2;
