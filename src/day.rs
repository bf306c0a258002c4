use crate::transaction::Transaction;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Returns a `YYYY-MM-DD` key for the calendar day of `date`.
///
/// The key only depends on the year, month and day, so any two timestamps on the same
/// local day produce the same key.
pub fn day_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Groups `items` by the key returned from `key_fn`.
///
/// Items within a group keep the order they had in `items`. Groups themselves are ordered
/// by key.
pub fn group_by<T, K, I, F>(items: I, mut key_fn: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();

    for item in items {
        groups.entry(key_fn(&item)).or_insert_with(Vec::new).push(item);
    }

    groups
}

/// Buckets transactions by the local calendar day they fall on
pub fn group_by_day<'a, I>(transactions: I) -> BTreeMap<NaiveDate, Vec<&'a Transaction>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_by(transactions, |t| t.day())
}
