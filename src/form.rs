use crate::{
    config::FormConfig,
    store::TransactionStore,
    transaction::{Transaction, TransactionError},
    CURRENCY_PRECISION,
};
use chrono::{DateTime, Local};
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw user input for a new transaction, as typed into the entry form
#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub title: String,
    pub value: String,
    pub date: DateTime<Local>,
}

/// Input that has passed every form check and is ready for `TransactionStore::add`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    pub title: String,
    pub value: Decimal,
    pub date: DateTime<Local>,
}

impl TransactionForm {
    pub fn new<T, V>(title: T, value: V, date: DateTime<Local>) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        TransactionForm {
            title: title.into(),
            value: value.into(),
            date,
        }
    }

    /// Check the form, returning the cleaned-up values.
    pub fn validate(
        &self,
        config: &FormConfig,
        now: Option<DateTime<Local>>, // This allows overriding the current time for testing
    ) -> Result<ValidTransaction, TransactionError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TransactionError::EmptyTitle);
        }

        let value = parse_value(&self.value)?;

        let today = now.unwrap_or_else(Local::now).date_naive();
        let day = self.date.date_naive();
        if !config.allow_future_dates && day > today {
            return Err(TransactionError::FutureDate(day));
        }
        if day < config.earliest_date {
            return Err(TransactionError::DateTooEarly(day, config.earliest_date));
        }

        Ok(ValidTransaction {
            title: title.to_string(),
            value,
            date: self.date,
        })
    }

    /// Validate the form and, only if it is valid, add it to `store`
    pub fn submit(
        &self,
        store: &mut TransactionStore,
        config: &FormConfig,
        now: Option<DateTime<Local>>,
    ) -> Result<Transaction, TransactionError> {
        let valid = self.validate(config, now).map_err(|e| {
            debug!("rejected form input: {}", e);
            e
        })?;

        store.add(valid.title, valid.value, valid.date)
    }
}

/// Parse a currency amount typed by the user. Either '.' or ',' may be used as the
/// decimal separator.
pub fn parse_value(input: &str) -> Result<Decimal, TransactionError> {
    let normalised = input.trim().replace(',', ".");

    let value = Decimal::from_str(&normalised)
        .map_err(|_| TransactionError::InvalidValue(input.to_string()))?;

    if value <= Decimal::ZERO {
        return Err(TransactionError::NonPositiveValue);
    }

    // Trailing zeros don't count towards precision, e.g. "12.500" is fine
    if value.normalize().scale() > CURRENCY_PRECISION {
        return Err(TransactionError::CurrencyPrecision(CURRENCY_PRECISION));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_value_comma_separator() {
        assert_eq!(parse_value("12,50"), Ok(dec!(12.50)));
        assert_eq!(parse_value(" 3.1 "), Ok(dec!(3.1)));
    }

    #[test]
    fn parse_value_not_a_number() {
        assert_eq!(
            parse_value("abc"),
            Err(TransactionError::InvalidValue("abc".into()))
        );
        assert_eq!(parse_value(""), Err(TransactionError::InvalidValue("".into())));
    }

    #[test]
    fn parse_value_non_positive() {
        assert_eq!(parse_value("0"), Err(TransactionError::NonPositiveValue));
        assert_eq!(parse_value("-5"), Err(TransactionError::NonPositiveValue));
    }

    #[test]
    fn parse_value_precision() {
        assert_eq!(
            parse_value("1.005"),
            Err(TransactionError::CurrencyPrecision(2))
        );
        assert_eq!(parse_value("1.500"), Ok(dec!(1.500)));
    }

    #[test]
    fn validate_trims_title() {
        let form = TransactionForm::new("  Rent ", "1200", now());
        let valid = form.validate(&FormConfig::default(), Some(now())).unwrap();
        assert_eq!(valid.title, "Rent");
        assert_eq!(valid.value, dec!(1200));
    }

    #[test]
    fn validate_blank_title() {
        let form = TransactionForm::new("   ", "10", now());
        assert_eq!(
            form.validate(&FormConfig::default(), Some(now())),
            Err(TransactionError::EmptyTitle)
        );
    }

    #[test]
    fn validate_future_date() {
        let tomorrow = now() + Duration::days(1);
        let form = TransactionForm::new("Rent", "10", tomorrow);
        assert_eq!(
            form.validate(&FormConfig::default(), Some(now())),
            Err(TransactionError::FutureDate(tomorrow.date_naive()))
        );

        let config = FormConfig {
            allow_future_dates: true,
            ..FormConfig::default()
        };
        assert!(form.validate(&config, Some(now())).is_ok());
    }

    #[test]
    fn validate_later_today_allowed() {
        let tonight = Local.with_ymd_and_hms(2024, 3, 12, 23, 0, 0).unwrap();
        let form = TransactionForm::new("Dinner", "45", tonight);
        assert!(form.validate(&FormConfig::default(), Some(now())).is_ok());
    }

    #[test]
    fn validate_too_early() {
        let date = Local.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();
        let form = TransactionForm::new("Rent", "10", date);
        assert_eq!(
            form.validate(&FormConfig::default(), Some(now())),
            Err(TransactionError::DateTooEarly(
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
        );
    }

    #[test]
    fn submit_invalid_never_touches_store() {
        let mut store = TransactionStore::new();
        let form = TransactionForm::new("Rent", "zero", now());
        assert!(form
            .submit(&mut store, &FormConfig::default(), Some(now()))
            .is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn submit_adds_to_store() {
        let mut store = TransactionStore::new();
        let form = TransactionForm::new("Mercado", "350,75", now());
        let t = form
            .submit(&mut store, &FormConfig::default(), Some(now()))
            .unwrap();
        assert_eq!(store.list(), &[t.clone()][..]);
        assert_eq!(t.value(), dec!(350.75));
        assert_eq!(t.title(), "Mercado");
    }
}
