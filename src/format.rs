use crate::CURRENCY_PRECISION;
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

/// Turns a calendar day into display text, e.g. an axis label.
///
/// The chart builders take this as a parameter rather than reading the system locale, so
/// callers (and tests) decide exactly what the labels look like.
pub trait DateFormatter {
    fn format(&self, date: NaiveDate) -> String;
}

/// The first letter of the weekday name, uppercased ("D" for domingo in pt_BR)
#[derive(Debug, Clone, Copy)]
pub struct NarrowWeekday {
    pub locale: Locale,
}

/// Day of month followed by the abbreviated month ("12 mar" in pt_BR)
#[derive(Debug, Clone, Copy)]
pub struct ShortDate {
    pub locale: Locale,
}

/// Full numeric date as shown in transaction lists ("12/03/2024")
#[derive(Debug, Clone, Copy)]
pub struct ListDate;

impl<F> DateFormatter for F
where
    F: Fn(NaiveDate) -> String,
{
    fn format(&self, date: NaiveDate) -> String {
        self(date)
    }
}

impl Default for NarrowWeekday {
    fn default() -> Self {
        NarrowWeekday {
            locale: Locale::pt_BR,
        }
    }
}

impl DateFormatter for NarrowWeekday {
    fn format(&self, date: NaiveDate) -> String {
        localized(date, "%a", self.locale)
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl Default for ShortDate {
    fn default() -> Self {
        ShortDate {
            locale: Locale::pt_BR,
        }
    }
}

impl DateFormatter for ShortDate {
    fn format(&self, date: NaiveDate) -> String {
        localized(date, "%-d %b", self.locale)
    }
}

impl DateFormatter for ListDate {
    fn format(&self, date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }
}

/// Formats `value` with a currency symbol and two decimal places, e.g. "R$120.50"
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let value = value.round_dp(CURRENCY_PRECISION);
    format!("{}{:.2}", symbol, value)
}

// Localized formatting is only available on timezone-aware types, so pin the date to
// midnight UTC. Only date fields are formatted, so the time never shows.
fn localized(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(fmt, locale)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn narrow_weekday_pt_br() {
        let f = NarrowWeekday::default();
        // 2024-03-10 is a Sunday
        assert_eq!(f.format(date(2024, 3, 10)), "D");
        assert_eq!(f.format(date(2024, 3, 11)), "S");
        assert_eq!(f.format(date(2024, 3, 12)), "T");
        assert_eq!(f.format(date(2024, 3, 13)), "Q");
    }

    #[test]
    fn narrow_weekday_en_us() {
        let f = NarrowWeekday {
            locale: Locale::en_US,
        };
        assert_eq!(f.format(date(2024, 3, 13)), "W");
    }

    #[test]
    fn short_date_pt_br() {
        assert_eq!(ShortDate::default().format(date(2024, 3, 12)), "12 mar");
        assert_eq!(ShortDate::default().format(date(2024, 2, 1)), "1 fev");
    }

    #[test]
    fn list_date() {
        assert_eq!(ListDate.format(date(2024, 3, 2)), "02/03/2024");
    }

    #[test]
    fn closure_formatter() {
        let f = |d: NaiveDate| d.to_string();
        assert_eq!(f.format(date(2024, 3, 2)), "2024-03-02");
    }

    #[test]
    fn currency_two_places() {
        assert_eq!(format_currency(dec!(120.5), "R$"), "R$120.50");
        assert_eq!(format_currency(dec!(1200), "R$"), "R$1200.00");
        assert_eq!(format_currency(dec!(0.125), "$"), "$0.12");
    }
}
