use crate::{config::ChartConfig, format::DateFormatter, transaction::Transaction};
use chrono::{DateTime, Duration, Local, NaiveDate};
use log::{debug, trace};
use rust_decimal::{prelude::ToPrimitive, Decimal};

/// One bar of the weekly spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayBar {
    pub date: NaiveDate,
    pub label: String,
    pub total: Decimal,
    // Share of the week's spending, 0.0 - 1.0. Drives the bar height.
    pub percentage: f64,
}

/// Totals spending for each of the last `config.weekly_window_days` days (7 by default),
/// ending today.
///
/// Bars are ordered oldest to newest and every day gets a bar, even if nothing was spent.
/// `recent` is expected to be `TransactionStore::recent`, but any transactions outside
/// the window are simply ignored.
pub fn weekly_summary<'a, I, F>(
    recent: I,
    formatter: &F,
    config: &ChartConfig,
    now: Option<DateTime<Local>>, // This allows overriding the current time for testing
) -> Vec<WeekdayBar>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: DateFormatter + ?Sized,
{
    let today = now.unwrap_or_else(Local::now).date_naive();
    let recent: Vec<&Transaction> = recent.into_iter().collect();

    // Walk backwards from today, then flip so the chart reads left to right
    let mut bars: Vec<WeekdayBar> = (0..config.weekly_window_days)
        .map(|i| {
            let date = today - Duration::days(i as i64);
            let total: Decimal = recent
                .iter()
                .filter(|t| t.day() == date)
                .map(|t| t.value())
                .sum();

            trace!("{} spent on {}", total, date);

            WeekdayBar {
                date,
                label: formatter.format(date).to_uppercase(),
                total,
                percentage: 0.0,
            }
        })
        .collect();
    bars.reverse();

    let week_total = grand_total(&bars);
    debug!(
        "weekly summary of {} transaction(s) totals {}",
        recent.len(),
        week_total
    );

    // With nothing spent every bar stays at zero rather than dividing by zero
    if week_total > Decimal::ZERO {
        for bar in bars.iter_mut() {
            bar.percentage = (bar.total / week_total).to_f64().unwrap_or(0.0);
        }
    }

    bars
}

/// Sum of all bar totals
pub fn grand_total(bars: &[WeekdayBar]) -> Decimal {
    bars.iter().map(|b| b.total).sum()
}
