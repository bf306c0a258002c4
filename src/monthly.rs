use crate::{
    config::ChartConfig,
    day::{day_key, group_by_day},
    format::DateFormatter,
    transaction::Transaction,
};
use chrono::{DateTime, Duration, Local};
use log::{debug, trace};
use rust_decimal::Decimal;

/// Daily spending series for the line chart
#[derive(Debug, Clone, PartialEq)]
pub enum MonthlySeries {
    /// Nothing was spent in the window. Renderers should show a placeholder instead of
    /// an empty chart.
    NoData,
    /// One point per day that had spending, oldest first. `labels` and `data_points`
    /// always have the same length; thinned-out labels are empty strings.
    Series {
        labels: Vec<String>,
        data_points: Vec<Decimal>,
    },
}

impl MonthlySeries {
    pub fn is_no_data(&self) -> bool {
        matches!(self, MonthlySeries::NoData)
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        match self {
            MonthlySeries::NoData => 0,
            MonthlySeries::Series { data_points, .. } => data_points.len(),
        }
    }
}

/// Builds the daily totals for the last `config.monthly_window_days` days (30 by default).
///
/// Any transactions may be passed in; anything dated before the window is dropped. Days
/// without spending are left out of the series entirely rather than appearing as zero.
pub fn monthly_series<'a, I, F>(
    transactions: I,
    formatter: &F,
    config: &ChartConfig,
    now: Option<DateTime<Local>>, // This allows overriding the current time for testing
) -> MonthlySeries
where
    I: IntoIterator<Item = &'a Transaction>,
    F: DateFormatter + ?Sized,
{
    let now = now.unwrap_or_else(Local::now);
    let cutoff = now - Duration::days(config.monthly_window_days as i64);

    // Days come back from the grouping already in ascending order
    let buckets = group_by_day(transactions.into_iter().filter(|t| t.date() >= cutoff));

    if buckets.is_empty() {
        debug!("no transactions since {}, nothing to chart", cutoff);
        return MonthlySeries::NoData;
    }

    let mask = label_mask(buckets.len(), config);
    let mut labels = Vec::with_capacity(buckets.len() + 1);
    let mut data_points = Vec::with_capacity(buckets.len() + 1);

    for ((day, transactions), show_label) in buckets.iter().zip(mask) {
        let total: Decimal = transactions.iter().map(|t| t.value()).sum();
        trace!("{}: {} across {} transaction(s)", day_key(day), total, transactions.len());

        labels.push(if show_label {
            formatter.format(*day)
        } else {
            String::new()
        });
        data_points.push(total);
    }

    // A line needs two points. Repeat the only day we have so there is something to draw.
    if data_points.len() == 1 {
        data_points.push(data_points[0]);
        labels.push(String::new());
    }

    debug!(
        "monthly series has {} point(s) from {} day(s)",
        data_points.len(),
        buckets.len()
    );

    MonthlySeries::Series {
        labels,
        data_points,
    }
}

// Decide which of `count` buckets get an axis label. Roughly `max_labels` are spread
// evenly, and the last bucket is always labelled.
fn label_mask(count: usize, config: &ChartConfig) -> Vec<bool> {
    let num_labels = count.min(config.max_labels);
    let step = (count / num_labels.saturating_sub(1).max(1)).max(1);

    // Sparse data looks odd with gaps in the axis, so label everything
    let dense = count < config.dense_label_bucket_limit && num_labels < config.dense_label_target;

    trace!(
        "labelling {} bucket(s) with step {}{}",
        count,
        step,
        if dense { " (dense)" } else { "" }
    );

    (0..count)
        .map(|i| dense || i % step == 0 || i == count - 1)
        .collect()
}
