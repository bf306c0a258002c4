use chrono::NaiveDate;

/// Settings for the weekly bar chart and the monthly line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub weekly_window_days: u32,
    pub monthly_window_days: u32,
    // The most axis labels the monthly chart will try to show
    pub max_labels: usize,
    // When there are fewer buckets than this, and fewer than `dense_label_target` labels
    // would be shown, every bucket is labelled instead.
    pub dense_label_bucket_limit: usize,
    pub dense_label_target: usize,
}

/// Bounds applied to user input before it reaches the store
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    pub earliest_date: NaiveDate,
    pub allow_future_dates: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            weekly_window_days: 7,
            monthly_window_days: 30,
            max_labels: 7,
            dense_label_bucket_limit: 10,
            dense_label_target: 5,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            earliest_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            allow_future_dates: false,
        }
    }
}
