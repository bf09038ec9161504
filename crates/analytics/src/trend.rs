//! Trend series for the dashboard sparklines.
//!
//! Historical per-day aggregation does not exist yet, so the series is a
//! zero-valued placeholder with the final shape: one point per calendar day,
//! oldest first, ending today. Callers must treat the values as placeholders
//! rather than real metrics.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One sparkline point: a calendar day and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Default lookback for dashboard sparklines.
pub const DEFAULT_TREND_POINTS: usize = 7;

/// Generate `points` zero-valued trend points ending today, ascending.
pub fn trend_series(points: usize) -> Vec<TrendPoint> {
    trend_series_from(points, Utc::now().date_naive())
}

/// Same as [`trend_series`] but with an explicit "today".
pub fn trend_series_from(points: usize, today: NaiveDate) -> Vec<TrendPoint> {
    (0..points)
        .rev()
        .map(|days_back| TrendPoint {
            date: today - Days::new(days_back as u64),
            value: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_is_seven_ascending_zero_points() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let series = trend_series_from(DEFAULT_TREND_POINTS, today);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(series[6].date, today);
        assert!(series.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert!(series.iter().all(|point| point.value == 0.0));
    }

    #[test]
    fn test_series_is_deterministic_for_a_fixed_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(trend_series_from(7, today), trend_series_from(7, today));
    }

    #[test]
    fn test_zero_points_yields_empty_series() {
        assert!(trend_series(0).is_empty());
    }
}
