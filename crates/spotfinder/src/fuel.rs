//! Fuel price series analysis: range selection, change statistics and the
//! dashboard's naive trend prediction.

use chrono::NaiveDate;
use model::fuel::{FuelKind, FuelPriceDay};
use schemars::JsonSchema;
use serde::Serialize;

/// Trend window for change figures and prediction, in days.
pub const TREND_WINDOW_DAYS: usize = 30;

/// Inclusive date-range slice of a date-ascending series. Open bounds keep
/// the respective end of the series.
pub fn select_range(
    series: &[FuelPriceDay],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<FuelPriceDay> {
    series
        .iter()
        .filter(|day| start.is_none_or(|s| day.date >= s))
        .filter(|day| end.is_none_or(|e| day.date <= e))
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelKindStats {
    pub kind: FuelKind,
    /// Latest price in the range, EUR per litre.
    pub latest: f64,
    /// Absolute change over the trend window.
    pub change: f64,
    pub change_percent: f64,
    pub all_time_high: f64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelStats {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub days: usize,
    /// Days the change figures span: 30 when the range is long enough,
    /// otherwise the whole range.
    pub change_window_days: usize,
    pub per_kind: Vec<FuelKindStats>,
}

/// Change and high-water statistics over a date-ascending series.
/// `None` for an empty series.
pub fn summarize(series: &[FuelPriceDay]) -> Option<FuelStats> {
    let first = series.first()?;
    let last = series.last()?;

    let window = series.len().min(TREND_WINDOW_DAYS);
    let baseline = &series[series.len() - window];

    let per_kind = FuelKind::ALL
        .iter()
        .map(|&kind| {
            let latest = last.price(kind);
            let change = latest - baseline.price(kind);
            let change_percent = if baseline.price(kind) == 0.0 {
                0.0
            } else {
                change / baseline.price(kind) * 100.0
            };
            let all_time_high = series
                .iter()
                .map(|day| day.price(kind))
                .fold(f64::MIN, f64::max);

            FuelKindStats {
                kind,
                latest,
                change,
                change_percent,
                all_time_high,
            }
        })
        .collect();

    Some(FuelStats {
        first_date: first.date,
        last_date: last.date,
        days: series.len(),
        change_window_days: window,
        per_kind,
    })
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelPrediction {
    pub kind: FuelKind,
    /// Extrapolated price, floored at zero.
    pub predicted_price: f64,
}

/// Linear extrapolation of the last 30 days, per kind. `None` when the
/// series is shorter than the trend window; a trend over less data would
/// just amplify noise.
pub fn predict(series: &[FuelPriceDay], days_ahead: u32) -> Option<Vec<FuelPrediction>> {
    if series.len() < TREND_WINDOW_DAYS {
        return None;
    }
    let last = series.last()?;
    let window_start = &series[series.len() - TREND_WINDOW_DAYS];

    Some(
        FuelKind::ALL
            .iter()
            .map(|&kind| {
                let trend_per_day =
                    (last.price(kind) - window_start.price(kind)) / TREND_WINDOW_DAYS as f64;
                let predicted =
                    last.price(kind) + trend_per_day * f64::from(days_ahead);

                FuelPrediction {
                    kind,
                    predicted_price: predicted.max(0.0),
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn day(date: &str, e10: f64, diesel: f64, e5: f64) -> FuelPriceDay {
        FuelPriceDay {
            date: date.parse().unwrap(),
            super_e10: e10,
            diesel,
            super_e5: e5,
        }
    }

    /// `n` days from 2024-01-01 with linearly rising prices.
    fn rising_series(n: usize) -> Vec<FuelPriceDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| FuelPriceDay {
                date: start + chrono::Days::new(i as u64),
                super_e10: 1.70 + i as f64 * 0.01,
                diesel: 1.60 + i as f64 * 0.005,
                super_e5: 1.75 + i as f64 * 0.01,
            })
            .collect()
    }

    #[test]
    fn range_selection_is_inclusive_on_both_ends() {
        let series = rising_series(10);
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        let range = select_range(&series, Some(start), Some(end));
        assert_eq!(range.len(), 5);
        assert_eq!(range.first().unwrap().date, start);
        assert_eq!(range.last().unwrap().date, end);
    }

    #[test]
    fn open_bounds_keep_the_whole_series() {
        let series = rising_series(10);
        assert_eq!(select_range(&series, None, None).len(), 10);
    }

    #[test]
    fn change_uses_a_30_day_window_on_long_series() {
        let series = rising_series(60);
        let stats = summarize(&series).unwrap();

        assert_eq!(stats.change_window_days, 30);
        let e10 = stats.per_kind[0];
        // 29 daily steps of one cent between index 30 and index 59.
        assert_relative_eq!(e10.change, 0.29, max_relative = 1e-9);
        assert_relative_eq!(e10.latest, 1.70 + 0.59, max_relative = 1e-9);
    }

    #[test]
    fn change_covers_the_whole_range_on_short_series() {
        let series = rising_series(10);
        let stats = summarize(&series).unwrap();

        assert_eq!(stats.change_window_days, 10);
        assert_relative_eq!(stats.per_kind[0].change, 0.09, max_relative = 1e-9);
    }

    #[test]
    fn all_time_high_is_the_series_maximum() {
        let series = vec![
            day("2024-01-01", 1.80, 1.65, 1.85),
            day("2024-01-02", 2.05, 1.95, 2.10),
            day("2024-01-03", 1.75, 1.60, 1.80),
        ];
        let stats = summarize(&series).unwrap();
        assert_relative_eq!(stats.per_kind[0].all_time_high, 2.05);
        assert_relative_eq!(stats.per_kind[1].all_time_high, 1.95);
    }

    #[test]
    fn summary_of_empty_series_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn prediction_extrapolates_the_recent_trend() {
        let series = rising_series(40);
        let predictions = predict(&series, 10).unwrap();

        let last = series.last().unwrap().super_e10;
        let window_start = series[series.len() - 30].super_e10;
        let expected = last + (last - window_start) / 30.0 * 10.0;
        assert_relative_eq!(predictions[0].predicted_price, expected, max_relative = 1e-9);
    }

    #[test]
    fn prediction_never_goes_negative() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = (0..30)
            .map(|i| FuelPriceDay {
                date: start + chrono::Days::new(i as u64),
                super_e10: (1.0 - i as f64 * 0.03).max(0.05),
                diesel: 1.5,
                super_e5: 1.5,
            })
            .collect::<Vec<_>>();

        let predictions = predict(&series, 30).unwrap();
        assert!(predictions[0].predicted_price >= 0.0);
    }

    #[test]
    fn prediction_needs_a_full_window() {
        assert!(predict(&rising_series(29), 7).is_none());
    }
}
