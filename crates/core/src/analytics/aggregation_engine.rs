//! Time bucketing for analytics series.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::analytics_model::{Interval, SeriesPoint};
use crate::constants::NO_DATA_BUCKET_KEY;
use crate::errors::Result;
use crate::expenses::ExpenseRecord;
use crate::utils::money_utils;
use crate::utils::time_utils::{month_start, previous_month_start, week_start_sunday, year_start};

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine;

impl AggregationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sums amounts per bucket and returns the buckets oldest first.
    ///
    /// An empty input yields one `"No Data"` point. A single real bucket is
    /// padded with the preceding period at zero so the series has two points.
    pub fn bucket(&self, records: &[ExpenseRecord], interval: Interval) -> Result<Vec<SeriesPoint>> {
        let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for record in records {
            let total = buckets
                .entry(Self::bucket_start(record.expense_date, interval))
                .or_insert(Decimal::ZERO);
            *total = money_utils::add(*total, record.amount, "bucket total")?;
        }

        let mut series: Vec<SeriesPoint> = buckets
            .iter()
            .map(|(start, total)| SeriesPoint::new(Self::bucket_key(*start, interval), *total))
            .collect();

        let series = match buckets.keys().next() {
            None => vec![SeriesPoint::placeholder(NO_DATA_BUCKET_KEY)],
            Some(only) if buckets.len() == 1 => {
                let previous = Self::previous_bucket(*only, interval);
                series.insert(
                    0,
                    SeriesPoint::placeholder(Self::bucket_key(previous, interval)),
                );
                series
            }
            Some(_) => series,
        };
        Ok(series)
    }

    fn bucket_start(date: NaiveDate, interval: Interval) -> NaiveDate {
        match interval {
            Interval::Weekly => week_start_sunday(date),
            Interval::Monthly => month_start(date),
            Interval::Yearly => year_start(date),
        }
    }

    fn previous_bucket(start: NaiveDate, interval: Interval) -> NaiveDate {
        match interval {
            Interval::Weekly => start - Duration::days(7),
            Interval::Monthly => previous_month_start(start),
            Interval::Yearly => year_start(start - Duration::days(1)),
        }
    }

    fn bucket_key(start: NaiveDate, interval: Interval) -> String {
        match interval {
            Interval::Weekly => start.format("%Y-%m-%d").to_string(),
            Interval::Monthly => start.format("%Y-%m").to_string(),
            Interval::Yearly => start.format("%Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::classify;
    use rust_decimal_macros::dec;

    fn record(date: &str, amount: Decimal) -> ExpenseRecord {
        let expense_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        ExpenseRecord {
            id: format!("e-{}", date),
            user_id: "u1".to_string(),
            amount,
            category: "Groceries".to_string(),
            budget_group: classify("Groceries"),
            budget_type: "50% - Basic Needs".to_string(),
            note: None,
            expense_date,
            created_at: expense_date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_series_is_no_data() {
        let series = AggregationEngine::new().bucket(&[], Interval::Weekly).unwrap();
        assert_eq!(series, vec![SeriesPoint::placeholder("No Data")]);
        assert_eq!(series[0].total, Decimal::ZERO);
    }

    #[test]
    fn test_single_monthly_bucket_is_padded() {
        let series =
            AggregationEngine::new().bucket(&[record("2024-01-10", dec!(100))], Interval::Monthly).unwrap();
        assert_eq!(
            series,
            vec![
                SeriesPoint::placeholder("2023-12"),
                SeriesPoint::new("2024-01", dec!(100)),
            ]
        );
    }

    #[test]
    fn test_weekly_keys_are_sundays() {
        let records = vec![
            record("2024-01-10", dec!(10)),
            record("2024-01-13", dec!(5)),
            record("2024-01-14", dec!(7)),
        ];
        let series = AggregationEngine::new().bucket(&records, Interval::Weekly).unwrap();
        assert_eq!(
            series,
            vec![
                SeriesPoint::new("2024-01-07", dec!(15)),
                SeriesPoint::new("2024-01-14", dec!(7)),
            ]
        );
    }

    #[test]
    fn test_single_weekly_bucket_pads_previous_week() {
        let series =
            AggregationEngine::new().bucket(&[record("2024-01-02", dec!(3))], Interval::Weekly).unwrap();
        assert_eq!(series[0], SeriesPoint::placeholder("2023-12-24"));
        assert_eq!(series[1], SeriesPoint::new("2023-12-31", dec!(3)));
    }

    #[test]
    fn test_yearly_sorted_regardless_of_input_order() {
        let records = vec![
            record("2025-03-01", dec!(1)),
            record("2023-06-30", dec!(2)),
            record("2024-12-31", dec!(3)),
            record("2023-01-01", dec!(4)),
        ];
        let series = AggregationEngine::new().bucket(&records, Interval::Yearly).unwrap();
        let keys: Vec<&str> = series.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["2023", "2024", "2025"]);
        assert_eq!(series[0].total, dec!(6));
        assert!(series.iter().all(|p| !p.is_placeholder));
    }

    #[test]
    fn test_single_yearly_bucket_pads_previous_year() {
        let series =
            AggregationEngine::new().bucket(&[record("2024-05-05", dec!(9))], Interval::Yearly).unwrap();
        assert_eq!(series[0].key, "2023");
        assert!(series[0].is_placeholder);
    }

    #[test]
    fn test_bucket_overflow_is_an_error() {
        let records = vec![
            record("2024-01-02", Decimal::MAX),
            record("2024-01-03", Decimal::MAX),
        ];
        assert!(AggregationEngine::new()
            .bucket(&records, Interval::Monthly)
            .is_err());
    }
}
