//! Archive date aggregation.
//!
//! Buckets post creation dates by calendar month and returns the distinct
//! months, newest first. Each month is represented by its first day. The
//! store already collapses rows to distinct months; this normalization makes
//! the ordering and dedupe guarantees hold for any repository.

use chrono::{Datelike, NaiveDate};

/// Distinct (year, month) buckets of the given dates, descending.
pub fn month_starts<I>(dates: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut months: Vec<NaiveDate> = dates
        .into_iter()
        .map(|day| {
            // from_ymd_opt with day 1 is valid for every (year, month) a
            // NaiveDate can produce.
            NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
        })
        .collect();

    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_month_collapses_to_one_bucket() {
        let months = month_starts([ymd(2024, 3, 5), ymd(2024, 3, 20)]);
        assert_eq!(months, vec![ymd(2024, 3, 1)]);
    }

    #[test]
    fn buckets_are_strictly_descending() {
        let months = month_starts([
            ymd(2023, 12, 31),
            ymd(2024, 3, 5),
            ymd(2024, 1, 1),
            ymd(2024, 3, 20),
        ]);
        assert_eq!(
            months,
            vec![ymd(2024, 3, 1), ymd(2024, 1, 1), ymd(2023, 12, 1)]
        );
        assert!(months.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn already_truncated_input_is_passed_through() {
        let months = month_starts([ymd(2024, 3, 1), ymd(2023, 11, 1)]);
        assert_eq!(months, vec![ymd(2024, 3, 1), ymd(2023, 11, 1)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(month_starts(Vec::<NaiveDate>::new()).is_empty());
    }

    #[test]
    fn year_boundary_months_stay_distinct() {
        let months = month_starts([ymd(2023, 12, 1), ymd(2024, 12, 1)]);
        assert_eq!(months, vec![ymd(2024, 12, 1), ymd(2023, 12, 1)]);
    }
}
