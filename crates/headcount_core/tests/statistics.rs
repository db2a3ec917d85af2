use chrono::{Days, NaiveDate};
use headcount_core::{HeadcountStatistics, RecordHistory};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 1).unwrap() + Days::new(u64::from(n))
}

#[test]
fn empty_history_pins_min_and_max_to_current_count() {
    let stats = HeadcountStatistics::compute(&RecordHistory::new(), 9);

    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.total_increase, 0);
    assert_eq!(stats.total_decrease, 0);
    assert_eq!(stats.average_change, 0.0);
    assert_eq!(stats.max_count, 9);
    assert_eq!(stats.min_count, 9);
}

#[test]
fn totals_split_positive_and_negative_deltas() {
    let mut history = RecordHistory::new();
    history.merge(day(1), 5, 5, 100);
    history.merge(day(2), -2, 3, 200);
    history.merge(day(3), 4, 7, 300);

    let stats = HeadcountStatistics::compute(&history, 7);

    assert_eq!(stats.total_days, 3);
    assert_eq!(stats.total_increase, 9);
    assert_eq!(stats.total_decrease, 2);
    // (5 - 2 + 4) / 3
    assert!((stats.average_change - 7.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.max_count, 7);
    assert_eq!(stats.min_count, 3);
}

#[test]
fn min_and_max_cover_records_and_current_count() {
    let mut history = RecordHistory::new();
    history.merge(day(1), 10, 10, 100);
    history.merge(day(2), -9, 1, 200);

    let stats = HeadcountStatistics::compute(&history, 4);
    assert_eq!(stats.max_count, 10);
    assert_eq!(stats.min_count, 1);

    let stats_high = HeadcountStatistics::compute(&history, 25);
    assert_eq!(stats_high.max_count, 25);

    let stats_low = HeadcountStatistics::compute(&history, 0);
    assert_eq!(stats_low.min_count, 0);
}
