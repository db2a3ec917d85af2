use chrono::Local;
use headcount_core::db::open_db_in_memory;
use headcount_core::{HeadcountStore, SqliteHeadcountRepository, StoreError};

#[test]
fn increment_raises_count_and_todays_record() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.increment(3).unwrap();
    store.increment(2).unwrap();

    assert_eq!(store.current_count(), 5);
    assert_eq!(store.records().len(), 1);

    let today = store.records()[0];
    assert_eq!(today.date, Local::now().date_naive());
    assert_eq!(today.change, 5);
    assert_eq!(today.count, 5);
}

#[test]
fn decrement_floors_at_zero_and_records_applied_delta() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.increment(3).unwrap();
    store.decrement(5).unwrap();

    assert_eq!(store.current_count(), 0);
    // Only the applied -3 is merged; the day nets out to zero.
    assert_eq!(store.records()[0].change, 0);
    assert_eq!(store.records()[0].count, 0);
}

#[test]
fn decrement_at_zero_applies_and_records_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.decrement(4).unwrap();

    assert_eq!(store.current_count(), 0);
    assert!(store.records().is_empty());
}

#[test]
fn count_never_goes_negative_under_decrement_sequences() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.increment(7).unwrap();
    for amount in [3, 9, 1, 20] {
        store.decrement(amount).unwrap();
    }

    assert_eq!(store.current_count(), 0);
}

#[test]
fn zero_amount_is_rejected_without_state_change() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));
    store.increment(2).unwrap();

    assert_eq!(store.increment(0), Err(StoreError::ZeroAmount));
    assert_eq!(store.decrement(0), Err(StoreError::ZeroAmount));
    assert_eq!(store.current_count(), 2);
    assert_eq!(store.records()[0].change, 2);
}

#[test]
fn set_count_records_delta_from_prior_value() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.set_count(10);
    assert_eq!(store.current_count(), 10);
    assert_eq!(store.records()[0].change, 10);

    store.set_count(7);
    assert_eq!(store.current_count(), 7);
    // Same-day merge: +10 then -3.
    assert_eq!(store.records()[0].change, 7);
    assert_eq!(store.records()[0].count, 7);
}

#[test]
fn set_count_to_current_value_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.set_count(4);
    let before = store.records()[0];

    store.set_count(4);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0], before);
}

#[test]
fn recent_records_returns_newest_first_prefix() {
    let conn = open_db_in_memory().unwrap();
    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));

    store.increment(1).unwrap();

    assert_eq!(store.recent_records(7).len(), 1);
    assert_eq!(store.recent_records(0).len(), 0);
}
