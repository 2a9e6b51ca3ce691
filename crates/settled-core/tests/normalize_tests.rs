//! Tests for travel-record normalization: entry-date ordering, inverted-pair
//! repair, and multiset preservation.

use chrono::NaiveDate;
use settled_core::{normalize, ResidenceInterval};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn stay(entry: NaiveDate, exit: NaiveDate) -> ResidenceInterval {
    ResidenceInterval::new(entry, exit)
}

fn open(entry: NaiveDate) -> ResidenceInterval {
    ResidenceInterval::open(entry)
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn out_of_order_records_are_sorted_by_entry_date() {
    let history = [
        open(d(2023, 7, 1)),
        stay(d(2019, 1, 1), d(2019, 6, 1)),
        stay(d(2021, 3, 15), d(2021, 9, 2)),
    ];

    let normalized = normalize(&history);

    assert_eq!(
        normalized,
        vec![
            stay(d(2019, 1, 1), d(2019, 6, 1)),
            stay(d(2021, 3, 15), d(2021, 9, 2)),
            open(d(2023, 7, 1)),
        ]
    );
}

#[test]
fn sorted_input_passes_through_unchanged() {
    let history = [stay(d(2020, 1, 1), d(2020, 1, 10)), open(d(2020, 2, 1))];

    assert_eq!(normalize(&history), history.to_vec());
}

#[test]
fn intervals_sharing_an_entry_date_keep_their_input_order() {
    // The sort is stable: equal entry dates preserve relative input order.
    let history = [
        stay(d(2020, 1, 1), d(2020, 5, 1)),
        stay(d(2020, 1, 1), d(2020, 2, 1)),
        stay(d(2019, 1, 1), d(2019, 2, 1)),
    ];

    let normalized = normalize(&history);

    assert_eq!(normalized[0], stay(d(2019, 1, 1), d(2019, 2, 1)));
    assert_eq!(normalized[1], stay(d(2020, 1, 1), d(2020, 5, 1)));
    assert_eq!(normalized[2], stay(d(2020, 1, 1), d(2020, 2, 1)));
}

// ---------------------------------------------------------------------------
// Inverted-pair repair
// ---------------------------------------------------------------------------

#[test]
fn inverted_exit_and_entry_are_swapped() {
    // Exit typed before entry: repaired, not rejected.
    let history = [stay(d(2020, 6, 1), d(2020, 1, 1))];

    let normalized = normalize(&history);

    assert_eq!(normalized, vec![stay(d(2020, 1, 1), d(2020, 6, 1))]);
}

#[test]
fn swaps_happen_before_sorting() {
    // The inverted pair must sort by its corrected entry 01/01/2020, ahead of
    // the March interval.
    let history = [
        stay(d(2020, 3, 1), d(2020, 4, 1)),
        stay(d(2020, 6, 1), d(2020, 1, 1)),
    ];

    let normalized = normalize(&history);

    assert_eq!(
        normalized,
        vec![
            stay(d(2020, 1, 1), d(2020, 6, 1)),
            stay(d(2020, 3, 1), d(2020, 4, 1)),
        ]
    );
}

#[test]
fn single_day_stays_are_not_swapped() {
    // exit == entry is already in order.
    let history = [stay(d(2020, 1, 1), d(2020, 1, 1))];

    assert_eq!(normalize(&history), history.to_vec());
}

#[test]
fn open_intervals_are_never_swapped() {
    let history = [open(d(2020, 2, 1)), open(d(2020, 1, 1))];

    let normalized = normalize(&history);

    assert_eq!(normalized, vec![open(d(2020, 1, 1)), open(d(2020, 2, 1))]);
}

// ---------------------------------------------------------------------------
// Multiset preservation
// ---------------------------------------------------------------------------

#[test]
fn exact_duplicates_pass_through() {
    // No merging, no deduplication.
    let history = [
        stay(d(2020, 1, 1), d(2020, 1, 10)),
        stay(d(2020, 1, 1), d(2020, 1, 10)),
    ];

    let normalized = normalize(&history);

    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0], normalized[1]);
}

#[test]
fn touching_and_overlapping_stays_are_not_merged() {
    let history = [
        stay(d(2020, 1, 1), d(2020, 2, 1)),
        stay(d(2020, 2, 1), d(2020, 3, 1)),
        stay(d(2020, 2, 15), d(2020, 3, 15)),
    ];

    assert_eq!(normalize(&history).len(), 3);
}

#[test]
fn empty_input_yields_empty_output() {
    // Normalization itself never fails; emptiness is rejected by the
    // consumers that need at least one interval.
    assert_eq!(normalize(&[]), Vec::new());
}

#[test]
fn normalize_is_idempotent() {
    let history = [
        stay(d(2020, 6, 1), d(2020, 1, 1)),
        open(d(2023, 7, 1)),
        stay(d(2019, 1, 1), d(2019, 6, 1)),
    ];

    let once = normalize(&history);
    let twice = normalize(&once);

    assert_eq!(once, twice);
}
