//! Property-based tests for both overlap detectors using proptest.
//!
//! These verify invariants that must hold for *any* entry collection, not
//! just the examples in the unit test files: permutation-invariance of the
//! detected pair set, idempotence, and structural bounds on the result.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use schedule_overlap::{
    find_recurring_overlaps, find_specific_date_overlaps, Conflict, DaySet, RecurringScheduleTime,
    SpecificDateScheduleDateTime,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn arb_day_set() -> impl Strategy<Value = DaySet> {
    prop_oneof![
        proptest::collection::vec(1u32..=7, 1..=4).prop_map(DaySet::DaysOfWeek),
        proptest::collection::vec(1u32..=31, 1..=4).prop_map(DaySet::DaysOfMonth),
    ]
}

/// Recurring entries with unique positional identifiers.
fn arb_recurring_entries() -> impl Strategy<Value = Vec<RecurringScheduleTime>> {
    proptest::collection::vec((arb_time(), arb_time(), arb_day_set()), 0..=8).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(index, (start_time, end_time, day_set))| RecurringScheduleTime {
                schedule_identifier: format!("r{}", index),
                start_time,
                end_time,
                day_set,
            })
            .collect()
    })
}

fn arb_date_time() -> impl Strategy<Value = NaiveDateTime> {
    (1u32..=28, 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    })
}

/// Specific-date entries with `end > start` (the upstream field invariant)
/// and pairwise-distinct start times.
///
/// Starts must be distinct for the permutation property below: when two
/// entries tie on `start_date_time`, the stable sort keeps their input
/// order, so which entry's `end_date_time` gets compared against the next
/// neighbor depends on the permutation and the detected pair set itself can
/// change. That is the detector's contract (see
/// `tied_starts_make_neighbor_attribution_input_order_dependent` in
/// `specific_date_tests.rs`), not a bug, so the generator avoids ties.
fn arb_specific_entries() -> impl Strategy<Value = Vec<SpecificDateScheduleDateTime>> {
    proptest::collection::vec((arb_date_time(), 1i64..=600), 0..=8).prop_map(|raw| {
        let mut seen = std::collections::HashSet::new();
        raw.into_iter()
            .filter(|(start, _)| seen.insert(*start))
            .enumerate()
            .map(|(index, (start, minutes))| SpecificDateScheduleDateTime {
                schedule_identifier: format!("s{}", index),
                start_date_time: start,
                end_date_time: start + Duration::minutes(minutes),
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The set of unordered identifier pairs in a conflict list. Reported
/// identifier order follows the post-sort order, which a permutation of the
/// input may legitimately flip for equal sort keys, so comparisons across
/// permutations must ignore pair orientation.
fn unordered_pairs(conflicts: &[Conflict]) -> BTreeSet<(String, String)> {
    conflicts
        .iter()
        .map(|c| {
            let a = c.first_identifier.clone();
            let b = c.second_identifier.clone();
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn recurring_detection_is_permutation_invariant(
        (entries, shuffled) in arb_recurring_entries()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(
            unordered_pairs(&find_recurring_overlaps(&entries)),
            unordered_pairs(&find_recurring_overlaps(&shuffled))
        );
    }

    #[test]
    fn specific_date_detection_is_permutation_invariant(
        (entries, shuffled) in arb_specific_entries()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(
            unordered_pairs(&find_specific_date_overlaps(&entries)),
            unordered_pairs(&find_specific_date_overlaps(&shuffled))
        );
    }

    #[test]
    fn recurring_detection_is_idempotent(entries in arb_recurring_entries()) {
        let snapshot = entries.clone();
        let first = find_recurring_overlaps(&entries);
        let second = find_recurring_overlaps(&entries);
        prop_assert_eq!(first, second);
        prop_assert_eq!(entries, snapshot);
    }

    #[test]
    fn specific_date_detection_is_idempotent(entries in arb_specific_entries()) {
        let snapshot = entries.clone();
        let first = find_specific_date_overlaps(&entries);
        let second = find_specific_date_overlaps(&entries);
        prop_assert_eq!(first, second);
        prop_assert_eq!(entries, snapshot);
    }

    #[test]
    fn recurring_conflicts_never_exceed_pair_count(entries in arb_recurring_entries()) {
        let n = entries.len();
        prop_assert!(find_recurring_overlaps(&entries).len() <= n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn specific_date_conflicts_never_exceed_adjacent_count(entries in arb_specific_entries()) {
        let n = entries.len();
        prop_assert!(find_specific_date_overlaps(&entries).len() <= n.saturating_sub(1));
    }

    #[test]
    fn identical_recurring_entries_all_conflict(
        start in arb_time(),
        end in arb_time(),
        n in 2usize..=6,
    ) {
        // Same start, same day: every one of the n*(n-1)/2 pairs conflicts.
        let entries: Vec<RecurringScheduleTime> = (0..n)
            .map(|index| RecurringScheduleTime {
                schedule_identifier: format!("r{}", index),
                start_time: start,
                end_time: end,
                day_set: DaySet::DaysOfWeek(vec![1]),
            })
            .collect();

        prop_assert_eq!(find_recurring_overlaps(&entries).len(), n * (n - 1) / 2);
    }

    #[test]
    fn mixed_kind_entries_add_no_conflicts(
        weekly in arb_recurring_entries(),
        monthly in arb_recurring_entries(),
    ) {
        // Force the two groups onto different day-set kinds; combining them
        // must contribute exactly the conflicts of each group alone.
        let weekly: Vec<RecurringScheduleTime> = weekly
            .into_iter()
            .map(|mut e| {
                e.schedule_identifier = format!("w-{}", e.schedule_identifier);
                e.day_set = DaySet::DaysOfWeek(e.day_set.days()[..1].to_vec());
                e
            })
            .collect();
        let monthly: Vec<RecurringScheduleTime> = monthly
            .into_iter()
            .map(|mut e| {
                e.schedule_identifier = format!("m-{}", e.schedule_identifier);
                e.day_set = DaySet::DaysOfMonth(e.day_set.days()[..1].to_vec());
                e
            })
            .collect();

        let mut combined = weekly.clone();
        combined.extend(monthly.clone());

        let mut expected = unordered_pairs(&find_recurring_overlaps(&weekly));
        expected.extend(unordered_pairs(&find_recurring_overlaps(&monthly)));

        prop_assert_eq!(
            unordered_pairs(&find_recurring_overlaps(&combined)),
            expected
        );
    }
}
