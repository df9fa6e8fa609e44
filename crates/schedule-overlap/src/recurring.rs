//! Overlap detection over the recurring schedules of one policy.
//!
//! Day-set membership has no relation to the sort key, so every pair must be
//! examined: this is the one detector where a full O(n²) scan is required.

use crate::conflict::{Conflict, ConflictField};
use crate::schedule::RecurringScheduleTime;

/// Find every pair of recurring schedules whose active windows conflict.
///
/// Entries are sorted by `start_time` ascending (stable, on a private copy —
/// the caller's slice is never reordered), then every pair `(i, j)` with
/// `i < j` in sorted order is checked. A pair conflicts only when the two
/// day-sets are of the same kind and share at least one day, and then:
///
/// - equal `start_time` → reported as `(i, start_time, j, start_time)`;
/// - `i.end_time >= j.start_time` → reported as `(i, end_time, j,
///   start_time)`.
///
/// Windows that wrap past midnight (`end_time < start_time`) are compared
/// literally, with no wrap-around inference.
///
/// Empty input yields an empty result. Descriptors are emitted in scan
/// order, outer loop over the sorted first index.
pub fn find_recurring_overlaps(entries: &[RecurringScheduleTime]) -> Vec<Conflict> {
    let mut sorted: Vec<&RecurringScheduleTime> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.start_time);

    let mut conflicts = Vec::new();

    for first_index in 0..sorted.len() {
        for second_index in first_index + 1..sorted.len() {
            let current = sorted[first_index];
            let next = sorted[second_index];

            if !current.day_set.intersects(&next.day_set) {
                continue;
            }

            if current.start_time == next.start_time {
                conflicts.push(Conflict::new(
                    &current.schedule_identifier,
                    ConflictField::StartTime,
                    &next.schedule_identifier,
                    ConflictField::StartTime,
                ));
            } else if current.end_time >= next.start_time {
                conflicts.push(Conflict::new(
                    &current.schedule_identifier,
                    ConflictField::EndTime,
                    &next.schedule_identifier,
                    ConflictField::StartTime,
                ));
            }
        }
    }

    conflicts
}
