//! Overlap detection over the specific-date schedules of one policy.
//!
//! Specific-date windows share a single global timeline, so after a sort by
//! start an adjacent-pair scan is sufficient to detect that a conflict
//! exists.

use crate::conflict::{Conflict, ConflictField};
use crate::schedule::SpecificDateScheduleDateTime;

/// Find conflicting specific-date schedules by scanning adjacent sorted pairs.
///
/// Entries are sorted by `start_date_time` ascending (stable, on a private
/// copy) and each entry is compared with its immediate successor only:
///
/// - equal `start_date_time` → `(i, start_date_time, i+1, start_date_time)`;
/// - `i.end_date_time >= (i+1).start_date_time` → `(i, end_date_time, i+1,
///   start_date_time)`.
///
/// The adjacent-only scan reliably detects *that* a chain of windows
/// overlaps, but the reported pair may not be the furthest-apart overlapping
/// pair: an entry long enough to contain several later entries is flagged
/// against its immediate neighbor only. This is a deliberate reporting
/// limitation, kept so error messages stay stable.
///
/// Empty and single-element input yield an empty result; `n` entries are
/// examined as exactly `n - 1` adjacent pairs.
pub fn find_specific_date_overlaps(entries: &[SpecificDateScheduleDateTime]) -> Vec<Conflict> {
    let mut sorted: Vec<&SpecificDateScheduleDateTime> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.start_date_time);

    let mut conflicts = Vec::new();

    for pair in sorted.windows(2) {
        let current = pair[0];
        let next = pair[1];

        if current.start_date_time == next.start_date_time {
            conflicts.push(Conflict::new(
                &current.schedule_identifier,
                ConflictField::StartDateTime,
                &next.schedule_identifier,
                ConflictField::StartDateTime,
            ));
        } else if current.end_date_time >= next.start_date_time {
            conflicts.push(Conflict::new(
                &current.schedule_identifier,
                ConflictField::EndDateTime,
                &next.schedule_identifier,
                ConflictField::StartDateTime,
            ));
        }
    }

    conflicts
}
