//! Field-level guard predicates run before overlap detection.
//!
//! The outer policy validator applies these simple boolean checks to each
//! schedule entry; the overlap detectors assume their inputs already passed.
//! None of them allocate or mutate.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Whether `timezone_id` names a supported IANA timezone.
pub fn is_valid_timezone(timezone_id: &str) -> bool {
    timezone_id.parse::<Tz>().is_ok()
}

/// Whether a policy-local datetime lies strictly after the current moment.
///
/// The naive datetime is resolved in the policy timezone. An ambiguous local
/// time (DST fall-back) resolves to its earliest instant; a nonexistent
/// local time (DST gap) is treated as not after now.
pub fn is_after_now(date_time: NaiveDateTime, time_zone: Tz) -> bool {
    match time_zone.from_local_datetime(&date_time).earliest() {
        Some(resolved) => resolved > Utc::now(),
        None => false,
    }
}

/// Whether a policy-local date is today or later, with "today" taken in the
/// policy timezone and normalized to midnight.
pub fn is_on_or_after_today(date: NaiveDate, time_zone: Tz) -> bool {
    let today = Utc::now().with_timezone(&time_zone).date_naive();
    date >= today
}

/// Whether `end` is strictly after `start`.
pub fn is_after<T: PartialOrd>(end: &T, start: &T) -> bool {
    end > start
}

/// Whether every value lies within `lower..=upper`. Empty input passes
/// vacuously; emptiness is a separate check.
pub fn is_within_range(values: &[u32], lower: u32, upper: u32) -> bool {
    values.iter().all(|&value| value >= lower && value <= upper)
}

/// Whether the values contain no duplicates.
pub fn has_unique_elements(values: &[u32]) -> bool {
    let mut seen = std::collections::HashSet::new();
    values.iter().all(|value| seen.insert(value))
}
