//! Schedule entry types for one autoscaling policy.
//!
//! Entries are constructed from already field-validated policy input
//! immediately before overlap checking, live for one validation pass, and are
//! never persisted. Times are timezone-naive: every entry of one policy
//! shares the policy's timezone basis.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Smallest valid weekday value (Monday).
pub const DAY_OF_WEEK_MIN: u32 = 1;
/// Largest valid weekday value (Sunday).
pub const DAY_OF_WEEK_MAX: u32 = 7;
/// Smallest valid month-day value.
pub const DAY_OF_MONTH_MIN: u32 = 1;
/// Largest valid month-day value.
pub const DAY_OF_MONTH_MAX: u32 = 31;

/// The days a recurring schedule is active on.
///
/// Exactly one of the two kinds is present per entry; an entry with neither
/// or both day-set kinds is unrepresentable. Values keep their input order —
/// range and uniqueness are checked by the guard layer, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySet {
    /// Weekday values, 1 (Monday) through 7 (Sunday).
    #[serde(rename = "days_of_week")]
    DaysOfWeek(Vec<u32>),
    /// Month-day values, 1 through 31.
    #[serde(rename = "days_of_month")]
    DaysOfMonth(Vec<u32>),
}

impl DaySet {
    /// The raw day values, whichever kind this set holds.
    pub fn days(&self) -> &[u32] {
        match self {
            DaySet::DaysOfWeek(days) | DaySet::DaysOfMonth(days) => days,
        }
    }

    /// The valid (inclusive) bounds for this set's kind.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            DaySet::DaysOfWeek(_) => (DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX),
            DaySet::DaysOfMonth(_) => (DAY_OF_MONTH_MIN, DAY_OF_MONTH_MAX),
        }
    }

    /// Whether two day-sets share at least one common day value.
    ///
    /// Mixed kinds (weekday vs month-day) never intersect: the two kinds
    /// partition the calendar differently and conflicts between them are out
    /// of scope by definition.
    pub fn intersects(&self, other: &DaySet) -> bool {
        match (self, other) {
            (DaySet::DaysOfWeek(mine), DaySet::DaysOfWeek(theirs))
            | (DaySet::DaysOfMonth(mine), DaySet::DaysOfMonth(theirs)) => {
                mine.iter().any(|day| theirs.contains(day))
            }
            _ => false,
        }
    }
}

/// A recurring schedule entry: a time-of-day window active on a set of days.
///
/// `end_time` is not required to be later than `start_time` at this layer;
/// cross-midnight windows are compared literally by the detector, without
/// wrap-around inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringScheduleTime {
    /// Opaque label identifying the owning schedule entry in conflict reports.
    pub schedule_identifier: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(flatten)]
    pub day_set: DaySet,
}

/// A specific-date schedule entry: one absolute, non-repeating window.
///
/// `end_date_time > start_date_time` is guaranteed by an upstream field
/// check before the detector runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificDateScheduleDateTime {
    /// Opaque label identifying the owning schedule entry in conflict reports.
    pub schedule_identifier: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
}
