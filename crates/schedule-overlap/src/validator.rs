//! Policy-level validation: field guards plus both overlap detectors,
//! aggregated into one list of user-visible violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conflict::Conflict;
use crate::guards;
use crate::recurring::find_recurring_overlaps;
use crate::schedule::{RecurringScheduleTime, SpecificDateScheduleDateTime};
use crate::specific_date::find_specific_date_overlaps;

/// The schedule portion of one autoscaling policy, ready for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// IANA timezone id shared by every schedule of the policy.
    pub timezone: String,
    #[serde(default)]
    pub recurring_schedules: Vec<RecurringScheduleTime>,
    #[serde(default)]
    pub specific_date_schedules: Vec<SpecificDateScheduleDateTime>,
}

/// One reason a policy's schedules were rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyViolation {
    #[error("timezone {0} is not supported")]
    InvalidTimezone(String),

    #[error("schedule {schedule}: day set must not be empty")]
    EmptyDaySet { schedule: String },

    #[error("schedule {schedule}: day values must lie between {lower} and {upper}")]
    DayValueOutOfRange {
        schedule: String,
        lower: u32,
        upper: u32,
    },

    #[error("schedule {schedule}: day values must be unique")]
    DuplicateDayValues { schedule: String },

    #[error("schedule {schedule}: end_date_time must be after start_date_time")]
    EndNotAfterStart { schedule: String },

    #[error("{0}")]
    Overlap(Conflict),
}

/// Validate a policy's schedules: field checks first, then both overlap
/// detectors. Returns `Ok(())` when nothing is wrong, otherwise every
/// violation found, field failures before conflicts.
pub fn validate_policy(policy: &SchedulePolicy) -> Result<(), Vec<PolicyViolation>> {
    let mut violations = Vec::new();

    if !guards::is_valid_timezone(&policy.timezone) {
        violations.push(PolicyViolation::InvalidTimezone(policy.timezone.clone()));
    }

    for entry in &policy.recurring_schedules {
        let days = entry.day_set.days();
        let (lower, upper) = entry.day_set.bounds();

        if days.is_empty() {
            violations.push(PolicyViolation::EmptyDaySet {
                schedule: entry.schedule_identifier.clone(),
            });
        }
        if !guards::is_within_range(days, lower, upper) {
            violations.push(PolicyViolation::DayValueOutOfRange {
                schedule: entry.schedule_identifier.clone(),
                lower,
                upper,
            });
        }
        if !guards::has_unique_elements(days) {
            violations.push(PolicyViolation::DuplicateDayValues {
                schedule: entry.schedule_identifier.clone(),
            });
        }
    }

    for entry in &policy.specific_date_schedules {
        if !guards::is_after(&entry.end_date_time, &entry.start_date_time) {
            violations.push(PolicyViolation::EndNotAfterStart {
                schedule: entry.schedule_identifier.clone(),
            });
        }
    }

    violations.extend(
        find_recurring_overlaps(&policy.recurring_schedules)
            .into_iter()
            .map(PolicyViolation::Overlap),
    );
    violations.extend(
        find_specific_date_overlaps(&policy.specific_date_schedules)
            .into_iter()
            .map(PolicyViolation::Overlap),
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
