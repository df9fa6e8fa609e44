//! # schedule-overlap
//!
//! Overlap detection for the schedules of an autoscaling policy.
//!
//! A policy carries recurring schedules (a time-of-day window repeating on a
//! set of weekdays or month-days) and specific-date schedules (one absolute
//! start/end window). Before a policy is accepted, every pair of entries
//! whose active windows can be simultaneously true must be reported, so that
//! scaling triggers are never ambiguous. A detected overlap is data returned
//! to the caller, never an error.
//!
//! ## Modules
//!
//! - [`schedule`] — schedule entry types ([`RecurringScheduleTime`],
//!   [`SpecificDateScheduleDateTime`], [`DaySet`])
//! - [`conflict`] — the conflict descriptor reported for each overlapping pair
//! - [`recurring`] — pairwise overlap detection over recurring schedules
//! - [`specific_date`] — adjacent-pair overlap detection over specific-date
//!   schedules
//! - [`guards`] — field-level guard predicates run before overlap detection
//! - [`validator`] — policy-level aggregation of guard failures and conflicts

pub mod conflict;
pub mod guards;
pub mod recurring;
pub mod schedule;
pub mod specific_date;
pub mod validator;

pub use conflict::{Conflict, ConflictField};
pub use recurring::find_recurring_overlaps;
pub use schedule::{DaySet, RecurringScheduleTime, SpecificDateScheduleDateTime};
pub use specific_date::find_specific_date_overlaps;
pub use validator::{validate_policy, PolicyViolation, SchedulePolicy};
