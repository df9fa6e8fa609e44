//! The conflict descriptor reported for each overlapping schedule pair.
//!
//! A conflict is data, not an error: detectors return descriptors through
//! their result sequence and the outer validator turns them into user-facing
//! messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which boundary of a schedule entry collided.
///
/// Serialized with the wire names the outer validator embeds in error
/// messages (`start_time`, `end_time`, `start_date_time`, `end_date_time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictField {
    StartTime,
    EndTime,
    StartDateTime,
    EndDateTime,
}

impl ConflictField {
    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictField::StartTime => "start_time",
            ConflictField::EndTime => "end_time",
            ConflictField::StartDateTime => "start_date_time",
            ConflictField::EndDateTime => "end_date_time",
        }
    }
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected overlap between two schedule entries.
///
/// The ordered 4-tuple identifies which boundary of which entry collided
/// with which boundary of the other. Identifier order follows the sort
/// order of the underlying entries, not the discovery order of the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    pub first_identifier: String,
    pub first_field: ConflictField,
    pub second_identifier: String,
    pub second_field: ConflictField,
}

impl Conflict {
    pub fn new(
        first_identifier: impl Into<String>,
        first_field: ConflictField,
        second_identifier: impl Into<String>,
        second_field: ConflictField,
    ) -> Self {
        Conflict {
            first_identifier: first_identifier.into(),
            first_field,
            second_identifier: second_identifier.into(),
            second_field,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of schedule {} overlaps {} of schedule {}",
            self.first_field, self.first_identifier, self.second_field, self.second_identifier
        )
    }
}
