//! `schedule-check` CLI — validate the schedules of an autoscaling policy
//! document before it is submitted.
//!
//! ## Usage
//!
//! ```sh
//! # Check a policy file
//! schedule-check check -i policy.json
//!
//! # Check a policy piped via stdin, machine-readable output
//! cat policy.json | schedule-check check --json
//!
//! # Ask whether a timezone id is supported
//! schedule-check timezones America/New_York
//! ```
//!
//! Exit code 0 means the schedules are valid; 1 means violations were found
//! (or the input could not be read/parsed).

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use schedule_overlap::{
    guards, validate_policy, DaySet, RecurringScheduleTime, SchedulePolicy,
    SpecificDateScheduleDateTime,
};

#[derive(Parser)]
#[command(
    name = "schedule-check",
    version,
    about = "Overlap checker for autoscaling schedule policies"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a policy document and report every violation
    Check {
        /// Input policy JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit violations as a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Check whether a timezone id is supported
    Timezones {
        /// IANA timezone id, e.g. "America/New_York"
        id: String,
    },
}

/// A policy document as submitted: schedules carry no identifiers yet.
#[derive(Deserialize)]
struct PolicyDocument {
    timezone: String,
    #[serde(default)]
    recurring_schedules: Vec<RecurringScheduleDocument>,
    #[serde(default)]
    specific_date_schedules: Vec<SpecificDateScheduleDocument>,
}

#[derive(Deserialize)]
struct RecurringScheduleDocument {
    start_time: NaiveTime,
    end_time: NaiveTime,
    #[serde(flatten)]
    day_set: DaySet,
}

#[derive(Deserialize)]
struct SpecificDateScheduleDocument {
    start_date_time: NaiveDateTime,
    end_date_time: NaiveDateTime,
}

impl PolicyDocument {
    /// Assign positional identifiers and build the library-level policy.
    fn into_policy(self) -> SchedulePolicy {
        SchedulePolicy {
            timezone: self.timezone,
            recurring_schedules: self
                .recurring_schedules
                .into_iter()
                .enumerate()
                .map(|(index, doc)| RecurringScheduleTime {
                    schedule_identifier: format!("recurring_schedule[{}]", index),
                    start_time: doc.start_time,
                    end_time: doc.end_time,
                    day_set: doc.day_set,
                })
                .collect(),
            specific_date_schedules: self
                .specific_date_schedules
                .into_iter()
                .enumerate()
                .map(|(index, doc)| SpecificDateScheduleDateTime {
                    schedule_identifier: format!("specific_date_schedule[{}]", index),
                    start_date_time: doc.start_date_time,
                    end_date_time: doc.end_date_time,
                })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, json } => {
            let raw = read_input(input.as_deref())?;
            let document: PolicyDocument =
                serde_json::from_str(&raw).context("Failed to parse policy document")?;
            let policy = document.into_policy();

            match validate_policy(&policy) {
                Ok(()) => {
                    if json {
                        println!("[]");
                    } else {
                        println!("policy schedules are valid");
                    }
                }
                Err(violations) => {
                    if json {
                        let messages: Vec<String> =
                            violations.iter().map(ToString::to_string).collect();
                        println!("{}", serde_json::to_string_pretty(&messages)?);
                    } else {
                        for violation in &violations {
                            println!("{}", violation);
                        }
                        eprintln!("{} violation(s) found", violations.len());
                    }
                    process::exit(1);
                }
            }
        }
        Commands::Timezones { id } => {
            if guards::is_valid_timezone(&id) {
                println!("{} is supported", id);
            } else {
                println!("{} is not supported", id);
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
