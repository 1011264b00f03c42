//! Same-day overlap detection for class slots within one section.
//!
//! The check is pure: callers pass in the section's current slots and get a
//! [`Decision`] back. Turning a rejection into an error or a user-facing
//! notification is left to the caller.

use std::fmt;

use log::debug;

use crate::schedule::{Schedule, ScheduleDraft};
use crate::time::TimeOfDay;
use crate::weekday::Weekday;

/// The part of a slot the overlap check looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Set when editing, so the slot's own stored version is skipped.
    pub id: Option<&'a str>,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl<'a> Candidate<'a> {
    pub fn new(day: Weekday, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Candidate {
            id: None,
            day,
            start_time,
            end_time,
        }
    }

    pub fn from_draft(draft: &ScheduleDraft, editing: Option<&'a str>) -> Self {
        Candidate {
            id: editing,
            ..Candidate::new(draft.day, draft.start_time, draft.end_time)
        }
    }

    pub fn from_schedule(schedule: &'a Schedule) -> Self {
        Candidate {
            id: Some(&schedule.id),
            ..Candidate::new(schedule.day, schedule.start_time, schedule.end_time)
        }
    }
}

/// The existing slot a candidate ran into.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub schedule_id: String,
    pub course_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Conflict {
    fn with(schedule: &Schedule) -> Self {
        Conflict {
            schedule_id: schedule.id.clone(),
            course_name: schedule.course_name.clone(),
            day: schedule.day,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Schedule conflicts with {} on {} {}-{}",
            self.course_name, self.day, self.start_time, self.end_time
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted,
    Rejected(Conflict),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }
}

/// Half-open `[start, end)` interval overlap, in minutes since midnight.
///
/// Written as the three cases a new slot can hit an existing one: starting
/// inside it, ending inside it, or swallowing it. For `start < end` on both
/// sides this is the same as `new_start < existing_end && new_end > existing_start`.
pub fn overlaps(new_start: u16, new_end: u16, existing_start: u16, existing_end: u16) -> bool {
    (new_start >= existing_start && new_start < existing_end)
        || (new_end > existing_start && new_end <= existing_end)
        || (new_start <= existing_start && new_end >= existing_end)
}

/// Decide whether `candidate` can be committed next to `existing`.
///
/// `existing` should be the slots of the candidate's section. Slots on other
/// days, and the stored version of the candidate itself, are ignored.
/// The first clashing slot in `existing` order is reported.
pub fn check(candidate: &Candidate, existing: &[Schedule]) -> Decision {
    let new_start = candidate.start_time.minutes_since_midnight();
    let new_end = candidate.end_time.minutes_since_midnight();

    let clash = existing
        .iter()
        .filter(|schedule| schedule.day == candidate.day)
        .filter(|schedule| candidate.id != Some(schedule.id.as_str()))
        .find(|schedule| {
            overlaps(
                new_start,
                new_end,
                schedule.start_time.minutes_since_midnight(),
                schedule.end_time.minutes_since_midnight(),
            )
        });

    match clash {
        Some(schedule) => {
            debug!(
                "{} {}-{} overlaps {}",
                candidate.day, candidate.start_time, candidate.end_time, schedule
            );
            Decision::Rejected(Conflict::with(schedule))
        }
        None => Decision::Accepted,
    }
}
