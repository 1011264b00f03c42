//! Weekly class slots and the drafts they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::error::{ClassGridError, ClassGridResult};
use crate::time::TimeOfDay;
use crate::weekday::Weekday;

/// One recurring weekly class slot belonging to a section.
///
/// Field names on disk follow the `schedules` collection layout
/// (`sectionId`, `courseName`, `startTime`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub section_id: String,
    pub course_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub professor_name: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Build a new slot from an already validated draft.
    pub fn from_draft(section_id: &str, draft: &ScheduleDraft) -> Self {
        Schedule {
            id: uuid::Uuid::new_v4().to_string(),
            section_id: section_id.to_string(),
            course_name: draft.course_name.trim().to_string(),
            day: draft.day,
            start_time: draft.start_time,
            end_time: draft.end_time,
            room: draft.room.trim().to_string(),
            professor_name: draft.professor_name.trim().to_string(),
            color: draft.color.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// Replace every user-editable field with the draft's values.
    /// Identity, owner and creation time are kept; a draft without a color
    /// keeps the current one.
    pub fn with_draft(&self, draft: &ScheduleDraft) -> Self {
        Schedule {
            id: self.id.clone(),
            section_id: self.section_id.clone(),
            created_at: self.created_at,
            color: draft.color.unwrap_or(self.color),
            ..Schedule::from_draft(&self.section_id, draft)
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time
            .minutes_since_midnight()
            .saturating_sub(self.start_time.minutes_since_midnight())
    }

    /// Short id prefix for display, like a git short hash.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} {}-{})",
            self.course_name, self.day, self.start_time, self.end_time
        )
    }
}

/// The user-supplied fields of a class slot, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub course_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub room: String,
    pub professor_name: String,
    pub color: Option<Color>,
}

impl Default for ScheduleDraft {
    /// Monday 7:00 AM to 8:00 AM, the form's initial state.
    fn default() -> Self {
        ScheduleDraft {
            course_name: String::new(),
            day: Weekday::Monday,
            start_time: TimeOfDay::at(7, 0),
            end_time: TimeOfDay::at(8, 0),
            room: String::new(),
            professor_name: String::new(),
            color: None,
        }
    }
}

impl ScheduleDraft {
    /// Prefill a draft from an existing slot, for editing.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        ScheduleDraft {
            course_name: schedule.course_name.clone(),
            day: schedule.day,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            room: schedule.room.clone(),
            professor_name: schedule.professor_name.clone(),
            color: Some(schedule.color),
        }
    }

    /// Enforce the picker domain and start-before-end ordering.
    pub fn validate(&self) -> ClassGridResult<()> {
        if self.course_name.trim().is_empty() {
            return Err(ClassGridError::InvalidName(
                "Course name cannot be empty".into(),
            ));
        }

        if !TimeOfDay::start_options().contains(&self.start_time) {
            return Err(ClassGridError::TimeNotOffered(format!(
                "Start time {} is outside the 7:00 AM to 4:30 PM half-hour choices",
                self.start_time
            )));
        }

        if !TimeOfDay::end_options().contains(&self.end_time) {
            return Err(ClassGridError::TimeNotOffered(format!(
                "End time {} is outside the 7:30 AM to 5:00 PM half-hour choices",
                self.end_time
            )));
        }

        if self.end_time <= self.start_time {
            return Err(ClassGridError::InvalidTimeRange(
                "End time must be after start time".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn draft(start: &str, end: &str) -> ScheduleDraft {
        ScheduleDraft {
            course_name: "Data Structures".into(),
            start_time: t(start),
            end_time: t(end),
            ..ScheduleDraft::default()
        }
    }

    #[test]
    fn default_draft_matches_form() {
        let draft = ScheduleDraft::default();
        assert_eq!(draft.day, Weekday::Monday);
        assert_eq!(draft.start_time.to_string(), "7:00 AM");
        assert_eq!(draft.end_time.to_string(), "8:00 AM");
        assert_eq!(draft.color, None);
    }

    #[test]
    fn validate_accepts_ordered_range() {
        assert!(draft("7:00 AM", "5:00 PM").validate().is_ok());
        assert!(draft("4:30 PM", "5:00 PM").validate().is_ok());
    }

    #[test]
    fn validate_rejects_reversed_or_empty_range() {
        assert!(matches!(
            draft("9:00 AM", "9:00 AM").validate(),
            Err(ClassGridError::InvalidTimeRange(_))
        ));
        assert!(matches!(
            draft("10:00 AM", "9:00 AM").validate(),
            Err(ClassGridError::InvalidTimeRange(_))
        ));
    }

    #[test]
    fn validate_rejects_times_off_the_picker() {
        for (start, end) in [
            ("6:30 AM", "8:00 AM"),
            ("8:15 AM", "9:00 AM"),
            ("4:00 PM", "5:30 PM"),
            ("5:00 PM", "5:00 PM"),
        ] {
            assert!(
                matches!(draft(start, end).validate(), Err(ClassGridError::TimeNotOffered(_))),
                "{start}-{end}"
            );
        }
    }

    #[test]
    fn off_picker_start_names_the_start_time() {
        let err = draft("6:30 AM", "9:00 AM").validate().unwrap_err();
        assert!(err.to_string().contains("Start time 6:30 AM"));
    }

    #[test]
    fn validate_allows_blank_room_and_professor() {
        let mut d = draft("8:00 AM", "9:00 AM");
        d.room = String::new();
        d.professor_name = "   ".into();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn validate_requires_course_name() {
        let mut d = draft("8:00 AM", "9:00 AM");
        d.course_name = "  ".into();
        assert!(matches!(d.validate(), Err(ClassGridError::InvalidName(_))));
    }

    #[test]
    fn new_schedule_defaults_to_maroon() {
        let schedule = Schedule::from_draft("sec-1", &draft("8:00 AM", "9:00 AM"));
        assert_eq!(schedule.color, Color::Maroon);
        assert_eq!(schedule.section_id, "sec-1");
        assert_eq!(schedule.duration_minutes(), 60);
    }

    #[test]
    fn edit_keeps_identity_and_color_when_unset() {
        let mut d = draft("8:00 AM", "9:00 AM");
        d.color = Some(Color::Blue);
        let original = Schedule::from_draft("sec-1", &d);

        let mut edit = draft("1:00 PM", "2:30 PM");
        edit.course_name = "Algorithms".into();
        let edited = original.with_draft(&edit);

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.section_id, original.section_id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.color, Color::Blue);
        assert_eq!(edited.course_name, "Algorithms");
        assert_eq!(edited.start_time, t("1:00 PM"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let schedule = Schedule::from_draft("sec-1", &draft("8:00 AM", "9:00 AM"));
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["sectionId"], "sec-1");
        assert_eq!(value["startTime"], "8:00 AM");
        assert_eq!(value["day"], "Monday");
        assert_eq!(value["color"], "maroon");
        assert!(value.get("professorName").is_some());
    }

    #[test]
    fn deserializes_record_without_color() {
        let json = r#"{
            "id": "a", "sectionId": "s", "courseName": "Physics",
            "day": "Tuesday", "startTime": "9:00 AM", "endTime": "10:30 AM",
            "room": "R101", "professorName": "Reyes"
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.color, Color::Maroon);
        assert_eq!(schedule.duration_minutes(), 90);
    }
}
