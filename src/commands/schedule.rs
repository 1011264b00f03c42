use anyhow::Result;
use clap::Args;
use classgrid_core::notification::{Notification, Notifier};
use classgrid_core::{
    Color, Schedule, ScheduleDraft, ScheduleRepository, Section, TimeOfDay, Weekday,
};
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Class slot fields shared by `add` and `edit`. Anything left out keeps its
/// current value (or the form default when adding).
#[derive(Args, Debug, Default, Clone)]
pub struct ScheduleFields {
    /// Course name
    #[arg(short, long)]
    pub course: Option<String>,

    /// Day of the week (e.g. "Monday")
    #[arg(short, long)]
    pub day: Option<Weekday>,

    /// Start time (e.g. "8:00 AM")
    #[arg(short, long)]
    pub start: Option<TimeOfDay>,

    /// End time (e.g. "9:30 AM")
    #[arg(short, long)]
    pub end: Option<TimeOfDay>,

    /// Room
    #[arg(short, long)]
    pub room: Option<String>,

    /// Professor name
    #[arg(short, long)]
    pub professor: Option<String>,

    /// maroon, gold, blue, green, purple or orange
    #[arg(long)]
    pub color: Option<Color>,
}

impl ScheduleFields {
    /// Overlay the given fields onto `draft`.
    pub fn apply(&self, mut draft: ScheduleDraft) -> ScheduleDraft {
        if let Some(course) = &self.course {
            draft.course_name = course.clone();
        }
        if let Some(day) = self.day {
            draft.day = day;
        }
        if let Some(start) = self.start {
            draft.start_time = start;
        }
        if let Some(end) = self.end {
            draft.end_time = end;
        }
        if let Some(room) = &self.room {
            draft.room = room.clone();
        }
        if let Some(professor) = &self.professor {
            draft.professor_name = professor.clone();
        }
        if let Some(color) = self.color {
            draft.color = Some(color);
        }
        draft
    }
}

pub fn list(repo: &impl ScheduleRepository, section: &Section, json: bool) -> Result<()> {
    let schedules = repo.list_events(&section.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&schedules)?);
        return Ok(());
    }

    println!("{}", section.render());
    if schedules.is_empty() {
        println!("{}", "  No schedules yet".dimmed());
        return Ok(());
    }

    for schedule in &schedules {
        println!("{}", schedule.render());
    }

    Ok(())
}

pub fn add(
    repo: &mut impl ScheduleRepository,
    notifier: &impl Notifier,
    section: &Section,
    fields: &ScheduleFields,
) -> Result<()> {
    let draft = if fields.course.is_none() {
        prompt_draft(fields.apply(ScheduleDraft::default()))?
    } else {
        fields.apply(ScheduleDraft::default())
    };

    let schedule = commit(repo, notifier, &section.id, &draft, None)?;
    println!("{}", format!("  Created: {}", schedule).green());
    Ok(())
}

pub fn edit(
    repo: &mut impl ScheduleRepository,
    notifier: &impl Notifier,
    existing: &Schedule,
    fields: &ScheduleFields,
) -> Result<()> {
    let draft = fields.apply(ScheduleDraft::from_schedule(existing));

    let schedule = commit(repo, notifier, &existing.section_id, &draft, Some(&existing.id))?;
    println!("{}", format!("  Updated: {}", schedule).yellow());
    Ok(())
}

pub fn delete(repo: &mut impl ScheduleRepository, existing: &Schedule, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete {}? This action cannot be undone.",
                existing
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    repo.delete_event(&existing.id)?;
    println!("{}", format!("  Deleted: {}", existing).red());
    Ok(())
}

/// Commit through the repository, raising a notification for rejections the
/// user can fix by picking another time or day.
pub fn commit(
    repo: &mut impl ScheduleRepository,
    notifier: &impl Notifier,
    section_id: &str,
    draft: &ScheduleDraft,
    editing: Option<&str>,
) -> Result<Schedule> {
    repo.commit_event(section_id, draft, editing).map_err(|e| {
        if let Some(notification) = Notification::for_error(&e) {
            notifier.notify(notification);
        }
        anyhow::Error::new(e)
    })
}

/// Ask for every field, using the draft's values as defaults.
fn prompt_draft(draft: ScheduleDraft) -> Result<ScheduleDraft> {
    let course_name: String = Input::new().with_prompt("  Course name").interact_text()?;

    let day_index = Select::new()
        .with_prompt("  Day")
        .items(Weekday::ALL.iter().map(Weekday::name))
        .default(draft.day.column())
        .interact()?;

    let start_options = TimeOfDay::start_options();
    let start_index = Select::new()
        .with_prompt("  Start time")
        .items(start_options.iter().map(TimeOfDay::to_string))
        .default(
            start_options
                .iter()
                .position(|t| *t == draft.start_time)
                .unwrap_or(0),
        )
        .interact()?;

    let end_options = TimeOfDay::end_options();
    let end_index = Select::new()
        .with_prompt("  End time")
        .items(end_options.iter().map(TimeOfDay::to_string))
        .default(
            end_options
                .iter()
                .position(|t| *t == draft.end_time)
                .unwrap_or(0),
        )
        .interact()?;

    let room: String = Input::new()
        .with_prompt("  Room (skip)")
        .default(draft.room.clone())
        .show_default(!draft.room.is_empty())
        .allow_empty(true)
        .interact_text()?;

    let professor_name: String = Input::new()
        .with_prompt("  Professor (skip)")
        .default(draft.professor_name.clone())
        .show_default(!draft.professor_name.is_empty())
        .allow_empty(true)
        .interact_text()?;

    let color_index = Select::new()
        .with_prompt("  Color")
        .items(Color::ALL.iter().map(Color::as_str))
        .default(
            Color::ALL
                .iter()
                .position(|c| *c == draft.color.unwrap_or_default())
                .unwrap_or(0),
        )
        .interact()?;

    Ok(ScheduleDraft {
        course_name,
        day: Weekday::ALL[day_index],
        start_time: start_options[start_index],
        end_time: end_options[end_index],
        room,
        professor_name,
        color: Some(Color::ALL[color_index]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{draft, store};
    use classgrid_core::ClassGridError;
    use classgrid_core::notification::RecordingNotifier;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn fields_overlay_only_what_is_given() {
        let base = draft("Physics", Weekday::Tuesday, "9:00 AM", "10:00 AM");
        let fields = ScheduleFields {
            end: Some(t("11:00 AM")),
            color: Some(Color::Gold),
            ..ScheduleFields::default()
        };

        let applied = fields.apply(base.clone());
        assert_eq!(applied.course_name, "Physics");
        assert_eq!(applied.day, Weekday::Tuesday);
        assert_eq!(applied.start_time, base.start_time);
        assert_eq!(applied.end_time, t("11:00 AM"));
        assert_eq!(applied.color, Some(Color::Gold));
    }

    #[test]
    fn add_uses_form_defaults() {
        let mut repo = store();
        let notifier = RecordingNotifier::new();
        let section = repo.create_section("CPE2-1").unwrap();

        let fields = ScheduleFields {
            course: Some("Statics".into()),
            ..ScheduleFields::default()
        };
        add(&mut repo, &notifier, &section, &fields).unwrap();

        let events = repo.list_events(&section.id);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].day, Weekday::Monday);
        assert_eq!(events[0].start_time, t("7:00 AM"));
        assert_eq!(events[0].end_time, t("8:00 AM"));
        assert_eq!(events[0].color, Color::Maroon);
    }

    #[test]
    fn conflicting_add_notifies_and_fails() {
        let mut repo = store();
        let notifier = RecordingNotifier::new();
        let section = repo.create_section("CPE2-1").unwrap();
        repo.create_event(&section.id, &draft("A", Weekday::Monday, "8:00 AM", "9:00 AM"))
            .unwrap();

        let result = commit(
            &mut repo,
            &notifier,
            &section.id,
            &draft("B", Weekday::Monday, "8:30 AM", "9:30 AM"),
            None,
        );

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClassGridError>(),
            Some(ClassGridError::Conflict(_))
        ));
        assert_eq!(notifier.received(), vec![Notification::schedule_conflict()]);
        assert_eq!(repo.list_events(&section.id).len(), 1);
    }

    #[test]
    fn reversed_range_notifies_invalid_time_range() {
        let mut repo = store();
        let notifier = RecordingNotifier::new();
        let section = repo.create_section("CPE2-1").unwrap();

        let result = commit(
            &mut repo,
            &notifier,
            &section.id,
            &draft("A", Weekday::Monday, "10:00 AM", "9:00 AM"),
            None,
        );

        assert!(result.is_err());
        assert_eq!(notifier.received(), vec![Notification::invalid_time_range()]);
    }

    #[test]
    fn off_picker_start_notifies_with_the_start_time() {
        let mut repo = store();
        let notifier = RecordingNotifier::new();
        let section = repo.create_section("CPE2-1").unwrap();

        let result = commit(
            &mut repo,
            &notifier,
            &section.id,
            &draft("A", Weekday::Monday, "6:30 AM", "9:00 AM"),
            None,
        );

        assert!(result.is_err());
        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].title, "Invalid Time");
        assert!(received[0].description.contains("Start time 6:30 AM"));
        assert!(!received[0].description.contains("End time"));
        assert!(repo.list_events(&section.id).is_empty());
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let mut repo = store();
        let notifier = RecordingNotifier::new();
        let section = repo.create_section("CPE2-1").unwrap();
        let mut original = draft("A", Weekday::Monday, "8:00 AM", "9:00 AM");
        original.room = "R1".into();
        let created = repo.create_event(&section.id, &original).unwrap();

        let fields = ScheduleFields {
            day: Some(Weekday::Thursday),
            ..ScheduleFields::default()
        };
        edit(&mut repo, &notifier, &created, &fields).unwrap();

        let updated = repo.event(&created.id).unwrap();
        assert_eq!(updated.day, Weekday::Thursday);
        assert_eq!(updated.room, "R1");
        assert_eq!(updated.start_time, created.start_time);
        assert!(notifier.received().is_empty());
    }

    #[test]
    fn delete_with_yes_skips_prompt() {
        let mut repo = store();
        let section = repo.create_section("CPE2-1").unwrap();
        let created = repo
            .create_event(&section.id, &draft("A", Weekday::Monday, "8:00 AM", "9:00 AM"))
            .unwrap();

        delete(&mut repo, &created, true).unwrap();
        assert!(repo.list_events(&section.id).is_empty());
    }
}
