//! Section and schedule storage.
//!
//! [`ScheduleRepository`] is the only way records change. Commits go through
//! the conflict check, and [`JsonStore`] writes the whole document to a
//! temporary file and renames it into place before the in-memory copy is
//! replaced, so a failed commit leaves both disk and memory as they were.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::conflict::{self, Candidate, Decision};
use crate::error::{ClassGridError, ClassGridResult};
use crate::schedule::{Schedule, ScheduleDraft};
use crate::section::Section;

/// Section names created when the store is empty on first run.
pub const SAMPLE_SECTIONS: [&str; 3] = ["CPE2-1", "CPE3-2", "CPE2-2"];

/// Operations the front end performs on sections and their schedules.
pub trait ScheduleRepository {
    fn list_sections(&self) -> Vec<Section>;

    fn section(&self, id: &str) -> Option<Section>;

    fn create_section(&mut self, name: &str) -> ClassGridResult<Section>;

    /// Remove the section and every schedule it owns. Unknown ids are ignored.
    fn delete_section(&mut self, id: &str) -> ClassGridResult<()>;

    /// The section's schedules in week order, then by start time.
    fn list_events(&self, section_id: &str) -> Vec<Schedule>;

    fn event(&self, id: &str) -> Option<Schedule>;

    /// Validate `draft` and store it, unless it overlaps another schedule of
    /// the section on the same day.
    ///
    /// With `editing` set, the schedule with that id is replaced; its id,
    /// section and creation time survive the edit.
    fn commit_event(
        &mut self,
        section_id: &str,
        draft: &ScheduleDraft,
        editing: Option<&str>,
    ) -> ClassGridResult<Schedule>;

    /// Unknown ids are ignored.
    fn delete_event(&mut self, id: &str) -> ClassGridResult<()>;

    /// Look up a section by id, or by name ignoring case.
    fn find_section(&self, query: &str) -> Option<Section> {
        let sections = self.list_sections();
        sections
            .iter()
            .find(|s| s.id == query.trim())
            .or_else(|| sections.iter().find(|s| s.matches(query)))
            .cloned()
    }

    fn create_event(
        &mut self,
        section_id: &str,
        draft: &ScheduleDraft,
    ) -> ClassGridResult<Schedule> {
        self.commit_event(section_id, draft, None)
    }

    fn update_event(&mut self, id: &str, draft: &ScheduleDraft) -> ClassGridResult<Schedule> {
        let existing = self
            .event(id)
            .ok_or_else(|| ClassGridError::ScheduleNotFound(id.to_string()))?;
        self.commit_event(&existing.section_id, draft, Some(id))
    }
}

/// The persisted document: the `sections` and `schedules` collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

impl StoreData {
    fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn events_for(&self, section_id: &str) -> Vec<Schedule> {
        let mut events: Vec<Schedule> = self
            .schedules
            .iter()
            .filter(|s| s.section_id == section_id)
            .cloned()
            .collect();

        events.sort_by(|a, b| {
            a.day
                .cmp(&b.day)
                .then(a.start_time.cmp(&b.start_time))
                .then(a.end_time.cmp(&b.end_time))
        });
        events
    }

    fn commit(
        &mut self,
        section_id: &str,
        draft: &ScheduleDraft,
        editing: Option<&str>,
    ) -> ClassGridResult<Schedule> {
        if self.section(section_id).is_none() {
            return Err(ClassGridError::SectionNotFound(section_id.to_string()));
        }

        let previous = match editing {
            Some(id) => Some(
                self.schedules
                    .iter()
                    .position(|s| s.id == id && s.section_id == section_id)
                    .ok_or_else(|| ClassGridError::ScheduleNotFound(id.to_string()))?,
            ),
            None => None,
        };

        draft.validate()?;

        let existing = self.events_for(section_id);
        let candidate = Candidate::from_draft(draft, editing);
        if let Decision::Rejected(conflict) = conflict::check(&candidate, &existing) {
            return Err(ClassGridError::Conflict(conflict));
        }

        let schedule = match previous {
            Some(index) => {
                let updated = self.schedules[index].with_draft(draft);
                self.schedules[index] = updated.clone();
                updated
            }
            None => {
                let created = Schedule::from_draft(section_id, draft);
                self.schedules.push(created.clone());
                created
            }
        };

        Ok(schedule)
    }
}

/// A [`ScheduleRepository`] kept in a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: Option<PathBuf>,
    data: StoreData,
}

impl JsonStore {
    /// Load the document at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> ClassGridResult<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StoreData::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            StoreData::default()
        };

        debug!(
            "Loaded {} sections and {} schedules from {}",
            data.sections.len(),
            data.schedules.len(),
            path.display()
        );

        Ok(JsonStore {
            path: Some(path),
            data,
        })
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        JsonStore {
            path: None,
            data: StoreData::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// Create the sample sections if there are no sections at all.
    /// Returns true if anything was created.
    pub fn seed_sample_sections(&mut self) -> ClassGridResult<bool> {
        if !self.data.sections.is_empty() {
            return Ok(false);
        }

        self.mutate(|data| {
            for name in SAMPLE_SECTIONS {
                data.sections.push(Section::new(name)?);
            }
            Ok(())
        })?;

        info!("Seeded sample sections: {}", SAMPLE_SECTIONS.join(", "));
        Ok(true)
    }

    /// Apply `change` to a copy of the document, persist it, then swap it in.
    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut StoreData) -> ClassGridResult<T>,
    ) -> ClassGridResult<T> {
        let mut next = self.data.clone();
        let result = change(&mut next)?;

        if next != self.data {
            self.save(&next)?;
            self.data = next;
        }

        Ok(result)
    }

    fn save(&self, data: &StoreData) -> ClassGridResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut temp = path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, path)?;

        debug!("Saved {}", path.display());
        Ok(())
    }
}

impl ScheduleRepository for JsonStore {
    fn list_sections(&self) -> Vec<Section> {
        self.data.sections.clone()
    }

    fn section(&self, id: &str) -> Option<Section> {
        self.data.section(id).cloned()
    }

    fn create_section(&mut self, name: &str) -> ClassGridResult<Section> {
        let section = self.mutate(|data| {
            let section = Section::new(name)?;
            data.sections.push(section.clone());
            Ok(section)
        })?;

        info!("Created section {} ({})", section.name, section.id);
        Ok(section)
    }

    fn delete_section(&mut self, id: &str) -> ClassGridResult<()> {
        let removed = self.mutate(|data| {
            data.sections.retain(|s| s.id != id);
            let before = data.schedules.len();
            data.schedules.retain(|s| s.section_id != id);
            Ok(before - data.schedules.len())
        })?;

        info!("Deleted section {} and {} schedules", id, removed);
        Ok(())
    }

    fn list_events(&self, section_id: &str) -> Vec<Schedule> {
        self.data.events_for(section_id)
    }

    fn event(&self, id: &str) -> Option<Schedule> {
        self.data.schedules.iter().find(|s| s.id == id).cloned()
    }

    fn commit_event(
        &mut self,
        section_id: &str,
        draft: &ScheduleDraft,
        editing: Option<&str>,
    ) -> ClassGridResult<Schedule> {
        match self.mutate(|data| data.commit(section_id, draft, editing)) {
            Ok(schedule) => {
                info!("Committed {} [{}]", schedule, schedule.id);
                Ok(schedule)
            }
            Err(ClassGridError::Conflict(conflict)) => {
                warn!("Rejected {} {}: {}", draft.course_name, draft.day, conflict);
                Err(ClassGridError::Conflict(conflict))
            }
            Err(e) => Err(e),
        }
    }

    fn delete_event(&mut self, id: &str) -> ClassGridResult<()> {
        self.mutate(|data| {
            data.schedules.retain(|s| s.id != id);
            Ok(())
        })?;

        info!("Deleted schedule {}", id);
        Ok(())
    }
}
