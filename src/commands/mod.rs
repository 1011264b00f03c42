pub mod grid;
pub mod schedule;
pub mod section;
pub mod times;

use anyhow::Result;
use classgrid_core::{Schedule, ScheduleRepository, Section};

/// Find the section a command should act on.
///
/// `query` is an id or a case-insensitive name; when absent the configured
/// default section is used.
pub fn resolve_section(
    repo: &impl ScheduleRepository,
    query: Option<&str>,
    default_section: Option<&str>,
) -> Result<Section> {
    let Some(query) = query.or(default_section) else {
        anyhow::bail!(
            "No section given.\n\n\
            Pass a section name, or pick a default with:\n  \
            classgrid section use <SECTION>"
        );
    };

    match repo.find_section(query) {
        Some(section) => Ok(section),
        None => {
            let available: Vec<_> = repo.list_sections().into_iter().map(|s| s.name).collect();
            if available.is_empty() {
                anyhow::bail!(
                    "Section '{}' not found. Create one with:\n  classgrid section add <NAME>",
                    query
                );
            }
            anyhow::bail!(
                "Section '{}' not found. Available: {}",
                query,
                available.join(", ")
            );
        }
    }
}

/// Shortest id prefix accepted when looking up a schedule.
pub const MIN_ID_PREFIX: usize = 4;

/// Find a schedule by full id or by an unambiguous id prefix.
pub fn resolve_schedule(repo: &impl ScheduleRepository, query: &str) -> Result<Schedule> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("No schedule id given. List ids with:\n  classgrid schedule list");
    }

    if let Some(schedule) = repo.event(query) {
        return Ok(schedule);
    }

    if query.chars().count() < MIN_ID_PREFIX {
        anyhow::bail!(
            "Schedule id '{}' is too short. Use at least {} characters",
            query,
            MIN_ID_PREFIX
        );
    }

    let mut matches: Vec<Schedule> = repo
        .list_sections()
        .iter()
        .flat_map(|section| repo.list_events(&section.id))
        .filter(|schedule| schedule.id.starts_with(query))
        .collect();

    if matches.len() > 1 {
        anyhow::bail!(
            "Schedule id '{}' is ambiguous ({} matches)",
            query,
            matches.len()
        );
    }

    matches
        .pop()
        .ok_or_else(|| anyhow::anyhow!("Schedule '{}' not found", query))
}

#[cfg(test)]
pub(crate) mod test_support {
    use classgrid_core::{JsonStore, ScheduleDraft, Weekday};

    pub fn draft(course: &str, day: Weekday, start: &str, end: &str) -> ScheduleDraft {
        ScheduleDraft {
            course_name: course.into(),
            day,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            ..ScheduleDraft::default()
        }
    }

    pub fn store() -> JsonStore {
        JsonStore::in_memory()
    }
}
