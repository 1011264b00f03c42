use anyhow::Result;
use classgrid_core::config::ClassGridConfig;
use classgrid_core::{ScheduleRepository, Section};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::Render;

#[derive(Serialize)]
struct SectionSummary<'a> {
    #[serde(flatten)]
    section: &'a Section,
    schedules: usize,
    default: bool,
}

pub fn list(
    repo: &impl ScheduleRepository,
    default_section: Option<&str>,
    json: bool,
) -> Result<()> {
    let sections = repo.list_sections();
    let default_id = default_section
        .and_then(|query| repo.find_section(query))
        .map(|s| s.id);

    let summaries: Vec<SectionSummary> = sections
        .iter()
        .map(|section| SectionSummary {
            section,
            schedules: repo.list_events(&section.id).len(),
            default: default_id.as_deref() == Some(section.id.as_str()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!(
            "{}",
            "No sections yet. Create one with: classgrid section add <NAME>".dimmed()
        );
        return Ok(());
    }

    for summary in &summaries {
        let marker = if summary.default { "*" } else { " " };
        let count = format!(
            "{} {}",
            summary.schedules,
            if summary.schedules == 1 { "schedule" } else { "schedules" }
        );
        println!(
            "{} {}  {}  {}",
            marker.green(),
            summary.section.render(),
            count.dimmed(),
            format!("created {}", summary.section.created_at.format("%Y-%m-%d")).dimmed()
        );
    }

    Ok(())
}

pub fn add(repo: &mut impl ScheduleRepository, name: &str) -> Result<()> {
    let section = repo.create_section(name)?;
    println!("{}", format!("  Created section: {}", section.name).green());
    Ok(())
}

pub fn delete(repo: &mut impl ScheduleRepository, section: &Section, yes: bool) -> Result<()> {
    let schedules = repo.list_events(&section.id).len();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete the section \"{}\"? This will also delete all schedules ({})",
                section.name, schedules
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    repo.delete_section(&section.id)?;
    println!("{}", format!("  Deleted section: {}", section.name).red());
    Ok(())
}

/// Remember `section` as the default for commands that don't name one.
pub fn use_default(section: &Section) -> Result<()> {
    ClassGridConfig::set_default_section(&section.name)?;
    println!("{}", format!("  Default section: {}", section.name).green());
    Ok(())
}
