use anyhow::Result;
use classgrid_core::grid::Grid;
use classgrid_core::{ScheduleRepository, Section};
use owo_colors::OwoColorize;

use crate::render::{Render, render_grid};

pub fn run(repo: &impl ScheduleRepository, section: &Section) -> Result<()> {
    let schedules = repo.list_events(&section.id);
    let grid = Grid::project(&schedules);

    println!("{}\n", section.render());
    println!("{}", render_grid(&grid));

    if schedules.is_empty() {
        println!("\n{}", "No schedules yet. Add one with: classgrid schedule add".dimmed());
    }

    Ok(())
}
