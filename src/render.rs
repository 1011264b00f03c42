//! TUI rendering for classgrid types.
//!
//! This module provides extension traits and helpers that add colored
//! terminal output to classgrid-core types using owo_colors.

use classgrid_core::grid::{Cell, Grid, ROWS};
use classgrid_core::{Color, Schedule, Section, Weekday};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Section {
    fn render(&self) -> String {
        format!("{} {}", self.name.bold(), short(&self.id).dimmed())
    }
}

impl Render for Schedule {
    fn render(&self) -> String {
        let (r, g, b) = self.color.rgb();
        let time = format!("{:>8} - {:<8}", self.start_time.to_string(), self.end_time.to_string());

        let mut line = format!(
            "  {}  {:<9} {}  {}",
            self.short_id().dimmed(),
            self.day.name(),
            time,
            self.course_name.truecolor(r, g, b).bold()
        );

        let details: Vec<String> = [
            (!self.room.is_empty()).then(|| format!("Room: {}", self.room)),
            (!self.professor_name.is_empty()).then(|| format!("Prof: {}", self.professor_name)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !details.is_empty() {
            line.push_str(&format!("  {}", details.join(", ").dimmed()));
        }
        line
    }
}

fn short(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Width of one day column, in characters.
pub const CELL_WIDTH: usize = 14;

/// Width of the time label column.
const LABEL_WIDTH: usize = 8;

/// Text for one grid cell and the color of the slot it belongs to.
///
/// A slot shows its course name in the row it starts in; slots spanning more
/// than one row add the room and the professor in the rows below.
pub fn cell_text(cell: &Cell, row: usize) -> Option<(String, Color)> {
    let placement = cell.starting.first().or_else(|| cell.contains.first())?;
    let schedule = placement.schedule;

    let text = match row.saturating_sub(placement.start_row) {
        0 => match cell.starting.len() {
            0 | 1 => schedule.course_name.clone(),
            n => format!("{} +{}", schedule.course_name, n - 1),
        },
        1 if !placement.is_compact() && !schedule.room.is_empty() => {
            format!("Room: {}", schedule.room)
        }
        2 if !placement.is_compact() && !schedule.professor_name.is_empty() => {
            format!("Prof: {}", schedule.professor_name)
        }
        _ => String::new(),
    };

    Some((text, schedule.color))
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn foreground(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Gold => (0x1a, 0x1a, 0x1a),
        _ => (0xff, 0xff, 0xff),
    }
}

fn render_cell(cell: &Cell, row: usize) -> String {
    match cell_text(cell, row) {
        Some((text, color)) => {
            let padded = format!("{:<width$}", truncate(&text, CELL_WIDTH), width = CELL_WIDTH);
            let (r, g, b) = color.rgb();
            let (fr, fg, fb) = foreground(color);
            padded.truecolor(fr, fg, fb).on_truecolor(r, g, b).to_string()
        }
        None => " ".repeat(CELL_WIDTH),
    }
}

/// Render the weekly grid: one column per weekday, one line per hour row.
pub fn render_grid(grid: &Grid) -> String {
    let labels = Grid::row_labels();
    let mut lines = Vec::new();

    let header: Vec<String> = Weekday::ALL
        .iter()
        .map(|day| format!("{:<width$}", day.name(), width = CELL_WIDTH))
        .collect();
    let header = format!("{:<label$} {}", "Time", header.join(" "), label = LABEL_WIDTH);
    lines.push(header.bold().to_string());

    lines.push(
        "-".repeat(LABEL_WIDTH + 1 + (CELL_WIDTH + 1) * Weekday::ALL.len() - 1)
            .dimmed()
            .to_string(),
    );

    for row in 0..ROWS {
        let cells: Vec<String> = Weekday::ALL
            .iter()
            .map(|day| render_cell(&grid.cell(*day, row), row))
            .collect();
        lines.push(format!(
            "{} {}",
            format!("{:>label$}", labels[row], label = LABEL_WIDTH).dimmed(),
            cells.join(" ")
        ));
    }

    lines.join("\n")
}
