//! Projection of a section's week onto the 7 × 11 display grid.
//!
//! Columns are weekdays (Monday first), rows are whole hours from 7 AM to
//! 5 PM. A slot is drawn once, in the row it starts in, and extends down by
//! its span; the rows it covers only refer to it for lookups.

use crate::schedule::Schedule;
use crate::time::{FIRST_HOUR, LAST_HOUR, TimeOfDay};
use crate::weekday::Weekday;

pub const COLUMNS: usize = Weekday::ALL.len();

pub const ROWS: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

/// Where one slot lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub schedule: &'a Schedule,
    pub column: usize,
    pub start_row: usize,
    pub end_row: usize,
}

impl<'a> Placement<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Placement {
            schedule,
            column: schedule.day.column(),
            start_row: schedule.start_time.hour_slot(),
            end_row: schedule.end_time.hour_slot(),
        }
    }

    /// Rows the slot extends over, end row exclusive.
    ///
    /// Zero when both ends fall in the same hour (8:00 AM to 8:30 AM).
    pub fn span(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.start_row && row < self.end_row
    }

    pub fn starts_at(&self, row: usize) -> bool {
        self.start_row == row
    }

    /// Single-row slots only have room for the course name.
    pub fn is_compact(&self) -> bool {
        self.span() <= 1
    }
}

/// Everything a single grid cell needs for drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell<'a> {
    /// Slots whose row range covers this cell.
    pub contains: Vec<Placement<'a>>,
    /// Slots to draw from this cell; a subset of `contains` except for
    /// zero-span slots, which start here without covering the row.
    pub starting: Vec<Placement<'a>>,
}

impl Cell<'_> {
    pub fn is_empty(&self) -> bool {
        self.contains.is_empty() && self.starting.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Grid<'a> {
    placements: Vec<Placement<'a>>,
}

impl<'a> Grid<'a> {
    pub fn project(schedules: &'a [Schedule]) -> Self {
        Grid {
            placements: schedules.iter().map(Placement::new).collect(),
        }
    }

    pub fn placements(&self) -> &[Placement<'a>] {
        &self.placements
    }

    pub fn cell(&self, day: Weekday, row: usize) -> Cell<'a> {
        let in_column = self.placements.iter().filter(|p| p.column == day.column());

        Cell {
            contains: in_column.clone().filter(|p| p.contains_row(row)).copied().collect(),
            starting: in_column.filter(|p| p.starts_at(row)).copied().collect(),
        }
    }

    /// All cells, indexed `[row][column]`.
    pub fn cells(&self) -> Vec<Vec<Cell<'a>>> {
        (0..ROWS)
            .map(|row| Weekday::ALL.iter().map(|day| self.cell(*day, row)).collect())
            .collect()
    }

    /// Labels for the row headers, "7:00 AM" through "5:00 PM".
    pub fn row_labels() -> Vec<String> {
        (FIRST_HOUR..=LAST_HOUR)
            .filter_map(|hour| TimeOfDay::from_hm(hour, 0))
            .map(|time| time.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleDraft;

    fn slot(course: &str, day: Weekday, start: &str, end: &str) -> Schedule {
        let draft = ScheduleDraft {
            course_name: course.into(),
            day,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            ..ScheduleDraft::default()
        };
        Schedule::from_draft("section", &draft)
    }

    fn courses(placements: &[Placement]) -> Vec<String> {
        placements.iter().map(|p| p.schedule.course_name.clone()).collect()
    }

    #[test]
    fn dimensions() {
        assert_eq!(COLUMNS, 7);
        assert_eq!(ROWS, 11);
        let labels = Grid::row_labels();
        assert_eq!(labels.len(), ROWS);
        assert_eq!(labels[0], "7:00 AM");
        assert_eq!(labels[5], "12:00 PM");
        assert_eq!(labels[10], "5:00 PM");
    }

    #[test]
    fn three_hour_slot_starts_once_and_covers_three_rows() {
        let schedules = vec![slot("Calculus", Weekday::Monday, "7:00 AM", "10:00 AM")];
        let grid = Grid::project(&schedules);

        let placement = grid.placements()[0];
        assert_eq!((placement.start_row, placement.end_row, placement.span()), (0, 3, 3));

        for row in 0..ROWS {
            let cell = grid.cell(Weekday::Monday, row);
            assert_eq!(cell.starting.len(), usize::from(row == 0), "row {}", row);
            assert_eq!(cell.contains.len(), usize::from(row < 3), "row {}", row);
        }
    }

    #[test]
    fn slots_land_in_their_day_column() {
        let schedules = vec![
            slot("Physics", Weekday::Wednesday, "1:00 PM", "3:00 PM"),
            slot("Art", Weekday::Sunday, "9:00 AM", "10:00 AM"),
        ];
        let grid = Grid::project(&schedules);

        assert_eq!(courses(&grid.cell(Weekday::Wednesday, 6).starting), vec!["Physics"]);
        assert_eq!(courses(&grid.cell(Weekday::Wednesday, 7).contains), vec!["Physics"]);
        assert!(grid.cell(Weekday::Tuesday, 6).is_empty());
        assert_eq!(grid.placements()[1].column, 6);
    }

    #[test]
    fn half_hour_ends_round_down_to_the_hour() {
        let schedules = vec![slot("Lab", Weekday::Friday, "8:30 AM", "10:30 AM")];
        let placement = Grid::project(&schedules).placements()[0];
        assert_eq!((placement.start_row, placement.end_row), (1, 3));
        assert!(!placement.is_compact());
    }

    #[test]
    fn zero_span_slot_starts_without_covering() {
        let schedules = vec![slot("Quiz", Weekday::Monday, "8:00 AM", "8:30 AM")];
        let grid = Grid::project(&schedules);
        let cell = grid.cell(Weekday::Monday, 1);

        assert_eq!(grid.placements()[0].span(), 0);
        assert_eq!(courses(&cell.starting), vec!["Quiz"]);
        assert!(cell.contains.is_empty());
        assert!(grid.placements()[0].is_compact());
    }

    #[test]
    fn cells_are_row_major() {
        let schedules = vec![slot("Chem", Weekday::Thursday, "12:00 PM", "1:00 PM")];
        let cells = Grid::project(&schedules).cells();
        assert_eq!(cells.len(), ROWS);
        assert!(cells.iter().all(|row| row.len() == COLUMNS));
        assert_eq!(courses(&cells[5][3].starting), vec!["Chem"]);
    }
}
