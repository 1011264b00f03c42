//! Days of the week a class can meet on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassGridError;

/// Week starts on Monday, matching the grid's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter label for narrow grid headers.
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Grid column, 0 for Monday through 6 for Sunday.
    pub fn column(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Weekday {
    type Err = ClassGridError;

    /// Case-insensitive match on the full day name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ClassGridError::InvalidDay(s.to_string()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = ClassGridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.name().to_string()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
