//! Time-of-day values for weekly class slots.
//!
//! Times enter the system as 12-hour clock strings ("1:00 PM") and are
//! normalized once into minutes since midnight. Everything downstream
//! (conflict checks, grid rows, sorting) works on the normalized form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClassGridError, ClassGridResult};

/// First hour shown on the grid and offered by the time picker (7 AM).
pub const FIRST_HOUR: u16 = 7;

/// Last hour offered by the time picker (5 PM). Also the open-ended last grid row.
pub const LAST_HOUR: u16 = 17;

/// Granularity of the time picker, in minutes.
pub const STEP_MINUTES: u16 = 30;

/// A time of day at minute resolution.
///
/// Serialized as its 12-hour display form, so stored records keep the
/// `"7:00 AM"` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl TimeOfDay {
    /// For readings known valid where the value is written.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        TimeOfDay {
            minutes: hour * 60 + minute,
        }
    }

    /// Build from a 24-hour clock hour and minute.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay {
            minutes: hour * 60 + minute,
        })
    }

    /// Build from a 12-hour clock reading.
    pub fn from_12h(hour: u16, minute: u16, meridiem: Meridiem) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (meridiem, hour) {
            (Meridiem::Pm, h) if h != 12 => h + 12,
            (Meridiem::Am, 12) => 0,
            (_, h) => h,
        };
        Self::from_hm(hour, minute)
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }

    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Grid row for this time at hourly granularity: 7 AM is row 0, noon is
    /// row 5, 5 PM is row 10. Minutes are ignored.
    ///
    /// Only meaningful inside the picker window; times before 7 AM clamp to 0.
    pub fn hour_slot(&self) -> usize {
        usize::from(self.hour().saturating_sub(FIRST_HOUR))
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour() < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Whether this time is one of the half-hour picker values (7:00 AM to 5:00 PM).
    pub fn is_option(&self) -> bool {
        (FIRST_HOUR * 60..=LAST_HOUR * 60).contains(&self.minutes)
            && self.minutes % STEP_MINUTES == 0
    }

    /// All picker values in display order.
    pub fn options() -> Vec<TimeOfDay> {
        (FIRST_HOUR * 60..=LAST_HOUR * 60)
            .step_by(usize::from(STEP_MINUTES))
            .map(|minutes| TimeOfDay { minutes })
            .collect()
    }

    /// Values a class may start at (every option but the last).
    pub fn start_options() -> Vec<TimeOfDay> {
        let mut options = Self::options();
        options.pop();
        options
    }

    /// Values a class may end at (every option but the first).
    pub fn end_options() -> Vec<TimeOfDay> {
        Self::options().into_iter().skip(1).collect()
    }

    pub fn parse(s: &str) -> ClassGridResult<Self> {
        s.parse()
    }
}

impl FromStr for TimeOfDay {
    type Err = ClassGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClassGridError::InvalidTime(s.to_string());
        let trimmed = s.trim();

        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(invalid());
        }
        let (clock, marker) = trimmed.split_at(trimmed.len() - 2);
        let meridiem = if marker.eq_ignore_ascii_case("am") {
            Meridiem::Am
        } else if marker.eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            return Err(invalid());
        };

        let (hour, minute) = clock.trim_end().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;

        TimeOfDay::from_12h(hour, minute, meridiem).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ClassGridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hour12 = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        let marker = match self.meridiem() {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };
        write!(f, "{}:{:02} {}", hour12, self.minute(), marker)
    }
}
