//! Display colors a class slot can be tagged with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassGridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Maroon,
    Gold,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Maroon,
        Color::Gold,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Maroon => "maroon",
            Color::Gold => "gold",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }

    /// 24-bit RGB value used by terminal rendering.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Maroon => (0x80, 0x1f, 0x2b),
            Color::Gold => (0xd4, 0xa0, 0x17),
            Color::Blue => (0x25, 0x63, 0xeb),
            Color::Green => (0x16, 0xa3, 0x4a),
            Color::Purple => (0x93, 0x33, 0xea),
            Color::Orange => (0xea, 0x58, 0x0c),
        }
    }
}

impl FromStr for Color {
    type Err = ClassGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ClassGridError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_maroon() {
        assert_eq!(Color::default(), Color::Maroon);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Gold".parse::<Color>().unwrap(), Color::Gold);
        assert_eq!("PURPLE".parse::<Color>().unwrap(), Color::Purple);
        assert!("teal".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Orange).unwrap(), "\"orange\"");
    }
}
