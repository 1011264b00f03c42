//! Named class groups that own a weekly schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClassGridError, ClassGridResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Section {
    /// Create a section with a fresh id. Blank names are rejected.
    pub fn new(name: &str) -> ClassGridResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClassGridError::InvalidName(
                "Section name cannot be empty".into(),
            ));
        }

        Ok(Section {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Whether `query` names this section, by exact id or case-insensitive name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id == query || self.name.eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
