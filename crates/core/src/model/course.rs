use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course id must be lowercase ascii letters or digits: {0}")]
    InvalidId(String),

    #[error("course name cannot be empty")]
    EmptyName,

    #[error("course description cannot be empty")]
    EmptyDescription,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown course level: {0}")]
pub struct ParseLevelError(String);

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty tag of a course. The wire tokens are the site's original
/// Indonesian labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "pemula")]
    Beginner,
    #[serde(rename = "menengah")]
    Intermediate,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Beginner, Level::Intermediate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "pemula",
            Level::Intermediate => "menengah",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pemula" | "beginner" => Ok(Level::Beginner),
            "menengah" | "intermediate" => Ok(Level::Intermediate),
            other => Err(ParseLevelError(other.to_owned())),
        }
    }
}

/// Level selector of the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Only(level) => level.as_str(),
        }
    }

    #[must_use]
    pub fn accepts(self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => wanted == level,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(LevelFilter::All);
        }
        s.parse().map(LevelFilter::Only)
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A static catalog entry. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    level: Level,
    description: String,
    sample_code: String,
}

impl Course {
    /// Builds a course, validating the required fields.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the id is empty or not lowercase alphanumeric,
    /// or if the name or description is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: Level,
        description: impl Into<String>,
        sample_code: impl Into<String>,
    ) -> Result<Self, CourseError> {
        let id = id.into();
        let name = name.into();
        let description = description.into();

        if id.is_empty() {
            return Err(CourseError::EmptyId);
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(CourseError::InvalidId(id));
        }
        if name.trim().is_empty() {
            return Err(CourseError::EmptyName);
        }
        if description.trim().is_empty() {
            return Err(CourseError::EmptyDescription);
        }

        Ok(Self {
            id,
            name,
            level,
            description,
            sample_code: sample_code.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn sample_code(&self) -> &str {
        &self.sample_code
    }

    /// Case-insensitive substring match over name, description and id.
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.contains(needle)
    }
}
