//! # Student Levels
//!
//! File: cli/src/assistant/level.rs
//! Author: Christi Mahu
//!
//! The audience tier a reply is phrased for. The level only changes how the
//! explanation is worded; the topic lookup is the same for every level.

use crate::core::error::EdubotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The selected audience tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Middle,
    #[default]
    High,
    University,
}

impl Level {
    /// All levels in the order they are offered to the user.
    pub const ALL: [Level; 3] = [Level::Middle, Level::High, Level::University];

    /// The lowercase identifier used in config files, flags and `/level`.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Middle => "middle",
            Level::High => "high",
            Level::University => "university",
        }
    }

    /// Human-facing badge, e.g. "High Level".
    pub fn label(self) -> &'static str {
        match self {
            Level::Middle => "Middle Level",
            Level::High => "High Level",
            Level::University => "University Level",
        }
    }

    /// Long name shown when listing the choices.
    pub fn description(self) -> &'static str {
        match self {
            Level::Middle => "Middle School",
            Level::High => "High School",
            Level::University => "University",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = EdubotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "middle" => Ok(Level::Middle),
            "high" => Ok(Level::High),
            "university" => Ok(Level::University),
            _ => Err(EdubotError::InvalidLevel {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Config files go through [`FromStr`] so `"High"` is accepted and a bad
/// value reports the same error as `--level` and `/level`.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
