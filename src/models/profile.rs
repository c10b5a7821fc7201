use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{MacroError, Result};

/// Minimum similarity for an unknown value to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// How active the user is across a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// What the user wants their weight to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

/// Find the closest known name for a rejected value (case-insensitive).
fn closest_match(input: &str, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(c, input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

fn parse_enum<T: Copy>(
    field: &'static str,
    s: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T> {
    let needle = s.trim().to_lowercase();
    if let Some(v) = all.iter().find(|v| name(*v) == needle) {
        return Ok(*v);
    }

    let names: Vec<&'static str> = all.iter().map(name).collect();
    Err(MacroError::InvalidEnumValue {
        field,
        value: s.to_string(),
        suggestion: closest_match(&needle, &names),
    })
}

impl FromStr for ActivityLevel {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self> {
        parse_enum("activity level", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Goal {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self> {
        parse_enum("goal", s, &Self::ALL, Self::as_str)
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = MacroError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Goal {
    type Error = MacroError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements and intent used to derive a daily target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Age in years.
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl BodyProfile {
    pub fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        let profile = Self {
            age,
            height_cm,
            weight_kg,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Reject zero, negative and non-finite measurements.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(MacroError::InvalidInput("age must be > 0".to_string()));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(MacroError::InvalidInput(format!(
                "height must be > 0 cm, got {}",
                self.height_cm
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(MacroError::InvalidInput(format!(
                "weight must be > 0 kg, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}
