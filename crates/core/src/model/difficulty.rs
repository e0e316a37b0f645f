use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {raw}")]
pub struct DifficultyParseError {
    pub raw: String,
}

/// Catalog-level difficulty filter sent with a start-quiz request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Mixed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Mixed => "mixed",
        }
    }

    /// Translation key for the picker label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty.easy",
            Difficulty::Medium => "difficulty.medium",
            Difficulty::Hard => "difficulty.hard",
            Difficulty::Mixed => "difficulty.mixed",
        }
    }

    /// Map a question's data label (Hungarian or English) onto a level.
    ///
    /// Returns `None` for labels with no known mapping.
    #[must_use]
    pub fn from_data_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "könnyű" | "konnyu" | "easy" => Some(Difficulty::Easy),
            "közepes" | "kozepes" | "medium" => Some(Difficulty::Medium),
            "nehéz" | "nehez" | "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Whether a question labelled `label` belongs to this filter.
    ///
    /// `Mixed` and unlabelled questions always match.
    #[must_use]
    pub fn matches_label(self, label: Option<&str>) -> bool {
        if self == Difficulty::Mixed {
            return true;
        }
        match label {
            None => true,
            Some(label) => Self::from_data_label(label) == Some(self),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "mixed" => Ok(Difficulty::Mixed),
            _ => Err(DifficultyParseError { raw: s.to_string() }),
        }
    }
}
