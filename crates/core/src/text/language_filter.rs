use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language filter: {raw}")]
pub struct LanguageFilterParseError {
    pub raw: String,
}

static PARENTHESIZED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").ok());

static PARENTHESIZED_WITH_SPACE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").ok());

/// Which half of bilingual `Native (Translation)` text to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFilter {
    #[default]
    All,
    /// Keep only the parenthesized parts.
    Vietnamese,
    /// Drop the parenthesized parts.
    Hungarian,
}

impl LanguageFilter {
    pub const ALL: [LanguageFilter; 3] = [
        LanguageFilter::All,
        LanguageFilter::Vietnamese,
        LanguageFilter::Hungarian,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageFilter::All => "all",
            LanguageFilter::Vietnamese => "vietnamese",
            LanguageFilter::Hungarian => "hungarian",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            LanguageFilter::All => "filter.all",
            LanguageFilter::Vietnamese => "filter.vietnamese",
            LanguageFilter::Hungarian => "filter.hungarian",
        }
    }

    #[must_use]
    pub fn filter(self, text: &str) -> String {
        match self {
            LanguageFilter::All => text.to_string(),
            LanguageFilter::Vietnamese => {
                let Some(re) = PARENTHESIZED.as_ref() else {
                    return text.to_string();
                };
                let parts: Vec<&str> = re
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str())
                    .collect();
                if parts.is_empty() {
                    text.to_string()
                } else {
                    parts.join(" ")
                }
            }
            LanguageFilter::Hungarian => match PARENTHESIZED_WITH_SPACE.as_ref() {
                Some(re) => re.replace_all(text, "").trim().to_string(),
                None => text.to_string(),
            },
        }
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageFilter {
    type Err = LanguageFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(LanguageFilter::All),
            "vietnamese" => Ok(LanguageFilter::Vietnamese),
            "hungarian" => Ok(LanguageFilter::Hungarian),
            _ => Err(LanguageFilterParseError { raw: s.to_string() }),
        }
    }
}
