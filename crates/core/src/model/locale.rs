use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: {code}")]
pub struct UnsupportedLanguage {
    pub code: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hu,
    Vi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hu, Language::Vi];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hu => "hu",
            Language::Vi => "vi",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hu => "Magyar",
            Language::Vi => "Tiếng Việt",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hu" => Some(Language::Hu),
            "vi" => Some(Language::Vi),
            _ => None,
        }
    }

    /// Pick a language from a saved preference, then a locale tag like `hu-HU`.
    #[must_use]
    pub fn detect(saved: Option<&str>, locale: Option<&str>) -> Self {
        if let Some(language) = saved.and_then(Self::from_code) {
            return language;
        }
        locale
            .and_then(|tag| tag.split(['-', '_']).next())
            .and_then(Self::from_code)
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage {
            code: s.to_string(),
        })
    }
}

/// Flat key to text map for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }

    /// Entry for `key`; empty entries count as missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Entry for `key`, else `original` when non-empty, else the key itself.
    ///
    /// A `{}` in the entry is filled from an original of the form
    /// `Explore <Word> topics` with the lower-cased word.
    #[must_use]
    pub fn translate(&self, key: &str, original: Option<&str>) -> String {
        let original = original.filter(|text| !text.is_empty());
        let text = self.get(key).or(original).unwrap_or(key);
        match original {
            Some(original) if text.contains("{}") => fill_placeholder(text, original),
            _ => text.to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

static EXPLORE_TOPIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Explore (\w+) topics").ok());

fn fill_placeholder(template: &str, original: &str) -> String {
    let word = EXPLORE_TOPIC
        .as_ref()
        .and_then(|re| re.captures(original))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase());
    match word {
        Some(word) => template.replacen("{}", &word, 1),
        None => template.to_string(),
    }
}
