use std::sync::Arc;

use client::TranslationApi;
use quiz_core::model::{Language, TranslationTable};

use crate::error::LocalizationError;

/// Which table a `Localizer` ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Requested,
    /// The requested language failed; the default language's table is used.
    Fallback,
    /// Nothing could be loaded; original texts are shown.
    Empty,
}

/// Translation lookups for one language. Views call it while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
    table: TranslationTable,
    source: TableSource,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::empty(Language::default())
    }
}

impl Localizer {
    #[must_use]
    pub fn new(language: Language, table: TranslationTable, source: TableSource) -> Self {
        Self {
            language,
            table,
            source,
        }
    }

    #[must_use]
    pub fn empty(language: Language) -> Self {
        Self::new(language, TranslationTable::new(), TableSource::Empty)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn source(&self) -> TableSource {
        self.source
    }

    /// Table entry, else `original`, else the key.
    #[must_use]
    pub fn translate(&self, key: &str, original: &str) -> String {
        self.table.translate(key, Some(original))
    }

    /// Table entry or the key itself.
    #[must_use]
    pub fn key(&self, key: &str) -> String {
        self.table.translate(key, None)
    }
}

#[derive(Clone)]
pub struct LocalizationService {
    api: Arc<dyn TranslationApi>,
}

impl LocalizationService {
    #[must_use]
    pub fn new(api: Arc<dyn TranslationApi>) -> Self {
        Self { api }
    }

    /// Fetch one table with no fallback.
    ///
    /// # Errors
    ///
    /// Returns `LocalizationError::Api` when the fetch fails.
    pub async fn fetch(&self, language: Language) -> Result<TranslationTable, LocalizationError> {
        Ok(self.api.fetch_translations(language).await?)
    }

    /// Load `language`, falling back to the default language, then to no table.
    pub async fn load(&self, language: Language) -> Localizer {
        match self.fetch(language).await {
            Ok(table) => {
                tracing::debug!("loaded {} translations for {}", table.len(), language);
                return Localizer::new(language, table, TableSource::Requested);
            }
            Err(e) => tracing::warn!("failed to load translations for {}: {}", language, e),
        }

        let default = Language::default();
        if language != default {
            match self.fetch(default).await {
                Ok(table) => return Localizer::new(language, table, TableSource::Fallback),
                Err(e) => tracing::warn!("failed to load fallback translations: {}", e),
            }
        }
        Localizer::empty(language)
    }
}
