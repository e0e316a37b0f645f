//! Display-only text transforms. Nothing here touches question data.

mod breadcrumb;
mod language_filter;

pub use breadcrumb::{BREADCRUMB_MAX_CHARS, truncate_breadcrumb};
pub use language_filter::{LanguageFilter, LanguageFilterParseError};
