/// Longest breadcrumb label shown untouched.
pub const BREADCRUMB_MAX_CHARS: usize = 20;

/// Shorten long, multi-word breadcrumb labels to their first two words.
#[must_use]
pub fn truncate_breadcrumb(text: &str) -> String {
    let trimmed = text.trim();
    let words: Vec<&str> = trimmed.split(' ').collect();
    if trimmed.chars().count() > BREADCRUMB_MAX_CHARS && words.len() > 2 {
        format!("{} {} ...", words[0], words[1])
    } else {
        trimmed.to_string()
    }
}
