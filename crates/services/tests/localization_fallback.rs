use std::sync::Arc;

use client::InMemoryServer;
use quiz_core::model::{Language, TranslationTable};
use services::{LocalizationService, TableSource};

fn table(entries: &[(&str, &str)]) -> TranslationTable {
    entries.iter().copied().collect()
}

fn server() -> InMemoryServer {
    let server = InMemoryServer::new();
    server
        .set_translations(Language::En, table(&[("nav.home", "Home"), ("quiz.submit", "Submit")]))
        .unwrap();
    server
        .set_translations(Language::Hu, table(&[("nav.home", "Kezdőlap")]))
        .unwrap();
    server
}

#[tokio::test]
async fn requested_language_is_used_when_available() {
    let service = LocalizationService::new(Arc::new(server()));
    let localizer = service.load(Language::Hu).await;
    assert_eq!(localizer.source(), TableSource::Requested);
    assert_eq!(localizer.translate("nav.home", "Home"), "Kezdőlap");
    assert_eq!(localizer.translate("quiz.submit", "Submit"), "Submit");
}

#[tokio::test]
async fn failing_language_falls_back_to_english() {
    let server = server();
    server.fail_translations(Language::Hu).unwrap();
    let service = LocalizationService::new(Arc::new(server));
    let localizer = service.load(Language::Hu).await;
    assert_eq!(localizer.source(), TableSource::Fallback);
    assert_eq!(localizer.language(), Language::Hu);
    assert_eq!(localizer.translate("quiz.submit", "Beküld"), "Submit");
}

#[tokio::test]
async fn both_failing_keeps_original_text() {
    let server = server();
    server.fail_translations(Language::Hu).unwrap();
    server.fail_translations(Language::En).unwrap();
    let service = LocalizationService::new(Arc::new(server));
    let localizer = service.load(Language::Hu).await;
    assert_eq!(localizer.source(), TableSource::Empty);
    assert_eq!(localizer.translate("nav.home", "Home"), "Home");
}

#[tokio::test]
async fn missing_default_language_yields_empty_table() {
    let service = LocalizationService::new(Arc::new(InMemoryServer::new()));
    let localizer = service.load(Language::En).await;
    assert_eq!(localizer.source(), TableSource::Empty);
    assert_eq!(localizer.key("quiz.error"), "quiz.error");
}
