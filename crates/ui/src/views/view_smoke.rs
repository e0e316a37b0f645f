use quiz_core::model::{QuestionRecord, QuizContext, QuizLaunch, TitlePath};
use services::Localizer;

use super::test_harness::{
    ViewKind, basics_path, hungarian_localizer, seeded_server, setup_view_harness,
};

fn launch(time_budget_seconds: Option<u32>) -> QuizLaunch {
    QuizLaunch {
        questions: Some(vec![
            QuestionRecord::new("Szia (Hello)", ["Hello", "Bye"], 0),
            QuestionRecord::new("Viszlát (Bye)", ["Hello", "Bye"], 1),
        ]),
        context: QuizContext::for_title(&basics_path()),
        time_budget_seconds,
        quiz_title: Some("Basics".into()),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_categories_and_titles() {
    let mut harness =
        setup_view_harness(ViewKind::Home, seeded_server(), Localizer::default(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Languages"), "missing category in {html}");
    assert!(html.contains("Hungarian"), "missing subcategory in {html}");
    assert!(html.contains("Basics"), "missing title link in {html}");
    assert!(
        html.contains("Explore Languages topics"),
        "missing description in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_uses_the_loaded_translations() {
    let mut harness =
        setup_view_harness(ViewKind::Home, seeded_server(), hungarian_localizer(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Kategóriák"), "missing heading in {html}");
    assert!(
        html.contains("Fedezd fel a(z) languages témákat"),
        "missing filled template in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_offers_retry_when_the_catalog_fails() {
    let server = seeded_server();
    server.fail_catalog(true).unwrap();
    let mut harness = setup_view_harness(ViewKind::Home, server, Localizer::default(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("The quiz server is unavailable"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn title_view_renders_detail_and_setup() {
    let mut harness = setup_view_harness(
        ViewKind::Title(basics_path()),
        seeded_server(),
        Localizer::default(),
        None,
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Greet people"), "missing objectives in {html}");
    assert!(html.contains("Say it out loud"), "missing tips in {html}");
    assert!(html.contains("Greetings"), "missing topic in {html}");
    assert!(
        html.contains("difficulty mixed selected"),
        "missing default difficulty in {html}"
    );
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(html.contains("0.5"), "missing estimate in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn title_view_reports_unknown_titles() {
    let mut harness = setup_view_harness(
        ViewKind::Title(TitlePath::new("Languages", "Hungarian", "Missing")),
        seeded_server(),
        Localizer::default(),
        None,
    );
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("This quiz could not be found."),
        "missing not-found text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_without_launch_shows_load_error() {
    let mut harness =
        setup_view_harness(ViewKind::Play, seeded_server(), Localizer::default(), None);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No questions available for this quiz."),
        "missing load error in {html}"
    );
    assert!(html.contains("Home"), "missing way back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Play,
        seeded_server(),
        Localizer::default(),
        Some(launch(Some(60))),
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Szia (Hello)"), "missing prompt in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(html.contains("1:00"), "missing timer in {html}");
    assert!(html.contains("Vietnamese"), "missing filters in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn language_switcher_lists_supported_languages() {
    let mut harness =
        setup_view_harness(ViewKind::Language, seeded_server(), Localizer::default(), None);
    harness.settle().await;
    let html = harness.render();
    for name in ["English", "Magyar", "Tiếng Việt"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
}
