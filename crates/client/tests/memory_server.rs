use client::{
    ApiError, CatalogApi, CatalogFixture, InMemoryServer, QuizApi, ResultsSubmission,
    StartResponse, TranslationApi,
};
use quiz_core::model::{
    Difficulty, Language, QuestionRecord, QuizId, StartQuizRequest, StartTarget, TitleDetail,
    TitlePath, TopicId, TopicSummary,
};
use quiz_core::time::fixed_now;

fn detail(name: &str) -> TitleDetail {
    TitleDetail {
        name: name.into(),
        description: Some("Everyday words".into()),
        total_questions: 0,
        learning_objectives: vec!["Greet people".into()],
        study_tips: Vec::new(),
        topics: vec![TopicSummary {
            id: TopicId::new("greetings"),
            name: "Greetings".into(),
            total_questions: 0,
        }],
    }
}

fn seeded() -> InMemoryServer {
    let server = InMemoryServer::new();
    let questions = (0..6)
        .map(|i| {
            let record = QuestionRecord::new(format!("Q{i}"), ["a", "b", "c"], i % 3)
                .with_difficulty(if i % 2 == 0 { "könnyű" } else { "nehéz" });
            if i < 2 {
                record.with_topic("greetings", "Greetings")
            } else {
                record
            }
        })
        .collect();
    server
        .add_title(
            TitlePath::new("Languages", "Hungarian", "Basics"),
            detail("Basics"),
            questions,
        )
        .unwrap();
    server
}

async fn launch_for(
    server: &InMemoryServer,
    target: StartTarget,
    request: Option<StartQuizRequest>,
) -> quiz_core::model::QuizLaunch {
    match server.start_quiz(&target, request).await.unwrap() {
        StartResponse::Redirect(location) => server.load_launch(&location).await.unwrap(),
        StartResponse::Launch(launch) => launch,
    }
}

#[tokio::test]
async fn navigation_groups_titles_by_category() {
    let server = seeded();
    let nav = server.navigation().await.unwrap();
    assert_eq!(nav.len(), 1);
    assert_eq!(nav[0].name, "Languages");
    assert_eq!(nav[0].sub_categories[0].name, "Hungarian");
    assert_eq!(
        nav[0].sub_categories[0].titles[0].url,
        "/quiz/Languages/Hungarian/Basics"
    );
}

#[tokio::test]
async fn title_detail_reports_derived_totals() {
    let server = seeded();
    let detail = server
        .title_detail(&TitlePath::new("Languages", "Hungarian", "Basics"))
        .await
        .unwrap();
    assert_eq!(detail.total_questions, 6);
    assert_eq!(detail.topics[0].total_questions, 2);

    let missing = server
        .title_detail(&TitlePath::new("Languages", "Hungarian", "Nope"))
        .await;
    assert_eq!(missing, Err(ApiError::NotFound));
}

#[tokio::test]
async fn title_start_redirects_to_a_filtered_launch() {
    let server = seeded();
    let request = StartQuizRequest::new(Difficulty::Easy, 2).unwrap();
    let launch = launch_for(&server, StartTarget::Title(QuizId::new("Basics")), Some(request)).await;

    let questions = launch.questions.unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions
        .iter()
        .all(|q| q.difficulty.as_deref() == Some("könnyű")));
    assert_eq!(launch.context.redirect_path(), "/quiz/Languages/Hungarian/Basics");
    assert_eq!(launch.quiz_title.as_deref(), Some("Basics"));
}

#[tokio::test]
async fn quick_topic_start_uses_topic_questions_only() {
    let server = seeded();
    let launch = launch_for(&server, StartTarget::TopicQuick(TopicId::new("greetings")), None).await;
    let questions = launch.questions.unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions
        .iter()
        .all(|q| q.topic_id.as_deref() == Some("greetings")));
    assert_eq!(launch.quiz_title.as_deref(), Some("Basics - Greetings"));
}

#[tokio::test]
async fn unknown_targets_are_not_found() {
    let server = seeded();
    let result = server
        .start_quiz(&StartTarget::Topic(TopicId::new("missing")), None)
        .await;
    assert_eq!(result, Err(ApiError::NotFound));
    assert_eq!(server.load_launch("/quiz/play/99").await, Err(ApiError::NotFound));
}

#[tokio::test]
async fn submissions_are_recorded_and_can_fail() {
    let server = seeded();
    let submission = ResultsSubmission {
        total_questions: 3,
        correct_answers: 2,
        wrong_answers: Vec::new(),
        completed_at: fixed_now(),
    };
    let ack = server.submit_results(&submission).await.unwrap();
    assert!(ack.success);
    assert_eq!(ack.score, Some(67));
    assert_eq!(server.submissions().unwrap(), vec![submission.clone()]);

    server.fail_submissions(true).unwrap();
    assert!(server.submit_results(&submission).await.is_err());
    assert_eq!(server.submissions().unwrap().len(), 1);
}

#[tokio::test]
async fn fixture_loads_titles_and_translations() {
    let json = r#"{
        "timeBudgetSeconds": 120,
        "titles": [{
            "category": "Languages",
            "subcategory": "Vietnamese",
            "detail": { "name": "Numbers", "topics": [] },
            "questions": [
                { "question": "Một (One)", "options": ["1", "2"], "correct_answer": 0 }
            ]
        }],
        "translations": { "hu": { "nav.home": "Kezdőlap" } }
    }"#;
    let server = InMemoryServer::from_fixture(CatalogFixture::from_json(json).unwrap());

    let table = server.fetch_translations(Language::Hu).await.unwrap();
    assert_eq!(table.get("nav.home"), Some("Kezdőlap"));
    assert_eq!(
        server.fetch_translations(Language::Vi).await,
        Err(ApiError::NotFound)
    );

    let launch = launch_for(
        &server,
        StartTarget::Title(QuizId::new("Numbers")),
        Some(StartQuizRequest::new(Difficulty::Mixed, 10).unwrap()),
    )
    .await;
    assert_eq!(launch.time_budget_seconds, Some(120));
    assert_eq!(launch.questions.map(|q| q.len()), Some(1));
}

#[tokio::test]
async fn failing_translations_surface_errors() {
    let server = seeded();
    server.fail_translations(Language::Hu).unwrap();
    assert!(server.fetch_translations(Language::Hu).await.is_err());
}

#[tokio::test]
async fn time_budget_is_attached_to_launches() {
    let server = seeded();
    server.set_time_budget(Some(45)).unwrap();
    let launch = launch_for(
        &server,
        StartTarget::TopicQuick(TopicId::new("greetings")),
        None,
    )
    .await;
    assert_eq!(launch.time_budget_seconds, Some(45));
    assert_eq!(launch.quiz_title.as_deref(), Some("Basics - Greetings"));
}
