use std::sync::Arc;

use async_trait::async_trait;
use client::{
    ApiError, Backend, InMemoryServer, QuizApi, ResultsSubmission, StartResponse, SubmitAck,
};
use quiz_core::model::{
    Difficulty, QuestionRecord, QuizContext, QuizId, QuizLaunch, StartQuizRequest, StartTarget,
    TitleDetail, TitlePath,
};
use quiz_core::time::fixed_clock;
use services::{AppServices, QuizPhase, QuizSetup, ResultsReporter};

fn seeded_server() -> InMemoryServer {
    let server = InMemoryServer::new();
    let questions = vec![
        QuestionRecord::new("alma (apple)", ["apple", "pear", "plum"], 0),
        QuestionRecord::new("körte (pear)", ["apple", "pear", "plum"], 1),
        QuestionRecord::new("szilva (plum)", ["apple", "pear", "plum"], 2),
    ];
    let detail = TitleDetail {
        name: "Fruits".into(),
        description: None,
        total_questions: 0,
        learning_objectives: Vec::new(),
        study_tips: Vec::new(),
        topics: Vec::new(),
    };
    server
        .add_title(TitlePath::new("Languages", "Hungarian", "Fruits"), detail, questions)
        .unwrap();
    server
}

#[tokio::test]
async fn start_play_and_report_a_title_quiz() {
    let server = seeded_server();
    let services = AppServices::in_memory(server.clone(), fixed_clock());

    let detail = services
        .catalog()
        .title_detail(&TitlePath::new("Languages", "Hungarian", "Fruits"))
        .await
        .unwrap();
    assert_eq!(detail.total_questions, 3);

    let mut setup = QuizSetup::new(detail.total_questions);
    setup.select_difficulty(Difficulty::Mixed);
    let launch = services
        .catalog()
        .start_title(QuizId::new("Fruits"), &setup)
        .await
        .unwrap();

    let mut controller = services.controller_for(&launch).unwrap();
    assert_eq!(controller.phase(), QuizPhase::AwaitingAnswer);

    while controller.phase() != QuizPhase::Finished {
        let correct = controller
            .current_question()
            .map(|q| q.correct_index())
            .unwrap();
        controller.select_option(correct).unwrap();
        controller.submit_answer().unwrap();
        controller.advance().unwrap();
    }

    let results = controller.results().cloned().unwrap();
    assert_eq!(results.percentage, 100);

    let target = services.reporter().submit(&results, &launch.context).await;
    assert_eq!(target.path(), "/quiz/Languages/Hungarian/Fruits");

    let submissions = server.submissions().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].correct_answers, 3);
}

#[tokio::test]
async fn default_time_budget_applies_when_launch_has_none() {
    let services = AppServices::in_memory(seeded_server(), fixed_clock())
        .with_default_time_budget(Some(45));
    let launch = services
        .catalog()
        .start(
            &StartTarget::Title(QuizId::new("Fruits")),
            Some(StartQuizRequest::new(Difficulty::Mixed, 2).unwrap()),
        )
        .await
        .unwrap();
    let controller = services.controller_for(&launch).unwrap();
    assert_eq!(controller.total_questions(), 2);
    assert_eq!(controller.remaining_seconds(), Some(45));
}

#[tokio::test]
async fn empty_launch_lands_in_error() {
    let services = AppServices::new(Backend::in_memory(), fixed_clock());
    let controller = services.controller_for(&QuizLaunch::default()).unwrap();
    assert_eq!(controller.phase(), QuizPhase::Error);
}

#[tokio::test]
async fn failed_start_surfaces_an_error() {
    let server = seeded_server();
    server.fail_start(true).unwrap();
    let services = AppServices::in_memory(server, fixed_clock());
    let result = services
        .catalog()
        .start_title(QuizId::new("Fruits"), &QuizSetup::new(3))
        .await;
    assert!(result.is_err());
}

// ─── Failing adapter ───────────────────────────────────────────────────────────

struct RefusingServer;

#[async_trait]
impl QuizApi for RefusingServer {
    async fn start_quiz(
        &self,
        _target: &StartTarget,
        _request: Option<StartQuizRequest>,
    ) -> Result<StartResponse, ApiError> {
        Err(ApiError::Connection("offline".into()))
    }

    async fn load_launch(&self, _location: &str) -> Result<QuizLaunch, ApiError> {
        Err(ApiError::Connection("offline".into()))
    }

    async fn submit_results(&self, _submission: &ResultsSubmission) -> Result<SubmitAck, ApiError> {
        Err(ApiError::HttpStatus(500))
    }
}

#[tokio::test]
async fn failed_submission_still_resolves_navigation() {
    let mut controller = services::QuizController::new(fixed_clock());
    controller
        .initialize(Some(vec![QuestionRecord::new("Q", ["a", "b"], 0)]), None)
        .unwrap();
    let results = controller.finish().unwrap();

    let reporter = ResultsReporter::new(Arc::new(RefusingServer));
    let context = QuizContext {
        category: Some("Languages".into()),
        subcategory: Some("Hungarian".into()),
        title: Some("Fruits".into()),
    };
    let target = reporter.submit(&results, &context).await;
    assert_eq!(target.path(), "/quiz/Languages/Hungarian/Fruits");

    let home = reporter.submit(&results, &QuizContext::default()).await;
    assert!(home.is_home());
}
