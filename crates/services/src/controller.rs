use quiz_core::countdown::{Countdown, CountdownTick, format_clock};
use quiz_core::model::{Question, QuestionError, QuestionRecord, QuizResults, QuizSession};
use quiz_core::text::LanguageFilter;

use crate::Clock;
use crate::error::QuizError;

/// Translation key shared by every load failure.
pub const LOAD_ERROR_KEY: &str = "quiz.error";
/// Translation key for a wrong answer whose question carries no explanation.
pub const NO_EXPLANATION_KEY: &str = "quiz.no_explanation";
pub const NO_EXPLANATION_TEXT: &str = "No explanation available.";

//
// ─── PHASES & VIEW DATA ────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    AwaitingAnswer,
    AnswerRevealed,
    Finished,
    Error,
}

/// Why a launch could not become a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    NoQuestions,
    Malformed { index: usize, error: QuestionError },
}

impl LoadFailure {
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        LOAD_ERROR_KEY
    }

    /// Text shown when the translation table has no entry.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            LoadFailure::NoQuestions => "No questions available for this quiz.",
            LoadFailure::Malformed { .. } => "Error loading quiz data.",
        }
    }
}

/// How an option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// What the single action button does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Submit { enabled: bool },
    Next,
    Evaluate,
    None,
}

impl QuizAction {
    #[must_use]
    pub fn label_key(self) -> Option<&'static str> {
        match self {
            QuizAction::Submit { .. } => Some("quiz.submit"),
            QuizAction::Next => Some("quiz.next"),
            QuizAction::Evaluate => Some("quiz.evaluate"),
            QuizAction::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Text(String),
    /// Render `NO_EXPLANATION_KEY`.
    Missing,
}

/// Outcome of `submit_answer`, kept until the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    /// Present only for a wrong answer.
    pub explanation: Option<Explanation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No running countdown (no budget, finished, or not started).
    Idle,
    Running { remaining: u32 },
    Paused { remaining: u32 },
    /// The budget ran out and the quiz was finished by this tick.
    Expired(Box<QuizResults>),
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns one quiz attempt and is the only thing allowed to mutate it.
///
/// Every operation runs to completion synchronously; rejected operations leave
/// the state untouched.
#[derive(Debug, Clone)]
pub struct QuizController {
    clock: Clock,
    phase: QuizPhase,
    session: Option<QuizSession>,
    tentative: Option<usize>,
    feedback: Option<AnswerFeedback>,
    results: Option<QuizResults>,
    failure: Option<LoadFailure>,
    filter: LanguageFilter,
}

impl QuizController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            phase: QuizPhase::Loading,
            session: None,
            tentative: None,
            feedback: None,
            results: None,
            failure: None,
            filter: LanguageFilter::All,
        }
    }

    /// Turn the launch payload into a running session.
    ///
    /// Missing, empty or malformed questions move the controller to `Error`;
    /// that is reported through `phase()`/`failure()`, not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` when called outside `Loading`.
    pub fn initialize(
        &mut self,
        questions: Option<Vec<QuestionRecord>>,
        time_budget_seconds: Option<u32>,
    ) -> Result<QuizPhase, QuizError> {
        self.require(QuizPhase::Loading)?;

        let records = questions.unwrap_or_default();
        if records.is_empty() {
            return Ok(self.fail(LoadFailure::NoQuestions));
        }

        let mut validated = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match Question::try_from(record) {
                Ok(question) => validated.push(question),
                Err(error) => return Ok(self.fail(LoadFailure::Malformed { index, error })),
            }
        }

        let countdown = time_budget_seconds.and_then(|budget| Countdown::new(budget).ok());
        let total = validated.len();
        match QuizSession::new(validated, self.clock.now(), countdown) {
            Ok(session) => {
                self.session = Some(session);
                self.phase = QuizPhase::AwaitingAnswer;
                tracing::info!(
                    "quiz session started with {} questions (time budget: {:?})",
                    total,
                    time_budget_seconds
                );
                Ok(self.phase)
            }
            Err(_) => Ok(self.fail(LoadFailure::NoQuestions)),
        }
    }

    fn fail(&mut self, failure: LoadFailure) -> QuizPhase {
        tracing::warn!("quiz data rejected: {:?}", failure);
        self.failure = Some(failure);
        self.phase = QuizPhase::Error;
        self.phase
    }

    fn require(&self, phase: QuizPhase) -> Result<(), QuizError> {
        if self.phase == phase {
            Ok(())
        } else if self.phase == QuizPhase::Finished {
            Err(QuizError::Finished)
        } else {
            Err(QuizError::InvalidPhase { phase: self.phase })
        }
    }

    // ─── Answering ─────────────────────────────────────────────────────────────

    /// Set or replace the tentative selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase`/`Finished` outside `AwaitingAnswer` and
    /// `QuizError::OptionOutOfRange` for an index past the last option.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.require(QuizPhase::AwaitingAnswer)?;
        let len = self
            .current_question()
            .map_or(0, Question::option_count);
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.tentative = Some(index);
        Ok(())
    }

    /// Record the tentative selection for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyAnswered` once the current answer is revealed,
    /// `QuizError::NoSelection` without a tentative selection, and
    /// `QuizError::InvalidPhase`/`Finished` in other phases.
    pub fn submit_answer(&mut self) -> Result<AnswerFeedback, QuizError> {
        if self.phase == QuizPhase::AnswerRevealed {
            return Err(QuizError::AlreadyAnswered {
                index: self.current_index(),
            });
        }
        self.require(QuizPhase::AwaitingAnswer)?;
        let selected = self.tentative.ok_or(QuizError::NoSelection)?;
        let session = self.session.as_mut().ok_or(QuizError::InvalidPhase {
            phase: QuizPhase::AwaitingAnswer,
        })?;

        let record = session.record_answer(selected).map_err(|e| match e {
            quiz_core::model::SessionError::AlreadyAnswered { index } => {
                QuizError::AlreadyAnswered { index }
            }
            other => QuizError::Session(other),
        })?;
        if let Some(countdown) = session.countdown_mut() {
            countdown.pause();
        }

        let explanation = if record.is_correct {
            None
        } else {
            let text = session
                .questions()
                .get(record.question_index)
                .and_then(Question::explanation)
                .map(str::to_owned);
            Some(text.map_or(Explanation::Missing, Explanation::Text))
        };

        let feedback = AnswerFeedback {
            question_index: record.question_index,
            selected_index: record.selected_index,
            correct_index: record.correct_index,
            is_correct: record.is_correct,
            explanation,
        };
        tracing::debug!(
            "question {} answered ({})",
            feedback.question_index,
            if feedback.is_correct { "correct" } else { "wrong" }
        );
        self.feedback = Some(feedback.clone());
        self.phase = QuizPhase::AnswerRevealed;
        Ok(feedback)
    }

    /// Move past a revealed answer. On the last question this finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase`/`Finished` outside `AnswerRevealed`.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        self.require(QuizPhase::AnswerRevealed)?;
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::InvalidPhase { phase: self.phase });
        };
        if session.advance() {
            if let Some(countdown) = session.countdown_mut() {
                countdown.resume();
            }
            self.tentative = None;
            self.feedback = None;
            self.phase = QuizPhase::AwaitingAnswer;
            tracing::debug!("advanced to question {}", session.current_index());
            return Ok(self.phase);
        }
        self.finish()?;
        Ok(self.phase)
    }

    /// End the attempt and compute the results.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` on a second call and `QuizError::InvalidPhase`
    /// before a session exists.
    pub fn finish(&mut self) -> Result<QuizResults, QuizError> {
        match self.phase {
            QuizPhase::AwaitingAnswer | QuizPhase::AnswerRevealed => {}
            QuizPhase::Finished => return Err(QuizError::Finished),
            phase => return Err(QuizError::InvalidPhase { phase }),
        }
        let now = self.clock.now();
        let session = self
            .session
            .as_mut()
            .ok_or(QuizError::InvalidPhase { phase: self.phase })?;
        let results = session.complete(now)?;
        let answered = session.answered_count();
        self.tentative = None;
        self.phase = QuizPhase::Finished;
        self.results = Some(results.clone());
        tracing::info!(
            "quiz finished: {}/{} correct ({}%), {} answered",
            results.correct_answers,
            results.total_questions,
            results.percentage,
            answered
        );
        Ok(results)
    }

    // ─── Timer ─────────────────────────────────────────────────────────────────

    /// Feed one elapsed second into the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !matches!(
            self.phase,
            QuizPhase::AwaitingAnswer | QuizPhase::AnswerRevealed
        ) {
            return TickOutcome::Idle;
        }
        let Some(countdown) = self.session.as_mut().and_then(QuizSession::countdown_mut) else {
            return TickOutcome::Idle;
        };
        match countdown.tick() {
            CountdownTick::Running { remaining } => TickOutcome::Running { remaining },
            CountdownTick::Paused { remaining } => TickOutcome::Paused { remaining },
            CountdownTick::Stopped => TickOutcome::Idle,
            CountdownTick::Expired => {
                tracing::info!("time budget exhausted");
                match self.finish() {
                    Ok(results) => TickOutcome::Expired(Box::new(results)),
                    Err(_) => TickOutcome::Idle,
                }
            }
        }
    }

    /// Returns `false` when there is no running countdown to pause.
    pub fn pause_timer(&mut self) -> bool {
        self.session
            .as_mut()
            .and_then(QuizSession::countdown_mut)
            .is_some_and(Countdown::pause)
    }

    /// Returns `false` when there is no paused countdown to resume.
    pub fn resume_timer(&mut self) -> bool {
        if self.phase != QuizPhase::AwaitingAnswer {
            return false;
        }
        self.session
            .as_mut()
            .and_then(QuizSession::countdown_mut)
            .is_some_and(Countdown::resume)
    }

    /// Whether a tick source should be running for this controller.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        matches!(
            self.phase,
            QuizPhase::AwaitingAnswer | QuizPhase::AnswerRevealed
        ) && self
            .session
            .as_ref()
            .and_then(QuizSession::countdown)
            .is_some_and(|countdown| !countdown.is_stopped())
    }

    // ─── Display ───────────────────────────────────────────────────────────────

    pub fn set_filter(&mut self, filter: LanguageFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn filter(&self) -> LanguageFilter {
        self.filter
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn tentative_selection(&self) -> Option<usize> {
        self.tentative
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::current_index)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::total_questions)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::correct_count)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::AwaitingAnswer | QuizPhase::AnswerRevealed => {
                self.session.as_ref().and_then(QuizSession::current_question)
            }
            _ => None,
        }
    }

    /// Current prompt with the language filter applied.
    #[must_use]
    pub fn display_prompt(&self) -> Option<String> {
        self.current_question()
            .map(|question| self.filter.filter(question.prompt()))
    }

    /// Current options with the language filter applied.
    #[must_use]
    pub fn display_options(&self) -> Vec<String> {
        self.current_question()
            .map(|question| {
                question
                    .options()
                    .iter()
                    .map(|option| self.filter.filter(option))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn option_states(&self) -> Vec<OptionState> {
        let len = self.current_question().map_or(0, Question::option_count);
        (0..len)
            .map(|index| match (&self.feedback, self.tentative) {
                (Some(feedback), _) if index == feedback.correct_index => OptionState::Correct,
                (Some(feedback), _) if index == feedback.selected_index => OptionState::Incorrect,
                (Some(_), _) => OptionState::Neutral,
                (None, Some(selected)) if selected == index => OptionState::Selected,
                (None, _) => OptionState::Neutral,
            })
            .collect()
    }

    #[must_use]
    pub fn action(&self) -> QuizAction {
        match self.phase {
            QuizPhase::AwaitingAnswer => QuizAction::Submit {
                enabled: self.tentative.is_some(),
            },
            QuizPhase::AnswerRevealed => {
                let last = self
                    .session
                    .as_ref()
                    .is_some_and(QuizSession::is_last_question);
                if last {
                    QuizAction::Evaluate
                } else {
                    QuizAction::Next
                }
            }
            _ => QuizAction::None,
        }
    }

    /// `(1-based position, total)` for the progress header.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.total_questions();
        if total == 0 {
            return (0, 0);
        }
        (self.current_index() + 1, total)
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.session.as_ref().and_then(QuizSession::remaining_seconds)
    }

    /// Remaining time as `m:ss`, when the quiz is timed.
    #[must_use]
    pub fn remaining_clock(&self) -> Option<String> {
        self.remaining_seconds().map(format_clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::{fixed_clock, fixed_now};

    fn records(correct: &[usize]) -> Vec<QuestionRecord> {
        correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                QuestionRecord::new(format!("Kérdés {i} (Question {i})"), ["a", "b", "c"], *c)
                    .with_explanation(format!("because {i}"))
            })
            .collect()
    }

    fn started(correct: &[usize], budget: Option<u32>) -> QuizController {
        let mut controller = QuizController::new(fixed_clock());
        controller.initialize(Some(records(correct)), budget).unwrap();
        controller
    }

    #[test]
    fn starts_in_loading() {
        let controller = QuizController::new(fixed_clock());
        assert_eq!(controller.phase(), QuizPhase::Loading);
        assert_eq!(controller.action(), QuizAction::None);
    }

    #[test]
    fn missing_questions_enter_error() {
        let mut controller = QuizController::new(fixed_clock());
        assert_eq!(controller.initialize(None, None), Ok(QuizPhase::Error));
        assert_eq!(controller.failure(), Some(&LoadFailure::NoQuestions));
        assert_eq!(
            controller.failure().map(LoadFailure::default_message),
            Some("No questions available for this quiz.")
        );
        assert_eq!(
            controller.select_option(0),
            Err(QuizError::InvalidPhase {
                phase: QuizPhase::Error
            })
        );
    }

    #[test]
    fn malformed_question_enters_error() {
        let mut controller = QuizController::new(fixed_clock());
        let mut bad = records(&[0, 1]);
        bad[1].options.truncate(1);
        assert_eq!(controller.initialize(Some(bad), None), Ok(QuizPhase::Error));
        assert!(matches!(
            controller.failure(),
            Some(LoadFailure::Malformed { index: 1, .. })
        ));
    }

    #[test]
    fn initialize_only_once() {
        let mut controller = started(&[0], None);
        assert_eq!(
            controller.initialize(Some(records(&[0])), None),
            Err(QuizError::InvalidPhase {
                phase: QuizPhase::AwaitingAnswer
            })
        );
    }

    #[test]
    fn selection_is_replaceable_and_bounded() {
        let mut controller = started(&[0], None);
        assert_eq!(controller.action(), QuizAction::Submit { enabled: false });
        controller.select_option(1).unwrap();
        controller.select_option(2).unwrap();
        assert_eq!(controller.tentative_selection(), Some(2));
        assert_eq!(controller.action(), QuizAction::Submit { enabled: true });
        assert_eq!(
            controller.select_option(3),
            Err(QuizError::OptionOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            controller.option_states(),
            vec![OptionState::Neutral, OptionState::Neutral, OptionState::Selected]
        );
    }

    #[test]
    fn submit_without_selection_changes_nothing() {
        let mut controller = started(&[0], None);
        assert_eq!(controller.submit_answer(), Err(QuizError::NoSelection));
        assert_eq!(controller.phase(), QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn wrong_answer_reveals_styling_and_explanation() {
        let mut controller = started(&[0, 1], None);
        controller.select_option(2).unwrap();
        let feedback = controller.submit_answer().unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(
            feedback.explanation,
            Some(Explanation::Text("because 0".into()))
        );
        assert_eq!(
            controller.option_states(),
            vec![OptionState::Correct, OptionState::Neutral, OptionState::Incorrect]
        );
        assert_eq!(controller.action(), QuizAction::Next);
    }

    #[test]
    fn correct_answer_hides_explanation() {
        let mut controller = started(&[0, 1], None);
        controller.select_option(0).unwrap();
        let feedback = controller.submit_answer().unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.explanation, None);
        assert_eq!(controller.option_states()[0], OptionState::Correct);
    }

    #[test]
    fn blank_explanation_falls_back() {
        let mut controller = QuizController::new(fixed_clock());
        let record = QuestionRecord::new("Q", ["a", "b"], 0).with_explanation(" ");
        controller.initialize(Some(vec![record]), None).unwrap();
        controller.select_option(1).unwrap();
        let feedback = controller.submit_answer().unwrap();
        assert_eq!(feedback.explanation, Some(Explanation::Missing));
    }

    #[test]
    fn second_submit_is_rejected_without_double_count() {
        let mut controller = started(&[0, 1], None);
        controller.select_option(0).unwrap();
        controller.submit_answer().unwrap();
        assert_eq!(
            controller.submit_answer(),
            Err(QuizError::AlreadyAnswered { index: 0 })
        );
        assert_eq!(controller.correct_count(), 1);
    }

    #[test]
    fn advance_moves_forward_then_finishes() {
        let mut controller = started(&[0, 1], None);
        assert!(controller.advance().is_err());

        controller.select_option(0).unwrap();
        controller.submit_answer().unwrap();
        assert_eq!(controller.advance(), Ok(QuizPhase::AwaitingAnswer));
        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.tentative_selection(), None);
        assert_eq!(controller.feedback(), None);
        assert_eq!(controller.progress(), (2, 2));

        controller.select_option(1).unwrap();
        controller.submit_answer().unwrap();
        assert_eq!(controller.action(), QuizAction::Evaluate);
        assert_eq!(controller.advance(), Ok(QuizPhase::Finished));
        assert_eq!(controller.results().map(|r| r.percentage), Some(100));
    }

    #[test]
    fn scoring_scenario_matches_expected_results() {
        let mut controller = started(&[1, 0, 2], None);
        for answer in [1, 1, 2] {
            controller.select_option(answer).unwrap();
            controller.submit_answer().unwrap();
            controller.advance().unwrap();
        }
        let results = controller.results().unwrap();
        assert_eq!(results.correct_answers, 2);
        assert_eq!(results.percentage, 67);
        assert_eq!(results.wrong_answers.len(), 1);
        let wrong = &results.wrong_answers[0];
        assert_eq!(
            (wrong.question_index, wrong.selected_index, wrong.correct_index),
            (1, 1, 0)
        );
    }

    #[test]
    fn finish_is_single_shot() {
        let mut controller = started(&[0, 1], None);
        let results = controller.finish().unwrap();
        assert_eq!(results.correct_answers, 0);
        assert_eq!(controller.finish(), Err(QuizError::Finished));
        assert_eq!(controller.select_option(0), Err(QuizError::Finished));
        assert_eq!(controller.submit_answer(), Err(QuizError::Finished));
        assert_eq!(controller.action(), QuizAction::None);
    }

    #[test]
    fn countdown_expiry_finishes_exactly_once() {
        let mut controller = started(&[0, 1, 2], Some(30));
        let mut expired = 0;
        for _ in 0..30 {
            if let TickOutcome::Expired(_) = controller.tick() {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(controller.phase(), QuizPhase::Finished);
        assert_eq!(controller.tick(), TickOutcome::Idle);
        assert!(!controller.wants_ticks());
    }

    #[test]
    fn finish_survives_clock_stepping_back() {
        let mut controller = started(&[0, 1], None);
        controller.clock = Clock::fixed(fixed_now() - chrono::Duration::seconds(5));
        let results = controller.finish().unwrap();
        assert_eq!(results.completed_at, fixed_now());
        assert_eq!(controller.phase(), QuizPhase::Finished);
    }

    #[test]
    fn countdown_expiry_survives_clock_stepping_back() {
        let mut controller = started(&[0, 1], Some(2));
        controller.clock = Clock::fixed(fixed_now() - chrono::Duration::seconds(5));
        assert_eq!(controller.tick(), TickOutcome::Running { remaining: 1 });
        assert!(matches!(controller.tick(), TickOutcome::Expired(_)));
        assert_eq!(controller.phase(), QuizPhase::Finished);
        assert!(controller.results().is_some());
    }

    #[test]
    fn countdown_pauses_while_answer_is_revealed() {
        let mut controller = started(&[0, 1], Some(10));
        assert_eq!(controller.tick(), TickOutcome::Running { remaining: 9 });
        controller.select_option(0).unwrap();
        controller.submit_answer().unwrap();
        assert_eq!(controller.tick(), TickOutcome::Paused { remaining: 9 });
        assert!(!controller.pause_timer());
        controller.advance().unwrap();
        assert!(!controller.resume_timer());
        assert_eq!(controller.tick(), TickOutcome::Running { remaining: 8 });
        assert_eq!(controller.remaining_clock().as_deref(), Some("0:08"));
    }

    #[test]
    fn untimed_quiz_ignores_ticks() {
        let mut controller = started(&[0], None);
        assert_eq!(controller.tick(), TickOutcome::Idle);
        assert!(!controller.wants_ticks());
        assert_eq!(controller.remaining_clock(), None);
    }

    #[test]
    fn filter_changes_display_only() {
        let mut controller = started(&[0], None);
        controller.set_filter(LanguageFilter::Hungarian);
        assert_eq!(controller.display_prompt().as_deref(), Some("Kérdés 0"));
        controller.set_filter(LanguageFilter::Vietnamese);
        assert_eq!(controller.display_prompt().as_deref(), Some("Question 0"));
        assert_eq!(
            controller.current_question().map(Question::prompt),
            Some("Kérdés 0 (Question 0)")
        );
    }
}
