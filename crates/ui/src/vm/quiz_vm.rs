use quiz_core::model::{QuizContext, QuizResults};
use quiz_core::text::LanguageFilter;
use services::{
    AnswerFeedback, Explanation, LoadFailure, OptionState, QuizAction, QuizController, QuizError,
    QuizPhase, TickOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    /// Whatever the action button currently offers.
    Primary,
    End,
    Filter(LanguageFilter),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub position: usize,
    pub total: usize,
    pub progress_percent: u32,
    pub correct_so_far: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub action: QuizAction,
    /// `Some` once the current answer is revealed.
    pub answered_correctly: Option<bool>,
    pub explanation: Option<Explanation>,
    pub remaining_clock: Option<String>,
    pub filter: LanguageFilter,
    pub show_selection_warning: bool,
}

#[must_use]
pub fn filter_default_label(filter: LanguageFilter) -> &'static str {
    match filter {
        LanguageFilter::All => "All",
        LanguageFilter::Vietnamese => "Vietnamese",
        LanguageFilter::Hungarian => "Hungarian",
    }
}

#[must_use]
pub fn action_default_label(action: QuizAction) -> Option<&'static str> {
    match action {
        QuizAction::Submit { .. } => Some("Submit"),
        QuizAction::Next => Some("Next"),
        QuizAction::Evaluate => Some("Evaluate"),
        QuizAction::None => None,
    }
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Neutral => "option",
        OptionState::Selected => "option selected",
        OptionState::Correct => "option correct",
        OptionState::Incorrect => "option incorrect",
    }
}

/// One quiz page: the controller plus the bits the page needs around it.
#[derive(Clone, Debug)]
pub struct QuizVm {
    controller: QuizController,
    context: QuizContext,
    title: Option<String>,
    selection_warning: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController, context: QuizContext, title: Option<String>) -> Self {
        Self {
            controller,
            context,
            title,
            selection_warning: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        self.controller.failure()
    }

    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.controller.results()
    }

    #[must_use]
    pub fn context(&self) -> &QuizContext {
        &self.context
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn filter(&self) -> LanguageFilter {
        self.controller.filter()
    }

    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.controller.wants_ticks()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.controller.feedback()
    }

    /// Apply one user intent.
    ///
    /// A submit without a selection raises the inline warning instead of failing.
    ///
    /// # Errors
    ///
    /// Returns the controller error for intents the current phase rejects.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, QuizError> {
        match intent {
            QuizIntent::Select(index) => {
                self.controller.select_option(index)?;
                self.selection_warning = false;
            }
            QuizIntent::Filter(filter) => self.controller.set_filter(filter),
            QuizIntent::End => {
                self.controller.finish()?;
            }
            QuizIntent::Primary => match self.controller.action() {
                QuizAction::Submit { .. } => match self.controller.submit_answer() {
                    Ok(_) => self.selection_warning = false,
                    Err(QuizError::NoSelection) => self.selection_warning = true,
                    Err(e) => return Err(e),
                },
                QuizAction::Next | QuizAction::Evaluate => {
                    self.controller.advance()?;
                }
                QuizAction::None => {}
            },
        }
        Ok(self.outcome())
    }

    /// Forward one timer tick.
    pub fn on_tick(&mut self) -> QuizOutcome {
        if let TickOutcome::Expired(_) = self.controller.tick() {
            return QuizOutcome::Finished;
        }
        self.outcome()
    }

    fn outcome(&self) -> QuizOutcome {
        if self.controller.phase() == QuizPhase::Finished {
            QuizOutcome::Finished
        } else {
            QuizOutcome::Continue
        }
    }

    /// Render data for the question screen; `None` outside an active question.
    #[must_use]
    pub fn screen(&self) -> Option<QuizScreenVm> {
        let revealed = match self.controller.phase() {
            QuizPhase::AwaitingAnswer => false,
            QuizPhase::AnswerRevealed => true,
            _ => return None,
        };
        let (position, total) = self.controller.progress();
        let progress_percent = u32::try_from(position * 100 / total.max(1)).unwrap_or(100);
        let options = self
            .controller
            .display_options()
            .into_iter()
            .zip(self.controller.option_states())
            .enumerate()
            .map(|(index, (text, state))| OptionVm {
                index,
                text,
                class: option_class(state),
                disabled: revealed,
            })
            .collect();
        let feedback = self.controller.feedback();
        Some(QuizScreenVm {
            position,
            total,
            progress_percent,
            correct_so_far: self.controller.correct_count(),
            prompt: self.controller.display_prompt().unwrap_or_default(),
            options,
            action: self.controller.action(),
            answered_correctly: feedback.map(|f| f.is_correct),
            explanation: feedback.and_then(|f| f.explanation.clone()),
            remaining_clock: self.controller.remaining_clock(),
            filter: self.controller.filter(),
            show_selection_warning: self.selection_warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionRecord;
    use quiz_core::time::fixed_clock;

    fn vm(budget: Option<u32>) -> QuizVm {
        let records = vec![
            QuestionRecord::new("Ngày (Day)", ["Một (One)", "Hai (Two)"], 1),
            QuestionRecord::new("Second", ["A", "B"], 0).with_explanation("A is first"),
        ];
        let mut controller = QuizController::new(fixed_clock());
        controller.initialize(Some(records), budget).unwrap();
        QuizVm::new(controller, QuizContext::default(), Some("Basics".into()))
    }

    #[test]
    fn submit_without_selection_only_warns() {
        let mut vm = vm(None);
        assert_eq!(vm.dispatch(QuizIntent::Primary), Ok(QuizOutcome::Continue));
        let screen = vm.screen().unwrap();
        assert!(screen.show_selection_warning);
        assert_eq!(screen.action, QuizAction::Submit { enabled: false });
        assert_eq!(vm.phase(), QuizPhase::AwaitingAnswer);

        vm.dispatch(QuizIntent::Select(0)).unwrap();
        assert!(!vm.screen().unwrap().show_selection_warning);
    }

    #[test]
    fn wrong_answer_reveals_explanation_and_classes() {
        let mut vm = vm(None);
        vm.dispatch(QuizIntent::Select(1)).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();

        vm.dispatch(QuizIntent::Select(1)).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
        let screen = vm.screen().unwrap();
        assert_eq!(screen.answered_correctly, Some(false));
        assert_eq!(
            screen.explanation,
            Some(Explanation::Text("A is first".into()))
        );
        let classes: Vec<_> = screen.options.iter().map(|o| o.class).collect();
        assert_eq!(classes, ["option correct", "option incorrect"]);
        assert!(screen.options.iter().all(|o| o.disabled));
        assert_eq!(screen.action, QuizAction::Evaluate);

        assert_eq!(vm.dispatch(QuizIntent::Primary), Ok(QuizOutcome::Finished));
        assert!(vm.screen().is_none());
        assert_eq!(vm.results().unwrap().correct_answers, 1);
    }

    #[test]
    fn filter_changes_displayed_text_only() {
        let mut vm = vm(None);
        vm.dispatch(QuizIntent::Filter(LanguageFilter::Vietnamese))
            .unwrap();
        let screen = vm.screen().unwrap();
        assert_eq!(screen.prompt, "Day");
        assert_eq!(screen.options[0].text, "One");
        assert_eq!(screen.filter, LanguageFilter::Vietnamese);
    }

    #[test]
    fn expiry_finishes_through_ticks() {
        let mut vm = vm(Some(2));
        assert!(vm.wants_ticks());
        assert_eq!(vm.on_tick(), QuizOutcome::Continue);
        assert_eq!(vm.screen().unwrap().remaining_clock.as_deref(), Some("0:01"));
        assert_eq!(vm.on_tick(), QuizOutcome::Finished);
        assert!(!vm.wants_ticks());
    }

    #[test]
    fn end_finishes_early() {
        let mut vm = vm(None);
        assert_eq!(vm.dispatch(QuizIntent::End), Ok(QuizOutcome::Finished));
        assert_eq!(vm.dispatch(QuizIntent::End), Err(QuizError::Finished));
    }
}
