use std::fmt;
use std::sync::Arc;

use client::{QuizApi, ResultsSubmission};
use quiz_core::model::{QuizContext, QuizResults};

/// Where the app goes once a finished quiz has been reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    #[must_use]
    pub fn for_context(context: &QuizContext) -> Self {
        Self(context.redirect_path())
    }

    #[must_use]
    pub fn home() -> Self {
        Self("/".to_string())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Posts finished sessions to the server, once, and never fails the caller.
#[derive(Clone)]
pub struct ResultsReporter {
    api: Arc<dyn QuizApi>,
}

impl ResultsReporter {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Submit `results` and resolve the post-quiz destination.
    ///
    /// The destination is the same whether or not the request succeeds.
    pub async fn submit(&self, results: &QuizResults, context: &QuizContext) -> NavigationTarget {
        let submission = ResultsSubmission::from_results(results);
        match self.api.submit_results(&submission).await {
            Ok(ack) => tracing::info!(
                "results submitted ({}/{}), server score {:?}",
                submission.correct_answers,
                submission.total_questions,
                ack.score
            ),
            Err(e) => tracing::warn!("results submission failed: {}", e),
        }
        NavigationTarget::for_context(context)
    }
}
