mod catalog;
mod difficulty;
mod ids;
mod locale;
mod question;
mod session;

pub use catalog::{
    DESIRED_COUNT_OPTIONS, NavCategory, NavSubCategory, NavTitle, QUICK_QUIZ_MAX_QUESTIONS,
    QuizContext, QuizLaunch, SECONDS_PER_QUESTION, StartQuizRequest, StartRequestError,
    StartTarget, TitleDetail, TitlePath, TopicSummary, default_question_count,
    estimated_minutes, format_estimated_minutes, question_count_options, selection_percent,
};
pub use difficulty::{Difficulty, DifficultyParseError};
pub use ids::{ParseIdError, QuizId, TopicId};
pub use locale::{Language, TranslationTable, UnsupportedLanguage};
pub use question::{Question, QuestionError, QuestionRecord};
pub use session::{
    AnswerRecord, QuizResults, QuizSession, SessionError, WrongAnswer, WrongAnswerDetail,
    score_percentage,
};
