mod catalog_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use catalog_vm::{
    CategoryVm, DifficultyOptionVm, SetupVm, SubCategoryVm, TitleLinkVm, difficulty_class,
    difficulty_default_label, map_navigation, map_setup,
};
pub use quiz_vm::{
    OptionVm, QuizIntent, QuizOutcome, QuizScreenVm, QuizVm, action_default_label,
    filter_default_label,
};
pub use results_vm::{ResultsVm, WrongAnswerVm, map_results};
pub use time_fmt::{format_datetime, format_duration};
