mod breadcrumb;
mod home;
mod language;
mod quiz;
mod results;
mod state;
mod title;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use breadcrumb::Breadcrumb;
pub use home::HomeView;
pub use language::LanguageSwitcher;
pub use quiz::QuizView;
pub use results::ResultsPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use title::TitleView;
