use quiz_core::model::{Difficulty, NavCategory, TitlePath};
use quiz_core::text::truncate_breadcrumb;
use services::QuizSetup;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleLinkVm {
    pub label: String,
    pub path: Option<TitlePath>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubCategoryVm {
    pub name: String,
    pub titles: Vec<TitleLinkVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryVm {
    pub name: String,
    /// Untranslated description; the `{}` template is filled from it.
    pub description: String,
    pub sub_categories: Vec<SubCategoryVm>,
}

#[must_use]
pub fn map_navigation(nav: &[NavCategory]) -> Vec<CategoryVm> {
    nav.iter()
        .map(|category| CategoryVm {
            name: category.name.clone(),
            description: format!("Explore {} topics", category.name),
            sub_categories: category
                .sub_categories
                .iter()
                .map(|sub| SubCategoryVm {
                    name: sub.name.clone(),
                    titles: sub
                        .titles
                        .iter()
                        .map(|title| TitleLinkVm {
                            label: truncate_breadcrumb(&title.name),
                            path: TitlePath::from_url(&title.url),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub fn difficulty_default_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
        Difficulty::Mixed => "Mixed",
    }
}

/// CSS classes for a difficulty button; colour comes from the level.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty, selected: bool) -> String {
    if selected {
        format!("difficulty {} selected", difficulty.as_str())
    } else {
        format!("difficulty {}", difficulty.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyOptionVm {
    pub difficulty: Difficulty,
    pub label_key: &'static str,
    pub default_label: &'static str,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub difficulties: Vec<DifficultyOptionVm>,
    pub counts: Vec<u32>,
    pub selected_count: Option<u32>,
    pub estimated_minutes: String,
    pub selection_percent: u32,
    pub can_start: bool,
}

#[must_use]
pub fn map_setup(setup: &QuizSetup) -> SetupVm {
    SetupVm {
        difficulties: Difficulty::ALL
            .into_iter()
            .map(|difficulty| DifficultyOptionVm {
                difficulty,
                label_key: difficulty.label_key(),
                default_label: difficulty_default_label(difficulty),
                class: difficulty_class(difficulty, difficulty == setup.difficulty()),
            })
            .collect(),
        counts: setup.count_options().to_vec(),
        selected_count: setup.question_count(),
        estimated_minutes: setup.estimated_minutes(),
        selection_percent: setup.selection_percent(),
        can_start: setup.question_count().is_some(),
    }
}
