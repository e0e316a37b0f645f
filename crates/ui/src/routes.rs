use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::TitlePath;

use crate::context::LocaleState;
use crate::views::{HomeView, LanguageSwitcher, QuizView, TitleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:category/:subcategory/:title", TitleView)]
        Title { category: String, subcategory: String, title: String },
        #[route("/play", QuizView)] Play {},
}

impl Route {
    #[must_use]
    pub fn title(path: &TitlePath) -> Self {
        Route::Title {
            category: path.category.clone(),
            subcategory: path.subcategory.clone(),
            title: path.title.clone(),
        }
    }

    /// Map a server path onto a route; anything unknown goes home.
    #[must_use]
    pub fn from_server_path(path: &str) -> Self {
        TitlePath::from_url(path).map_or(Route::Home {}, |path| Route::title(&path))
    }
}

#[component]
fn Layout() -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Home {}, {localizer.translate("app.title", "Quiz")} }
                LanguageSwitcher {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_paths_map_to_routes() {
        assert!(matches!(
            Route::from_server_path("/quiz/Languages/Hungarian/Basics"),
            Route::Title { ref title, .. } if title == "Basics"
        ));
        assert!(matches!(Route::from_server_path("/"), Route::Home {}));
    }
}
