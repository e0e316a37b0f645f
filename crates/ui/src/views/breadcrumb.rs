use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::TitlePath;
use quiz_core::text::truncate_breadcrumb;

use crate::context::LocaleState;
use crate::routes::Route;

/// Home › category › subcategory › title, each segment shortened for display.
#[component]
pub fn Breadcrumb(path: TitlePath, #[props(!optional)] topic: Option<String>) -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();

    rsx! {
        nav { class: "breadcrumb",
            Link { to: Route::Home {}, {localizer.translate("nav.home", "Home")} }
            span { class: "sep", "›" }
            span { "{truncate_breadcrumb(&path.category)}" }
            span { class: "sep", "›" }
            span { "{truncate_breadcrumb(&path.subcategory)}" }
            span { class: "sep", "›" }
            match topic {
                Some(topic) => rsx! {
                    Link { to: Route::title(&path), "{truncate_breadcrumb(&path.title)}" }
                    span { class: "sep", "›" }
                    span { "{truncate_breadcrumb(&topic)}" }
                },
                None => rsx! {
                    span { "{truncate_breadcrumb(&path.title)}" }
                },
            }
        }
    }
}
