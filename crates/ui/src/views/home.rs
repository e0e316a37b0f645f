use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, LocaleState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CategoryVm, map_navigation};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();
    let catalog = ctx.services().catalog();

    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let nav = catalog
                .navigation()
                .await
                .map_err(|e| ViewError::from_catalog(&e))?;
            Ok(map_navigation(&nav))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { {localizer.translate("home.heading", "Categories")} }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { {localizer.translate("common.loading", "Loading...")} }
                },
                ViewState::Ready(categories) => rsx! {
                    if categories.is_empty() {
                        p { {localizer.translate("home.empty", "No quizzes available yet.")} }
                    } else {
                        for category in categories {
                            CategoryCard { category }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error",
                        p { {localizer.translate(err.message_key(), err.message())} }
                        button {
                            onclick: move |_| resource.restart(),
                            {localizer.translate("common.retry", "Retry")}
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CategoryCard(category: CategoryVm) -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();

    rsx! {
        section { class: "category",
            h3 { "{category.name}" }
            p { {localizer.translate("category.description", &category.description)} }
            for sub in category.sub_categories {
                h4 { "{sub.name}" }
                ul {
                    for title in sub.titles {
                        li {
                            match title.path {
                                Some(path) => rsx! {
                                    Link { to: Route::title(&path), "{title.label}" }
                                },
                                None => rsx! {
                                    span { "{title.label}" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
