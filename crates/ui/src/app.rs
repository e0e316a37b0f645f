use dioxus::prelude::*;
use dioxus_router::Router;
use services::Localizer;

use crate::context::{AppContext, LocaleState};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let locale =
        use_context_provider(|| LocaleState::new(Localizer::empty(ctx.initial_language())));

    // Reloads whenever the requested language changes.
    let localization = ctx.services().localization();
    let _translations = use_resource(move || {
        let localization = localization.clone();
        let mut locale = locale;
        let language = locale.requested();
        async move {
            let localizer = localization.load(language).await;
            locale.replace(localizer);
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
