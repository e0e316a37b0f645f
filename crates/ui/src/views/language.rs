use dioxus::prelude::*;
use quiz_core::model::Language;

use crate::context::LocaleState;

#[component]
pub fn LanguageSwitcher() -> Element {
    let mut locale = use_context::<LocaleState>();
    let current = locale.requested();

    rsx! {
        select {
            class: "language",
            value: "{current.code()}",
            onchange: move |evt| match evt.value().parse::<Language>() {
                Ok(language) => locale.request(language),
                Err(e) => tracing::warn!("ignoring language choice: {}", e),
            },
            for language in Language::ALL {
                option {
                    value: "{language.code()}",
                    selected: language == current,
                    "{language.display_name()}"
                }
            }
        }
    }
}
