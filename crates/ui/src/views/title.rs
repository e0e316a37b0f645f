use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use quiz_core::model::{QuizId, QuizLaunch, TitlePath, TopicSummary};
use services::{CatalogError, QuizSetup};

use crate::context::{AppContext, LocaleState};
use crate::routes::Route;
use crate::views::{Breadcrumb, ViewError, ViewState, view_state_from_resource};
use crate::vm::map_setup;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StartMode {
    Configured,
    Quick,
}

/// Shared flags for the start buttons on one page.
#[derive(Clone, Copy)]
struct StartState {
    starting: Signal<bool>,
    error: Signal<Option<ViewError>>,
}

fn start_quiz(
    ctx: &AppContext,
    navigator: Navigator,
    mut state: StartState,
    quiz: QuizId,
    setup: QuizSetup,
    mode: StartMode,
    topic: Option<TopicSummary>,
) {
    if *state.starting.peek() {
        return;
    }
    state.starting.set(true);
    state.error.set(None);
    let ctx = ctx.clone();
    spawn(async move {
        let catalog = ctx.services().catalog();
        let result: Result<QuizLaunch, CatalogError> = match (mode, topic) {
            (StartMode::Quick, Some(topic)) => catalog.start_topic_quick(topic.id).await,
            (StartMode::Configured, Some(topic)) => catalog.start_topic(topic.id, &setup).await,
            (_, None) => catalog.start_title(quiz, &setup).await,
        };
        match result {
            Ok(launch) => {
                ctx.set_pending_launch(launch);
                navigator.push(Route::Play {});
            }
            Err(e) => {
                tracing::warn!("failed to start quiz: {}", e);
                state.error.set(Some(ViewError::from_catalog(&e)));
            }
        }
        state.starting.set(false);
    });
}

#[component]
pub fn TitleView(category: String, subcategory: String, title: String) -> Element {
    let ctx = use_context::<AppContext>();
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();
    let navigator = use_navigator();
    let catalog = ctx.services().catalog();

    let path = TitlePath::new(category, subcategory, title);
    let mut setup = use_signal(|| QuizSetup::new(0));
    let mut topic = use_signal(|| None::<TopicSummary>);
    let start_state = StartState {
        starting: use_signal(|| false),
        error: use_signal(|| None::<ViewError>),
    };

    let mut resource = use_resource(use_reactive!(|path| {
        let catalog = catalog.clone();
        async move {
            let detail = catalog
                .title_detail(&path)
                .await
                .map_err(|e| ViewError::from_catalog(&e))?;
            setup.set(QuizSetup::new(detail.total_questions));
            topic.set(None);
            Ok(detail)
        }
    }));

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            Breadcrumb { path: path.clone(), topic: topic().map(|t| t.name) }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { {localizer.translate("common.loading", "Loading...")} }
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
                ViewState::Ready(detail) => {
                    let vm = map_setup(&setup.read());
                    let total = detail.total_questions;
                    let quiz = detail.quiz_id();
                    let busy = *start_state.starting.read();
                    let heading = topic().map_or_else(|| detail.name.clone(), |t| t.name);
                    rsx! {
                        h2 { "{heading}" }
                        if let Some(description) = detail.description.clone() {
                            p { "{description}" }
                        }
                        if !detail.learning_objectives.is_empty() {
                            h3 { {localizer.translate("title.objectives", "Learning objectives")} }
                            ul {
                                for objective in detail.learning_objectives.clone() {
                                    li { "{objective}" }
                                }
                            }
                        }
                        if !detail.study_tips.is_empty() {
                            h3 { {localizer.translate("title.tips", "Study tips")} }
                            ul {
                                for tip in detail.study_tips.clone() {
                                    li { "{tip}" }
                                }
                            }
                        }

                        section { class: "setup",
                            h3 { {localizer.translate("setup.difficulty", "Difficulty")} }
                            div { class: "difficulties",
                                for option in vm.difficulties {
                                    button {
                                        class: "{option.class}",
                                        onclick: move |_| setup.write().select_difficulty(option.difficulty),
                                        {localizer.translate(option.label_key, option.default_label)}
                                    }
                                }
                            }

                            h3 { {localizer.translate("setup.count", "Number of questions")} }
                            select {
                                value: "{vm.selected_count.unwrap_or(0)}",
                                onchange: move |evt| {
                                    let parsed = evt.value().parse::<u32>();
                                    match parsed {
                                        Ok(count) => {
                                            if let Err(e) = setup.write().select_count(count) {
                                                tracing::warn!("ignoring count choice: {}", e);
                                            }
                                        }
                                        Err(e) => tracing::warn!("ignoring count choice: {}", e),
                                    }
                                },
                                for count in vm.counts.clone() {
                                    option {
                                        value: "{count}",
                                        selected: Some(count) == vm.selected_count,
                                        "{count}"
                                    }
                                }
                            }
                            p { class: "estimate",
                                {localizer.translate("setup.estimate", "Estimated time (minutes):")}
                                " {vm.estimated_minutes}"
                            }
                            div { class: "progress",
                                div { class: "bar", style: "width: {vm.selection_percent}%" }
                            }

                            if let Some(err) = *start_state.error.read() {
                                p { class: "error", {localizer.translate(err.message_key(), err.message())} }
                            }
                            button {
                                class: "start",
                                disabled: !vm.can_start || busy,
                                onclick: {
                                    let ctx = ctx.clone();
                                    let quiz = quiz.clone();
                                    move |_| start_quiz(
                                        &ctx,
                                        navigator,
                                        start_state,
                                        quiz.clone(),
                                        setup(),
                                        StartMode::Configured,
                                        topic(),
                                    )
                                },
                                {localizer.translate("setup.start", "Start quiz")}
                            }
                            if topic().is_some() {
                                button {
                                    onclick: move |_| {
                                        topic.set(None);
                                        setup.set(QuizSetup::new(total));
                                    },
                                    {localizer.translate("setup.whole_title", "Whole title")}
                                }
                            }
                        }

                        if !detail.topics.is_empty() {
                            section { class: "topics",
                                h3 { {localizer.translate("title.topics", "Topics")} }
                                ul {
                                    for item in detail.topics.clone() {
                                        TopicRow {
                                            topic: item.clone(),
                                            busy,
                                            on_configure: move |chosen: TopicSummary| {
                                                setup.set(QuizSetup::new(chosen.total_questions));
                                                topic.set(Some(chosen));
                                            },
                                            on_quick: {
                                                let ctx = ctx.clone();
                                                let quiz = quiz.clone();
                                                move |chosen: TopicSummary| start_quiz(
                                                    &ctx,
                                                    navigator,
                                                    start_state,
                                                    quiz.clone(),
                                                    setup(),
                                                    StartMode::Quick,
                                                    Some(chosen),
                                                )
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicRow(
    topic: TopicSummary,
    busy: bool,
    on_configure: EventHandler<TopicSummary>,
    on_quick: EventHandler<TopicSummary>,
) -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();
    let configure_topic = topic.clone();
    let quick_topic = topic.clone();

    rsx! {
        li { class: "topic",
            span { "{topic.name} ({topic.total_questions})" }
            button {
                disabled: busy,
                onclick: move |_| on_configure.call(configure_topic.clone()),
                {localizer.translate("topic.configure", "Configure")}
            }
            button {
                disabled: busy,
                onclick: move |_| on_quick.call(quick_topic.clone()),
                {localizer.translate("topic.quick", "Quick quiz")}
            }
        }
    }
}
