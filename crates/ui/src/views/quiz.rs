use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, Navigator, use_navigator};
use quiz_core::text::LanguageFilter;
use services::{
    Explanation, LOAD_ERROR_KEY, NO_EXPLANATION_KEY, NO_EXPLANATION_TEXT, QuizAction, QuizPhase,
    ResultsReporter, SessionTimer,
};

use crate::context::{AppContext, LocaleState};
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError};
use crate::vm::{
    QuizIntent, QuizScreenVm, QuizVm, action_default_label, filter_default_label, map_results,
};

fn apply(mut vm: Signal<Option<QuizVm>>, intent: QuizIntent) {
    let outcome = vm.write().as_mut().map(|vm| vm.dispatch(intent));
    if let Some(Err(e)) = outcome {
        tracing::debug!("quiz intent {:?} rejected: {}", intent, e);
    }
}

/// Report the results once, then leave the quiz page whatever the outcome.
fn report_and_leave(
    reporter: Arc<ResultsReporter>,
    navigator: Navigator,
    vm: Signal<Option<QuizVm>>,
    mut submitting: Signal<bool>,
) {
    if *submitting.peek() {
        return;
    }
    let snapshot = vm.peek().as_ref().and_then(|vm| {
        vm.results()
            .map(|results| (results.clone(), vm.context().clone()))
    });
    let Some((results, context)) = snapshot else {
        return;
    };
    submitting.set(true);
    spawn(async move {
        let target = reporter.submit(&results, &context).await;
        navigator.push(Route::from_server_path(target.path()));
    });
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();
    let navigator = use_navigator();
    let reporter = ctx.services().reporter();

    let vm = use_signal(|| {
        let launch = ctx.take_pending_launch().unwrap_or_default();
        match ctx.services().controller_for(&launch) {
            Ok(controller) => Some(QuizVm::new(controller, launch.context, launch.quiz_title)),
            Err(e) => {
                tracing::warn!("quiz could not be prepared: {}", e);
                None
            }
        }
    });
    let submitting = use_signal(|| false);

    let timer = use_hook(|| {
        let (timer, mut ticks) = SessionTimer::new();
        let mut vm = vm;
        spawn(async move {
            while ticks.recv().await.is_some() {
                let mut slot = vm.write();
                if let Some(vm) = slot.as_mut() {
                    vm.on_tick();
                }
            }
        });
        Rc::new(RefCell::new(timer))
    });

    use_effect(move || {
        let wants = vm.read().as_ref().is_some_and(QuizVm::wants_ticks);
        let mut timer = timer.borrow_mut();
        if wants {
            timer.start();
        } else {
            timer.stop();
        }
    });

    let guard = vm.read();
    let Some(quiz) = guard.as_ref() else {
        return rsx! {
            div { class: "page error",
                p { {localizer.translate(ViewError::Unknown.message_key(), ViewError::Unknown.message())} }
                Link { to: Route::Home {}, {localizer.translate("nav.home", "Home")} }
            }
        };
    };

    let title = quiz.title().unwrap_or_default().to_string();
    let body = match quiz.phase() {
        QuizPhase::Loading => rsx! {
            p { {localizer.translate("common.loading", "Loading...")} }
        },
        QuizPhase::Error => {
            let (key, message) = quiz
                .failure()
                .map_or((LOAD_ERROR_KEY, ""), |f| (f.message_key(), f.default_message()));
            rsx! {
                div { class: "error",
                    p { {localizer.translate(key, message)} }
                    Link { to: Route::Home {}, {localizer.translate("nav.home", "Home")} }
                }
            }
        }
        QuizPhase::Finished => match quiz.results() {
            Some(results) => {
                let results = map_results(results, quiz.filter());
                rsx! {
                    ResultsPanel {
                        results,
                        submitting: submitting(),
                        on_finish: move |()| {
                            report_and_leave(reporter.clone(), navigator, vm, submitting);
                        },
                    }
                }
            }
            None => rsx! {
                Link { to: Route::Home {}, {localizer.translate("nav.home", "Home")} }
            },
        },
        QuizPhase::AwaitingAnswer | QuizPhase::AnswerRevealed => match quiz.screen() {
            Some(screen) => rsx! {
                QuestionScreen { screen, vm }
            },
            None => rsx! {},
        },
    };
    drop(guard);

    rsx! {
        div { class: "page quiz",
            if !title.is_empty() {
                h2 { "{title}" }
            }
            {body}
        }
    }
}

#[component]
fn QuestionScreen(screen: QuizScreenVm, vm: Signal<Option<QuizVm>>) -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();
    let action_label = screen
        .action
        .label_key()
        .zip(action_default_label(screen.action))
        .map(|(key, default)| localizer.translate(key, default));
    let action_enabled = !matches!(screen.action, QuizAction::Submit { enabled: false });

    rsx! {
        div { class: "quiz-header",
            span { class: "position",
                {localizer.translate("quiz.question", "Question")}
                " {screen.position} / {screen.total}"
            }
            span { class: "correct",
                {localizer.translate("quiz.correct_count", "Correct:")}
                " {screen.correct_so_far}"
            }
            if let Some(clock) = screen.remaining_clock.clone() {
                span { class: "timer", "{clock}" }
            }
        }
        div { class: "progress",
            div { class: "bar", style: "width: {screen.progress_percent}%" }
        }

        div { class: "filters",
            for filter in LanguageFilter::ALL {
                button {
                    class: if filter == screen.filter { "active" } else { "" },
                    onclick: move |_| apply(vm, QuizIntent::Filter(filter)),
                    {localizer.translate(filter.label_key(), filter_default_label(filter))}
                }
            }
        }

        p { class: "prompt", "{screen.prompt}" }
        div { class: "options",
            for option in screen.options.clone() {
                button {
                    class: "{option.class}",
                    disabled: option.disabled,
                    onclick: move |_| apply(vm, QuizIntent::Select(option.index)),
                    "{option.text}"
                }
            }
        }

        if screen.show_selection_warning {
            p { class: "warning",
                {localizer.translate("quiz.select_warning", "Please select an answer first.")}
            }
        }

        match screen.answered_correctly {
            Some(true) => rsx! {
                p { class: "feedback correct", {localizer.translate("quiz.correct", "Correct!")} }
            },
            Some(false) => rsx! {
                p { class: "feedback incorrect", {localizer.translate("quiz.incorrect", "Incorrect.")} }
                div { class: "explanation",
                    match screen.explanation.clone() {
                        Some(Explanation::Text(text)) => rsx! { "{text}" },
                        _ => rsx! { {localizer.translate(NO_EXPLANATION_KEY, NO_EXPLANATION_TEXT)} },
                    }
                }
            },
            None => rsx! {},
        }

        div { class: "actions",
            if let Some(label) = action_label {
                button {
                    class: "primary",
                    "data-enabled": "{action_enabled}",
                    onclick: move |_| apply(vm, QuizIntent::Primary),
                    "{label}"
                }
            }
            button {
                class: "end",
                onclick: move |_| apply(vm, QuizIntent::End),
                {localizer.translate("quiz.end", "End quiz")}
            }
        }
    }
}
