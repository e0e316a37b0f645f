use dioxus::prelude::*;

use crate::context::LocaleState;
use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(results: ResultsVm, submitting: bool, on_finish: EventHandler<()>) -> Element {
    let locale = use_context::<LocaleState>();
    let localizer = locale.localizer();

    rsx! {
        section { class: "results",
            h2 { {localizer.translate("results.heading", "Results")} }
            p { class: "score", "{results.score_line} ({results.percentage}%)" }
            p {
                {localizer.translate("results.duration", "Time taken:")}
                " {results.duration}"
            }
            p {
                {localizer.translate("results.completed", "Completed:")}
                " {results.completed_at}"
            }

            if results.wrong_answers.is_empty() {
                p { {localizer.translate("results.perfect", "All answers were correct.")} }
            } else {
                h3 { {localizer.translate("results.wrong", "Wrong answers")} }
                for wrong in results.wrong_answers {
                    div { class: "wrong-answer",
                        p { "{wrong.number}. {wrong.question}" }
                        p {
                            {localizer.translate("results.your_answer", "Your answer:")}
                            " {wrong.selected}"
                        }
                        p {
                            {localizer.translate("results.correct_answer", "Correct answer:")}
                            " {wrong.correct}"
                        }
                        if let Some(explanation) = wrong.explanation {
                            p { class: "explanation", "{explanation}" }
                        }
                    }
                }
            }

            button {
                class: "finish",
                disabled: submitting,
                onclick: move |_| on_finish.call(()),
                {localizer.translate("results.finish", "Finish")}
            }
        }
    }
}
