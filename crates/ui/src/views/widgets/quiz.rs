use dioxus::prelude::*;

use academy_core::model::{Quiz, QuizGrade};

use crate::vm::QuizVm;

/// Multiple-choice quiz with submit/retry. `on_submitted` receives the
/// grade so quiz-gated lessons can record it.
#[component]
pub fn QuizWidget(
    quiz: Quiz,
    pass_percent: Option<u8>,
    on_submitted: EventHandler<QuizGrade>,
) -> Element {
    let mut vm = use_signal(|| QuizVm::new(quiz));

    let snapshot = vm();
    let submitted = snapshot.is_submitted();
    let can_submit = snapshot.all_answered() && !submitted;
    let score_line = snapshot
        .grade()
        .map(|grade| format!("Your Score: {}%", grade.percent()));
    let result_line = snapshot.result_line();

    rsx! {
        div { class: "quiz",
            for (q_index, question) in snapshot.questions().iter().enumerate() {
                {
                    let number = q_index + 1;
                    rsx! {
                        div { class: "quiz-question", key: "{q_index}",
                            p { class: "strong", "{number}. {question.prompt()}" }
                            div { class: "choice-grid",
                                for (o_index, option) in question.options().iter().enumerate() {
                                    button {
                                        key: "{option}",
                                        class: if snapshot.answer(q_index) == Some(o_index) { "choice-card choice-card--picked" } else { "choice-card" },
                                        r#type: "button",
                                        disabled: submitted,
                                        onclick: move |_| vm.write().select(q_index, o_index),
                                        "{option}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "quiz-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| {
                        let grade = vm.write().submit();
                        if let Some(grade) = grade {
                            on_submitted.call(grade);
                        }
                    },
                    "Submit Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !submitted,
                    onclick: move |_| vm.write().retry(),
                    "Retry"
                }
            }
            if submitted {
                div { class: "feedback-line",
                    if let Some(score_line) = score_line {
                        p { class: "strong", "{score_line}" }
                    }
                    if let Some(line) = result_line {
                        p { "{line}" }
                    }
                    if let Some(bar) = pass_percent {
                        p { class: "muted", "Score {bar}% or higher to complete this lesson." }
                    }
                }
            }
        }
    }
}
