use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{RequireStudent, ViewError};
use crate::vm::FeedbackVm;

const DIAL_RADIUS: f64 = 45.0;

#[derive(Clone, Debug, PartialEq)]
enum CheckState {
    Idle,
    Checking,
    Done(FeedbackVm),
    Failed(ViewError),
}

#[component]
pub fn ResumeView() -> Element {
    rsx! {
        RequireStudent {
            ResumeChecker {}
        }
    }
}

#[component]
fn ResumeChecker() -> Element {
    let ctx = use_context::<AppContext>();
    let mut resume_text = use_signal(String::new);
    let mut state = use_signal(|| CheckState::Idle);

    let analysis = ctx.analysis();
    let enabled = analysis.enabled();
    let checking = state() == CheckState::Checking;
    let chars = resume_text().chars().count();

    rsx! {
        div { class: "page resume-page",
            h1 { class: "view-title", "AI Resume Checker" }
            p { class: "muted", "Paste your resume and get AI-powered feedback." }

            if !enabled {
                div { class: "error-line", "{ViewError::AnalysisDisabled.message()}" }
            }

            form {
                class: "resume-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let analysis = ctx.analysis();
                    let mut state = state;
                    let text = resume_text();
                    spawn(async move {
                        state.set(CheckState::Checking);
                        match analysis.analyze(&text).await {
                            Ok(feedback) => {
                                state.set(CheckState::Done(FeedbackVm::from_raw(&feedback)));
                            }
                            Err(err) => {
                                state.set(CheckState::Failed(ViewError::from_analysis(&err)));
                            }
                        }
                    });
                },
                label { class: "field-label", "Resume text" }
                textarea {
                    class: "text-input resume-input",
                    placeholder: "Paste the full text of your resume...",
                    value: "{resume_text()}",
                    oninput: move |evt| resume_text.set(evt.value()),
                }
                p { class: "muted", "{chars} characters" }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: checking || !enabled || resume_text().trim().is_empty(),
                    if checking { "Checking..." } else { "Check Resume" }
                }
            }

            match state() {
                CheckState::Idle | CheckState::Checking => rsx! {
                    if checking {
                        p { class: "muted", "Analyzing..." }
                    }
                },
                CheckState::Failed(err) => rsx! {
                    div { class: "error-line", "{err.message()}" }
                },
                CheckState::Done(vm) => rsx! {
                    FeedbackPanel { vm }
                },
            }
        }
    }
}

#[component]
fn FeedbackPanel(vm: FeedbackVm) -> Element {
    let circumference = 2.0 * std::f64::consts::PI * DIAL_RADIUS;
    let offset = vm.dial_offset(circumference);

    rsx! {
        div { class: "feedback-panel",
            h3 { "Resume Feedback" }
            div { class: "feedback-headline",
                if let Some(score) = vm.score {
                    svg { class: "score-dial", view_box: "0 0 100 100",
                        circle {
                            cx: "50",
                            cy: "50",
                            r: "{DIAL_RADIUS}",
                            stroke: "#444444",
                            stroke_width: "10",
                            fill: "none",
                        }
                        circle {
                            cx: "50",
                            cy: "50",
                            r: "{DIAL_RADIUS}",
                            stroke: "#c0c0c0",
                            stroke_width: "10",
                            fill: "none",
                            stroke_dasharray: "{circumference}",
                            stroke_dashoffset: "{offset}",
                            stroke_linecap: "round",
                        }
                        text {
                            x: "50",
                            y: "56",
                            text_anchor: "middle",
                            class: "score-dial-text",
                            "{score}"
                        }
                    }
                }
                div { class: "feedback-summary",
                    h4 { "Summary of Strengths" }
                    div { dangerous_inner_html: "{vm.summary_html}" }
                }
            }
            div { class: "feedback-section",
                h4 { "Areas for Improvement" }
                if vm.improvements.is_empty() {
                    p { class: "muted", "None" }
                } else {
                    for item in vm.improvements.iter() {
                        div { class: "feedback-item", "{item}" }
                    }
                }
            }
            div { class: "feedback-section",
                h4 { "Actionable Feedback" }
                if vm.actions.is_empty() {
                    p { class: "muted", "None" }
                } else {
                    for item in vm.actions.iter() {
                        div { class: "feedback-item", "{item}" }
                    }
                }
            }
            div { class: "feedback-section feedback-section--flags",
                h4 { "Missing Sections / Red Flags" }
                div { dangerous_inner_html: "{vm.red_flags_html}" }
            }
        }
    }
}
