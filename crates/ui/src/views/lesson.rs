use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use academy_core::model::{
    ChecklistStep, InfoCard, LessonKey, Quote, ResponseField, ScenarioChoice, SectionBody, Story,
};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::widgets::{
    GanttWidget, MindMapWidget, QuizWidget, RiskMatrixWidget, RiskRegisterWidget, SortingWidget,
};
use crate::views::{RequireStudent, ViewError, ViewState, view_state_from_resource};
use crate::vm::LessonVm;

#[component]
pub fn LessonView(week: u8, lesson: u8) -> Element {
    rsx! {
        RequireStudent {
            LessonPage { week, lesson }
        }
    }
}

#[component]
fn LessonPage(week: u8, lesson: u8) -> Element {
    let ctx = use_context::<AppContext>();

    let Ok(key) = LessonKey::new(week, lesson) else {
        return rsx! {
            MissingLesson {}
        };
    };
    let catalog = ctx.catalog();
    let Some(lesson) = catalog.lesson(key) else {
        return rsx! {
            MissingLesson {}
        };
    };

    // Keyed so navigating between lessons remounts the body with fresh
    // section and widget state.
    rsx! {
        LessonBody { key: "{key}", lesson_key: key, lesson: lesson.clone() }
    }
}

#[component]
fn LessonBody(lesson_key: LessonKey, lesson: academy_core::model::Lesson) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let key = lesson_key;

    let vm = LessonVm::new(lesson);
    let mut active = use_signal(|| vm.first_section());

    // The risk matrix and register sections edit one shared list, like
    // the original's page-level state.
    use_context_provider(|| Signal::new(academy_core::model::RiskRegister::seeded()));

    // Opening a locked lesson by URL bounces back to the course list.
    let progress_for_gate = ctx.progress();
    let gate = use_resource(move || {
        let progress = progress_for_gate.clone();
        async move {
            let tracker = progress.tracker().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(tracker.is_lesson_unlocked(key))
        }
    });

    let progress_for_percent = ctx.progress();
    let percent = use_resource(move || {
        let progress = progress_for_percent.clone();
        async move {
            progress
                .section_percent(key)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    match view_state_from_resource(&gate) {
        ViewState::Idle | ViewState::Loading => {
            return rsx! {
                div { class: "page",
                    p { class: "muted", "Loading lesson..." }
                }
            };
        }
        ViewState::Error(err) => {
            return rsx! {
                div { class: "page",
                    p { class: "error-line", "{err.message()}" }
                }
            };
        }
        ViewState::Ready(false) => {
            let _ = navigator.replace(Route::Courses {});
            return rsx! {};
        }
        ViewState::Ready(true) => {}
    }

    let percent_value = match view_state_from_resource(&percent) {
        ViewState::Ready(value) => value,
        _ => 0,
    };

    let Some(section) = vm.lesson().section(&active()).cloned() else {
        return rsx! {
            MissingLesson {}
        };
    };
    let next_section = vm.next_after(&active());
    let pass_percent = vm.pass_percent();

    // "Next" marks the departed section visited, then advances.
    let ctx_for_next = ctx.clone();
    let next_for_advance = next_section.clone();
    let advance = move |_| {
        let Some(next) = next_for_advance.clone() else {
            return;
        };
        let progress = ctx_for_next.progress();
        let current = active();
        let mut percent = percent;
        let mut active = active;
        spawn(async move {
            let _ = progress.visit_section(key, &current).await;
            percent.restart();
            active.set(next);
        });
    };

    // Quiz submissions feed the progress record on quiz-gated lessons.
    let ctx_for_quiz = ctx.clone();
    let on_quiz = move |grade: academy_core::model::QuizGrade| {
        let progress = ctx_for_quiz.progress();
        let mut percent = percent;
        spawn(async move {
            let _ = progress.record_quiz(key, grade).await;
            percent.restart();
        });
    };

    rsx! {
        div { class: "page lesson-page",
            div { class: "lesson-columns",
                aside { class: "lesson-sidebar",
                    for entry in vm.lesson().sections().iter() {
                        {
                            let id = entry.id().clone();
                            let is_active = *entry.id() == active();
                            rsx! {
                                button {
                                    key: "{entry.id()}",
                                    class: if is_active { "section-tab section-tab--active" } else { "section-tab" },
                                    r#type: "button",
                                    onclick: move |_| active.set(id.clone()),
                                    "{entry.label()}"
                                }
                            }
                        }
                    }
                }
                section { class: "lesson-main",
                    div { class: "progress-block",
                        div { class: "progress-row",
                            span { class: "progress-label", "Lesson Progress" }
                            span { class: "progress-value", "{percent_value}%" }
                        }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {percent_value}%;" }
                        }
                    }
                    div { class: "lesson-meta",
                        Link { class: "back-link", to: Route::Courses {}, "{vm.back_label()}" }
                        span { "{vm.duration_label()}" }
                        span { "{vm.sections_label()}" }
                        span { "{vm.capstone_label()}" }
                    }
                    h1 { class: "lesson-heading", "{vm.heading()}" }

                    div { class: "section-content", key: "{section.id()}",
                        h2 { class: "section-title", "{section.label()}" }
                        SectionContent {
                            body: section.body().clone(),
                            pass_percent,
                            on_quiz,
                        }
                    }

                    if next_section.is_some() {
                        div { class: "lesson-footer",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: advance,
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MissingLesson() -> Element {
    rsx! {
        div { class: "page",
            p { class: "error-line", "That lesson does not exist." }
            Link { class: "back-link", to: Route::Courses {}, "← Back to Courses" }
        }
    }
}

#[component]
fn SectionContent(
    body: SectionBody,
    pass_percent: Option<u8>,
    on_quiz: EventHandler<academy_core::model::QuizGrade>,
) -> Element {
    match body {
        SectionBody::Reading {
            paragraphs,
            bullets,
            quote,
        } => rsx! {
            ReadingSection { paragraphs, bullets, quote }
        },
        SectionBody::TraitChecklist { prompt, traits } => rsx! {
            TraitChecklistSection { prompt, traits }
        },
        SectionBody::StoryCarousel { stories } => rsx! {
            StoryCarouselSection { stories }
        },
        SectionBody::FreeResponse {
            intro,
            fields,
            feedback,
        } => rsx! {
            FreeResponseSection { intro, fields, feedback }
        },
        SectionBody::Sorting(activity) => rsx! {
            SortingWidget { activity }
        },
        SectionBody::MindsetSlider {
            prompt,
            low_label,
            high_label,
        } => rsx! {
            MindsetSliderSection { prompt, low_label, high_label }
        },
        SectionBody::Scenario { prompt, choices } => rsx! {
            ScenarioSection { prompt, choices }
        },
        SectionBody::InfoCards {
            intro,
            cards,
            followup,
        } => rsx! {
            InfoCardsSection { intro, cards, followup }
        },
        SectionBody::ValidationChecklist { intro, steps } => rsx! {
            ValidationChecklistSection { intro, steps }
        },
        SectionBody::ArchetypeWheel { prompt, archetypes } => rsx! {
            ArchetypeWheelSection { prompt, archetypes }
        },
        SectionBody::MindMap {
            intro,
            instructions,
        } => rsx! {
            p { class: "section-intro", "{intro}" }
            ul { class: "instruction-list",
                for line in instructions.iter() {
                    li { "{line}" }
                }
            }
            MindMapWidget {}
        },
        SectionBody::GanttBuilder => rsx! {
            GanttWidget {}
        },
        SectionBody::RiskMatrix => rsx! {
            RiskMatrixWidget {}
        },
        SectionBody::RiskRegister => rsx! {
            RiskRegisterWidget {}
        },
        SectionBody::Quiz(quiz) => rsx! {
            QuizWidget { quiz, pass_percent, on_submitted: on_quiz }
        },
    }
}

#[component]
fn ReadingSection(
    paragraphs: Vec<String>,
    bullets: Vec<String>,
    quote: Option<Quote>,
) -> Element {
    rsx! {
        for paragraph in paragraphs.iter() {
            p { class: "section-intro", "{paragraph}" }
        }
        if !bullets.is_empty() {
            ul { class: "instruction-list",
                for bullet in bullets.iter() {
                    li { "{bullet}" }
                }
            }
        }
        if let Some(quote) = quote {
            blockquote { class: "pull-quote",
                "\u{201c}{quote.text}\u{201d}"
                footer { "— {quote.attribution}" }
            }
        }
    }
}

#[component]
fn TraitChecklistSection(prompt: String, traits: Vec<String>) -> Element {
    let mut checked = use_signal(|| vec![false; traits.len()]);

    rsx! {
        p { class: "section-intro", "{prompt}" }
        div { class: "trait-grid",
            for (index, name) in traits.iter().enumerate() {
                {
                    let is_checked = checked().get(index).copied().unwrap_or(false);
                    rsx! {
                        label {
                            key: "{name}",
                            class: if is_checked { "trait-item trait-item--checked" } else { "trait-item" },
                            input {
                                r#type: "checkbox",
                                checked: is_checked,
                                onchange: move |_| {
                                    let mut values = checked();
                                    if let Some(slot) = values.get_mut(index) {
                                        *slot = !*slot;
                                    }
                                    checked.set(values);
                                },
                            }
                            span { "{name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StoryCarouselSection(stories: Vec<Story>) -> Element {
    let mut index = use_signal(|| 0_usize);
    let mut reflections = use_signal(|| vec![String::new(); stories.len()]);

    if stories.is_empty() {
        return rsx! {};
    }
    let current = index().min(stories.len() - 1);
    let story = stories[current].clone();
    let last = stories.len() - 1;

    rsx! {
        div { class: "story-card",
            h3 { class: "story-name", "{story.name}" }
            p { "Problem: " span { class: "strong", "{story.problem}" } }
            p { "Solution: " span { class: "strong", "{story.solution}" } }
            textarea {
                class: "text-input",
                placeholder: "What would you do differently?",
                value: "{reflections().get(current).cloned().unwrap_or_default()}",
                oninput: move |evt| {
                    let mut values = reflections();
                    if let Some(slot) = values.get_mut(current) {
                        *slot = evt.value();
                    }
                    reflections.set(values);
                },
            }
        }
        div { class: "carousel-controls",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: current == 0,
                onclick: move |_| index.set(current.saturating_sub(1)),
                "Prev"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: current == last,
                onclick: move |_| index.set((current + 1).min(last)),
                "Next"
            }
        }
    }
}

#[component]
fn FreeResponseSection(intro: String, fields: Vec<ResponseField>, feedback: String) -> Element {
    let mut values = use_signal(|| vec![String::new(); fields.len()]);
    let mut submitted = use_signal(|| false);

    rsx! {
        p { class: "section-intro", "{intro}" }
        div { class: "field-stack",
            for (index, f) in fields.iter().enumerate() {
                div { key: "{f.label}",
                    label { class: "field-label", "{f.label}" }
                    if f.multiline {
                        textarea {
                            class: "text-input",
                            placeholder: "{f.placeholder}",
                            value: "{values().get(index).cloned().unwrap_or_default()}",
                            oninput: move |evt| {
                                let mut inputs = values();
                                if let Some(slot) = inputs.get_mut(index) {
                                    *slot = evt.value();
                                }
                                values.set(inputs);
                            },
                        }
                    } else {
                        input {
                            class: "text-input",
                            r#type: "text",
                            placeholder: "{f.placeholder}",
                            value: "{values().get(index).cloned().unwrap_or_default()}",
                            oninput: move |evt| {
                                let mut inputs = values();
                                if let Some(slot) = inputs.get_mut(index) {
                                    *slot = evt.value();
                                }
                                values.set(inputs);
                            },
                        }
                    }
                }
            }
        }
        button {
            class: "btn btn-primary",
            r#type: "button",
            onclick: move |_| submitted.set(true),
            "Submit"
        }
        if submitted() {
            div { class: "feedback-line", "{feedback}" }
        }
    }
}

#[component]
fn MindsetSliderSection(prompt: String, low_label: String, high_label: String) -> Element {
    let mut value = use_signal(|| 50_i32);

    let reading = if value() < 40 {
        format!("More {low_label}")
    } else if value() > 60 {
        format!("More {high_label}")
    } else {
        "Balanced".to_owned()
    };

    rsx! {
        p { class: "section-intro", "{prompt}" }
        div { class: "slider-row",
            span { "{low_label}" }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: "{value()}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<i32>() {
                        value.set(parsed);
                    }
                },
            }
            span { "{high_label}" }
        }
        p { class: "muted", "{reading}" }
    }
}

#[component]
fn ScenarioSection(prompt: String, choices: Vec<ScenarioChoice>) -> Element {
    let mut picked = use_signal(|| None::<usize>);

    let feedback = picked().and_then(|index| choices.get(index).map(|c| c.feedback.clone()));

    rsx! {
        p { class: "section-intro", "{prompt}" }
        div { class: "choice-grid",
            for (index, choice) in choices.iter().enumerate() {
                button {
                    key: "{choice.label}",
                    class: if picked() == Some(index) { "choice-card choice-card--picked" } else { "choice-card" },
                    r#type: "button",
                    onclick: move |_| picked.set(Some(index)),
                    "{choice.label}"
                }
            }
        }
        if let Some(line) = feedback {
            div { class: "feedback-line", "{line}" }
        }
    }
}

#[component]
fn InfoCardsSection(
    intro: String,
    cards: Vec<InfoCard>,
    followup: Option<ResponseField>,
) -> Element {
    let mut open = use_signal(|| None::<usize>);
    let mut answer = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    rsx! {
        p { class: "section-intro", "{intro}" }
        div { class: "info-grid",
            for (index, card) in cards.iter().enumerate() {
                button {
                    key: "{card.label}",
                    class: if open() == Some(index) { "info-card info-card--open" } else { "info-card" },
                    r#type: "button",
                    onclick: move |_| {
                        open.set(if open() == Some(index) { None } else { Some(index) });
                    },
                    h4 { "{card.label}" }
                    p { class: "info-body", "{card.body}" }
                    if open() == Some(index) {
                        p { class: "muted", "e.g. {card.example}" }
                    }
                }
            }
        }
        if let Some(f) = followup {
            div { class: "field-stack",
                label { class: "field-label", "{f.label}" }
                textarea {
                    class: "text-input",
                    value: "{answer()}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| submitted.set(true),
                    "Submit"
                }
                if submitted() {
                    div { class: "feedback-line", "Good thinking. Keep your choice tied to your brand promise." }
                }
            }
        }
    }
}

#[component]
fn ValidationChecklistSection(intro: String, steps: Vec<ChecklistStep>) -> Element {
    let mut checked = use_signal(|| vec![false; steps.len()]);
    let mut answers = use_signal(|| vec![String::new(); steps.len()]);
    let mut finished = use_signal(|| false);

    let done = checked().iter().filter(|c| **c).count();
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let percent = ((done as f64 / steps.len() as f64) * 100.0).round() as u8;
    let all_checked = done == steps.len();

    rsx! {
        p { class: "section-intro", "{intro}" }
        div { class: "progress-block",
            div { class: "progress-row",
                span { class: "progress-label", "Validation Progress" }
                span { class: "progress-value", "{percent}%" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
        }
        div { class: "field-stack",
            for (index, step) in steps.iter().enumerate() {
                {
                    let is_checked = checked().get(index).copied().unwrap_or(false);
                    rsx! {
                        div {
                            key: "{step.label}",
                            class: if is_checked { "checklist-card checklist-card--done" } else { "checklist-card" },
                            label { class: "trait-item",
                                input {
                                    r#type: "checkbox",
                                    checked: is_checked,
                                    onchange: move |_| {
                                        let mut values = checked();
                                        if let Some(slot) = values.get_mut(index) {
                                            *slot = !*slot;
                                        }
                                        checked.set(values);
                                    },
                                }
                                span { class: "strong", "{step.label}" }
                            }
                            textarea {
                                class: "text-input",
                                placeholder: "{step.prompt}",
                                value: "{answers().get(index).cloned().unwrap_or_default()}",
                                oninput: move |evt| {
                                    let mut values = answers();
                                    if let Some(slot) = values.get_mut(index) {
                                        *slot = evt.value();
                                    }
                                    answers.set(values);
                                },
                            }
                        }
                    }
                }
            }
        }
        button {
            class: "btn btn-primary",
            r#type: "button",
            disabled: !all_checked,
            onclick: move |_| finished.set(true),
            "Finish Validation"
        }
        if finished() {
            div { class: "feedback-line",
                "Great job validating your idea! Remember, validation is an ongoing \
                 process. Keep talking to customers and refining your idea."
            }
        }
    }
}

#[component]
fn ArchetypeWheelSection(prompt: String, archetypes: Vec<String>) -> Element {
    let mut selected = use_signal(|| None::<String>);
    let mut explanation = use_signal(String::new);

    rsx! {
        p { class: "section-intro", "{prompt}" }
        div { class: "choice-grid choice-grid--wide",
            for archetype in archetypes.iter() {
                {
                    let name = archetype.clone();
                    rsx! {
                        button {
                            key: "{archetype}",
                            class: if selected().as_deref() == Some(archetype.as_str()) { "choice-card choice-card--picked" } else { "choice-card" },
                            r#type: "button",
                            onclick: move |_| selected.set(Some(name.clone())),
                            "{archetype}"
                        }
                    }
                }
            }
        }
        if let Some(chosen) = selected() {
            label { class: "field-label", "Explain Your Choice" }
            textarea {
                class: "text-input",
                placeholder: "How does {chosen} fit your chosen company?",
                value: "{explanation()}",
                oninput: move |evt| explanation.set(evt.value()),
            }
        }
    }
}
