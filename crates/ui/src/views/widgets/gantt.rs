use chrono::Duration;
use dioxus::prelude::*;

use academy_core::model::GanttPlan;

use crate::vm::{DAY_PX, TaskDraft, bar_geometry, day_labels};

/// Interactive Gantt builder: nudge bars by a day, add and edit tasks.
/// Dependent tasks re-anchor when their prerequisite moves.
#[component]
pub fn GanttWidget() -> Element {
    let mut plan = use_signal(GanttPlan::seeded);
    let mut draft = use_signal(|| None::<TaskDraft>);
    let mut form_error = use_signal(|| None::<String>);
    let mut show_guide = use_signal(|| true);

    let snapshot = plan();
    let range = snapshot.visible_range();
    let labels = day_labels(range);

    rsx! {
        div { class: "gantt",
            if show_guide() {
                div { class: "guide-card",
                    div { class: "guide-header",
                        h4 { "Quick Guide to Gantt Charts" }
                        button {
                            class: "guide-close",
                            r#type: "button",
                            onclick: move |_| show_guide.set(false),
                            "✕"
                        }
                    }
                    ol { class: "instruction-list",
                        li { "Nudge a bar left or right to adjust its start date" }
                        li { "Click \"Add New Task\" to create a new project activity" }
                        li { "Click any task name to view or edit its details" }
                        li {
                            "Tasks with dependencies automatically adjust when you move \
                             their prerequisites"
                        }
                    }
                }
            }
            div { class: "gantt-toolbar",
                h4 { "Interactive Gantt Chart Builder" }
                div {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| show_guide.set(true),
                        "Show Guide"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            form_error.set(None);
                            draft.set(Some(TaskDraft::blank(plan().next_id())));
                        },
                        "Add New Task"
                    }
                }
            }
            div { class: "gantt-chart",
                div { class: "gantt-axis",
                    div { class: "gantt-name-col" }
                    for label in labels.iter() {
                        div { class: "gantt-day", style: "width: {DAY_PX}px;", "{label}" }
                    }
                }
                for task in snapshot.tasks().iter() {
                    {
                        let (offset, width) = bar_geometry(task, range.0);
                        let id_left = task.id().to_owned();
                        let id_right = task.id().to_owned();
                        let edit_task = task.clone();
                        let date_span = format!(
                            "{} - {}",
                            task.start().format("%b %-d"),
                            task.end().format("%b %-d")
                        );
                        rsx! {
                            div { class: "gantt-row", key: "{task.id()}",
                                div { class: "gantt-name-col",
                                    button {
                                        class: "link-button",
                                        r#type: "button",
                                        onclick: move |_| {
                                            form_error.set(None);
                                            draft.set(Some(TaskDraft::from_task(&edit_task)));
                                        },
                                        "{task.name()}"
                                    }
                                    div { class: "muted gantt-dates", "{date_span}" }
                                }
                                div { class: "gantt-track",
                                    div {
                                        class: "gantt-bar",
                                        style: "left: {offset}px; width: {width}px; background: {task.color()};",
                                        button {
                                            class: "gantt-nudge",
                                            r#type: "button",
                                            onclick: move |_| {
                                                let start = plan()
                                                    .task(&id_left)
                                                    .map(|t| t.start() - Duration::days(1));
                                                if let Some(start) = start {
                                                    let _ = plan.write().shift_task(&id_left, start);
                                                }
                                            },
                                            "◀"
                                        }
                                        span { "{task.progress()}%" }
                                        button {
                                            class: "gantt-nudge",
                                            r#type: "button",
                                            onclick: move |_| {
                                                let start = plan()
                                                    .task(&id_right)
                                                    .map(|t| t.start() + Duration::days(1));
                                                if let Some(start) = start {
                                                    let _ = plan.write().shift_task(&id_right, start);
                                                }
                                            },
                                            "▶"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(current) = draft() {
                TaskDialog {
                    draft: current,
                    plan: plan(),
                    error: form_error(),
                    on_change: move |updated| draft.set(Some(updated)),
                    on_cancel: move |_| {
                        draft.set(None);
                        form_error.set(None);
                    },
                    on_save: move |candidate: TaskDraft| {
                        match candidate.to_task() {
                            Ok(task) => match plan.write().upsert(task) {
                                Ok(()) => {
                                    draft.set(None);
                                    form_error.set(None);
                                }
                                Err(err) => form_error.set(Some(err.to_string())),
                            },
                            Err(message) => form_error.set(Some(message)),
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TaskDialog(
    draft: TaskDraft,
    plan: GanttPlan,
    error: Option<String>,
    on_change: EventHandler<TaskDraft>,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<TaskDraft>,
) -> Element {
    let title = if draft.is_new { "Add New Task" } else { "Edit Task" };
    let save_label = if draft.is_new { "Add Task" } else { "Save Changes" };
    let others: Vec<_> = plan
        .tasks()
        .iter()
        .filter(|t| t.id() != draft.id)
        .map(|t| (t.id().to_owned(), t.name().to_owned()))
        .collect();

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_cancel.call(()),
            div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                h3 { "{title}" }
                label { class: "field-label", "Task Name" }
                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{draft.name}",
                    oninput: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.name = evt.value();
                            on_change.call(updated);
                        }
                    },
                }
                label { class: "field-label", "Description" }
                textarea {
                    class: "text-input",
                    value: "{draft.description}",
                    oninput: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.description = evt.value();
                            on_change.call(updated);
                        }
                    },
                }
                div { class: "field-pair",
                    div {
                        label { class: "field-label", "Start Date" }
                        input {
                            class: "text-input",
                            r#type: "date",
                            value: "{draft.start}",
                            oninput: {
                                let draft = draft.clone();
                                move |evt: FormEvent| {
                                    let mut updated = draft.clone();
                                    updated.start = evt.value();
                                    on_change.call(updated);
                                }
                            },
                        }
                    }
                    div {
                        label { class: "field-label", "End Date" }
                        input {
                            class: "text-input",
                            r#type: "date",
                            value: "{draft.end}",
                            oninput: {
                                let draft = draft.clone();
                                move |evt: FormEvent| {
                                    let mut updated = draft.clone();
                                    updated.end = evt.value();
                                    on_change.call(updated);
                                }
                            },
                        }
                    }
                }
                label { class: "field-label", "Progress (%)" }
                input {
                    class: "text-input",
                    r#type: "number",
                    min: "0",
                    max: "100",
                    value: "{draft.progress}",
                    oninput: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.progress = evt.value();
                            on_change.call(updated);
                        }
                    },
                }
                label { class: "field-label", "Task Color" }
                input {
                    class: "text-input",
                    r#type: "color",
                    value: "{draft.color}",
                    oninput: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.color = evt.value();
                            on_change.call(updated);
                        }
                    },
                }
                if !others.is_empty() {
                    label { class: "field-label", "Dependencies" }
                    div { class: "dependency-list",
                        for (id, name) in others.iter() {
                            {
                                let id = id.clone();
                                let selected = draft.dependencies.contains(&id);
                                let draft = draft.clone();
                                rsx! {
                                    button {
                                        key: "{id}",
                                        class: if selected { "choice-card choice-card--picked" } else { "choice-card" },
                                        r#type: "button",
                                        onclick: move |_| {
                                            let mut updated = draft.clone();
                                            updated.toggle_dependency(&id);
                                            on_change.call(updated);
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some(message) = error {
                    p { class: "error-line", "{message}" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: {
                            let draft = draft.clone();
                            move |_| on_save.call(draft.clone())
                        },
                        "{save_label}"
                    }
                }
            }
        }
    }
}
