use dioxus::prelude::*;

use academy_core::model::{RISK_CATEGORIES, RiskLevel, RiskRegister, RiskStatus, matrix_cell};

use crate::vm::RiskDraft;

fn level_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "risk-level risk-level--high",
        RiskLevel::Medium => "risk-level risk-level--medium",
        RiskLevel::Low => "risk-level risk-level--low",
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_label(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as u32)
}

/// The 5×5 probability/impact matrix plus the add-risk form. Clicking a
/// cell loads its probability and impact into the form.
#[component]
pub fn RiskMatrixWidget() -> Element {
    let mut draft = use_signal(RiskDraft::blank);
    let mut register = use_context::<Signal<RiskRegister>>();
    let mut form_error = use_signal(|| None::<String>);
    let mut show_guide = use_signal(|| true);

    let current = draft();
    let level = RiskLevel::from_scores(current.probability, current.impact);
    let level_chip = format!("{} Risk", level.label());
    let prob_label = percent_label(current.probability);
    let impact_label = percent_label(current.impact);

    rsx! {
        div { class: "risk-matrix",
            if show_guide() {
                div { class: "guide-card",
                    div { class: "guide-header",
                        h4 { "Understanding Risk Assessment" }
                        button {
                            class: "guide-close",
                            r#type: "button",
                            onclick: move |_| show_guide.set(false),
                            "✕"
                        }
                    }
                    ol { class: "instruction-list",
                        li { "Click a cell in the matrix to set probability and impact" }
                        li { "Green cells indicate low-risk items" }
                        li { "Yellow cells represent medium-risk items" }
                        li { "Red cells show high-risk items that need immediate attention" }
                    }
                }
            }
            div { class: "matrix-grid",
                for row in 0..5_u8 {
                    for col in 0..5_u8 {
                        {
                            let (probability, impact) = matrix_cell(row, col);
                            let cell_level = RiskLevel::from_scores(probability, impact);
                            let cell_class = format!("matrix-cell {}", level_class(cell_level));
                            let cell_label = cell_level.label();
                            rsx! {
                                button {
                                    key: "{row}-{col}",
                                    class: "{cell_class}",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let mut updated = draft();
                                        updated.probability = probability;
                                        updated.impact = impact;
                                        draft.set(updated);
                                    },
                                    "{cell_label}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "matrix-legend",
                span { class: "muted", "Low Probability → High Probability" }
                span { class: "muted", "High Impact ↑ / Low Impact ↓" }
            }

            div { class: "risk-form",
                h4 { "Add New Risk" }
                label { class: "field-label", "Risk Name" }
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "e.g., Technical Debt",
                    value: "{current.name}",
                    oninput: move |evt| {
                        let mut updated = draft();
                        updated.name = evt.value();
                        draft.set(updated);
                    },
                }
                label { class: "field-label", "Description" }
                textarea {
                    class: "text-input",
                    placeholder: "Describe the risk and its potential impact...",
                    value: "{current.description}",
                    oninput: move |evt| {
                        let mut updated = draft();
                        updated.description = evt.value();
                        draft.set(updated);
                    },
                }
                label { class: "field-label", "Category" }
                select {
                    class: "text-input",
                    value: "{current.category}",
                    onchange: move |evt| {
                        let mut updated = draft();
                        updated.category = evt.value();
                        draft.set(updated);
                    },
                    for category in RISK_CATEGORIES {
                        option { value: "{category}", "{category}" }
                    }
                }
                div { class: "field-pair",
                    div {
                        label { class: "field-label", "Probability {prob_label}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.1",
                            value: "{current.probability}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<f64>() {
                                    let mut updated = draft();
                                    updated.probability = value;
                                    draft.set(updated);
                                }
                            },
                        }
                    }
                    div {
                        label { class: "field-label", "Impact {impact_label}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.1",
                            value: "{current.impact}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<f64>() {
                                    let mut updated = draft();
                                    updated.impact = value;
                                    draft.set(updated);
                                }
                            },
                        }
                    }
                }
                div { class: "{level_class(level)}", "{level_chip}" }
                label { class: "field-label", "Mitigation Strategy" }
                textarea {
                    class: "text-input",
                    value: "{current.mitigation}",
                    oninput: move |evt| {
                        let mut updated = draft();
                        updated.mitigation = evt.value();
                        draft.set(updated);
                    },
                }
                if let Some(message) = form_error() {
                    p { class: "error-line", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let id = register().next_id();
                        match draft().to_entry(&id) {
                            Ok(entry) => {
                                register.write().add(entry);
                                draft.set(RiskDraft::blank());
                                form_error.set(None);
                            }
                            Err(message) => form_error.set(Some(message)),
                        }
                    },
                    "Add Risk"
                }
            }
        }
    }
}

/// The risk register table with inline status changes and an edit dialog.
#[component]
pub fn RiskRegisterWidget() -> Element {
    let mut register = use_context::<Signal<RiskRegister>>();
    let mut editing = use_signal(|| None::<RiskDraft>);
    let mut form_error = use_signal(|| None::<String>);

    let snapshot = register();

    rsx! {
        div { class: "risk-register",
            h4 { "Risk Register" }
            table { class: "register-table",
                thead {
                    tr {
                        th { "Risk" }
                        th { "Category" }
                        th { "Probability" }
                        th { "Impact" }
                        th { "Risk Level" }
                        th { "Status" }
                        th { "Mitigation" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for risk in snapshot.risks().iter() {
                        {
                            let id = risk.id().to_owned();
                            let edit_entry = risk.clone();
                            let prob = percent_label(risk.probability());
                            let impact = percent_label(risk.impact());
                            let level = risk.level();
                            let level_cls = level_class(level);
                            rsx! {
                                tr { key: "{risk.id()}",
                                    td {
                                        div { class: "strong", "{risk.name()}" }
                                        div { class: "muted", "{risk.description()}" }
                                    }
                                    td { "{risk.category()}" }
                                    td { "{prob}" }
                                    td { "{impact}" }
                                    td {
                                        span { class: "{level_cls}", "{level.label()}" }
                                    }
                                    td {
                                        select {
                                            class: "text-input",
                                            value: "{risk.status().label()}",
                                            onchange: move |evt| {
                                                if let Ok(status) = evt.value().parse::<RiskStatus>() {
                                                    let _ = register.write().set_status(&id, status);
                                                }
                                            },
                                            for status in RiskStatus::all() {
                                                option { value: "{status.label()}", "{status.label()}" }
                                            }
                                        }
                                    }
                                    td { "{risk.mitigation()}" }
                                    td {
                                        button {
                                            class: "link-button",
                                            r#type: "button",
                                            onclick: move |_| {
                                                form_error.set(None);
                                                editing.set(Some(RiskDraft::from_entry(&edit_entry)));
                                            },
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(current) = editing() {
                RiskEditDialog {
                    draft: current,
                    error: form_error(),
                    on_change: move |updated| editing.set(Some(updated)),
                    on_cancel: move |_| {
                        editing.set(None);
                        form_error.set(None);
                    },
                    on_save: move |candidate: RiskDraft| {
                        match candidate.to_entry(&candidate.id) {
                            Ok(entry) => match register.write().update(entry) {
                                Ok(()) => {
                                    editing.set(None);
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
fn RiskEditDialog(
    draft: RiskDraft,
    error: Option<String>,
    on_change: EventHandler<RiskDraft>,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<RiskDraft>,
) -> Element {
    let prob_label = percent_label(draft.probability);
    let impact_label = percent_label(draft.impact);

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_cancel.call(()),
            div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                h3 { "Edit Risk" }
                label { class: "field-label", "Risk Name" }
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
                label { class: "field-label", "Category" }
                select {
                    class: "text-input",
                    value: "{draft.category}",
                    onchange: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.category = evt.value();
                            on_change.call(updated);
                        }
                    },
                    for category in RISK_CATEGORIES {
                        option { value: "{category}", "{category}" }
                    }
                }
                div { class: "field-pair",
                    div {
                        label { class: "field-label", "Probability {prob_label}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.1",
                            value: "{draft.probability}",
                            oninput: {
                                let draft = draft.clone();
                                move |evt: FormEvent| {
                                    if let Ok(value) = evt.value().parse::<f64>() {
                                        let mut updated = draft.clone();
                                        updated.probability = value;
                                        on_change.call(updated);
                                    }
                                }
                            },
                        }
                    }
                    div {
                        label { class: "field-label", "Impact {impact_label}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.1",
                            value: "{draft.impact}",
                            oninput: {
                                let draft = draft.clone();
                                move |evt: FormEvent| {
                                    if let Ok(value) = evt.value().parse::<f64>() {
                                        let mut updated = draft.clone();
                                        updated.impact = value;
                                        on_change.call(updated);
                                    }
                                }
                            },
                        }
                    }
                }
                label { class: "field-label", "Status" }
                select {
                    class: "text-input",
                    value: "{draft.status.label()}",
                    onchange: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            if let Ok(status) = evt.value().parse::<RiskStatus>() {
                                let mut updated = draft.clone();
                                updated.status = status;
                                on_change.call(updated);
                            }
                        }
                    },
                    for status in RiskStatus::all() {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
                label { class: "field-label", "Mitigation Strategy" }
                textarea {
                    class: "text-input",
                    value: "{draft.mitigation}",
                    oninput: {
                        let draft = draft.clone();
                        move |evt: FormEvent| {
                            let mut updated = draft.clone();
                            updated.mitigation = evt.value();
                            on_change.call(updated);
                        }
                    },
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
                        "Save Changes"
                    }
                }
            }
        }
    }
}
