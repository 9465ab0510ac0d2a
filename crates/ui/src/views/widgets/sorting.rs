use std::collections::HashMap;

use dioxus::prelude::*;

use academy_core::model::SortingActivity;

/// Drag-and-drop classifier: cards below, buckets above. A shared
/// "currently dragged" signal stands in for the browser's dataTransfer.
#[component]
pub fn SortingWidget(activity: SortingActivity) -> Element {
    let mut placements = use_signal(HashMap::<String, String>::new);
    let mut dragging = use_signal(|| None::<String>);
    let mut feedback = use_signal(|| None::<String>);

    let graded = activity.is_graded();
    let placed = placements();
    // catalog order keeps cards from shuffling between renders
    let placed_cards: Vec<(String, String)> = activity
        .items()
        .iter()
        .filter_map(|item| {
            placed
                .get(item.label())
                .map(|bucket| (item.label().to_owned(), bucket.clone()))
        })
        .collect();
    let unplaced: Vec<String> = activity
        .items()
        .iter()
        .map(|item| item.label().to_owned())
        .filter(|label| !placed.contains_key(label))
        .collect();

    let activity_for_check = activity.clone();
    let activity_for_reveal = activity.clone();

    rsx! {
        div { class: "sorting",
            p { class: "section-intro", "{activity.prompt()}" }
            div { class: "bucket-row",
                for bucket in activity.buckets().iter() {
                    {
                        let bucket_id = bucket.id().to_owned();
                        rsx! {
                            div {
                                key: "{bucket.id()}",
                                class: "bucket",
                                ondragover: move |evt| evt.prevent_default(),
                                ondrop: move |_| {
                                    if let Some(item) = dragging() {
                                        placements.write().insert(item, bucket_id.clone());
                                        dragging.set(None);
                                        feedback.set(None);
                                    }
                                },
                                h4 { class: "bucket-label", "{bucket.label()}" }
                                if let Some(description) = bucket.description() {
                                    p { class: "muted", "{description}" }
                                }
                                if let Some(example) = bucket.example() {
                                    p { class: "bucket-example", "e.g. {example}" }
                                }
                                div { class: "bucket-items",
                                    for (item, _) in placed_cards.iter().filter(|(_, b)| b.as_str() == bucket.id()) {
                                        {
                                            let label = item.clone();
                                            rsx! {
                                                div { key: "{item}", class: "sort-card sort-card--placed",
                                                    span { "{item}" }
                                                    button {
                                                        class: "sort-remove",
                                                        r#type: "button",
                                                        onclick: move |_| {
                                                            placements.write().remove(&label);
                                                            feedback.set(None);
                                                        },
                                                        "×"
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
            div { class: "sort-pool",
                for item in unplaced.iter() {
                    {
                        let label = item.clone();
                        rsx! {
                            div {
                                key: "{item}",
                                class: "sort-card",
                                draggable: true,
                                ondragstart: move |_| dragging.set(Some(label.clone())),
                                "{item}"
                            }
                        }
                    }
                }
            }
            div { class: "sort-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let outcome = activity_for_check.check(&placements());
                        feedback.set(Some(activity_for_check.feedback(outcome)));
                    },
                    if graded { "Check Answers" } else { "Submit" }
                }
                if graded {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            placements.set(activity_for_reveal.solution());
                            feedback.set(Some("Here's the correct classification!".to_owned()));
                        },
                        "Show Answers"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        placements.set(HashMap::new());
                        feedback.set(None);
                    },
                    "Reset"
                }
            }
            if let Some(line) = feedback() {
                div { class: "feedback-line", "{line}" }
            }
        }
    }
}
