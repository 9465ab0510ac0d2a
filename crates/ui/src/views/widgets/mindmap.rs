use dioxus::prelude::*;

use academy_core::model::MindMap;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 400;

/// SVG mind-map canvas: click selects, drag moves, double-click deletes,
/// the input below adds a branch under the selected node.
#[component]
pub fn MindMapWidget() -> Element {
    let mut map = use_signal(|| MindMap::new("My Business Idea").expect("valid root label"));
    let mut new_text = use_signal(String::new);
    let mut dragged = use_signal(|| None::<u64>);

    let snapshot = map();

    rsx! {
        div { class: "mindmap",
            div { class: "mindmap-toolbar",
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Add a new node...",
                    value: "{new_text()}",
                    oninput: move |evt| new_text.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if map.write().add_branch(new_text()).is_ok() {
                            new_text.set(String::new());
                        }
                    },
                    "Add Branch"
                }
            }
            svg {
                class: "mindmap-canvas",
                width: "{CANVAS_WIDTH}",
                height: "{CANVAS_HEIGHT}",
                view_box: "0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}",
                onmousemove: move |evt| {
                    if let Some(id) = dragged() {
                        let point = evt.element_coordinates();
                        let _ = map.write().move_node(id, point.x, point.y);
                    }
                },
                onmouseup: move |_| dragged.set(None),
                onmouseleave: move |_| dragged.set(None),

                // connectors first so nodes draw on top; nodes whose parent
                // was deleted simply have no line
                for node in snapshot.nodes().iter() {
                    if let Some(parent) = node.parent().and_then(|id| snapshot.node(id)) {
                        line {
                            key: "line-{node.id()}",
                            x1: "{parent.x()}",
                            y1: "{parent.y()}",
                            x2: "{node.x()}",
                            y2: "{node.y()}",
                            stroke: "#fb923c",
                            stroke_width: "2",
                            stroke_dasharray: "5,5",
                        }
                    }
                }
                for node in snapshot.nodes().iter() {
                    {
                        let id = node.id();
                        let is_root = node.is_root();
                        let is_selected = snapshot.selected() == id;
                        rsx! {
                            g {
                                key: "{id}",
                                transform: "translate({node.x()},{node.y()})",
                                onmousedown: move |_| {
                                    map.write().select(id);
                                    dragged.set(Some(id));
                                },
                                ondoubleclick: move |_| {
                                    let _ = map.write().remove(id);
                                    dragged.set(None);
                                },
                                circle {
                                    r: if is_root { "38" } else { "28" },
                                    fill: if is_selected { "#fdba74" } else if is_root { "#fb923c" } else { "#ffffff" },
                                    stroke: "#fb923c",
                                    stroke_width: if is_selected { "5" } else { "3" },
                                }
                                text {
                                    text_anchor: "middle",
                                    dy: "0.35em",
                                    class: if is_root { "mindmap-text mindmap-text--root" } else { "mindmap-text" },
                                    "{node.text()}"
                                }
                            }
                        }
                    }
                }
            }
            p { class: "muted",
                "Tip: Click any node to select it, then add branches from it. Double-click \
                 a node to delete it. Drag nodes to rearrange your map."
            }
        }
    }
}
