use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::views::{RequireStudent, ViewState, use_current_student, view_state_from_resource};

#[component]
pub fn HomeView() -> Element {
    rsx! {
        RequireStudent {
            Landing {}
        }
    }
}

#[component]
fn Landing() -> Element {
    let navigator = use_navigator();
    let student = use_current_student();

    let greeting = match view_state_from_resource(&student) {
        ViewState::Ready(Some(student)) => Some(student.name().to_owned()),
        _ => None,
    };

    rsx! {
        div { class: "page landing",
            if let Some(name) = greeting {
                p { class: "landing-greeting", "Hello, {name}!" }
            }
            h1 { class: "landing-title",
                span { "TS" }
                span { class: "brand-accent", "a" }
            }
            p { class: "landing-subtitle", "Welcome to The Start Academy" }
            button {
                class: "btn btn-primary landing-cta",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Courses {});
                },
                "Get Started"
            }
        }
    }
}
