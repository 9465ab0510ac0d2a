use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::views::RequireStudent;

#[component]
pub fn DashboardView() -> Element {
    let navigator = use_navigator();

    let cards = [
        (
            "My Courses",
            "Continue your learning journey",
            Route::Courses {},
        ),
        (
            "Resume Checker",
            "Get feedback on your resume",
            Route::Resume {},
        ),
        (
            "Student Verification",
            "Confirm your enrollment details",
            Route::Verification {},
        ),
    ];

    rsx! {
        RequireStudent {
            div { class: "page",
                div { class: "dashboard-hero",
                    h1 { "Welcome back!" }
                    p { class: "muted",
                        "Access your courses, check your resume, and keep your enrollment \
                         up to date."
                    }
                }
                div { class: "dashboard-grid",
                    for (title, blurb, route) in cards {
                        button {
                            class: "dashboard-card",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(route.clone());
                            },
                            h3 { "{title}" }
                            p { class: "muted", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
