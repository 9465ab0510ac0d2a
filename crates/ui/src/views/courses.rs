use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{
    RequireStudent, ViewError, ViewState, use_current_student, view_state_from_resource,
};
use crate::vm::{CourseOverviewVm, map_course_overview};

#[component]
pub fn CoursesView() -> Element {
    rsx! {
        RequireStudent {
            CourseList {}
        }
    }
}

#[component]
fn CourseList() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let student = use_current_student();
    let mut open_week = use_signal(|| Some(0_usize));

    let progress_service = ctx.progress();
    let resource = use_resource(move || {
        let progress = progress_service.clone();
        async move {
            let tracker = progress
                .tracker()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_course_overview(&tracker))
        }
    });

    let welcome = match view_state_from_resource(&student) {
        ViewState::Ready(Some(student)) => Some(format!("Welcome, {}!", student.name())),
        _ => None,
    };

    rsx! {
        div { class: "page courses-page",
            if let Some(welcome) = welcome {
                p { class: "courses-welcome", "{welcome}" }
            }
            h1 { class: "view-title", "Course Modules" }
            p { class: "muted",
                "Explore our comprehensive curriculum designed to help you build a \
                 successful entrepreneurial journey. Each week focuses on different \
                 aspects of entrepreneurship."
            }
            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error-line", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(overview) => rsx! {
                    OverallBar { percent: overview.overall_percent }
                    WeekAccordion {
                        overview: overview.clone(),
                        open_week: open_week(),
                        on_toggle: move |index| {
                            open_week.set(if open_week() == Some(index) {
                                None
                            } else {
                                Some(index)
                            });
                        },
                        on_open_lesson: move |key: academy_core::model::LessonKey| {
                            let progress = ctx.progress();
                            let nav = navigator;
                            spawn(async move {
                                // locked lessons are filtered in the UI; a race
                                // here just leaves the lesson un-started
                                let _ = progress.start_lesson(key).await;
                                let _ = nav.push(Route::Lesson {
                                    week: key.week(),
                                    lesson: key.lesson(),
                                });
                            });
                        },
                    }
                },
            }
        }
    }
}

#[component]
fn OverallBar(percent: u8) -> Element {
    rsx! {
        div { class: "progress-block",
            div { class: "progress-row",
                span { class: "progress-label", "Overall Progress" }
                span { class: "progress-value", "{percent}%" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
        }
    }
}

#[component]
fn WeekAccordion(
    overview: CourseOverviewVm,
    open_week: Option<usize>,
    on_toggle: EventHandler<usize>,
    on_open_lesson: EventHandler<academy_core::model::LessonKey>,
) -> Element {
    rsx! {
        div { class: "week-list",
            for (index, week) in overview.weeks.iter().enumerate() {
                div {
                    key: "{week.number}",
                    class: if open_week == Some(index) { "week-card week-card--open" } else { "week-card" },
                    button {
                        class: "week-header",
                        r#type: "button",
                        onclick: move |_| on_toggle.call(index),
                        span { class: "week-title", "Week {week.number}: {week.title}" }
                        span { class: "week-done", "{week.done_label}" }
                    }
                    if open_week == Some(index) {
                        div { class: "week-body",
                            div { class: "progress-row",
                                div { class: "progress-track progress-track--thin",
                                    div {
                                        class: "progress-fill",
                                        style: "width: {week.percent}%;",
                                    }
                                }
                                span { class: "progress-value", "{week.percent}%" }
                                span { class: "muted", "{week.left_label}" }
                            }
                            div { class: "lesson-list",
                                for lesson in week.lessons.iter() {
                                    {
                                        let key = lesson.key;
                                        let accessible = lesson.accessible;
                                        rsx! {
                                            button {
                                                key: "{lesson.key}",
                                                class: if accessible { "lesson-row" } else { "lesson-row lesson-row--locked" },
                                                r#type: "button",
                                                disabled: !accessible,
                                                onclick: move |_| {
                                                    if accessible {
                                                        on_open_lesson.call(key);
                                                    }
                                                },
                                                div { class: "lesson-text",
                                                    div { class: "lesson-title",
                                                        "Lesson {lesson.number}: {lesson.title}"
                                                    }
                                                    div { class: "muted", "{lesson.description}" }
                                                }
                                                span { class: "{lesson.status_class}", "{lesson.status_label}" }
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
}
