use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{
    CoursesView, DashboardView, HomeView, LessonView, LoginView, RegisterView, ResumeView,
    VerificationView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[route("/register", RegisterView)] Register {},
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:week/:lesson", LessonView)] Lesson { week: u8, lesson: u8 },
        #[route("/resume", ResumeView)] Resume {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/verification", VerificationView)] Verification {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    rsx! {
        nav { class: "top-nav",
            Link { class: "brand", to: Route::Home {},
                span { "TS" }
                span { class: "brand-accent", "a" }
            }
            div { class: "nav-links",
                Link { to: Route::Courses {}, "Courses" }
                Link { to: Route::Resume {}, "Resume Checker" }
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
            button {
                class: "nav-logout",
                r#type: "button",
                onclick: move |_| {
                    let auth = ctx.auth();
                    let nav = navigator;
                    spawn(async move {
                        let _ = auth.sign_out().await;
                        let _ = nav.replace(Route::Login {});
                    });
                },
                "Logout"
            }
        }
    }
}
