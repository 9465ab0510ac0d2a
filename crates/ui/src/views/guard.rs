use dioxus::prelude::*;
use dioxus_router::use_navigator;

use academy_core::model::Student;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Wraps a protected page: renders `children` only with a signed-in
/// student, otherwise bounces to the login page. The browser original did
/// this with a storage check and `window.location.replace("/login")`.
#[component]
pub fn RequireStudent(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth();

    let resource = use_resource(move || {
        let auth = auth.clone();
        async move {
            auth.current_student()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page",
                p { class: "muted", "Loading..." }
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page",
                p { class: "error-line", "{err.message()}" }
            }
        },
        ViewState::Ready(None) => {
            let _ = navigator.replace(Route::Login {});
            rsx! {}
        }
        ViewState::Ready(Some(_)) => rsx! {
            {children}
        },
    }
}

/// Resource helper for views that need the signed-in student's details.
#[must_use]
pub fn use_current_student() -> Resource<Result<Option<Student>, ViewError>> {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();
    use_resource(move || {
        let auth = auth.clone();
        async move {
            auth.current_student()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    })
}
