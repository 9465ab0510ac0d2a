use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);

    rsx! {
        main { class: "gate-page",
            form {
                class: "gate-card",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let auth = ctx.auth();
                    let nav = navigator;
                    let mut error = error;
                    let (name, email, password) = (name(), email(), password());
                    spawn(async move {
                        match auth.sign_in(&name, &email, &password).await {
                            Ok(_) => {
                                error.set(None);
                                let _ = nav.replace(Route::Home {});
                            }
                            Err(err) => error.set(Some(ViewError::from_auth(&err))),
                        }
                    });
                },
                h1 { class: "gate-title", "Student Login" }
                input {
                    class: "gate-input",
                    r#type: "text",
                    placeholder: "Full Name (optional)",
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "gate-input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "gate-input",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password()}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(err) = error() {
                    div { class: "error-line", "{err.message()}" }
                }
                button { class: "btn btn-primary gate-submit", r#type: "submit", "Login" }
                p { class: "gate-footer",
                    "New here? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Register {});
                        },
                        "Register here"
                    }
                }
            }
        }
    }
}
