use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::views::RequireStudent;
use crate::routes::Route;

#[component]
pub fn VerificationView() -> Element {
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    rsx! {
        RequireStudent {
            div { class: "page",
                form {
                    class: "gate-card",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        let nav = navigator;
                        let mut submitting = submitting;
                        spawn(async move {
                            submitting.set(true);
                            // No verification backend exists; the form simply
                            // forwards to the dashboard, as the original did.
                            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                            let _ = nav.replace(Route::Dashboard {});
                        });
                    },
                    h1 { class: "gate-title", "Student Verification" }
                    label { class: "field-label", "Full Name" }
                    input {
                        class: "gate-input",
                        r#type: "text",
                        required: true,
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "field-label", "Gmail Address" }
                    input {
                        class: "gate-input",
                        r#type: "email",
                        required: true,
                        pattern: "[a-z0-9._%+-]+@gmail\\.com$",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    p { class: "field-hint", "Please use your Gmail address" }
                    button {
                        class: "btn btn-primary gate-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Verifying..." } else { "Verify Account" }
                    }
                }
            }
        }
    }
}
