//! Login page view with an email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::icons::{FaEnvelope, FaLock};
use ui::{use_auth, use_session, Icon};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Signed-in users (including right after a successful login) go to their dashboard
    use_effect(move || {
        let state = auth();
        if let Some(user) = state.user {
            nav.replace(user.landing().path());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            if let Err(e) = session.login(&email(), &password()).await {
                tracing::error!("Login failed: {}", e);
                error.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { "Welcome Back" }
                p { class: "muted",
                    "Sign in to access your dashboard and continue your educational journey"
                }
                p { class: "small",
                    "Don't have an account? "
                    Link { to: Route::Register {}, class: "accent strong", "Sign up here" }
                }

                form { class: "form", onsubmit: handle_login,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div { class: "field",
                        Label { html_for: "email", "Email Address" }
                        div { class: "input-icon",
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            Input {
                                id: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "Enter your email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                    }

                    div { class: "field",
                        Label { html_for: "password", "Password" }
                        div { class: "input-icon",
                            Icon { icon: FaLock, width: 14, height: 14 }
                            Input {
                                id: "password",
                                r#type: "password",
                                required: true,
                                placeholder: "Enter your password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "full-width",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
