//! Registration page view: one form, student or school.

use dioxus::prelude::*;
use store::{RegistrationForm, Role, ValidationErrors};
use ui::components::{Button, ButtonVariant, FieldError, Input, Label};
use ui::icons::{FaBuilding, FaGraduationCap};
use ui::{use_session, Icon};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut role = use_signal(|| Role::Student);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(ValidationErrors::new());

            let form = RegistrationForm {
                name: name(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
                role: role(),
            };

            loading.set(true);
            match session.register(&form).await {
                Ok(user) => {
                    nav.push(user.role.landing_after_registration().path());
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    match e.validation() {
                        Some(errors) => field_errors.set(errors.clone()),
                        None => error.set(Some(e.to_string())),
                    }
                }
            }
            loading.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).map(str::to_string);
    let heading = match role() {
        Role::School => "School Registration",
        _ => "Student Registration",
    };
    let name_placeholder = match role() {
        Role::School => "Your full name",
        _ => "Enter your full name",
    };
    let email_placeholder = match role() {
        Role::School => "Official university email",
        _ => "Enter your email",
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card wide",
                h1 { "Join " span { class: "accent", "Matrícula USA" } }
                p { class: "muted",
                    "Create your account and unlock exclusive scholarship opportunities through our AI-powered platform"
                }
                p { class: "small",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "accent strong", "Sign in here" }
                }

                div { class: "tabs",
                    button {
                        class: if role() == Role::Student { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| role.set(Role::Student),
                        Icon { icon: FaGraduationCap, width: 14, height: 14 }
                        "Student"
                    }
                    button {
                        class: if role() == Role::School { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| role.set(Role::School),
                        Icon { icon: FaBuilding, width: 14, height: 14 }
                        "University"
                    }
                }

                h2 { "{heading}" }

                form { class: "form", onsubmit: handle_register,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div { class: "field",
                        Label { html_for: "name", "Full Name" }
                        Input {
                            id: "name",
                            r#type: "text",
                            placeholder: name_placeholder,
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        FieldError { message: field_error("name") }
                    }

                    div { class: "field",
                        Label { html_for: "email", "Email Address" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: email_placeholder,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FieldError { message: field_error("email") }
                    }

                    div { class: "field-row",
                        div { class: "field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Create a password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            FieldError { message: field_error("password") }
                        }
                        div { class: "field",
                            Label { html_for: "confirmPassword", "Confirm Password" }
                            Input {
                                id: "confirmPassword",
                                r#type: "password",
                                placeholder: "Confirm your password",
                                value: confirm_password(),
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                            FieldError { message: field_error("confirmPassword") }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "full-width",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Creating account..."
                        } else if role() == Role::School {
                            "Create University Account"
                        } else {
                            "Create Student Account"
                        }
                    }
                }
            }
        }
    }
}
