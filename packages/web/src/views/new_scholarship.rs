use api::Remote;
use dioxus::prelude::*;
use store::catalog::FIELD_CHOICES;
use store::{Dashboard, Error, Level, ScholarshipDraft, ValidationErrors};
use ui::alert::alert;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label, Textarea};
use ui::icons::FaArrowLeft;
use ui::{use_auth, Icon};

use super::guard::use_signed_in_user;
use crate::Route;

/// One entry per non-blank line.
fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn NewScholarship() -> Element {
    let user = use_signed_in_user();
    let auth = use_auth();
    let nav = use_navigator();
    let mut dashboard = use_signal(|| Option::<Dashboard>::None);
    let mut draft = use_signal(ScholarshipDraft::default);
    let mut requirements = use_signal(String::new);
    let mut eligibility = use_signal(String::new);
    let mut benefits = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || {
        let user = auth().user;
        async move {
            let Some(user) = user else {
                return;
            };
            match Dashboard::load(&Remote, &user.id).await {
                Ok(loaded) => dashboard.set(Some(loaded)),
                Err(e) => tracing::error!("Error loading university: {}", e),
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if user.is_none() {
            return;
        }
        let Some(mut current) = dashboard() else {
            return;
        };
        let mut submission = draft();
        submission.requirements = lines(&requirements());
        submission.eligibility = lines(&eligibility());
        submission.benefits = lines(&benefits());

        spawn(async move {
            saving.set(true);
            errors.set(ValidationErrors::new());
            match current.create_scholarship(&Remote, &submission).await {
                Ok(_) => {
                    dashboard.set(Some(current));
                    nav.push(Route::SchoolDashboard {});
                }
                Err(Error::Validation(found)) => errors.set(found),
                Err(e) => {
                    tracing::error!("Error creating scholarship: {}", e);
                    alert(&e.to_string());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| errors.read().get(key).map(str::to_string);
    let ready = dashboard
        .read()
        .as_ref()
        .map(Dashboard::can_create_scholarships);

    rsx! {
        div { class: "container narrow page-padding",
            Link { to: Route::SchoolDashboard {}, class: "back-link",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                "Back to Dashboard"
            }
            h1 { "New Scholarship" }
            p { class: "muted", "Offer an exclusive scholarship to international students." }

            {match ready {
                None => rsx! {
                    div { class: "centered", div { class: "spinner" } }
                },
                Some(false) => rsx! {
                    div { class: "notice",
                        p { "Complete your university profile before creating scholarships." }
                        Link { to: Route::ProfileSetup {}, class: "dark-button", "Complete Profile" }
                    }
                },
                Some(true) => rsx! {
                    form { class: "form card card-body", onsubmit: handle_submit,
                        div { class: "field",
                            Label { html_for: "title", "Title *" }
                            Input {
                                id: "title",
                                r#type: "text",
                                placeholder: "Excellence in Engineering Scholarship",
                                value: draft.read().title.clone(),
                                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                            }
                            FieldError { message: field_error("title") }
                        }

                        div { class: "field",
                            Label { html_for: "description", "Description" }
                            Textarea {
                                id: "description",
                                rows: 4,
                                placeholder: "Who is this scholarship for?",
                                value: draft.read().description.clone(),
                                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                            }
                        }

                        div { class: "field-row",
                            div { class: "field",
                                Label { html_for: "amount", "Amount (USD) *" }
                                Input {
                                    id: "amount",
                                    r#type: "text",
                                    inputmode: "decimal",
                                    placeholder: "25,000",
                                    value: draft.read().amount.clone(),
                                    oninput: move |evt: FormEvent| draft.write().amount = evt.value(),
                                }
                                FieldError { message: field_error("amount") }
                            }
                            div { class: "field",
                                Label { html_for: "deadline", "Deadline *" }
                                Input {
                                    id: "deadline",
                                    r#type: "date",
                                    value: draft.read().deadline.clone(),
                                    oninput: move |evt: FormEvent| draft.write().deadline = evt.value(),
                                }
                                FieldError { message: field_error("deadline") }
                            }
                        }

                        div { class: "field-row",
                            div { class: "field",
                                Label { html_for: "level", "Level" }
                                select {
                                    id: "level",
                                    "data-component": "select",
                                    onchange: move |evt: FormEvent| draft.write().level = evt.value(),
                                    option { value: "", "Any Level" }
                                    for level in Level::ALL {
                                        option { value: level.as_str(), "{level.label()}" }
                                    }
                                }
                                FieldError { message: field_error("level") }
                            }
                            div { class: "field",
                                Label { html_for: "field-of-study", "Field of Study" }
                                select {
                                    id: "field-of-study",
                                    "data-component": "select",
                                    onchange: move |evt: FormEvent| draft.write().field_of_study = evt.value(),
                                    option { value: "", "Select a field" }
                                    for (_, label) in FIELD_CHOICES {
                                        option { value: label, "{label}" }
                                    }
                                }
                            }
                        }

                        ListField { id: "requirements", label: "Requirements", text: requirements }
                        ListField { id: "eligibility", label: "Eligibility", text: eligibility }
                        ListField { id: "benefits", label: "Benefits", text: benefits }

                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: draft.read().is_exclusive,
                                onchange: move |evt: FormEvent| draft.write().is_exclusive = evt.checked(),
                            }
                            span { "Exclusive to Matrícula USA students" }
                        }
                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: draft.read().is_active,
                                onchange: move |evt: FormEvent| draft.write().is_active = evt.checked(),
                            }
                            span { "Publish immediately" }
                        }

                        div { class: "button-row",
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Creating..." } else { "Create Scholarship" }
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                r#type: "button",
                                onclick: move |_| {
                                    nav.push(Route::SchoolDashboard {});
                                },
                                "Cancel"
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// Multi-line text area whose lines become list entries.
#[component]
fn ListField(id: String, label: String, text: Signal<String>) -> Element {
    let mut text = text;

    rsx! {
        div { class: "field",
            Label { html_for: "{id}", "{label}" }
            Textarea {
                id: "{id}",
                rows: 3,
                placeholder: "One per line",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
        }
    }
}
