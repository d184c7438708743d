//! Four-step university profile wizard.

use api::Remote;
use dioxus::prelude::*;
use store::school::{profile_setup_redirect, save_profile};
use store::{Field, ProfileWizard, RecordStore, WizardStep};
use ui::alert::alert;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label, Textarea};
use ui::icons::{FaBuilding, FaCircleCheck, FaGraduationCap, FaLocationDot, FaPhone, FaPlus, FaXmark};
use ui::Icon;

use super::guard::use_signed_in_user;

#[component]
pub fn ProfileSetup() -> Element {
    let user = use_signed_in_user();
    let auth = ui::use_auth();
    let nav = use_navigator();
    let mut wizard = use_signal(ProfileWizard::new);
    let mut new_program = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let university = use_resource(move || {
        let user = auth().user;
        async move {
            match user {
                Some(user) => Remote.university_for_user(&user.id).await,
                None => Ok(None),
            }
        }
    });

    // Finished profiles go to the dashboard, schools without accepted terms go back to them
    use_effect(move || {
        if let Some(Ok(found)) = &*university.read() {
            if let Some(landing) = profile_setup_redirect(found.as_ref()) {
                nav.replace(landing.path());
            }
        }
    });

    let mut add_program = move || {
        if wizard.write().add_program(&new_program()) {
            new_program.set(String::new());
        }
    };

    let handle_submit = move |_| {
        let Some(user) = user.clone() else {
            return;
        };
        // Blank fields are flagged inline by `submission`.
        let Ok(update) = wizard.write().submission() else {
            return;
        };
        spawn(async move {
            saving.set(true);
            match save_profile(&Remote, &user.id, &update).await {
                Ok(landing) => {
                    nav.push(landing.path());
                }
                Err(e) => {
                    tracing::error!("Error saving profile: {}", e);
                    alert("Error saving profile. Please try again.");
                }
            }
            saving.set(false);
        });
    };

    let step = wizard.read().step;

    rsx! {
        div { class: "container narrow page-padding",
            div { class: "centered",
                h1 { "Complete Your University Profile" }
                p { class: "muted",
                    "Set up your university profile to start attracting international students"
                }
            }

            ol { class: "wizard-progress",
                for candidate in WizardStep::ALL {
                    li {
                        class: if candidate == step {
                            "wizard-step active"
                        } else if candidate.number() < step.number() {
                            "wizard-step done"
                        } else {
                            "wizard-step"
                        },
                        span { class: "wizard-dot",
                            if candidate.number() < step.number() {
                                Icon { icon: FaCircleCheck, width: 16, height: 16 }
                            } else {
                                {step_icon(candidate)}
                            }
                        }
                        span { class: "small", "{candidate.title()}" }
                    }
                }
            }

            div { class: "card card-body",
                {match step {
                    WizardStep::BasicInfo => rsx! {
                        StepHeading { title: "Basic Information", subtitle: "Tell us about your university" }
                        WizardInput { wizard: wizard, field: Field::Name, label: "University Name *", placeholder: "Enter university name" }
                        div { class: "field",
                            Label { html_for: "description", "Description *" }
                            Textarea {
                                id: "description",
                                rows: 4,
                                placeholder: "Describe your university",
                                value: wizard.read().form.description.clone(),
                                oninput: move |evt: FormEvent| wizard.write().set(Field::Description, evt.value()),
                            }
                            FieldError { message: wizard.read().error(Field::Description).map(str::to_string) }
                        }
                        WizardInput { wizard: wizard, field: Field::Website, label: "Website *", placeholder: "https://university.edu", input_type: "url" }
                    },
                    WizardStep::Location => rsx! {
                        StepHeading { title: "Location Information", subtitle: "Where is your university located?" }
                        WizardInput { wizard: wizard, field: Field::Location, label: "Location (City, State) *", placeholder: "Boston, Massachusetts" }
                        WizardInput { wizard: wizard, field: Field::Street, label: "Street Address *", placeholder: "123 University Avenue" }
                        div { class: "field-row",
                            WizardInput { wizard: wizard, field: Field::City, label: "City *", placeholder: "Boston" }
                            WizardInput { wizard: wizard, field: Field::State, label: "State *", placeholder: "Massachusetts" }
                        }
                        div { class: "field-row",
                            WizardInput { wizard: wizard, field: Field::ZipCode, label: "ZIP Code *", placeholder: "02139" }
                            WizardInput { wizard: wizard, field: Field::Country, label: "Country", placeholder: "United States" }
                        }
                    },
                    WizardStep::Contact => rsx! {
                        StepHeading { title: "Contact Information", subtitle: "How can students reach your university?" }
                        div { class: "field-row",
                            WizardInput { wizard: wizard, field: Field::Phone, label: "Phone Number *", placeholder: "+1 (555) 123-4567", input_type: "tel" }
                            WizardInput { wizard: wizard, field: Field::Fax, label: "Fax Number", placeholder: "+1 (555) 123-4568", input_type: "tel" }
                        }
                        WizardInput { wizard: wizard, field: Field::Email, label: "General Email *", placeholder: "info@university.edu", input_type: "email" }
                        WizardInput { wizard: wizard, field: Field::AdmissionsEmail, label: "Admissions Email *", placeholder: "admissions@university.edu", input_type: "email" }
                    },
                    WizardStep::Academic => rsx! {
                        StepHeading { title: "Academic Information", subtitle: "Tell us about your academic programs" }
                        div { class: "field",
                            Label { html_for: "program", "Academic Programs *" }
                            div { class: "inline-form",
                                input {
                                    "data-component": "input",
                                    id: "program",
                                    r#type: "text",
                                    placeholder: "Enter program name",
                                    value: new_program(),
                                    oninput: move |evt: FormEvent| new_program.set(evt.value()),
                                    onkeydown: move |evt: KeyboardEvent| {
                                        if evt.key() == Key::Enter {
                                            evt.prevent_default();
                                            add_program();
                                        }
                                    },
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| add_program(),
                                    Icon { icon: FaPlus, width: 12, height: 12 }
                                    " Add"
                                }
                            }
                            ul { class: "chip-list",
                                for (index, program) in wizard.read().form.programs.iter().enumerate() {
                                    li { class: "chip", key: "{program}",
                                        "{program}"
                                        button {
                                            class: "chip-remove",
                                            r#type: "button",
                                            onclick: move |_| wizard.write().remove_program(index),
                                            Icon { icon: FaXmark, width: 10, height: 10 }
                                        }
                                    }
                                }
                            }
                            FieldError { message: wizard.read().error(Field::Programs).map(str::to_string) }
                        }
                    },
                }}
            }

            div { class: "wizard-nav",
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: step.is_first(),
                    onclick: move |_| wizard.write().previous(),
                    "Previous"
                }
                span { class: "muted small", "Step {step.number()} of {WizardStep::ALL.len()}" }
                if step.is_last() {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving(),
                        onclick: handle_submit,
                        if saving() { "Saving..." } else { "Complete Setup" }
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            wizard.write().next();
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

fn step_icon(step: WizardStep) -> Element {
    match step {
        WizardStep::BasicInfo => rsx! { Icon { icon: FaBuilding, width: 16, height: 16 } },
        WizardStep::Location => rsx! { Icon { icon: FaLocationDot, width: 16, height: 16 } },
        WizardStep::Contact => rsx! { Icon { icon: FaPhone, width: 16, height: 16 } },
        WizardStep::Academic => rsx! { Icon { icon: FaGraduationCap, width: 16, height: 16 } },
    }
}

#[component]
fn StepHeading(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "centered step-heading",
            h2 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }
    }
}

/// One labelled text field of the wizard with its inline error.
#[component]
fn WizardInput(
    wizard: Signal<ProfileWizard>,
    field: Field,
    label: String,
    placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let key = field.key();

    rsx! {
        div { class: "field",
            Label { html_for: "{key}", "{label}" }
            Input {
                id: key,
                r#type: input_type,
                placeholder: placeholder,
                value: wizard.read().form.value(field).to_string(),
                oninput: move |evt: FormEvent| wizard.write().set(field, evt.value()),
            }
            FieldError { message: wizard.read().error(field).map(str::to_string) }
        }
    }
}
