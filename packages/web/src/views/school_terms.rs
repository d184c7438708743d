use api::Remote;
use dioxus::prelude::*;
use store::school::accept_terms;
use ui::alert::alert;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaCircleCheck, FaCircleExclamation, FaFileLines, FaShieldHalved, FaUsers};
use ui::Icon;

use super::guard::use_signed_in_user;
use crate::Route;

const TERMS: [(&str, &str); 7] = [
    (
        "1. Platform Partnership",
        "By joining Matrícula USA, your institution agrees to participate in our international student recruitment platform. We provide technology infrastructure to connect qualified international students with your academic programs.",
    ),
    (
        "2. Scholarship Management",
        "Universities can create and manage scholarship opportunities through our platform. All scholarship information must be accurate and current. Universities are responsible for honoring published scholarship commitments.",
    ),
    (
        "3. Student Data Protection",
        "Student information shared through our platform is confidential. Universities must comply with applicable privacy laws and use student data solely for admissions and scholarship evaluation purposes.",
    ),
    (
        "4. Quality Standards",
        "Partner universities must maintain accreditation and meet our quality standards. We reserve the right to review and approve university profiles before they become publicly visible.",
    ),
    (
        "5. Platform Fees",
        "Universities may be subject to platform fees based on successful student placements. Fee structures will be communicated separately and agreed upon in writing.",
    ),
    (
        "6. Intellectual Property",
        "Universities retain ownership of their institutional information and logos. Matrícula USA retains ownership of platform technology and student matching algorithms.",
    ),
    (
        "7. Termination",
        "Either party may terminate this agreement with 30 days written notice. Upon termination, universities will no longer appear on the platform, but existing student commitments must be honored.",
    ),
];

/// Partnership terms a school accepts before setting up its profile.
#[component]
pub fn SchoolTerms() -> Element {
    let user = use_signed_in_user();
    let nav = use_navigator();
    let mut accepted = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_accept = move |_| {
        let Some(user) = user.clone() else {
            return;
        };
        spawn(async move {
            loading.set(true);
            match accept_terms(&Remote, &user.id, accepted()).await {
                Ok(landing) => {
                    nav.push(landing.path());
                }
                Err(e) => {
                    tracing::error!("Error accepting terms: {}", e);
                    alert("Error accepting terms. Please try again.");
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "container narrow page-padding",
            div { class: "centered",
                span { class: "pill",
                    Icon { icon: FaFileLines, width: 14, height: 14 }
                    " Partnership Agreement"
                }
                h1 { "Terms and Conditions" }
                p { class: "lead",
                    "Please review and accept our terms to become a partner university on Matrícula USA platform."
                }
            }

            div { class: "card card-body",
                h2 { class: "row",
                    Icon { icon: FaShieldHalved, width: 18, height: 18 }
                    " University Partnership Agreement"
                }
                div { class: "terms-scroll",
                    for (title, text) in TERMS {
                        div { class: "terms-section",
                            h3 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                }
            }

            div { class: "card card-body",
                label { class: "checkbox-row", "for": "terms-acceptance",
                    input {
                        id: "terms-acceptance",
                        r#type: "checkbox",
                        checked: accepted(),
                        onchange: move |evt: FormEvent| accepted.set(evt.checked()),
                    }
                    span {
                        "I have read and agree to the Terms and Conditions. I confirm that I am authorized to bind my institution to this agreement and that all information provided will be accurate and up-to-date."
                    }
                }

                ul { class: "benefits",
                    li {
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        " Access to qualified international students"
                    }
                    li {
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        " Secure platform and data protection"
                    }
                    li {
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                        " AI-powered student matching"
                    }
                }

                div { class: "button-row",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !accepted() || loading(),
                        onclick: handle_accept,
                        if loading() {
                            "Processing..."
                        } else {
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                            " Accept and Continue"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "Cancel"
                    }
                }

                if !accepted() {
                    p { class: "hint row",
                        Icon { icon: FaCircleExclamation, width: 12, height: 12 }
                        " Please read and accept the terms to continue with your university registration."
                    }
                }
            }
        }
    }
}
