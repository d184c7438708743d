use dioxus::prelude::*;
use store::catalog::{schools, states, SchoolFilter};
use ui::components::Input;
use ui::icons::FaMagnifyingGlass;
use ui::{Icon, SchoolCard};

use crate::Route;

#[component]
pub fn Universities() -> Element {
    let mut filter = use_signal(SchoolFilter::default);
    let state_options = use_hook(|| states(schools()));

    let visible: Vec<_> = filter.read().apply(schools()).into_iter().cloned().collect();

    rsx! {
        section { class: "page-hero",
            div { class: "container centered",
                h1 { "Partner " span { class: "accent", "Universities" } }
                p { class: "lead",
                    "Discover world-class institutions offering exceptional education and scholarship opportunities."
                }
            }
        }

        div { class: "container",
            div { class: "filter-bar",
                div { class: "input-icon grow",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    Input {
                        r#type: "text",
                        placeholder: "Search universities...",
                        value: filter.read().search.clone(),
                        oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                    }
                }
                select {
                    "data-component": "select",
                    onchange: move |evt: FormEvent| filter.write().kind = evt.value().parse().ok(),
                    option { value: "all", "All Types" }
                    option { value: "Private", "Private" }
                    option { value: "Public", "Public" }
                }
                select {
                    "data-component": "select",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        filter.write().state = (value != "all").then_some(value);
                    },
                    option { value: "all", "All States" }
                    for state in state_options.iter() {
                        option { key: "{state}", value: "{state}", "{state}" }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "No universities match your filters." }
            } else {
                div { class: "card-grid",
                    for school in visible {
                        SchoolCard { key: "{school.id}", school }
                    }
                }
            }
        }

        section { class: "cta-band",
            div { class: "container centered",
                h2 { "Ready to Find Your Perfect University?" }
                p {
                    "Start your journey with our AI-powered platform and unlock exclusive scholarship opportunities."
                }
                div { class: "cta-actions",
                    Link { to: Route::Register {}, class: "cta-button large", "Start Your Application" }
                    Link { to: Route::Contact {}, class: "ghost-button large", "Connect with an Advisor" }
                }
            }
        }
    }
}
