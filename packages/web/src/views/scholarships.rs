use dioxus::prelude::*;
use store::catalog::{scholarships, ScholarshipFilter, FIELD_CHOICES};
use store::Level;
use ui::components::Input;
use ui::icons::FaMagnifyingGlass;
use ui::{Icon, ScholarshipCard};

#[component]
pub fn Scholarships() -> Element {
    let mut filter = use_signal(ScholarshipFilter::default);

    let visible: Vec<_> = filter.read().apply(scholarships()).into_iter().cloned().collect();

    rsx! {
        section { class: "page-hero",
            div { class: "container centered",
                h1 { "Scholarship Opportunities" }
                p { class: "lead", "Discover funding opportunities for your academic journey" }
            }
        }

        div { class: "container",
            div { class: "filter-bar",
                div { class: "input-icon grow",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    Input {
                        r#type: "text",
                        placeholder: "Search scholarships...",
                        value: filter.read().search.clone(),
                        oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                    }
                }
                select {
                    "data-component": "select",
                    onchange: move |evt: FormEvent| filter.write().level = evt.value().parse().ok(),
                    option { value: "all", "All Levels" }
                    for level in Level::ALL {
                        option { value: level.as_str(), "{level.label()}" }
                    }
                }
                select {
                    "data-component": "select",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        filter.write().field = (value != "all").then_some(value);
                    },
                    option { value: "all", "All Fields" }
                    for (value, label) in FIELD_CHOICES {
                        option { value: value, "{label}" }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "No scholarships match your filters." }
            } else {
                div { class: "card-grid",
                    for scholarship in visible {
                        ScholarshipCard { key: "{scholarship.id}", scholarship }
                    }
                }
            }
        }
    }
}
