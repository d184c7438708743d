use dioxus::prelude::*;
use store::catalog::{ScholarshipListing, SchoolListing, SchoolType};
use store::models::{format_amount, format_deadline};

use crate::icons::{FaBolt, FaCalendar, FaChevronRight, FaLocationDot};
use crate::Icon;

#[component]
pub fn SchoolCard(school: SchoolListing) -> Element {
    let kind_class = match school.kind {
        Some(SchoolType::Public) => "type-badge public",
        _ => "type-badge private",
    };

    rsx! {
        div { class: "card school-card",
            div { class: "card-image",
                img { src: "{school.image}", alt: "{school.name} campus" }
                if let Some(kind) = school.kind {
                    span { class: kind_class, "{kind}" }
                }
            }
            div { class: "card-body",
                h3 { "{school.name}" }
                p { class: "muted row",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    " {school.location}"
                }
                Link { to: "/schools/{school.id}", class: "outline-link",
                    "Learn More"
                    Icon { icon: FaChevronRight, width: 10, height: 10 }
                }
            }
        }
    }
}

/// A labelled value row inside a card.
#[component]
pub fn DetailRow(label: String, children: Element) -> Element {
    rsx! {
        div { class: "detail-row",
            span { class: "muted", "{label}" }
            span { class: "detail-value", {children} }
        }
    }
}

#[component]
pub fn ScholarshipCard(scholarship: ScholarshipListing) -> Element {
    let amount = format_amount(scholarship.amount);
    let deadline = format_deadline(scholarship.deadline);

    rsx! {
        div { class: "card scholarship-card",
            div { class: "card-body",
                div { class: "card-title-row",
                    h3 { "{scholarship.title}" }
                    if scholarship.is_exclusive {
                        span { class: "exclusive-badge",
                            Icon { icon: FaBolt, width: 10, height: 10 }
                            "Exclusive"
                        }
                    }
                }
                p { class: "muted clamp", "{scholarship.description}" }
                p { class: "muted small", "{scholarship.school_name}" }

                DetailRow { label: "Amount", "{amount}" }
                DetailRow { label: "Deadline",
                    Icon { icon: FaCalendar, width: 12, height: 12 }
                    " {deadline}"
                }
                DetailRow { label: "Level", "{scholarship.level}" }
                DetailRow { label: "Field", "{scholarship.field_of_study}" }

                Link { to: "/schools/{scholarship.school_id}", class: "dark-button",
                    "View Details"
                }
            }
        }
    }
}
