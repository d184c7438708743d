use dioxus::prelude::*;
use store::catalog::{find_school, scholarships_for_school, SchoolType};
use ui::icons::{FaArrowLeft, FaAward, FaEnvelope, FaGlobe, FaLocationDot, FaPhone};
use ui::{DetailRow, Icon, ScholarshipCard};

use crate::Route;

#[component]
pub fn UniversityDetail(id: String) -> Element {
    let Some(school) = find_school(&id) else {
        return rsx! {
            div { class: "container not-found",
                h2 { "University not found" }
                Link { to: Route::Universities {}, class: "outline-link",
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    "Back to Universities"
                }
            }
        };
    };
    let offers = scholarships_for_school(&school.id);
    let kind_class = match school.kind {
        Some(SchoolType::Public) => "type-badge public",
        _ => "type-badge private",
    };

    rsx! {
        section { class: "detail-hero",
            img { class: "hero-backdrop", src: "{school.image}", alt: "{school.name}" }
            div { class: "container",
                Link { to: Route::Universities {}, class: "back-link",
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    "Back to Universities"
                }
                div { class: "badges",
                    if let Some(kind) = school.kind {
                        span { class: kind_class, "{kind}" }
                    }
                    if let Some(ranking) = school.ranking {
                        span { class: "badge",
                            Icon { icon: FaAward, width: 12, height: 12 }
                            "#{ranking} Ranked"
                        }
                    }
                }
                h1 { "{school.name}" }
                p { class: "row",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    " {school.location}"
                }
            }
        }

        div { class: "container detail-grid",
            div {
                div { class: "card card-body",
                    h2 { "About" }
                    p { class: "muted", "{school.description}" }
                }
                div { class: "card card-body",
                    h2 { "Academic Programs" }
                    ul { class: "chip-list",
                        for program in school.programs.iter() {
                            li { class: "chip", key: "{program}", "{program}" }
                        }
                    }
                }
                if !school.accreditations.is_empty() {
                    div { class: "card card-body",
                        h2 { "Accreditations" }
                        ul {
                            for accreditation in school.accreditations.iter() {
                                li { key: "{accreditation}", "{accreditation}" }
                            }
                        }
                    }
                }
            }

            aside { class: "card card-body",
                h3 { "Contact Information" }
                DetailRow { label: "Address",
                    "{school.address.street}, {school.address.city}, {school.address.state} {school.address.zip_code}"
                }
                DetailRow { label: "Phone",
                    Icon { icon: FaPhone, width: 12, height: 12 }
                    " {school.contact.phone}"
                }
                DetailRow { label: "Email",
                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                    " {school.contact.email}"
                }
                DetailRow { label: "Admissions", "{school.contact.admissions_email}" }
                if let Some(fax) = school.contact.fax.as_ref() {
                    DetailRow { label: "Fax", "{fax}" }
                }
                a {
                    class: "dark-button",
                    href: "{school.website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: FaGlobe, width: 14, height: 14 }
                    "Visit Official Website"
                }
            }
        }

        section { class: "section alt",
            div { class: "container",
                h2 { class: "centered", "Scholarship Opportunities" }
                p { class: "lead centered", "Discover exclusive scholarships available at {school.name}" }
                if offers.is_empty() {
                    p { class: "empty-state", "No scholarships are listed for this university yet." }
                } else {
                    div { class: "card-grid",
                        for scholarship in offers {
                            ScholarshipCard { key: "{scholarship.id}", scholarship: scholarship.clone() }
                        }
                    }
                }
                div { class: "centered",
                    Link { to: Route::Scholarships {}, class: "cta-button", "View Scholarships" }
                }
            }
        }
    }
}
