//! Routes that are linked from the site but have no content yet.

use dioxus::prelude::*;
use ui::icons::FaArrowLeft;
use ui::{ComingSoon, Icon};

use crate::Route;

#[component]
pub fn Services() -> Element {
    rsx! { ComingSoon { title: "Services" } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ComingSoon { title: "Contact Us" } }
}

#[component]
pub fn StudentDashboard() -> Element {
    rsx! { ComingSoon { title: "Student Dashboard" } }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { ComingSoon { title: "Admin Dashboard" } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "container placeholder",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "outline-link",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                "Back to Home"
            }
        }
    }
}
