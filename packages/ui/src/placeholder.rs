use dioxus::prelude::*;

use crate::icons::FaPersonDigging;
use crate::Icon;

/// Stand-in for pages that are linked from the site but not built yet.
#[component]
pub fn ComingSoon(title: String) -> Element {
    rsx! {
        section { class: "container placeholder",
            Icon { icon: FaPersonDigging, width: 48, height: 48 }
            h1 { "{title}" }
            p { class: "muted", "This page is coming soon." }
            Link { to: "/", class: "outline-link", "Back to Home" }
        }
    }
}
