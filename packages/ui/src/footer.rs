use dioxus::prelude::*;

use crate::icons::{FaAward, FaEnvelope, FaGraduationCap, FaLocationDot, FaPhone, FaShieldHalved};
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    div { class: "brand",
                        Icon { icon: FaGraduationCap, width: 28, height: 28 }
                        span { "Matrícula USA" }
                    }
                    p {
                        "Connecting international students with exclusive scholarships at top American universities."
                    }
                    div { class: "badges",
                        span { class: "badge",
                            Icon { icon: FaShieldHalved, width: 12, height: 12 }
                            "Verified Platform"
                        }
                        span { class: "badge",
                            Icon { icon: FaAward, width: 12, height: 12 }
                            "Award Winning"
                        }
                    }
                }

                div {
                    h4 { "Explore" }
                    Link { to: "/about", "About Us" }
                    Link { to: "/schools", "Partner Universities" }
                    Link { to: "/scholarships", "Scholarships" }
                    Link { to: "/how-it-works", "Application Process" }
                }

                div {
                    h4 { "Support" }
                    Link { to: "/services", "Services" }
                    Link { to: "/contact", "Contact Us" }
                }

                div {
                    h4 { "Get in Touch" }
                    p { Icon { icon: FaEnvelope, width: 12, height: 12 } " info@matriculausa.com" }
                    p { Icon { icon: FaPhone, width: 12, height: 12 } " +1 (555) 123-4567" }
                    p { Icon { icon: FaLocationDot, width: 12, height: 12 } " New York, NY, USA" }
                }
            }
            div { class: "container footer-bottom",
                "© 2024 Matrícula USA. All rights reserved."
            }
        }
    }
}
