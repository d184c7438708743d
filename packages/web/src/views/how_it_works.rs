use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaGraduationCap};
use ui::Icon;

const JOURNEY: [(&str, &str); 3] = [
    (
        "Create Your Smart Profile",
        "Build a comprehensive academic profile using our intelligent form system. Our AI analyzes your background, achievements, and goals to create a unique student fingerprint.",
    ),
    (
        "AI-Powered Matching",
        "Our advanced machine learning algorithms instantly analyze thousands of scholarship opportunities and university programs to find your perfect matches.",
    ),
    (
        "Apply & Succeed",
        "Submit applications with confidence using our guided process. Receive comprehensive support from application to visa processing and enrollment.",
    ),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Discovery",
        "Our AI scans thousands of opportunities daily, finding hidden scholarships that match your unique profile.",
    ),
    (
        "Document Management",
        "Secure cloud storage and intelligent organization of all your academic documents and applications.",
    ),
    (
        "Personal Support",
        "Dedicated counselors and AI assistants provide 24/7 support throughout your entire journey.",
    ),
    (
        "Success Tracking",
        "Real-time analytics and progress tracking to optimize your application success rate.",
    ),
];

const FAQ: [(&str, &str); 3] = [
    (
        "How long does the entire process take?",
        "The initial profile setup takes just 5 minutes. Our AI provides instant matches, and most students receive scholarship offers within 2-4 weeks. The complete process from application to enrollment typically takes 3-6 months.",
    ),
    (
        "What makes your AI matching different?",
        "Our proprietary algorithm analyzes over 200 data points including academic performance, extracurricular activities, career goals, and personal preferences. It continuously learns from successful placements to improve match accuracy.",
    ),
    (
        "Is there a cost to use the platform?",
        "Basic access is free and includes standard scholarship matching. Premium membership unlocks exclusive opportunities, personalized counseling, and comprehensive application support with a 95% success guarantee.",
    ),
];

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container centered",
                h1 { "How It " span { class: "accent", "Works" } }
                p { class: "lead",
                    "Discover how our AI-powered platform transforms your educational dreams into reality through a simple, intelligent, and comprehensive process designed for international students."
                }
            }
        }

        section { class: "section",
            div { class: "container",
                h2 { class: "centered", "Your Journey to Success" }
                p { class: "lead centered",
                    "From profile creation to university enrollment, we guide you through every step with cutting-edge technology and personalized support."
                }
                ol { class: "steps wide",
                    for (i, (title, text)) in JOURNEY.iter().enumerate() {
                        li { class: "step",
                            span { class: "step-number", "{i + 1}" }
                            div {
                                h3 { "{title}" }
                                p { class: "muted", "{text}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section alt",
            div { class: "container",
                h2 { class: "centered", "Platform Features" }
                p { class: "lead centered",
                    "Discover the advanced features and intelligent systems that power your success"
                }
                div { class: "card-grid four",
                    for (title, text) in FEATURES {
                        div { class: "card card-body",
                            h3 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container narrow",
                h2 { class: "centered", "Frequently Asked Questions" }
                p { class: "lead centered", "Everything you need to know about our revolutionary platform" }
                for (question, answer) in FAQ {
                    div { class: "card card-body faq",
                        h3 { "{question}" }
                        p { class: "muted", "{answer}" }
                    }
                }
            }
        }

        section { class: "cta-band",
            div { class: "container centered",
                Icon { icon: FaGraduationCap, width: 40, height: 40 }
                h2 { "Begin Your Journey to " span { class: "accent", "Success" } }
                p {
                    "Join thousands of international students who have transformed their educational dreams into reality through our revolutionary platform."
                }
                div { class: "cta-actions",
                    Link { to: "/register", class: "cta-button large",
                        "Create Your Profile Now"
                        Icon { icon: FaArrowRight, width: 18, height: 18 }
                    }
                    Link { to: "/scholarships", class: "ghost-button large", "Explore Scholarships" }
                }
            }
        }
    }
}
