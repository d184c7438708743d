use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaArrowTrendUp, FaBookOpen, FaGlobe, FaGraduationCap, FaStar, FaWandMagicSparkles};
use ui::Icon;

const CAMPUS_IMAGE: &str = "https://images.pexels.com/photos/267885/pexels-photo-267885.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

pub(crate) const STATS: [(&str, &str); 4] = [
    ("150+", "Elite Universities"),
    ("$50M+", "Available Funding"),
    ("5,000+", "Success Stories"),
    ("95%", "Success Rate"),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Create Your Profile",
        "Tell us about your academic background, interests, and goals.",
    ),
    (
        "Get Matched",
        "Our AI-powered system finds the best scholarship opportunities for you.",
    ),
    (
        "Apply & Succeed",
        "We guide you through the application process to secure your spot.",
    ),
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    program: &'static str,
    photo: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The AI matching system found me a full scholarship to MIT that I never would have discovered on my own. Incredible technology!",
        name: "Maria Silva",
        program: "MIT, Computer Science",
        photo: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
    },
    Testimonial {
        quote: "The legal support made my visa process seamless. Now I'm studying at Harvard Business School with a full scholarship!",
        name: "Carlos Rodriguez",
        program: "Harvard, MBA",
        photo: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
    },
    Testimonial {
        quote: "The exclusive scholarship program opened doors I didn't even know existed. The platform is revolutionary!",
        name: "Ana Chen",
        program: "Stanford, Engineering",
        photo: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            img { class: "hero-backdrop", src: CAMPUS_IMAGE, alt: "American University Campus" }
            div { class: "container hero-content",
                h1 {
                    "Your Gateway to"
                    br {}
                    span { class: "accent", "American Excellence" }
                }
                p { class: "lead",
                    "We connect you to exclusive opportunities to study in the United States."
                }
                div { class: "hero-icons",
                    Icon { icon: FaGlobe, width: 24, height: 24 }
                    Icon { icon: FaGraduationCap, width: 24, height: 24 }
                    Icon { icon: FaArrowTrendUp, width: 24, height: 24 }
                }
                div { class: "trust-row",
                    span { "5,000+ students" }
                    span { class: "stars",
                        for _ in 0..5 {
                            Icon { icon: FaStar, width: 14, height: 14 }
                        }
                        " 4.9/5 rating"
                    }
                }
            }
        }

        section { class: "stats-band",
            div { class: "container stats-grid",
                for (value, label) in STATS {
                    div { class: "stat",
                        div { class: "stat-value", "{value}" }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container two-column",
                div {
                    h2 { "Three Steps to Your Dream University" }
                    p { class: "lead",
                        "Our streamlined process makes it easy to achieve your educational goals."
                    }
                    ol { class: "steps",
                        for (i, (title, text)) in STEPS.iter().enumerate() {
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
                img { class: "rounded-image", src: CAMPUS_IMAGE, alt: "University Campus" }
            }
        }

        section { class: "section alt",
            div { class: "container",
                h2 { class: "centered", "Success Stories" }
                p { class: "lead centered",
                    "Real students, real results. See how our platform transformed their educational journey."
                }
                div { class: "card-grid",
                    for testimonial in TESTIMONIALS.iter() {
                        div { class: "card testimonial",
                            p { class: "quote", "\"{testimonial.quote}\"" }
                            div { class: "row",
                                img { class: "avatar-photo", src: testimonial.photo, alt: testimonial.name }
                                div {
                                    div { class: "strong", "{testimonial.name}" }
                                    div { class: "muted small", "{testimonial.program}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "cta-band",
            div { class: "container centered",
                span { class: "pill",
                    Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                    " Join 5,000+ successful students"
                }
                h2 {
                    "Ready to Transform"
                    br {}
                    span { class: "accent", "Your Future?" }
                }
                p {
                    "Join thousands of international students who have found their path to American education through our revolutionary platform."
                }
                div { class: "cta-actions",
                    Link { to: "/register", class: "cta-button large",
                        "Start Your Journey Today"
                        Icon { icon: FaArrowRight, width: 18, height: 18 }
                    }
                    Link { to: "/how-it-works", class: "ghost-button large",
                        Icon { icon: FaBookOpen, width: 18, height: 18 }
                        "Learn More"
                    }
                }
            }
        }
    }
}
