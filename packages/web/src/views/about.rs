use dioxus::prelude::*;
use ui::icons::{FaBullseye, FaChartLine, FaEye, FaGlobe, FaHeart, FaShieldHalved, FaWandMagicSparkles};
use ui::Icon;

use super::home::STATS;

const STORY: [&str; 3] = [
    "Founded in 2020 by a team of international education experts and former international students, Matrícula USA was born from the recognition that talented students worldwide face significant barriers in accessing American higher education.",
    "Having experienced these challenges firsthand, our founders set out to create a comprehensive SaaS platform that would not only connect students with opportunities but also provide the AI-powered support and guidance needed to navigate the complex process of studying abroad.",
    "Today, we have revolutionized the industry by helping over 5,000 international students secure more than $50 million in scholarships, partnering with 150+ American institutions to create exclusive opportunities for our global community.",
];

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Matching",
        "Advanced algorithms that match students with perfect scholarship opportunities",
    ),
    (
        "Secure Platform",
        "Enterprise-grade security protecting student data and applications",
    ),
    (
        "Real-time Analytics",
        "Live tracking and insights for application progress and success rates",
    ),
    (
        "Global Network",
        "Connected ecosystem of universities, students, and education partners",
    ),
];

const TEAM: [(&str, &str, &str); 3] = [
    (
        "John Smith",
        "CEO & Founder",
        "Former international student with 15+ years in educational consulting and SaaS technology. MIT alumnus passionate about democratizing education.",
    ),
    (
        "Maria Rodriguez",
        "Head of Student Success",
        "PhD in International Education with expertise in student counseling and AI-powered support services. Stanford graduate with a passion for student success.",
    ),
    (
        "David Chen",
        "Chief Technology Officer",
        "Software engineer and EdTech expert focused on creating seamless user experiences through cutting-edge AI and machine learning technologies.",
    ),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container centered",
                h1 { "About " span { class: "accent", "Matrícula USA" } }
                p { class: "lead",
                    "We are the next-generation SaaS platform bridging the gap between international students and American educational opportunities through cutting-edge technology and personalized support."
                }
            }
        }

        section { class: "section",
            div { class: "container",
                h2 { class: "centered", "Our Foundation" }
                p { class: "lead centered", "Built on principles that drive innovation and student success" }
                div { class: "card-grid",
                    div { class: "card card-body",
                        Icon { icon: FaBullseye, width: 28, height: 28 }
                        h3 { "Our Mission" }
                        p { class: "muted",
                            "To democratize access to American higher education by connecting qualified international students with universities and scholarship opportunities through revolutionary technology and comprehensive support."
                        }
                    }
                    div { class: "card card-body",
                        Icon { icon: FaEye, width: 28, height: 28 }
                        h3 { "Our Vision" }
                        p { class: "muted",
                            "To become the leading global platform for international education, creating a world where talented students can access quality education regardless of their geographic or economic background."
                        }
                    }
                    div { class: "card card-body",
                        Icon { icon: FaHeart, width: 28, height: 28 }
                        h3 { "Our Values" }
                        p { class: "muted",
                            "Excellence, integrity, and inclusivity guide everything we do. We believe in transparency, student-first approach, and building lasting partnerships with educational institutions worldwide."
                        }
                    }
                }
            }
        }

        section { class: "section alt",
            div { class: "container two-column",
                div {
                    h2 { "Our Story" }
                    for paragraph in STORY {
                        p { class: "muted", "{paragraph}" }
                    }
                }
                div { class: "stats-grid compact",
                    div { class: "stat",
                        div { class: "stat-value", "2020" }
                        div { class: "stat-label", "Platform Launch" }
                    }
                    for (value, label) in STATS.iter().take(3) {
                        div { class: "stat",
                            div { class: "stat-value", "{value}" }
                            div { class: "stat-label", "{label}" }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                h2 { class: "centered", "Powered by Technology" }
                p { class: "lead centered",
                    "Our cutting-edge SaaS platform leverages AI and machine learning to deliver unprecedented results"
                }
                div { class: "card-grid four",
                    for (i, (title, text)) in FEATURES.iter().enumerate() {
                        div { class: "card card-body centered",
                            {feature_icon(i)}
                            h3 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                }
            }
        }

        section { class: "section alt",
            div { class: "container",
                h2 { class: "centered", "Meet Our Team" }
                p { class: "lead centered",
                    "Passionate professionals and former international students dedicated to your educational success"
                }
                div { class: "card-grid",
                    for (name, title, bio) in TEAM {
                        div { class: "card card-body centered",
                            h3 { "{name}" }
                            p { class: "accent strong", "{title}" }
                            p { class: "muted", "{bio}" }
                        }
                    }
                }
            }
        }
    }
}

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { icon: FaWandMagicSparkles, width: 24, height: 24 } },
        1 => rsx! { Icon { icon: FaShieldHalved, width: 24, height: 24 } },
        2 => rsx! { Icon { icon: FaChartLine, width: 24, height: 24 } },
        _ => rsx! { Icon { icon: FaGlobe, width: 24, height: 24 } },
    }
}
