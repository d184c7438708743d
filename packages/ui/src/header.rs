use dioxus::prelude::*;

use crate::icons::{FaBars, FaBolt, FaBookOpen, FaGraduationCap, FaRightFromBracket, FaUser, FaXmark};
use crate::{sign_out, use_auth, use_session, Icon};

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/schools", "Universities"),
    ("/scholarships", "Scholarships"),
    ("/how-it-works", "How It Works"),
];

/// Site header: logo, main navigation and the user menu.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);
    let mut user_menu_open = use_signal(|| false);

    let logout = use_callback(move |_: ()| {
        sign_out(&session);
        user_menu_open.set(false);
        menu_open.set(false);
        nav.push("/");
    });

    let user = auth().user;

    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                Link { to: "/", class: "brand",
                    Icon { icon: FaGraduationCap, width: 28, height: 28 }
                    span { "Matrícula USA" }
                }

                nav { class: "main-nav",
                    for (path, label) in NAV_LINKS {
                        Link { to: path, class: "nav-link",
                            "{label}"
                            if label == "Scholarships" {
                                Icon { class: "accent-icon", icon: FaBolt, width: 14, height: 14 }
                            }
                        }
                    }
                }

                div { class: "header-actions",
                    if let Some(user) = user.clone() {
                        div { class: "user-menu",
                            button {
                                class: "user-button",
                                onclick: move |_| user_menu_open.set(!user_menu_open()),
                                span { class: "avatar",
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                }
                                span { "{user.display_name()}" }
                            }
                            if user_menu_open() {
                                div { class: "dropdown",
                                    Link {
                                        to: user.landing().path(),
                                        class: "dropdown-item",
                                        onclick: move |_| user_menu_open.set(false),
                                        Icon { icon: FaBookOpen, width: 14, height: 14 }
                                        "Dashboard"
                                    }
                                    button { class: "dropdown-item", onclick: move |_| logout.call(()),
                                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                        "Logout"
                                    }
                                }
                            }
                        }
                    } else {
                        Link { to: "/login", class: "nav-link strong", "Sign In" }
                        Link { to: "/register", class: "cta-button", "Get Started" }
                    }
                }

                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 22, height: 22 }
                    } else {
                        Icon { icon: FaBars, width: 22, height: 22 }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-nav",
                    for (path, label) in NAV_LINKS {
                        Link {
                            to: path,
                            class: "mobile-link",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    if let Some(user) = user {
                        Link { to: user.landing().path(), class: "mobile-link", "Dashboard" }
                        button { class: "mobile-link", onclick: move |_| logout.call(()), "Logout" }
                    } else {
                        Link { to: "/login", class: "mobile-link", "Sign In" }
                        Link { to: "/register", class: "mobile-link", "Get Started" }
                    }
                }
            }
        }
    }
}
