//! School dashboard: university status, scholarship stats and scholarship management.

use api::Remote;
use dioxus::prelude::*;
use store::models::{format_amount, format_deadline};
use store::{Dashboard, RecordStore, Scholarship, University};
use ui::alert::{alert, confirm};
use ui::icons::{
    FaAward, FaBuilding, FaChartLine, FaCircleCheck, FaClock, FaDollarSign, FaEye, FaEyeSlash,
    FaPenToSquare, FaPlus, FaTrashCan, FaTriangleExclamation, FaUsers,
};
use ui::{use_auth, DetailRow, Icon};

use super::guard::use_signed_in_user;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Overview,
    Scholarships,
    Profile,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Scholarships, Tab::Profile];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Scholarships => "Scholarships",
            Tab::Profile => "Profile",
        }
    }
}

#[component]
pub fn SchoolDashboard() -> Element {
    let user = use_signed_in_user();
    let auth = use_auth();
    let mut dashboard = use_signal(Dashboard::default);
    let mut loading = use_signal(|| true);
    let mut tab = use_signal(|| Tab::Overview);

    let _loader = use_resource(move || {
        let user = auth().user;
        async move {
            let Some(user) = user else {
                return;
            };
            match Dashboard::load(&Remote, &user.id).await {
                Ok(loaded) => dashboard.set(loaded),
                Err(e) => tracing::error!("Error loading dashboard: {}", e),
            }
            loading.set(false);
        }
    });

    let on_delete = move |id: String| {
        if !confirm("Are you sure you want to delete this scholarship?") {
            return;
        }
        spawn(async move {
            match Remote.delete_scholarship(&id).await {
                Ok(()) => dashboard.write().remove_local(&id),
                Err(e) => {
                    tracing::error!("Error deleting scholarship: {}", e);
                    alert("Error deleting scholarship. Please try again.");
                }
            }
        });
    };

    let on_toggle = move |id: String| {
        let active = match dashboard.read().toggled_state(&id) {
            Ok(active) => active,
            Err(e) => {
                tracing::error!("Error updating scholarship: {}", e);
                return;
            }
        };
        spawn(async move {
            match Remote.set_scholarship_active(&id, active).await {
                Ok(()) => dashboard.write().set_active_local(&id, active),
                Err(e) => {
                    tracing::error!("Error updating scholarship: {}", e);
                    alert("Error updating scholarship. Please try again.");
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "container page-padding centered",
                div { class: "spinner" }
            }
        };
    }

    let state = dashboard();
    let stats = state.stats();
    let can_create = state.can_create_scholarships();
    let display_name = state
        .university
        .as_ref()
        .map(|u| u.display_name().to_string())
        .or_else(|| user.as_ref().map(|u| u.display_name().to_string()))
        .unwrap_or_default();

    rsx! {
        div { class: "container page-padding",
            div { class: "dashboard-header",
                div {
                    h1 { "{display_name}" }
                    StatusBadges { university: state.university.clone() }
                }
                if can_create {
                    Link { to: Route::NewScholarship {}, class: "cta-button",
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " New Scholarship"
                    }
                } else {
                    Link { to: Route::ProfileSetup {}, class: "cta-button",
                        Icon { icon: FaBuilding, width: 14, height: 14 }
                        " Complete Profile"
                    }
                }
            }

            if !can_create {
                div { class: "notice",
                    Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
                    div {
                        if state.university.is_none() {
                            p {
                                "Complete your university profile to start attracting international students and manage scholarship opportunities on our platform."
                            }
                        } else {
                            p {
                                "Finish setting up your university profile to start creating scholarship opportunities for international students."
                            }
                        }
                        div { class: "button-row",
                            Link { to: Route::ProfileSetup {}, class: "dark-button", "Complete Profile" }
                            Link { to: Route::SchoolTerms {}, class: "outline-link", "Review Terms & Conditions" }
                        }
                    }
                }
            }

            nav { class: "tabs",
                for candidate in Tab::ALL {
                    button {
                        class: if tab() == candidate { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(candidate),
                        "{candidate.label()}"
                    }
                }
            }

            {match tab() {
                Tab::Overview => rsx! {
                    div { class: "stats-grid",
                        StatCard { label: "Total Scholarships", value: "{stats.total}",
                            Icon { icon: FaAward, width: 20, height: 20 }
                        }
                        StatCard { label: "Active Scholarships", value: "{stats.active}",
                            Icon { icon: FaCircleCheck, width: 20, height: 20 }
                        }
                        StatCard { label: "Total Funding", value: format_amount(stats.total_funding),
                            Icon { icon: FaDollarSign, width: 20, height: 20 }
                        }
                        StatCard { label: "Average Amount", value: format_amount(stats.average_amount),
                            Icon { icon: FaChartLine, width: 20, height: 20 }
                        }
                    }

                    if state.university.is_none() {
                        div { class: "card-grid",
                            div { class: "card card-body",
                                Icon { icon: FaBuilding, width: 20, height: 20 }
                                h3 { "Complete Profile" }
                                p { class: "muted small", "Add your university information and get approved" }
                            }
                            div { class: "card card-body",
                                Icon { icon: FaAward, width: 20, height: 20 }
                                h3 { "Create Scholarships" }
                                p { class: "muted small", "Offer exclusive scholarships to international students" }
                            }
                            div { class: "card card-body",
                                Icon { icon: FaUsers, width: 20, height: 20 }
                                h3 { "Connect with Students" }
                                p { class: "muted small", "Reach qualified international applicants" }
                            }
                        }
                    }

                    div { class: "card card-body",
                        h3 { "Recent Scholarships" }
                        if !can_create {
                            EmptyState {
                                title: "Complete your profile first",
                                text: "Set up your university profile to start creating scholarships",
                                link: Route::ProfileSetup {},
                                link_label: "Complete Profile",
                            }
                        } else if state.scholarships.is_empty() {
                            EmptyState {
                                title: "No scholarships yet",
                                text: "Start by creating your first scholarship opportunity",
                                link: Route::NewScholarship {},
                                link_label: "Create Scholarship",
                            }
                        } else {
                            for scholarship in state.scholarships.iter().rev().take(3) {
                                div { class: "list-row", key: "{scholarship.id}",
                                    div {
                                        div { class: "strong", "{scholarship.title}" }
                                        div { class: "muted small",
                                            "{format_amount(scholarship.amount)} · {format_deadline(scholarship.deadline)}"
                                        }
                                    }
                                    ActiveBadge { active: scholarship.is_active }
                                }
                            }
                        }
                    }
                },
                Tab::Scholarships => rsx! {
                    div { class: "section-header",
                        h2 { "Manage Scholarships" }
                        if can_create {
                            Link { to: Route::NewScholarship {}, class: "cta-button",
                                Icon { icon: FaPlus, width: 14, height: 14 }
                                " Create New"
                            }
                        }
                    }
                    if !can_create {
                        EmptyState {
                            title: "Profile setup required",
                            text: "Complete your university profile to start creating scholarships",
                            link: Route::ProfileSetup {},
                            link_label: "Complete University Profile",
                        }
                    } else if state.scholarships.is_empty() {
                        EmptyState {
                            title: "No scholarships created yet",
                            text: "Start attracting international students by creating scholarship opportunities",
                            link: Route::NewScholarship {},
                            link_label: "Create Your First Scholarship",
                        }
                    } else {
                        div { class: "card-grid",
                            for scholarship in state.scholarships.iter() {
                                ScholarshipManageCard {
                                    key: "{scholarship.id}",
                                    scholarship: scholarship.clone(),
                                    on_toggle: on_toggle,
                                    on_delete: on_delete,
                                }
                            }
                        }
                    }
                },
                Tab::Profile => rsx! {
                    ProfileSummary { university: state.university.clone() }
                },
            }}
        }
    }
}

#[component]
fn StatusBadges(university: Option<University>) -> Element {
    let Some(university) = university else {
        return rsx! {
            div { class: "badges",
                span { class: "status-badge warning", "Profile Setup Required" }
            }
        };
    };

    rsx! {
        div { class: "badges",
            if university.is_approved {
                span { class: "status-badge success",
                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                    " Approved"
                }
            } else {
                span { class: "status-badge warning",
                    Icon { icon: FaClock, width: 12, height: 12 }
                    " Pending Approval"
                }
            }
            if !university.profile_completed {
                span { class: "status-badge danger",
                    Icon { icon: FaTriangleExclamation, width: 12, height: 12 }
                    " Profile Incomplete"
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, children: Element) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-icon", {children} }
            div {
                p { class: "muted small", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}

#[component]
fn ActiveBadge(active: bool) -> Element {
    rsx! {
        if active {
            span { class: "status-badge success", "Active" }
        } else {
            span { class: "status-badge muted", "Inactive" }
        }
    }
}

#[component]
fn EmptyState(title: String, text: String, link: Route, link_label: String) -> Element {
    rsx! {
        div { class: "empty-state",
            Icon { icon: FaAward, width: 36, height: 36 }
            h3 { "{title}" }
            p { class: "muted", "{text}" }
            Link { to: link, class: "cta-button", "{link_label}" }
        }
    }
}

#[component]
fn ScholarshipManageCard(
    scholarship: Scholarship,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let toggle_id = scholarship.id.clone();
    let delete_id = scholarship.id.clone();
    let level = scholarship.level.map(|l| l.label()).unwrap_or("Any");

    rsx! {
        div { class: "card card-body",
            div { class: "card-title-row",
                h3 { "{scholarship.title}" }
                div { class: "icon-actions",
                    button {
                        class: if scholarship.is_active { "icon-button active" } else { "icon-button" },
                        title: if scholarship.is_active { "Deactivate" } else { "Activate" },
                        onclick: move |_| on_toggle.call(toggle_id.clone()),
                        if scholarship.is_active {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        }
                    }
                    button {
                        class: "icon-button danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
            if let Some(description) = scholarship.description.as_ref() {
                p { class: "muted clamp", "{description}" }
            }
            DetailRow { label: "Amount", "{format_amount(scholarship.amount)}" }
            DetailRow { label: "Deadline", "{format_deadline(scholarship.deadline)}" }
            DetailRow { label: "Level", "{level}" }
            DetailRow { label: "Status",
                ActiveBadge { active: scholarship.is_active }
            }
            if scholarship.is_exclusive {
                span { class: "exclusive-badge", "Exclusive Scholarship" }
            }
        }
    }
}

#[component]
fn ProfileSummary(university: Option<University>) -> Element {
    let Some(university) = university else {
        return rsx! {
            div { class: "empty-state",
                Icon { icon: FaBuilding, width: 36, height: 36 }
                h3 { "No university profile found" }
                p { class: "muted",
                    "Create your university profile to showcase your institution to international students"
                }
                Link { to: Route::ProfileSetup {}, class: "cta-button", "Create University Profile" }
            }
        };
    };
    let contact = university.contact.clone().unwrap_or_default();
    let dash = |value: Option<String>| value.unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div { class: "section-header",
            h2 { "University Profile" }
            Link { to: Route::ProfileSetup {}, class: "outline-link",
                Icon { icon: FaPenToSquare, width: 12, height: 12 }
                " Setup Profile"
            }
        }
        div { class: "detail-grid",
            div { class: "card card-body",
                h3 { "Basic Information" }
                DetailRow { label: "University Name", "{university.display_name()}" }
                DetailRow { label: "Website", "{dash(university.website.clone())}" }
                DetailRow { label: "Location", "{dash(university.location.clone())}" }
                if let Some(address) = university.address.as_ref() {
                    DetailRow { label: "Address", "{address.one_line()}" }
                }
            }
            div { class: "card card-body",
                h3 { "Contact Information" }
                DetailRow { label: "Phone", "{dash(contact.phone.clone())}" }
                DetailRow { label: "Email", "{dash(contact.email.clone())}" }
                DetailRow { label: "Admissions Email", "{dash(contact.admissions_email.clone())}" }
            }
        }
        if let Some(description) = university.description.as_ref() {
            div { class: "card card-body",
                h3 { "Description" }
                p { class: "muted", "{description}" }
            }
        }
        div { class: "card card-body",
            h3 { "Academic Programs" }
            ul { class: "chip-list",
                for program in university.programs().iter() {
                    li { class: "chip", key: "{program}", "{program}" }
                }
            }
        }
    }
}
