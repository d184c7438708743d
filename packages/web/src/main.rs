use dioxus::prelude::*;

use ui::{AuthProvider, Footer, Header};
use views::{
    About, AdminDashboard, Contact, Home, HowItWorks, Login, NewScholarship, NotFound,
    ProfileSetup, Register, Scholarships, SchoolDashboard, SchoolTerms, Services,
    StudentDashboard, Universities, UniversityDetail,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/how-it-works")]
        HowItWorks {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/scholarships")]
        Scholarships {},
        #[route("/schools")]
        Universities {},
        #[route("/schools/:id")]
        UniversityDetail { id: String },
        #[route("/services")]
        Services {},
        #[route("/contact")]
        Contact {},
        #[route("/student/dashboard")]
        StudentDashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/school/terms")]
        SchoolTerms {},
        #[route("/school/setup-profile")]
        ProfileSetup {},
        #[route("/school/dashboard")]
        SchoolDashboard {},
        #[route("/school/scholarship/new")]
        NewScholarship {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the async runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    let _ = tracing_subscriber::fmt::try_init();
    dotenvy::dotenv().ok();

    // Fail fast on a missing backend configuration
    api::supabase::client()
        .await
        .expect("Failed to configure the backend client");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7)
                .try_into()
                .expect("session expiry fits"),
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind the server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Header and footer around every page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        div { class: "site",
            Header {}
            main { class: "site-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
