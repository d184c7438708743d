//! Authentication context and hooks for the UI.

use api::Remote;
use dioxus::prelude::*;
use store::{Session, User};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the persisted session has been restored.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session object behind [`use_auth`]; use it to log in, register or log out.
pub fn use_session() -> Session<Remote> {
    use_context::<Session<Remote>>()
}

/// Provider component that owns the session and mirrors it into [`AuthState`].
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    let session = use_hook(|| {
        let session = Session::new(Remote);
        session.subscribe(move |user| {
            let mut state = auth_state;
            state.set(AuthState {
                user: user.cloned(),
                loading: false,
            });
        });
        session
    });

    // Restore the persisted session on mount
    let restoring = session.clone();
    let _ = use_resource(move || {
        let session = restoring.clone();
        async move {
            if let Err(e) = session.restore().await {
                tracing::error!("Failed to restore session: {}", e);
            }
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log out locally, then revoke the server session in the background.
pub fn sign_out(session: &Session<Remote>) {
    session.logout();
    let backend = *session.backend();
    spawn(async move {
        use store::AuthBackend;
        if let Err(e) = backend.sign_out().await {
            tracing::error!("Failed to log out: {}", e);
        }
    });
}
