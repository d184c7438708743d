use thiserror::Error;

/// Failure talking to the hosted backend.
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx answer. `message` is taken from the body when it carries one.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Check your email to confirm your account before signing in")]
    ConfirmationRequired,
}

impl SupabaseError {
    /// The token used for the request is expired or revoked.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SupabaseError::Api { status: 401 | 403, .. })
    }

    /// The request itself was refused, as opposed to the backend being unreachable.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SupabaseError::Api { status: 400..=499, .. })
    }

    /// Errors of the auth endpoints are shown on the login and register forms.
    pub fn into_auth(self) -> store::Error {
        match self {
            SupabaseError::Http(e) => store::Error::remote(e.to_string()),
            other => store::Error::auth(other.to_string()),
        }
    }
}

impl From<SupabaseError> for store::Error {
    fn from(err: SupabaseError) -> Self {
        store::Error::remote(err.to_string())
    }
}
