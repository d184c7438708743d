//! Cookie session handling for server functions.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{
    ensure_listed, ensure_owner, ensure_university, fresh_access_token, refresh, remember, require_user, signed_in,
    SESSION_ACCESS_TOKEN_KEY, SESSION_EXPIRES_AT_KEY, SESSION_REFRESH_TOKEN_KEY,
    SESSION_USER_KEY,
};
#[cfg(feature = "server")]
pub(crate) use session::server_error;
