//! # Hosted backend client
//!
//! Talks to the project's GoTrue auth endpoints (`/auth/v1/...`) and its PostgREST
//! tables (`/rest/v1/...`). Every request carries the public `apikey` header and a
//! bearer token: the signed-in user's access token when there is one, the public key
//! otherwise, so row-level security on the backend sees the right user.
//!
//! The process-wide client is created lazily from [`store::BackendConfig::from_env`]
//! by [`client`]; the server binary calls it once at startup so that a missing
//! configuration aborts early.

pub mod payload;

#[cfg(feature = "server")]
mod client;
#[cfg(feature = "server")]
mod error;

#[cfg(feature = "server")]
pub use client::{AuthSession, SupabaseClient};
#[cfg(feature = "server")]
pub use error::SupabaseError;

#[cfg(feature = "server")]
static CLIENT: tokio::sync::OnceCell<SupabaseClient> = tokio::sync::OnceCell::const_new();

/// Get or initialize the shared client.
#[cfg(feature = "server")]
pub async fn client() -> Result<&'static SupabaseClient, store::Error> {
    CLIENT
        .get_or_try_init(|| async {
            let config = store::BackendConfig::from_env()?;
            tracing::info!("Using backend at {}", config.url);
            Ok::<_, store::Error>(SupabaseClient::new(config))
        })
        .await
}
