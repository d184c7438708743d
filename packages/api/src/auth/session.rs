//! What the server keeps in the cookie session, and the lookups every server function
//! starts with.

use dioxus::prelude::ServerFnError;
use store::{Scholarship, University, User};
use tower_sessions::Session;

use crate::supabase::payload::needs_refresh;
use crate::supabase::{self, AuthSession, SupabaseClient};

/// Key for the backend access token of the signed-in user.
pub const SESSION_ACCESS_TOKEN_KEY: &str = "access_token";
/// Key for the refresh token that renews the access token.
pub const SESSION_REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key for the unix time at which the access token expires.
pub const SESSION_EXPIRES_AT_KEY: &str = "expires_at";
/// Key for the signed-in [`User`].
pub const SESSION_USER_KEY: &str = "user";

pub(crate) fn server_error(err: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(err.to_string())
}

/// Store a fresh sign-in in the session.
pub async fn remember(session: &Session, auth: &AuthSession) -> Result<(), ServerFnError> {
    session
        .insert(SESSION_ACCESS_TOKEN_KEY, &auth.access_token)
        .await
        .map_err(server_error)?;
    session
        .insert(SESSION_REFRESH_TOKEN_KEY, &auth.refresh_token)
        .await
        .map_err(server_error)?;
    session
        .insert(SESSION_EXPIRES_AT_KEY, auth.expires_at)
        .await
        .map_err(server_error)?;
    session
        .insert(SESSION_USER_KEY, &auth.user)
        .await
        .map_err(server_error)?;
    Ok(())
}

/// Access token and user of the session, if signed in.
pub async fn signed_in(session: &Session) -> Result<Option<(String, User)>, ServerFnError> {
    let token: Option<String> = session
        .get(SESSION_ACCESS_TOKEN_KEY)
        .await
        .map_err(server_error)?;
    let user: Option<User> = session.get(SESSION_USER_KEY).await.map_err(server_error)?;
    Ok(token.zip(user))
}

/// Trade the session's refresh token for a new pair and remember it.
///
/// `None` when there is no refresh token or the backend refused it.
pub async fn refresh(
    session: &Session,
    client: &SupabaseClient,
) -> Result<Option<AuthSession>, ServerFnError> {
    let refresh_token: Option<String> = session
        .get::<Option<String>>(SESSION_REFRESH_TOKEN_KEY)
        .await
        .map_err(server_error)?
        .flatten();
    let Some(refresh_token) = refresh_token else {
        return Ok(None);
    };

    match client.refresh_session(&refresh_token).await {
        Ok(renewed) => {
            remember(session, &renewed).await?;
            tracing::debug!("Renewed backend session for {}", renewed.user.id);
            Ok(Some(renewed))
        }
        Err(e) if e.is_client_error() => {
            tracing::info!("Refresh token rejected: {e}");
            Ok(None)
        }
        Err(e) => Err(server_error(e)),
    }
}

/// The session's access token, renewed first when it is about to expire at `now`.
///
/// `None` when signed out, or when an expiring token could not be renewed; the session
/// is flushed in that case.
pub async fn fresh_access_token(
    session: &Session,
    client: &SupabaseClient,
    now: i64,
) -> Result<Option<String>, ServerFnError> {
    let token: Option<String> = session
        .get(SESSION_ACCESS_TOKEN_KEY)
        .await
        .map_err(server_error)?;
    let Some(token) = token else {
        return Ok(None);
    };

    let expires_at: Option<i64> = session
        .get::<Option<i64>>(SESSION_EXPIRES_AT_KEY)
        .await
        .map_err(server_error)?
        .flatten();
    if !needs_refresh(expires_at, now) {
        return Ok(Some(token));
    }

    match refresh(session, client).await? {
        Some(renewed) => Ok(Some(renewed.access_token)),
        None => {
            session.flush().await.map_err(server_error)?;
            Ok(None)
        }
    }
}

/// A backend client acting as the session's user.
pub async fn require_user(session: &Session) -> Result<(SupabaseClient, User), ServerFnError> {
    let client = supabase::client().await.map_err(server_error)?;
    let token = fresh_access_token(session, client, chrono::Utc::now().timestamp()).await?;
    let user: Option<User> = session.get(SESSION_USER_KEY).await.map_err(server_error)?;
    match token.zip(user) {
        Some((token, user)) => Ok((client.with_access_token(token), user)),
        None => Err(server_error(store::Error::NotAuthenticated)),
    }
}

/// Reject requests about another user's records.
pub fn ensure_owner(user: &User, user_id: &str) -> Result<(), ServerFnError> {
    if user.id == user_id {
        Ok(())
    } else {
        Err(ServerFnError::new("Not authorized"))
    }
}

/// Reject requests about a university other than the caller's own.
pub fn ensure_university(
    own: Option<&University>,
    university_id: &str,
) -> Result<(), ServerFnError> {
    match own {
        Some(u) if u.id == university_id => Ok(()),
        _ => Err(ServerFnError::new("Not authorized")),
    }
}

/// Reject scholarship ids not listed under the caller's university.
pub fn ensure_listed(own: &[Scholarship], id: &str) -> Result<(), ServerFnError> {
    if own.iter().any(|s| s.id == id) {
        Ok(())
    } else {
        Err(ServerFnError::new("Not authorized"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use store::{BackendConfig, Role};
    use tower_sessions::MemoryStore;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "admissions@riverside.edu".to_string(),
            name: "Riverside".to_string(),
            role: Role::School,
            avatar_url: None,
            has_paid_process: None,
        }
    }

    async fn signed_in_until(session: &Session, expires_at: i64, refresh_token: Option<&str>) {
        remember(
            session,
            &AuthSession {
                access_token: "old-access".to_string(),
                refresh_token: refresh_token.map(str::to_string),
                expires_at: Some(expires_at),
                user: user(),
            },
        )
        .await
        .unwrap();
    }

    async fn backend() -> (MockServer, SupabaseClient) {
        let server = MockServer::start().await;
        let client = SupabaseClient::new(BackendConfig::new(server.uri(), "anon"));
        (server, client)
    }

    fn refresh_grant() -> Mock {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({ "refresh_token": "old-refresh" })))
    }

    #[tokio::test]
    async fn test_valid_token_is_used_as_is() {
        let (server, client) = backend().await;
        refresh_grant()
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let session = session();
        signed_in_until(&session, 10_000, Some("old-refresh")).await;
        let token = fresh_access_token(&session, &client, 1_000).await.unwrap();
        assert_eq!(token.as_deref(), Some("old-access"));
    }

    #[tokio::test]
    async fn test_expiring_token_is_renewed_and_remembered() {
        let (server, client) = backend().await;
        refresh_grant()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "new-access",
                "refresh_token": "new-refresh",
                "expires_at": 20_000,
                "user": {
                    "id": "u1",
                    "email": "admissions@riverside.edu",
                    "user_metadata": {"name": "Riverside", "role": "school"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = session();
        signed_in_until(&session, 10_000, Some("old-refresh")).await;
        let token = fresh_access_token(&session, &client, 9_990).await.unwrap();
        assert_eq!(token.as_deref(), Some("new-access"));

        let stored: Option<Option<String>> = session.get(SESSION_REFRESH_TOKEN_KEY).await.unwrap();
        assert_eq!(stored.flatten().as_deref(), Some("new-refresh"));
        let expires_at: Option<Option<i64>> = session.get(SESSION_EXPIRES_AT_KEY).await.unwrap();
        assert_eq!(expires_at.flatten(), Some(20_000));
        let (access, signed_in_user) = signed_in(&session).await.unwrap().unwrap();
        assert_eq!(access, "new-access");
        assert_eq!(signed_in_user, user());

        // The renewed token is fresh, so no second exchange happens.
        let again = fresh_access_token(&session, &client, 10_500).await.unwrap();
        assert_eq!(again.as_deref(), Some("new-access"));
    }

    #[tokio::test]
    async fn test_rejected_refresh_signs_out() {
        let (server, client) = backend().await;
        refresh_grant()
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid Refresh Token: Already Used"
            })))
            .mount(&server)
            .await;

        let session = session();
        signed_in_until(&session, 10_000, Some("old-refresh")).await;
        assert_eq!(fresh_access_token(&session, &client, 10_000).await.unwrap(), None);
        assert_eq!(signed_in(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_without_refresh_token_signs_out() {
        let (_server, client) = backend().await;
        let session = session();
        signed_in_until(&session, 10_000, None).await;

        assert_eq!(refresh(&session, &client).await.unwrap().map(|s| s.access_token), None);
        assert_eq!(fresh_access_token(&session, &client, 11_000).await.unwrap(), None);
        assert_eq!(signed_in(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_keeps_session() {
        let (server, client) = backend().await;
        refresh_grant()
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let session = session();
        signed_in_until(&session, 10_000, Some("old-refresh")).await;
        assert!(fresh_access_token(&session, &client, 10_000).await.is_err());
        assert!(signed_in(&session).await.unwrap().is_some());
    }

    #[test]
    fn test_ensure_owner() {
        assert!(ensure_owner(&user(), "u1").is_ok());
        assert!(ensure_owner(&user(), "u2").is_err());
    }

    #[test]
    fn test_scholarship_ownership() {
        let university: University = serde_json::from_value(json!({
            "id": "uni-1",
            "user_id": "u1",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(ensure_university(Some(&university), "uni-1").is_ok());
        assert!(ensure_university(Some(&university), "uni-2").is_err());
        assert!(ensure_university(None, "uni-1").is_err());

        let listed: Vec<Scholarship> = serde_json::from_value(json!([{
            "id": "s-1",
            "university_id": "uni-1",
            "title": "Merit Award",
            "amount": 5000.0,
            "deadline": "2025-03-15",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }]))
        .unwrap();
        assert!(ensure_listed(&listed, "s-1").is_ok());
        assert!(ensure_listed(&listed, "s-2").is_err());
        assert!(ensure_listed(&[], "s-1").is_err());
    }
}
