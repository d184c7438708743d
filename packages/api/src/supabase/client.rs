use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{
    BackendConfig, NewScholarship, NewUniversity, NewUser, RecordStore, Scholarship, University,
    UniversityUpdate, User,
};

use super::error::SupabaseError;
use super::payload::{error_message, AuthUser, SignUpResponse, TokenResponse, UserRow};

const UNIVERSITIES: &str = "universities";
const SCHOLARSHIPS: &str = "scholarships";
const USERS: &str = "users";

/// A signed-in user and the tokens that act on their behalf.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    /// Exchanged for a new access token once this one expires.
    pub refresh_token: Option<String>,
    /// Unix time at which `access_token` expires.
    pub expires_at: Option<i64>,
    pub user: User,
}

impl From<TokenResponse> for AuthSession {
    fn from(token: TokenResponse) -> Self {
        Self {
            expires_at: token.expiry(chrono::Utc::now().timestamp()),
            user: token.user.to_user(),
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        }
    }
}

/// REST client for the hosted backend. Requests are made with the anonymous key
/// unless an access token has been attached with [`with_access_token`](Self::with_access_token).
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: BackendConfig,
    access_token: Option<String>,
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            access_token: None,
        }
    }

    /// A client acting as the user owning `token`. Shares the connection pool.
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..self.clone()
        }
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    async fn check(response: Response) -> Result<Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });
        Err(SupabaseError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, SupabaseError> {
        let response = Self::check(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(), SupabaseError> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    // ---- auth ----

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, SupabaseError> {
        let url = self.config.auth_url("/token?grant_type=password");
        let token: TokenResponse = self
            .fetch(self.request(Method::POST, url).json(&serde_json::json!({
                "email": email,
                "password": password,
            })))
            .await?;
        Ok(token.into())
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, SupabaseError> {
        let url = self.config.auth_url("/token?grant_type=refresh_token");
        let token: TokenResponse = self
            .fetch(self.request(Method::POST, url).json(&serde_json::json!({
                "refresh_token": refresh_token,
            })))
            .await?;
        Ok(token.into())
    }

    /// Create a credential with `profile` as metadata, then the matching `users` row.
    ///
    /// The credential cannot be rolled back from here, so a failed row insert is logged
    /// and the new session is still returned.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &NewUser,
    ) -> Result<AuthSession, SupabaseError> {
        let url = self.config.auth_url("/signup");
        let response: SignUpResponse = self
            .fetch(self.request(Method::POST, url).json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "name": profile.name, "role": profile.role },
            })))
            .await?;

        let token = match response {
            SignUpResponse::Session(token) => token,
            SignUpResponse::Pending(_) => return Err(SupabaseError::ConfirmationRequired),
        };
        let session = AuthSession::from(token);

        let authed = self.with_access_token(session.access_token.clone());
        if let Err(e) = authed
            .execute(
                authed
                    .request(Method::POST, authed.config.table_url(USERS))
                    .json(&UserRow::from(&session.user)),
            )
            .await
        {
            tracing::error!("Failed to create users row for {}: {}", session.user.id, e);
        }
        Ok(session)
    }

    /// The user owning the attached access token.
    pub async fn user(&self) -> Result<User, SupabaseError> {
        let user: AuthUser = self
            .fetch(self.request(Method::GET, self.config.auth_url("/user")))
            .await?;
        Ok(user.to_user())
    }

    /// Revoke the attached access token.
    pub async fn sign_out(&self) -> Result<(), SupabaseError> {
        self.execute(self.request(Method::POST, self.config.auth_url("/logout")))
            .await
    }

    // ---- tables ----

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<T>, SupabaseError> {
        self.fetch(
            self.request(Method::GET, self.config.table_url(table))
                .query(&[(column, eq(value)), ("select", "*".to_string())]),
        )
        .await
    }

    async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, SupabaseError> {
        let mut rows: Vec<T> = self
            .fetch(
                self.request(Method::POST, self.config.table_url(table))
                    .header("Prefer", "return=representation")
                    .json(body),
            )
            .await?;
        if rows.is_empty() {
            return Err(SupabaseError::Api {
                status: 200,
                message: format!("Insert into {table} returned no row"),
            });
        }
        Ok(rows.swap_remove(0))
    }

    async fn patch<B: Serialize>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        body: &B,
    ) -> Result<(), SupabaseError> {
        self.execute(
            self.request(Method::PATCH, self.config.table_url(table))
                .query(&[(column, eq(value))])
                .json(body),
        )
        .await
    }

    async fn delete(&self, table: &str, column: &str, value: &str) -> Result<(), SupabaseError> {
        self.execute(
            self.request(Method::DELETE, self.config.table_url(table))
                .query(&[(column, eq(value))]),
        )
        .await
    }
}

fn logged<T>(operation: &str, result: Result<T, SupabaseError>) -> Result<T, store::Error> {
    result.map_err(|e| {
        tracing::error!("{operation} failed: {e}");
        store::Error::from(e)
    })
}

impl RecordStore for SupabaseClient {
    async fn university_for_user(&self, user_id: &str) -> Result<Option<University>, store::Error> {
        let rows: Vec<University> =
            logged("select university", self.select(UNIVERSITIES, "user_id", user_id).await)?;
        Ok(rows.into_iter().next())
    }

    async fn insert_university(&self, university: &NewUniversity) -> Result<University, store::Error> {
        logged("insert university", self.insert(UNIVERSITIES, university).await)
    }

    async fn update_university(
        &self,
        user_id: &str,
        update: &UniversityUpdate,
    ) -> Result<(), store::Error> {
        logged(
            "update university",
            self.patch(UNIVERSITIES, "user_id", user_id, update).await,
        )
    }

    async fn scholarships_for_university(
        &self,
        university_id: &str,
    ) -> Result<Vec<Scholarship>, store::Error> {
        logged(
            "select scholarships",
            self.select(SCHOLARSHIPS, "university_id", university_id).await,
        )
    }

    async fn insert_scholarship(&self, scholarship: &NewScholarship) -> Result<Scholarship, store::Error> {
        logged("insert scholarship", self.insert(SCHOLARSHIPS, scholarship).await)
    }

    async fn delete_scholarship(&self, id: &str) -> Result<(), store::Error> {
        logged("delete scholarship", self.delete(SCHOLARSHIPS, "id", id).await)
    }

    async fn set_scholarship_active(&self, id: &str, active: bool) -> Result<(), store::Error> {
        logged(
            "update scholarship",
            self.patch(
                SCHOLARSHIPS,
                "id",
                id,
                &serde_json::json!({ "is_active": active }),
            )
            .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::Role;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn token_body() -> serde_json::Value {
        json!({
            "access_token": "access",
            "refresh_token": "refresh",
            "expires_in": 3600,
            "expires_at": 1_700_003_600,
            "user": {
                "id": "u1",
                "email": "admissions@riverside.edu",
                "user_metadata": {"name": "Riverside", "role": "school"}
            }
        })
    }

    async fn backend() -> (MockServer, SupabaseClient) {
        let server = MockServer::start().await;
        let client = SupabaseClient::new(BackendConfig::new(server.uri(), "anon"));
        (server, client)
    }

    #[tokio::test]
    async fn test_sign_in_keeps_refresh_token() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .mount(&server)
            .await;

        let session = client
            .sign_in_with_password("admissions@riverside.edu", "pw")
            .await
            .unwrap();
        assert_eq!(session.access_token, "access");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert_eq!(session.user.role, Role::School);
    }

    #[tokio::test]
    async fn test_sign_up_survives_failed_users_row() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/users"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"message": "duplicate key value"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let profile = NewUser {
            name: "Riverside".to_string(),
            role: Role::School,
        };
        let session = client
            .sign_up("admissions@riverside.edu", "pw", &profile)
            .await
            .unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation() {
        let (server, client) = backend().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "email": "admissions@riverside.edu",
                "user_metadata": {"name": "Riverside", "role": "school"}
            })))
            .mount(&server)
            .await;

        let profile = NewUser {
            name: "Riverside".to_string(),
            role: Role::School,
        };
        assert!(matches!(
            client.sign_up("admissions@riverside.edu", "pw", &profile).await,
            Err(SupabaseError::ConfirmationRequired)
        ));
    }

    #[tokio::test]
    async fn test_unauthorized_is_classified() {
        let (server, client) = backend().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "JWT expired"})))
            .mount(&server)
            .await;

        let err = client.with_access_token("stale").user().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "JWT expired");
    }
}
