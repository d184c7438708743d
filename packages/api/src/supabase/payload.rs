//! Wire shapes of the identity provider's responses.

use serde::{Deserialize, Serialize};
use store::{Role, User};

/// Metadata attached to a credential at sign-up (`data` in the request).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// The `user` object returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// Unknown or missing roles fall back to student.
    pub fn to_user(&self) -> User {
        let metadata = &self.user_metadata;
        User {
            id: self.id.clone(),
            email: self.email.clone().unwrap_or_default(),
            name: metadata.name.clone().unwrap_or_default(),
            role: metadata
                .role
                .as_deref()
                .and_then(|r| r.parse::<Role>().ok())
                .unwrap_or_default(),
            avatar_url: metadata.avatar_url.clone(),
            has_paid_process: None,
        }
    }
}

/// Response of the password and refresh grants, and of sign-up when no confirmation
/// is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix time at which `access_token` expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Access tokens this close to expiry are renewed before use.
pub const REFRESH_MARGIN_SECS: i64 = 60;

impl TokenResponse {
    /// Unix time the access token stops working, preferring the absolute value.
    pub fn expiry(&self, now: i64) -> Option<i64> {
        self.expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs))
    }
}

/// Whether a token expiring at `expires_at` should be renewed at `now`. Tokens with
/// no known expiry are used as they are.
pub fn needs_refresh(expires_at: Option<i64>, now: i64) -> bool {
    expires_at.is_some_and(|at| at - REFRESH_MARGIN_SECS <= now)
}

/// Sign-up answers with a session, or with the bare user while the email address
/// awaits confirmation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(TokenResponse),
    Pending(AuthUser),
}

/// Row written to the `users` table after sign-up.
#[derive(Debug, Clone, Serialize)]
pub struct UserRow<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub role: Role,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: &user.id,
            email: &user.email,
            name: &user.name,
            role: user.role,
        }
    }
}

/// Human readable message of an error body. The auth and REST endpoints disagree on
/// the key, so the known ones are tried in order.
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_keys() {
        assert_eq!(
            error_message(r#"{"code":400,"msg":"User already registered"}"#).as_deref(),
            Some("User already registered")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(
            error_message(r#"{"code":"23505","details":null,"message":"duplicate key value"}"#)
                .as_deref(),
            Some("duplicate key value")
        );
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"msg":""}"#), None);
    }

    #[test]
    fn test_token_response_to_user() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {
                "id": "8f1c",
                "email": "admissions@yale.edu",
                "user_metadata": {"name": "Yale Admissions", "role": "school"}
            }
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        let user = token.user.to_user();
        assert_eq!(token.access_token, "jwt");
        assert_eq!(user.role, Role::School);
        assert_eq!(user.name, "Yale Admissions");
        assert_eq!(token.refresh_token.as_deref(), Some("r"));
        assert_eq!(token.expiry(1_000), Some(4_600));
    }

    #[test]
    fn test_absolute_expiry_wins() {
        let body = r#"{
            "access_token": "jwt",
            "refresh_token": "r2",
            "expires_in": 3600,
            "expires_at": 1700003600,
            "user": {"id": "8f1c"}
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.expiry(0), Some(1_700_003_600));

        let bare: TokenResponse =
            serde_json::from_str(r#"{"access_token":"jwt","user":{"id":"8f1c"}}"#).unwrap();
        assert_eq!(bare.refresh_token, None);
        assert_eq!(bare.expiry(0), None);
    }

    #[test]
    fn test_needs_refresh() {
        let expires_at = Some(10_000);
        assert!(!needs_refresh(expires_at, 9_000));
        assert!(!needs_refresh(expires_at, 10_000 - REFRESH_MARGIN_SECS - 1));
        assert!(needs_refresh(expires_at, 10_000 - REFRESH_MARGIN_SECS));
        assert!(needs_refresh(expires_at, 20_000));
        assert!(!needs_refresh(None, 20_000));
    }

    #[test]
    fn test_missing_role_defaults_to_student() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":"1","email":"a@b.com","user_metadata":{}}"#).unwrap();
        assert_eq!(user.to_user().role, Role::Student);

        let user: AuthUser = serde_json::from_str(
            r#"{"id":"1","email":"a@b.com","user_metadata":{"role":"wizard"}}"#,
        )
        .unwrap();
        assert_eq!(user.to_user().role, Role::Student);
    }

    #[test]
    fn test_sign_up_pending_confirmation() {
        let body = r#"{"id":"1","email":"a@b.com","user_metadata":{"name":"A","role":"student"},"confirmation_sent_at":"2024-01-01T00:00:00Z"}"#;
        assert!(matches!(
            serde_json::from_str::<SignUpResponse>(body).unwrap(),
            SignUpResponse::Pending(_)
        ));
    }

    #[test]
    fn test_user_row_shape() {
        let user = User {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            role: Role::School,
            avatar_url: None,
            has_paid_process: None,
        };
        let json = serde_json::to_value(UserRow::from(&user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "email": "a@b.com", "name": "A", "role": "school"})
        );
    }
}
