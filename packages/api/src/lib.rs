//! # API crate: fullstack server functions for Matrícula USA
//!
//! Every page talks to the hosted backend through the server functions defined here.
//! The browser never sees the backend access token: it lives in the server-side cookie
//! session, and each call is made with a client acting as the session's user.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Cookie session keys and per-request user lookup |
//! | [`supabase`] | partly `server` | REST client for the auth endpoints and tables, response payloads |
//! | [`remote`] | none | [`Remote`], the client-side `AuthBackend` + `RecordStore` over these functions |
//!
//! ## Server functions exposed here
//!
//! Each is compiled twice: with the real logic behind `#[cfg(feature = "server")]`,
//! and as a client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login`, `register`, `logout`
//! - **Universities**: `get_university`, `insert_university`, `update_university`
//! - **Scholarships**: `list_scholarships`, `create_scholarship`, `delete_scholarship`,
//!   `set_scholarship_active`

use dioxus::prelude::*;
use store::{
    NewScholarship, NewUniversity, Role, Scholarship, University, UniversityUpdate, User,
};

pub mod auth;
pub mod remote;
pub mod supabase;

pub use remote::Remote;

/// The signed-in user, checked against the backend. An expired access token is renewed
/// once with the refresh token; a session that cannot be renewed is cleared.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    let client = supabase::client().await.map_err(auth::server_error)?;
    let now = chrono::Utc::now().timestamp();
    let Some(token) = auth::fresh_access_token(&session, client, now).await? else {
        return Ok(None);
    };

    match client.with_access_token(token).user().await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => {
            if let Some(renewed) = auth::refresh(&session, client).await? {
                return Ok(Some(renewed.user));
            }
            tracing::info!("Dropping stale session: {e}");
            session.flush().await.map_err(auth::server_error)?;
            Ok(None)
        }
        Err(e) => Err(auth::server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<User, ServerFnError> {
    let client = supabase::client().await.map_err(auth::server_error)?;
    let signed_in = client
        .sign_in_with_password(email.trim(), &password)
        .await
        .map_err(|e| auth::server_error(e.into_auth()))?;

    auth::remember(&session, &signed_in).await?;
    Ok(signed_in.user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an account tagged with `role` and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
    role: Role,
) -> Result<User, ServerFnError> {
    let form = store::RegistrationForm {
        name,
        email,
        confirm_password: password.clone(),
        password,
        role,
    };
    let profile = form.validate().map_err(auth::server_error)?;

    let client = supabase::client().await.map_err(auth::server_error)?;
    let signed_up = client
        .sign_up(form.email.trim(), &form.password, &profile)
        .await
        .map_err(|e| auth::server_error(e.into_auth()))?;

    auth::remember(&session, &signed_up).await?;
    Ok(signed_up.user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
    role: Role,
) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Revoke the backend session and clear the cookie session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some((token, _)) = auth::signed_in(&session).await? {
        let client = supabase::client().await.map_err(auth::server_error)?;
        if let Err(e) = client.with_access_token(token).sign_out().await {
            tracing::error!("Failed to revoke backend session: {}", e);
        }
    }

    session.flush().await.map_err(auth::server_error)?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// The university owned by `user_id`, if it has been created yet.
#[cfg(feature = "server")]
#[get("/api/school/university/:user_id", session: tower_sessions::Session)]
pub async fn get_university(user_id: String) -> Result<Option<University>, ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    auth::ensure_owner(&user, &user_id)?;
    client
        .university_for_user(&user_id)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/school/university/:user_id")]
pub async fn get_university(user_id: String) -> Result<Option<University>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/school/university", session: tower_sessions::Session)]
pub async fn insert_university(university: NewUniversity) -> Result<University, ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    auth::ensure_owner(&user, &university.user_id)?;
    client
        .insert_university(&university)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/school/university")]
pub async fn insert_university(university: NewUniversity) -> Result<University, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/school/university/update", session: tower_sessions::Session)]
pub async fn update_university(
    user_id: String,
    update: UniversityUpdate,
) -> Result<(), ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    auth::ensure_owner(&user, &user_id)?;
    client
        .update_university(&user_id, &update)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/school/university/update")]
pub async fn update_university(
    user_id: String,
    update: UniversityUpdate,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/school/scholarships/:university_id", session: tower_sessions::Session)]
pub async fn list_scholarships(university_id: String) -> Result<Vec<Scholarship>, ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    let own = client
        .university_for_user(&user.id)
        .await
        .map_err(auth::server_error)?;
    auth::ensure_university(own.as_ref(), &university_id)?;
    client
        .scholarships_for_university(&university_id)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/school/scholarships/:university_id")]
pub async fn list_scholarships(university_id: String) -> Result<Vec<Scholarship>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert a scholarship. Only the owner of a university with a completed profile may
/// publish under it.
#[cfg(feature = "server")]
#[post("/api/school/scholarships", session: tower_sessions::Session)]
pub async fn create_scholarship(scholarship: NewScholarship) -> Result<Scholarship, ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    let university = client
        .university_for_user(&user.id)
        .await
        .map_err(auth::server_error)?;
    match university {
        Some(u) if u.id != scholarship.university_id => {
            return Err(ServerFnError::new("Not authorized"))
        }
        Some(u) if u.profile_completed => {}
        _ => return Err(auth::server_error(store::Error::ProfileIncomplete)),
    }

    client
        .insert_scholarship(&scholarship)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/school/scholarships")]
pub async fn create_scholarship(scholarship: NewScholarship) -> Result<Scholarship, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Refuse scholarship ids that do not belong to the caller's university.
#[cfg(feature = "server")]
async fn ensure_own_scholarship(
    client: &supabase::SupabaseClient,
    user: &User,
    id: &str,
) -> Result<(), ServerFnError> {
    use store::RecordStore;

    let Some(university) = client
        .university_for_user(&user.id)
        .await
        .map_err(auth::server_error)?
    else {
        return Err(ServerFnError::new("Not authorized"));
    };
    let own = client
        .scholarships_for_university(&university.id)
        .await
        .map_err(auth::server_error)?;
    auth::ensure_listed(&own, id)
}

#[cfg(feature = "server")]
#[post("/api/school/scholarships/delete", session: tower_sessions::Session)]
pub async fn delete_scholarship(id: String) -> Result<(), ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    ensure_own_scholarship(&client, &user, &id).await?;
    client
        .delete_scholarship(&id)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/school/scholarships/delete")]
pub async fn delete_scholarship(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/school/scholarships/active", session: tower_sessions::Session)]
pub async fn set_scholarship_active(id: String, active: bool) -> Result<(), ServerFnError> {
    use store::RecordStore;

    let (client, user) = auth::require_user(&session).await?;
    ensure_own_scholarship(&client, &user, &id).await?;
    client
        .set_scholarship_active(&id, active)
        .await
        .map_err(auth::server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/school/scholarships/active")]
pub async fn set_scholarship_active(id: String, active: bool) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
