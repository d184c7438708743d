//! Client-side backend: the store traits implemented over the server functions.

use dioxus::prelude::ServerFnError;
use store::{
    AuthBackend, Error, NewScholarship, NewUniversity, NewUser, RecordStore, Scholarship,
    University, UniversityUpdate, User,
};

/// Backend used by the pages. Stateless; the session lives in the server's cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Remote;

fn message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

fn remote_error(err: ServerFnError) -> Error {
    Error::remote(message(err))
}

fn auth_error(err: ServerFnError) -> Error {
    Error::auth(message(err))
}

impl AuthBackend for Remote {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, Error> {
        crate::login(email.to_string(), password.to_string())
            .await
            .map_err(auth_error)
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &NewUser) -> Result<User, Error> {
        crate::register(
            email.to_string(),
            password.to_string(),
            profile.name.clone(),
            profile.role,
        )
        .await
        .map_err(auth_error)
    }

    async fn current_user(&self) -> Result<Option<User>, Error> {
        crate::get_current_user().await.map_err(remote_error)
    }

    async fn sign_out(&self) -> Result<(), Error> {
        crate::logout().await.map_err(remote_error)
    }
}

impl RecordStore for Remote {
    async fn university_for_user(&self, user_id: &str) -> Result<Option<University>, Error> {
        crate::get_university(user_id.to_string())
            .await
            .map_err(remote_error)
    }

    async fn insert_university(&self, university: &NewUniversity) -> Result<University, Error> {
        crate::insert_university(university.clone())
            .await
            .map_err(remote_error)
    }

    async fn update_university(&self, user_id: &str, update: &UniversityUpdate) -> Result<(), Error> {
        crate::update_university(user_id.to_string(), update.clone())
            .await
            .map_err(remote_error)
    }

    async fn scholarships_for_university(&self, university_id: &str) -> Result<Vec<Scholarship>, Error> {
        crate::list_scholarships(university_id.to_string())
            .await
            .map_err(remote_error)
    }

    async fn insert_scholarship(&self, scholarship: &NewScholarship) -> Result<Scholarship, Error> {
        crate::create_scholarship(scholarship.clone())
            .await
            .map_err(remote_error)
    }

    async fn delete_scholarship(&self, id: &str) -> Result<(), Error> {
        crate::delete_scholarship(id.to_string())
            .await
            .map_err(remote_error)
    }

    async fn set_scholarship_active(&self, id: &str, active: bool) -> Result<(), Error> {
        crate::set_scholarship_active(id.to_string(), active)
            .await
            .map_err(remote_error)
    }
}
