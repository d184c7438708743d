//! # Backend seams
//!
//! Pages and the [`Session`](crate::Session) never talk to the hosted backend
//! directly; they go through these two traits. The web client implements them by
//! calling server functions, the server implements them over REST, and tests use
//! [`MemoryBackend`](crate::MemoryBackend).

use crate::error::Error;
use crate::models::{
    NewScholarship, NewUniversity, NewUser, Scholarship, University, UniversityUpdate, User,
};

/// Credential operations of the identity provider.
pub trait AuthBackend {
    /// Exchange email and password for a session.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, Error>>;

    /// Create a credential carrying `profile` as metadata and open a session for it.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &NewUser,
    ) -> impl std::future::Future<Output = Result<User, Error>>;

    /// The user of the persisted session, if any.
    fn current_user(&self) -> impl std::future::Future<Output = Result<Option<User>, Error>>;

    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), Error>>;
}

/// Row operations on the `universities` and `scholarships` tables.
pub trait RecordStore {
    fn university_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<University>, Error>>;

    fn insert_university(
        &self,
        university: &NewUniversity,
    ) -> impl std::future::Future<Output = Result<University, Error>>;

    /// Patch the university owned by `user_id`.
    fn update_university(
        &self,
        user_id: &str,
        update: &UniversityUpdate,
    ) -> impl std::future::Future<Output = Result<(), Error>>;

    fn scholarships_for_university(
        &self,
        university_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Scholarship>, Error>>;

    fn insert_scholarship(
        &self,
        scholarship: &NewScholarship,
    ) -> impl std::future::Future<Output = Result<Scholarship, Error>>;

    fn delete_scholarship(&self, id: &str)
        -> impl std::future::Future<Output = Result<(), Error>>;

    fn set_scholarship_active(
        &self,
        id: &str,
        active: bool,
    ) -> impl std::future::Future<Output = Result<(), Error>>;
}
