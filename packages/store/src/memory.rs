use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::backend::{AuthBackend, RecordStore};
use crate::error::Error;
use crate::models::{
    NewScholarship, NewUniversity, NewUser, Scholarship, University, UniversityUpdate, User,
};

/// Backend operations that can be made to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SignIn,
    SignUp,
    CurrentUser,
    SignOut,
    FindUniversity,
    InsertUniversity,
    UpdateUniversity,
    ListScholarships,
    InsertScholarship,
    DeleteScholarship,
    SetScholarshipActive,
}

#[derive(Debug, Default)]
struct State {
    /// email → (password, user)
    credentials: HashMap<String, (String, User)>,
    current: Option<User>,
    universities: Vec<University>,
    scholarships: Vec<Scholarship>,
    failing: HashSet<Operation>,
    next_id: u64,
}

impl State {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn check(&self, op: Operation) -> Result<(), Error> {
        if self.failing.contains(&op) {
            Err(Error::remote(format!("{op:?} failed")))
        } else {
            Ok(())
        }
    }
}

/// In-memory auth and record backend for tests and offline runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `op` fail with [`Error::Remote`].
    pub fn fail(&self, op: Operation) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.state.lock().unwrap().failing.remove(&op);
    }

    /// The stored university row of `user_id`.
    pub fn university(&self, user_id: &str) -> Option<University> {
        self.state
            .lock()
            .unwrap()
            .universities
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
    }

    pub fn university_count(&self) -> usize {
        self.state.lock().unwrap().universities.len()
    }

    pub fn scholarship(&self, id: &str) -> Option<Scholarship> {
        self.state
            .lock()
            .unwrap()
            .scholarships
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }
}

impl AuthBackend for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::SignIn)?;
        let user = match state.credentials.get(&email.trim().to_lowercase()) {
            Some((stored, user)) if stored == password => user.clone(),
            _ => return Err(Error::auth("Invalid login credentials")),
        };
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &NewUser) -> Result<User, Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::SignUp)?;
        let key = email.trim().to_lowercase();
        if state.credentials.contains_key(&key) {
            return Err(Error::auth("User already registered"));
        }
        let user = User {
            id: state.id("user"),
            email: email.trim().to_string(),
            name: profile.name.clone(),
            role: profile.role,
            avatar_url: None,
            has_paid_process: None,
        };
        state
            .credentials
            .insert(key, (password.to_string(), user.clone()));
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn current_user(&self) -> Result<Option<User>, Error> {
        let state = self.state.lock().unwrap();
        state.check(Operation::CurrentUser)?;
        Ok(state.current.clone())
    }

    async fn sign_out(&self) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::SignOut)?;
        state.current = None;
        Ok(())
    }
}

impl RecordStore for MemoryBackend {
    async fn university_for_user(&self, user_id: &str) -> Result<Option<University>, Error> {
        let state = self.state.lock().unwrap();
        state.check(Operation::FindUniversity)?;
        Ok(state
            .universities
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned())
    }

    async fn insert_university(&self, university: &NewUniversity) -> Result<University, Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::InsertUniversity)?;
        if state
            .universities
            .iter()
            .any(|u| u.user_id == university.user_id)
        {
            return Err(Error::remote(
                "duplicate key value violates unique constraint \"universities_user_id_key\"",
            ));
        }
        let now = Utc::now();
        let row = University {
            id: state.id("university"),
            name: university.name.clone(),
            description: None,
            location: None,
            website: None,
            logo_url: None,
            programs: None,
            address: None,
            contact: None,
            user_id: university.user_id.clone(),
            is_approved: university.is_approved,
            profile_completed: university.profile_completed,
            terms_accepted: university.terms_accepted,
            created_at: now,
            updated_at: now,
        };
        state.universities.push(row.clone());
        Ok(row)
    }

    async fn update_university(&self, user_id: &str, update: &UniversityUpdate) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::UpdateUniversity)?;
        // Matching zero rows is not an error, as with a filtered REST update.
        for university in state.universities.iter_mut().filter(|u| u.user_id == user_id) {
            university.apply(update);
            university.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn scholarships_for_university(&self, university_id: &str) -> Result<Vec<Scholarship>, Error> {
        let state = self.state.lock().unwrap();
        state.check(Operation::ListScholarships)?;
        Ok(state
            .scholarships
            .iter()
            .filter(|s| s.university_id == university_id)
            .cloned()
            .collect())
    }

    async fn insert_scholarship(&self, scholarship: &NewScholarship) -> Result<Scholarship, Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::InsertScholarship)?;
        let now = Utc::now();
        let row = Scholarship {
            id: state.id("scholarship"),
            title: scholarship.title.clone(),
            description: scholarship.description.clone(),
            amount: scholarship.amount,
            deadline: scholarship.deadline,
            requirements: Some(scholarship.requirements.clone()),
            field_of_study: scholarship.field_of_study.clone(),
            level: scholarship.level,
            eligibility: Some(scholarship.eligibility.clone()),
            benefits: Some(scholarship.benefits.clone()),
            is_exclusive: scholarship.is_exclusive,
            is_active: scholarship.is_active,
            university_id: scholarship.university_id.clone(),
            created_at: now,
            updated_at: now,
        };
        state.scholarships.push(row.clone());
        Ok(row)
    }

    async fn delete_scholarship(&self, id: &str) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::DeleteScholarship)?;
        state.scholarships.retain(|s| s.id != id);
        Ok(())
    }

    async fn set_scholarship_active(&self, id: &str, active: bool) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.check(Operation::SetScholarshipActive)?;
        if let Some(scholarship) = state.scholarships.iter_mut().find(|s| s.id == id) {
            scholarship.is_active = active;
            scholarship.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn school() -> NewUser {
        NewUser {
            name: "State College".to_string(),
            role: Role::School,
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let backend = MemoryBackend::new();
        let user = backend
            .sign_up("admin@state.edu", "pw", &school())
            .await
            .unwrap();
        assert_eq!(user.role, Role::School);
        assert_eq!(backend.current_user().await.unwrap(), Some(user.clone()));

        backend.sign_out().await.unwrap();
        assert_eq!(backend.current_user().await.unwrap(), None);

        let again = backend.sign_in("Admin@State.edu", "pw").await.unwrap();
        assert_eq!(again.id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_duplicate_email() {
        let backend = MemoryBackend::new();
        backend.sign_up("a@b.com", "pw", &school()).await.unwrap();

        let err = backend.sign_in("a@b.com", "nope").await.unwrap_err();
        assert_eq!(err, Error::auth("Invalid login credentials"));

        let err = backend.sign_up("a@b.com", "pw", &school()).await.unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let backend = MemoryBackend::new();
        backend.fail(Operation::FindUniversity);
        assert!(matches!(
            backend.university_for_user("u").await,
            Err(Error::Remote(_))
        ));

        backend.recover(Operation::FindUniversity);
        assert_eq!(backend.university_for_user("u").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_university_patches_row() {
        let backend = MemoryBackend::new();
        backend
            .insert_university(&NewUniversity {
                terms_accepted: false,
                ..NewUniversity::accepting_terms("u1")
            })
            .await
            .unwrap();

        backend
            .update_university("u1", &UniversityUpdate::terms_accepted())
            .await
            .unwrap();
        backend
            .update_university("nobody", &UniversityUpdate::terms_accepted())
            .await
            .unwrap();

        let row = backend.university("u1").unwrap();
        assert!(row.terms_accepted);
        assert!(!row.profile_completed);
        assert_eq!(backend.university_count(), 1);
    }

    #[tokio::test]
    async fn test_one_university_per_user() {
        let backend = MemoryBackend::new();
        backend
            .insert_university(&NewUniversity::accepting_terms("u1"))
            .await
            .unwrap();
        assert!(backend
            .insert_university(&NewUniversity::accepting_terms("u1"))
            .await
            .is_err());
    }
}
