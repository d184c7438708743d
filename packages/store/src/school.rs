//! School onboarding: terms → profile wizard → dashboard.

use crate::backend::RecordStore;
use crate::error::Error;
use crate::models::{Landing, NewUniversity, University, UniversityUpdate};
use crate::wizard::ProfileWizard;

/// Record the school's acceptance of the partnership terms.
///
/// Updates the existing university row, or creates an empty one with the terms
/// already accepted. Refuses when the checkbox was not ticked.
pub async fn accept_terms<S: RecordStore>(
    store: &S,
    user_id: &str,
    accepted: bool,
) -> Result<Landing, Error> {
    if !accepted {
        return Err(Error::TermsNotAccepted);
    }

    match store.university_for_user(user_id).await? {
        Some(_) => {
            store
                .update_university(user_id, &UniversityUpdate::terms_accepted())
                .await?
        }
        None => {
            store
                .insert_university(&NewUniversity::accepting_terms(user_id))
                .await?;
        }
    }
    Ok(Landing::SchoolProfileSetup)
}

/// Validate the wizard's last step and write the whole profile in one update.
pub async fn complete_profile<S: RecordStore>(
    store: &S,
    user_id: &str,
    wizard: &mut ProfileWizard,
) -> Result<Landing, Error> {
    let update = wizard.submission()?;
    save_profile(store, user_id, &update).await
}

/// Write an already validated profile.
pub async fn save_profile<S: RecordStore>(
    store: &S,
    user_id: &str,
    update: &UniversityUpdate,
) -> Result<Landing, Error> {
    store.update_university(user_id, update).await?;
    Ok(Landing::SchoolDashboard)
}

/// Where the profile setup page should send the user instead of showing the wizard.
pub fn profile_setup_redirect(university: Option<&University>) -> Option<Landing> {
    match university {
        Some(u) if u.profile_completed => Some(Landing::SchoolDashboard),
        Some(u) if !u.terms_accepted => Some(Landing::SchoolTerms),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBackend, Operation};
    use crate::models::{RegistrationForm, Role};
    use crate::session::Session;
    use crate::wizard::{Field, WizardStep};

    fn fill(wizard: &mut ProfileWizard) {
        let values = [
            (Field::Name, "Riverside Institute"),
            (Field::Description, "Small liberal arts college"),
            (Field::Website, "https://riverside.edu"),
            (Field::Location, "Riverside, California"),
            (Field::Street, "1 College Way"),
            (Field::City, "Riverside"),
            (Field::State, "California"),
            (Field::ZipCode, "92501"),
            (Field::Phone, "+1 (951) 555-0100"),
            (Field::Email, "info@riverside.edu"),
            (Field::AdmissionsEmail, "admissions@riverside.edu"),
        ];
        for (field, value) in values {
            wizard.set(field, value);
        }
        wizard.add_program("History");
    }

    #[tokio::test]
    async fn test_unchecked_terms_are_refused() {
        let store = MemoryBackend::new();
        let err = accept_terms(&store, "u1", false).await.unwrap_err();
        assert_eq!(err, Error::TermsNotAccepted);
        assert_eq!(store.university_count(), 0);
    }

    #[tokio::test]
    async fn test_accept_terms_inserts_then_updates() {
        let store = MemoryBackend::new();
        assert_eq!(
            accept_terms(&store, "u1", true).await,
            Ok(Landing::SchoolProfileSetup)
        );
        let row = store.university("u1").unwrap();
        assert!(row.terms_accepted);
        assert!(!row.profile_completed);
        assert!(!row.is_approved);
        assert_eq!(row.name, "");

        accept_terms(&store, "u1", true).await.unwrap();
        assert_eq!(store.university_count(), 1);
    }

    #[tokio::test]
    async fn test_accept_terms_failure_propagates() {
        let store = MemoryBackend::new();
        store.fail(Operation::InsertUniversity);
        assert!(matches!(
            accept_terms(&store, "u1", true).await,
            Err(Error::Remote(_))
        ));
    }

    #[tokio::test]
    async fn test_incomplete_wizard_writes_nothing() {
        let store = MemoryBackend::new();
        accept_terms(&store, "u1", true).await.unwrap();

        let mut wizard = ProfileWizard::new();
        let err = complete_profile(&store, "u1", &mut wizard).await.unwrap_err();
        assert!(err.validation().is_some_and(|e| e.contains("programs")));
        assert!(!store.university("u1").unwrap().profile_completed);
    }

    #[tokio::test]
    async fn test_edits_during_save_stay_in_wizard() {
        let store = MemoryBackend::new();
        accept_terms(&store, "u1", true).await.unwrap();

        let mut wizard = ProfileWizard::new();
        fill(&mut wizard);
        let update = wizard.submission().unwrap();

        // The form stays editable while the write is in flight.
        wizard.set(Field::Name, "Riverside College");
        assert_eq!(
            save_profile(&store, "u1", &update).await,
            Ok(Landing::SchoolDashboard)
        );

        assert_eq!(store.university("u1").unwrap().name, "Riverside Institute");
        assert_eq!(wizard.form.value(Field::Name), "Riverside College");
        assert_eq!(wizard.form.programs, vec!["History".to_string()]);
    }

    #[test]
    fn test_profile_setup_redirect() {
        assert_eq!(profile_setup_redirect(None), None);

        let mut row: University = serde_json::from_str(
            r#"{"id":"x","user_id":"u1","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(profile_setup_redirect(Some(&row)), Some(Landing::SchoolTerms));

        row.terms_accepted = true;
        assert_eq!(profile_setup_redirect(Some(&row)), None);

        row.profile_completed = true;
        assert_eq!(
            profile_setup_redirect(Some(&row)),
            Some(Landing::SchoolDashboard)
        );
    }

    #[tokio::test]
    async fn test_school_onboarding_end_to_end() {
        let backend = MemoryBackend::new();
        let session = Session::new(backend.clone());

        let user = session
            .register(&RegistrationForm {
                name: "Riverside Admissions".to_string(),
                email: "admin@riverside.edu".to_string(),
                password: "pw".to_string(),
                confirm_password: "pw".to_string(),
                role: Role::School,
            })
            .await
            .unwrap();
        assert_eq!(user.role.landing_after_registration(), Landing::SchoolTerms);

        let landing = accept_terms(&backend, &user.id, true).await.unwrap();
        assert_eq!(landing, Landing::SchoolProfileSetup);
        let row = backend.university_for_user(&user.id).await.unwrap();
        assert!(row.as_ref().is_some_and(|u| u.terms_accepted));
        assert_eq!(profile_setup_redirect(row.as_ref()), None);

        let mut wizard = ProfileWizard::new();
        fill(&mut wizard);
        while !wizard.step.is_last() {
            assert!(wizard.next());
        }
        assert_eq!(wizard.step, WizardStep::Academic);

        let landing = complete_profile(&backend, &user.id, &mut wizard).await.unwrap();
        assert_eq!(landing, Landing::SchoolDashboard);

        let row = backend.university(&user.id).unwrap();
        assert!(row.profile_completed);
        assert_eq!(row.name, "Riverside Institute");
        assert_eq!(row.programs(), ["History".to_string()]);
        assert_eq!(
            profile_setup_redirect(Some(&row)),
            Some(Landing::SchoolDashboard)
        );
    }
}
