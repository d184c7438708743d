//! # School dashboard
//!
//! [`Dashboard`] is the page's local copy of the school's university row and its
//! scholarships. Mutations go to the backend first; the local copy is only touched
//! once the backend has accepted the change, so a failed call leaves the page exactly
//! as it was.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::RecordStore;
use crate::error::{Error, ValidationErrors};
use crate::models::{Level, NewScholarship, Scholarship, University};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub total_funding: f64,
    pub average_amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub university: Option<University>,
    pub scholarships: Vec<Scholarship>,
}

impl Dashboard {
    /// Fetch the user's university and, if there is one, its scholarships.
    pub async fn load<S: RecordStore>(store: &S, user_id: &str) -> Result<Self, Error> {
        let university = store.university_for_user(user_id).await?;
        let scholarships = match &university {
            Some(u) => store.scholarships_for_university(&u.id).await?,
            None => Vec::new(),
        };
        Ok(Self {
            university,
            scholarships,
        })
    }

    pub fn stats(&self) -> DashboardStats {
        let total = self.scholarships.len();
        let total_funding: f64 = self.scholarships.iter().map(|s| s.amount).sum();
        DashboardStats {
            total,
            active: self.scholarships.iter().filter(|s| s.is_active).count(),
            total_funding,
            average_amount: if total == 0 {
                0.0
            } else {
                total_funding / total as f64
            },
        }
    }

    pub fn can_create_scholarships(&self) -> bool {
        self.university
            .as_ref()
            .is_some_and(|u| u.profile_completed)
    }

    pub async fn delete_scholarship<S: RecordStore>(
        &mut self,
        store: &S,
        id: &str,
    ) -> Result<(), Error> {
        store.delete_scholarship(id).await?;
        self.remove_local(id);
        Ok(())
    }

    /// Flip `is_active` of one scholarship. Returns the new value.
    pub async fn toggle_scholarship<S: RecordStore>(
        &mut self,
        store: &S,
        id: &str,
    ) -> Result<bool, Error> {
        let active = self.toggled_state(id)?;
        store.set_scholarship_active(id, active).await?;
        self.set_active_local(id, active);
        Ok(active)
    }

    /// The `is_active` value a toggle of `id` would write.
    pub fn toggled_state(&self, id: &str) -> Result<bool, Error> {
        self.scholarships
            .iter()
            .find(|s| s.id == id)
            .map(|s| !s.is_active)
            .ok_or_else(|| Error::NotFound(format!("Scholarship {id}")))
    }

    /// Drop a scholarship the backend has already deleted.
    ///
    /// Pages holding the dashboard in shared state apply this to the current value
    /// after the remote call returns, so changes that finished in between survive.
    pub fn remove_local(&mut self, id: &str) {
        self.scholarships.retain(|s| s.id != id);
    }

    /// Record an `is_active` change the backend has already accepted.
    pub fn set_active_local(&mut self, id: &str, active: bool) {
        if let Some(scholarship) = self.scholarships.iter_mut().find(|s| s.id == id) {
            scholarship.is_active = active;
        }
    }

    /// Insert a scholarship for this university and append the stored row.
    pub async fn create_scholarship<S: RecordStore>(
        &mut self,
        store: &S,
        draft: &ScholarshipDraft,
    ) -> Result<Scholarship, Error> {
        let university = match &self.university {
            Some(u) if u.profile_completed => u,
            _ => return Err(Error::ProfileIncomplete),
        };
        let new = draft.validate(&university.id)?;
        let row = store.insert_scholarship(&new).await?;
        self.scholarships.push(row.clone());
        Ok(row)
    }
}

/// Raw input of the new scholarship form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipDraft {
    pub title: String,
    pub description: String,
    pub amount: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub deadline: String,
    pub field_of_study: String,
    /// Empty for "any level".
    pub level: String,
    pub requirements: Vec<String>,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    pub is_exclusive: bool,
    pub is_active: bool,
}

impl Default for ScholarshipDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            amount: String::new(),
            deadline: String::new(),
            field_of_study: String::new(),
            level: String::new(),
            requirements: Vec::new(),
            eligibility: Vec::new(),
            benefits: Vec::new(),
            is_exclusive: false,
            is_active: true,
        }
    }
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl ScholarshipDraft {
    pub fn validate(&self, university_id: &str) -> Result<NewScholarship, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title", "Title is required");
        }

        let amount = self
            .amount
            .trim()
            .replace([',', '$'], "")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0);
        if amount.is_none() {
            errors.insert("amount", "Amount must be a positive number");
        }

        let deadline = NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").ok();
        if deadline.is_none() {
            errors.insert("deadline", "Deadline must be a valid date");
        }

        let level = match self.level.trim() {
            "" => None,
            raw => match raw.parse::<Level>() {
                Ok(level) => Some(level),
                Err(_) => {
                    errors.insert("level", "Unknown level");
                    None
                }
            },
        };

        errors.into_result()?;
        let (Some(amount), Some(deadline)) = (amount, deadline) else {
            return Err(ValidationErrors::new());
        };

        Ok(NewScholarship {
            title: title.to_string(),
            description: crate::models::non_blank(&self.description),
            amount,
            deadline,
            requirements: clean_list(&self.requirements),
            field_of_study: crate::models::non_blank(&self.field_of_study),
            level,
            eligibility: clean_list(&self.eligibility),
            benefits: clean_list(&self.benefits),
            is_exclusive: self.is_exclusive,
            is_active: self.is_active,
            university_id: university_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBackend, Operation};
    use crate::models::{NewUniversity, UniversityUpdate};

    fn draft(title: &str, amount: &str) -> ScholarshipDraft {
        ScholarshipDraft {
            title: title.to_string(),
            amount: amount.to_string(),
            deadline: "2025-03-15".to_string(),
            level: "graduate".to_string(),
            requirements: vec![" GPA 3.5+ ".to_string(), "".to_string()],
            ..ScholarshipDraft::default()
        }
    }

    /// A school with a completed profile and three scholarships.
    async fn seeded() -> (MemoryBackend, Dashboard) {
        let store = MemoryBackend::new();
        store
            .insert_university(&NewUniversity::accepting_terms("u1"))
            .await
            .unwrap();
        store
            .update_university(
                "u1",
                &UniversityUpdate {
                    name: Some("Riverside".to_string()),
                    profile_completed: Some(true),
                    ..UniversityUpdate::default()
                },
            )
            .await
            .unwrap();

        let mut dashboard = Dashboard::load(&store, "u1").await.unwrap();
        for (title, amount) in [("A", "10000"), ("B", "20,000"), ("C", "$30000")] {
            dashboard
                .create_scholarship(&store, &draft(title, amount))
                .await
                .unwrap();
        }
        (store, dashboard)
    }

    fn ids(dashboard: &Dashboard) -> Vec<String> {
        dashboard.scholarships.iter().map(|s| s.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_without_university() {
        let dashboard = Dashboard::load(&MemoryBackend::new(), "nobody").await.unwrap();
        assert_eq!(dashboard, Dashboard::default());
        assert!(!dashboard.can_create_scholarships());
        assert_eq!(dashboard.stats(), DashboardStats::default());
    }

    #[tokio::test]
    async fn test_load_returns_stored_scholarships() {
        let (store, dashboard) = seeded().await;
        let reloaded = Dashboard::load(&store, "u1").await.unwrap();
        assert_eq!(ids(&reloaded), ids(&dashboard));
        assert_eq!(reloaded.scholarships[0].requirements, Some(vec!["GPA 3.5+".to_string()]));
    }

    #[tokio::test]
    async fn test_stats() {
        let (store, mut dashboard) = seeded().await;
        let first = dashboard.scholarships[0].id.clone();
        dashboard.toggle_scholarship(&store, &first).await.unwrap();

        let stats = dashboard.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_funding, 60000.0);
        assert_eq!(stats.average_amount, 20000.0);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_id() {
        let (store, mut dashboard) = seeded().await;
        let before = ids(&dashboard);

        dashboard.delete_scholarship(&store, &before[1]).await.unwrap();
        assert_eq!(ids(&dashboard), vec![before[0].clone(), before[2].clone()]);
        assert!(store.scholarship(&before[1]).is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_untouched() {
        let (store, mut dashboard) = seeded().await;
        let before = dashboard.clone();
        store.fail(Operation::DeleteScholarship);

        let id = before.scholarships[0].id.clone();
        assert!(matches!(
            dashboard.delete_scholarship(&store, &id).await,
            Err(Error::Remote(_))
        ));
        assert_eq!(dashboard, before);
    }

    #[tokio::test]
    async fn test_toggle_flips_only_that_record() {
        let (store, mut dashboard) = seeded().await;
        let id = dashboard.scholarships[1].id.clone();

        assert_eq!(dashboard.toggle_scholarship(&store, &id).await, Ok(false));
        let active: Vec<bool> = dashboard.scholarships.iter().map(|s| s.is_active).collect();
        assert_eq!(active, vec![true, false, true]);
        assert_eq!(store.scholarship(&id).map(|s| s.is_active), Some(false));

        assert_eq!(dashboard.toggle_scholarship(&store, &id).await, Ok(true));
    }

    #[tokio::test]
    async fn test_failed_toggle_and_unknown_id() {
        let (store, mut dashboard) = seeded().await;
        let before = dashboard.clone();

        assert!(matches!(
            dashboard.toggle_scholarship(&store, "missing").await,
            Err(Error::NotFound(_))
        ));

        store.fail(Operation::SetScholarshipActive);
        let id = before.scholarships[0].id.clone();
        assert!(dashboard.toggle_scholarship(&store, &id).await.is_err());
        assert_eq!(dashboard, before);
    }

    #[tokio::test]
    async fn test_interleaved_changes_both_survive() {
        let (store, mut dashboard) = seeded().await;
        let first = dashboard.scholarships[0].id.clone();
        let second = dashboard.scholarships[1].id.clone();
        let third = dashboard.scholarships[2].id.clone();

        // Both changes are started against the same view of the list.
        let active = dashboard.toggled_state(&first).unwrap();
        store.set_scholarship_active(&first, active).await.unwrap();
        store.delete_scholarship(&second).await.unwrap();

        // Each patch lands on whatever the list holds when its call returns.
        dashboard.remove_local(&second);
        dashboard.set_active_local(&first, active);

        let flags = |d: &Dashboard| -> Vec<(String, bool)> {
            d.scholarships.iter().map(|s| (s.id.clone(), s.is_active)).collect()
        };
        let reloaded = Dashboard::load(&store, "u1").await.unwrap();
        assert_eq!(flags(&dashboard), vec![(first, false), (third, true)]);
        assert_eq!(flags(&dashboard), flags(&reloaded));
        assert_eq!(dashboard.stats().active, 1);
    }

    #[test]
    fn test_local_patches_ignore_unknown_ids() {
        let mut dashboard = Dashboard::default();
        dashboard.remove_local("missing");
        dashboard.set_active_local("missing", false);
        assert_eq!(dashboard, Dashboard::default());
        assert!(matches!(dashboard.toggled_state("missing"), Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_requires_completed_profile() {
        let store = MemoryBackend::new();
        store
            .insert_university(&NewUniversity::accepting_terms("u1"))
            .await
            .unwrap();
        let mut dashboard = Dashboard::load(&store, "u1").await.unwrap();

        let err = dashboard
            .create_scholarship(&store, &draft("A", "100"))
            .await
            .unwrap_err();
        assert_eq!(err, Error::ProfileIncomplete);
        assert!(dashboard.scholarships.is_empty());
    }

    #[test]
    fn test_draft_validation() {
        let errors = ScholarshipDraft {
            amount: "-5".to_string(),
            deadline: "15/03/2025".to_string(),
            level: "masters".to_string(),
            ..ScholarshipDraft::default()
        }
        .validate("u")
        .unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["amount", "deadline", "level", "title"]
        );

        let new = draft("  Merit Award ", "25,000").validate("uni").unwrap();
        assert_eq!(new.title, "Merit Award");
        assert_eq!(new.amount, 25000.0);
        assert_eq!(new.level, Some(Level::Graduate));
        assert_eq!(new.requirements, vec!["GPA 3.5+"]);
        assert_eq!(new.description, None);
        assert!(new.is_active);
        assert_eq!(new.university_id, "uni");
    }
}
