use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Postal address block of a university row. Keys are camelCase on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Non-empty parts joined with ", ", street first.
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Contact block of a university row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admissions_email: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

/// A row of the `universities` table. One per school account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub programs: Option<Vec<String>>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact: Option<Contact>,
    pub user_id: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl University {
    pub fn programs(&self) -> &[String] {
        self.programs.as_deref().unwrap_or(&[])
    }

    /// Name, or a placeholder while the profile is still empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "University Dashboard"
        } else {
            &self.name
        }
    }

    /// Apply a patch the way the backend would.
    pub fn apply(&mut self, update: &UniversityUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(location) = &update.location {
            self.location = Some(location.clone());
        }
        if let Some(website) = &update.website {
            self.website = Some(website.clone());
        }
        if let Some(programs) = &update.programs {
            self.programs = Some(programs.clone());
        }
        if let Some(address) = &update.address {
            self.address = Some(address.clone());
        }
        if let Some(contact) = &update.contact {
            self.contact = Some(contact.clone());
        }
        if let Some(terms_accepted) = update.terms_accepted {
            self.terms_accepted = terms_accepted;
        }
        if let Some(profile_completed) = update.profile_completed {
            self.profile_completed = profile_completed;
        }
    }
}

/// Insert payload for the row created when a school accepts the terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUniversity {
    pub name: String,
    pub user_id: String,
    pub terms_accepted: bool,
    pub profile_completed: bool,
    pub is_approved: bool,
}

impl NewUniversity {
    /// Empty profile with the terms already accepted; the wizard fills in the rest.
    pub fn accepting_terms(user_id: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            user_id: user_id.into(),
            terms_accepted: true,
            profile_completed: false,
            is_approved: false,
        }
    }
}

/// Sparse patch for a university row. Unset fields are left out of the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversityUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_accepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
}

impl UniversityUpdate {
    pub fn terms_accepted() -> Self {
        Self {
            terms_accepted: Some(true),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_nulls_deserializes() {
        let row = r#"{
            "id": "b0c1",
            "name": "",
            "description": null,
            "location": null,
            "website": null,
            "logo_url": null,
            "programs": null,
            "address": null,
            "contact": null,
            "user_id": "u1",
            "is_approved": false,
            "profile_completed": false,
            "terms_accepted": true,
            "created_at": "2024-06-01T12:00:00.123456+00:00",
            "updated_at": "2024-06-01T12:00:00.123456+00:00"
        }"#;
        let university: University = serde_json::from_str(row).unwrap();
        assert!(university.terms_accepted);
        assert!(university.programs().is_empty());
        assert_eq!(university.display_name(), "University Dashboard");
    }

    #[test]
    fn test_address_uses_camel_case_keys() {
        let address = Address {
            zip_code: Some("02138".to_string()),
            ..Address::default()
        };
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"zipCode\":\"02138\""));

        let contact: Contact =
            serde_json::from_str(r#"{"admissionsEmail":"admissions@x.edu"}"#).unwrap();
        assert_eq!(contact.admissions_email.as_deref(), Some("admissions@x.edu"));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let json = serde_json::to_string(&UniversityUpdate::terms_accepted()).unwrap();
        assert_eq!(json, r#"{"terms_accepted":true}"#);
    }

    #[test]
    fn test_address_one_line() {
        let address = Address {
            street: Some("77 Massachusetts Avenue".to_string()),
            city: Some("Cambridge".to_string()),
            state: Some("".to_string()),
            zip_code: Some("02139".to_string()),
            country: None,
        };
        assert_eq!(address.one_line(), "77 Massachusetts Avenue, Cambridge, 02139");
    }
}
