//! # Users, roles and where each role lands
//!
//! [`User`] is built from the backend session; its role comes from the session's user
//! metadata and defaults to [`Role::Student`] when absent or unrecognised.
//!
//! [`Landing`] names the pages a user is sent to after logging in or registering, so
//! the routing rules can be tested without a router.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// The three kinds of account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    School,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::School => "school",
            Role::Admin => "admin",
        }
    }

    /// Where a freshly logged in user of this role goes.
    pub fn landing(&self) -> Landing {
        match self {
            Role::Student => Landing::StudentDashboard,
            Role::School => Landing::SchoolDashboard,
            Role::Admin => Landing::AdminDashboard,
        }
    }

    /// Where a freshly registered user of this role goes. Schools accept terms first.
    pub fn landing_after_registration(&self) -> Landing {
        match self {
            Role::School => Landing::SchoolTerms,
            other => other.landing(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "school" => Ok(Role::School),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// A page a user is redirected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Home,
    StudentDashboard,
    SchoolDashboard,
    AdminDashboard,
    SchoolTerms,
    SchoolProfileSetup,
}

impl Landing {
    pub fn path(&self) -> &'static str {
        match self {
            Landing::Home => "/",
            Landing::StudentDashboard => "/student/dashboard",
            Landing::SchoolDashboard => "/school/dashboard",
            Landing::AdminDashboard => "/admin/dashboard",
            Landing::SchoolTerms => "/school/terms",
            Landing::SchoolProfileSetup => "/school/setup-profile",
        }
    }
}

/// The signed-in identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub has_paid_process: Option<bool>,
}

impl User {
    /// Name, falling back to the email address when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn landing(&self) -> Landing {
        self.role.landing()
    }
}

/// Profile metadata attached to a new credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
}

/// Everything the register page collects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Presence checks plus password confirmation.
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.insert("email", "Please enter a valid email");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }

        errors.into_result()?;
        Ok(NewUser {
            name: self.name.trim().to_string(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            role: Role::School,
        }
    }

    #[test]
    fn test_role_landings() {
        assert_eq!(Role::Student.landing().path(), "/student/dashboard");
        assert_eq!(Role::School.landing().path(), "/school/dashboard");
        assert_eq!(Role::Admin.landing().path(), "/admin/dashboard");
        assert_eq!(
            Role::School.landing_after_registration().path(),
            "/school/terms"
        );
        assert_eq!(
            Role::Student.landing_after_registration(),
            Landing::StudentDashboard
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("School".parse::<Role>(), Ok(Role::School));
        assert!("professor".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.com","name":""}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.display_name(), "a@b.com");
        assert!(user.has_paid_process.is_none());
    }

    #[test]
    fn test_registration_valid() {
        let new_user = form().validate().unwrap();
        assert_eq!(new_user.name, "Ada Lovelace");
        assert_eq!(new_user.role, Role::School);
    }

    #[test]
    fn test_registration_password_mismatch() {
        let mut f = form();
        f.confirm_password = "different".to_string();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_registration_missing_fields() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }
}
