//! Error taxonomy shared by every layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Errors produced by sessions, onboarding and dashboard operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Missing or malformed environment. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),
    /// Invalid credentials, duplicate registration and the like.
    #[error("{0}")]
    Auth(String),
    /// One or more form fields failed validation.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// The backend could not be reached or rejected the request.
    #[error("{0}")]
    Remote(String),
    #[error("You must be signed in to do that")]
    NotAuthenticated,
    #[error("You must accept the terms and conditions to continue")]
    TermsNotAccepted,
    #[error("Complete your university profile before creating scholarships")]
    ProfileIncomplete,
    #[error("{0} not found")]
    NotFound(String),
}

impl Error {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Per-field messages, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Field path (`"name"`, `"address.street"`, ...) to a human readable message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut messages = self.0.values();
        match messages.next() {
            Some(first) => {
                write!(f, "{first}")?;
                for message in messages {
                    write!(f, "; {message}")?;
                }
                Ok(())
            }
            None => write!(f, "no validation errors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert("name", "University name is required");
        errors.insert("website", "Website is required");

        let err = Error::from(errors);
        assert_eq!(
            err.to_string(),
            "University name is required; Website is required"
        );
        assert_eq!(err.validation().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.insert("programs", "At least one program is required");
        let err = errors.into_result().unwrap_err();
        assert!(err.contains("programs"));
    }
}
