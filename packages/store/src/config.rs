//! # Backend configuration
//!
//! The hosted backend is addressed by two values read from the environment:
//!
//! ```text
//! SUPABASE_URL=https://xyzcompany.supabase.co
//! SUPABASE_ANON_KEY=eyJhbGciOi...
//! ```
//!
//! A `.env` file in the working directory is honoured. Both values must be present
//! and non-blank; anything else is [`Error::Config`].

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL without a trailing slash.
    pub url: String,
    /// Public (anonymous) API key.
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Load `.env` (if any), then read the process environment.
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} is not set")))
        };
        Ok(Self::new(required(URL_VAR)?, required(ANON_KEY_VAR)?))
    }

    /// `{url}/auth/v1{path}`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{path}", self.url)
    }

    /// `{url}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = BackendConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co/"),
            (ANON_KEY_VAR, "anon"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert_eq!(
            config.auth_url("/token?grant_type=password"),
            "https://abc.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            config.table_url("universities"),
            "https://abc.supabase.co/rest/v1/universities"
        );
    }

    #[test]
    fn test_missing_or_blank_is_config_error() {
        let err = BackendConfig::from_lookup(lookup(&[(ANON_KEY_VAR, "anon")])).unwrap_err();
        assert_eq!(err, Error::Config("SUPABASE_URL is not set".to_string()));

        let err = BackendConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co"),
            (ANON_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
