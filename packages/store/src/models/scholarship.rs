use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Degree level a scholarship targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Undergraduate,
    Graduate,
    Doctorate,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Undergraduate, Level::Graduate, Level::Doctorate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Undergraduate => "undergraduate",
            Level::Graduate => "graduate",
            Level::Doctorate => "doctorate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Undergraduate => "Undergraduate",
            Level::Graduate => "Graduate",
            Level::Doctorate => "Doctorate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "undergraduate" => Ok(Level::Undergraduate),
            "graduate" => Ok(Level::Graduate),
            "doctorate" => Ok(Level::Doctorate),
            other => Err(format!("Unknown level: {other}")),
        }
    }
}

/// A row of the `scholarships` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub eligibility: Option<Vec<String>>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_active: bool,
    pub university_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new scholarship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewScholarship {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub deadline: NaiveDate,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    pub is_exclusive: bool,
    pub is_active: bool,
    pub university_id: String,
}

/// `25000.0` → `"$25,000"`.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `2024-03-15` → `"Mar 15, 2024"`.
pub fn format_deadline(deadline: NaiveDate) -> String {
    deadline.format("%b %-d, %Y").to_string()
}
