//! # Catalog: static listings and the filters behind the catalog pages
//!
//! The public Universities and Scholarships pages render a fixed catalog (see
//! [`data`]) rather than backend rows. Each page keeps a filter value and recomputes
//! the visible subset on every keystroke; [`SchoolFilter::apply`] and
//! [`ScholarshipFilter::apply`] are that recomputation. All text matching is
//! case-insensitive substring matching.

pub mod data;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Level;

pub use data::{applications, find_school, sample_student, scholarships, schools};

/// Public or private institution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    Public,
    Private,
}

impl SchoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolType::Public => "Public",
            SchoolType::Private => "Private",
        }
    }
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchoolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Public" => Ok(SchoolType::Public),
            "Private" => Ok(SchoolType::Private),
            other => Err(format!("Unknown school type: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolContact {
    pub phone: String,
    pub email: String,
    pub admissions_email: String,
    pub fax: Option<String>,
}

/// A partner university as shown on the public catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolListing {
    pub id: String,
    pub name: String,
    /// "City, State"
    pub location: String,
    pub description: String,
    pub image: String,
    pub website: String,
    pub programs: Vec<String>,
    pub accreditations: Vec<String>,
    pub ranking: Option<u32>,
    pub kind: Option<SchoolType>,
    pub address: SchoolAddress,
    pub contact: SchoolContact,
}

impl SchoolListing {
    /// The state part of the location ("Cambridge, Massachusetts" → "Massachusetts").
    pub fn state(&self) -> Option<&str> {
        self.location.split(", ").nth(1)
    }
}

/// A scholarship as shown on the public catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub school_id: String,
    pub school_name: String,
    pub amount: f64,
    pub deadline: NaiveDate,
    pub requirements: Vec<String>,
    pub is_exclusive: bool,
    pub image: String,
    pub field_of_study: String,
    pub level: Level,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    UnderReview,
}

/// A student's application to a scholarship. Sample data only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub scholarship_id: String,
    pub student_id: String,
    pub status: ApplicationStatus,
    pub applied_at: NaiveDate,
    pub documents: Vec<String>,
    pub notes: Option<String>,
}

/// Field-of-study choices offered by the scholarships page: (value, label).
pub const FIELD_CHOICES: [(&str, &str); 4] = [
    ("stem", "STEM"),
    ("business", "Business"),
    ("engineering", "Engineering"),
    ("any", "Any Field"),
];

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Current state of the scholarships page filters. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScholarshipFilter {
    pub search: String,
    pub level: Option<Level>,
    pub field: Option<String>,
}

impl ScholarshipFilter {
    pub fn matches(&self, listing: &ScholarshipListing) -> bool {
        let matches_search = contains_ci(&listing.title, &self.search)
            || contains_ci(&listing.description, &self.search);
        let matches_level = self.level.map_or(true, |level| listing.level == level);
        let matches_field = self
            .field
            .as_deref()
            .map_or(true, |field| contains_ci(&listing.field_of_study, field));

        matches_search && matches_level && matches_field
    }

    pub fn apply<'a>(&self, listings: &'a [ScholarshipListing]) -> Vec<&'a ScholarshipListing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Current state of the universities page filters. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchoolFilter {
    pub search: String,
    pub kind: Option<SchoolType>,
    pub state: Option<String>,
}

impl SchoolFilter {
    pub fn matches(&self, listing: &SchoolListing) -> bool {
        let matches_search = contains_ci(&listing.name, &self.search)
            || contains_ci(&listing.location, &self.search);
        let matches_kind = self.kind.map_or(true, |kind| listing.kind == Some(kind));
        let matches_state = self
            .state
            .as_deref()
            .map_or(true, |state| listing.location.contains(state));

        matches_search && matches_kind && matches_state
    }

    pub fn apply<'a>(&self, listings: &'a [SchoolListing]) -> Vec<&'a SchoolListing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Unique, sorted states for the location dropdown.
pub fn states(listings: &[SchoolListing]) -> Vec<String> {
    let mut states: Vec<String> = listings
        .iter()
        .filter_map(|l| l.state())
        .map(str::to_string)
        .collect();
    states.sort();
    states.dedup();
    states
}

/// Scholarships listed under one school.
pub fn scholarships_for_school(school_id: &str) -> Vec<&'static ScholarshipListing> {
    scholarships()
        .iter()
        .filter(|s| s.school_id == school_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(schools: &[&'a SchoolListing]) -> Vec<&'a str> {
        schools.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_search_harvard_returns_only_harvard() {
        let filter = SchoolFilter {
            search: "Harvard".to_string(),
            ..SchoolFilter::default()
        };
        assert_eq!(names(&filter.apply(schools())), vec!["Harvard University"]);
    }

    #[test]
    fn test_school_search_is_case_insensitive_and_covers_location() {
        let filter = SchoolFilter {
            search: "cambridge".to_string(),
            ..SchoolFilter::default()
        };
        assert_eq!(names(&filter.apply(schools())), vec!["Harvard University", "MIT"]);
    }

    #[test]
    fn test_empty_filters_return_everything() {
        assert_eq!(SchoolFilter::default().apply(schools()).len(), schools().len());
        assert_eq!(
            ScholarshipFilter::default().apply(scholarships()).len(),
            scholarships().len()
        );
    }

    #[test]
    fn test_school_type_and_state() {
        let public = SchoolFilter {
            kind: Some(SchoolType::Public),
            ..SchoolFilter::default()
        };
        assert_eq!(
            names(&public.apply(schools())),
            vec!["University of California, Berkeley"]
        );

        let california_private = SchoolFilter {
            kind: Some(SchoolType::Private),
            state: Some("California".to_string()),
            ..SchoolFilter::default()
        };
        assert_eq!(
            names(&california_private.apply(schools())),
            vec!["Stanford University"]
        );
    }

    #[test]
    fn test_states_are_unique_and_sorted() {
        assert_eq!(
            states(schools()),
            vec!["California", "Connecticut", "Massachusetts", "New Jersey"]
        );
    }

    #[test]
    fn test_filters_equal_predicate_conjunction() {
        let searches = ["", "excellence", "STEM", "scholarship", "zzz"];
        let levels = [None, Some(Level::Undergraduate), Some(Level::Graduate), Some(Level::Doctorate)];
        let fields = [None, Some("stem"), Some("business"), Some("engineering"), Some("any")];

        for search in searches {
            for level in levels {
                for field in fields {
                    let filter = ScholarshipFilter {
                        search: search.to_string(),
                        level,
                        field: field.map(str::to_string),
                    };
                    let expected: Vec<&str> = scholarships()
                        .iter()
                        .filter(|s| {
                            let text = search.to_lowercase();
                            (s.title.to_lowercase().contains(&text)
                                || s.description.to_lowercase().contains(&text))
                                && level.map_or(true, |l| s.level == l)
                                && field.map_or(true, |f| {
                                    s.field_of_study.to_lowercase().contains(f)
                                })
                        })
                        .map(|s| s.id.as_str())
                        .collect();
                    let actual: Vec<&str> =
                        filter.apply(scholarships()).iter().map(|s| s.id.as_str()).collect();
                    assert_eq!(actual, expected, "search={search:?} level={level:?} field={field:?}");
                }
            }
        }
    }

    #[test]
    fn test_school_filters_equal_predicate_conjunction() {
        let searches = ["", "harvard", "CAMBRIDGE", "university", "zzz"];
        let kinds = [None, Some(SchoolType::Public), Some(SchoolType::Private)];
        let mut all_states: Vec<Option<String>> = states(schools()).into_iter().map(Some).collect();
        all_states.push(None);
        all_states.push(Some("Texas".to_string()));

        for search in searches {
            for kind in kinds {
                for state in &all_states {
                    let filter = SchoolFilter {
                        search: search.to_string(),
                        kind,
                        state: state.clone(),
                    };
                    let expected: Vec<&str> = schools()
                        .iter()
                        .filter(|s| {
                            let text = search.to_lowercase();
                            (s.name.to_lowercase().contains(&text)
                                || s.location.to_lowercase().contains(&text))
                                && kind.map_or(true, |k| s.kind == Some(k))
                                && state.as_deref().map_or(true, |st| s.location.contains(st))
                        })
                        .map(|s| s.id.as_str())
                        .collect();
                    let actual: Vec<&str> =
                        filter.apply(schools()).iter().map(|s| s.id.as_str()).collect();
                    assert_eq!(actual, expected, "search={search:?} kind={kind:?} state={state:?}");
                }
            }
        }
    }

    #[test]
    fn test_scholarship_level_and_field() {
        let graduate = ScholarshipFilter {
            level: Some(Level::Graduate),
            ..ScholarshipFilter::default()
        };
        assert_eq!(graduate.apply(scholarships()).len(), 3);

        let stem = ScholarshipFilter {
            field: Some("stem".to_string()),
            ..ScholarshipFilter::default()
        };
        let titles: Vec<&str> = stem
            .apply(scholarships())
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["STEM Innovation Grant"]);
    }

    #[test]
    fn test_scholarships_for_school() {
        let harvard: Vec<&str> = scholarships_for_school("1")
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(
            harvard,
            vec!["International Excellence Scholarship", "Business Excellence Award"]
        );
        assert!(scholarships_for_school("6").is_empty());
    }
}
