//! # Backend records and write-side shapes
//!
//! These mirror the rows of the hosted backend's `users`, `universities` and
//! `scholarships` tables. Every nested or optional column is an explicit typed field so
//! that a row missing a column (or carrying `null`) still deserializes.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in identity and its [`Role`]. |
//! | [`University`] | A school's profile row, including its [`Address`] and [`Contact`] blocks. |
//! | [`Scholarship`] | A funded opportunity owned by one university. |
//! | [`NewUniversity`], [`UniversityUpdate`], [`NewScholarship`] | Insert and patch payloads. |
//! | [`RegistrationForm`], [`NewUser`] | What the register page collects and what is sent. |

mod scholarship;
mod university;
mod user;

pub use scholarship::{format_amount, format_deadline, Level, NewScholarship, Scholarship};
pub use university::{Address, Contact, NewUniversity, University, UniversityUpdate};
pub use user::{Landing, NewUser, RegistrationForm, Role, User};

/// `None` for blank input, the trimmed text otherwise.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
