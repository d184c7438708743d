//! # Store crate: the framework-free core of Matrícula USA
//!
//! Everything the pages do that is not rendering lives here, so it can be unit tested
//! without a browser or a network.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Backend records (`User`, `University`, `Scholarship`) and their write-side shapes. |
//! | [`catalog`] | Static school/scholarship listings plus the filters behind the catalog pages. |
//! | [`wizard`] | The four-step school profile wizard as an explicit state machine. |
//! | [`session`] | Explicit session object: restore, login, register, logout, subscribers. |
//! | [`school`] | School onboarding: terms acceptance, profile completion, entry redirects. |
//! | [`dashboard`] | School dashboard state and its scholarship mutations. |
//! | [`backend`] | The [`AuthBackend`] and [`RecordStore`] traits every backend implements. |
//! | [`config`] | Backend URL and public key, read from the environment. |
//! | [`error`] | The crate-wide [`Error`] taxonomy and [`ValidationErrors`]. |

pub mod backend;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod school;
pub mod session;
pub mod wizard;

mod memory;
pub use memory::{MemoryBackend, Operation};

pub use backend::{AuthBackend, RecordStore};
pub use config::BackendConfig;
pub use dashboard::{Dashboard, DashboardStats, ScholarshipDraft};
pub use error::{Error, ValidationErrors};
pub use models::{
    Address, Contact, Landing, Level, NewScholarship, NewUniversity, NewUser, RegistrationForm,
    Role, Scholarship, University, UniversityUpdate, User,
};
pub use session::Session;
pub use wizard::{Field, ProfileForm, ProfileWizard, WizardStep};
