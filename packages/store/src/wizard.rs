//! # School profile wizard
//!
//! Four linear steps: [`WizardStep::BasicInfo`] → [`WizardStep::Location`] →
//! [`WizardStep::Contact`] → [`WizardStep::Academic`]. Moving forward goes through
//! [`advance`], which only succeeds when every required field of the current step is
//! non-blank; moving back never validates. Nothing is persisted until the final
//! submission, which is written in one update by [`crate::school::complete_profile`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::models::{Address, Contact, UniversityUpdate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Location,
    Contact,
    Academic,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Location,
        WizardStep::Contact,
        WizardStep::Academic,
    ];

    /// 1-based position, as shown in "Step 2 of 4".
    pub fn number(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Location => 2,
            WizardStep::Contact => 3,
            WizardStep::Academic => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Location => "Location",
            WizardStep::Contact => "Contact",
            WizardStep::Academic => "Academic Info",
        }
    }

    pub fn is_first(&self) -> bool {
        *self == WizardStep::BasicInfo
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::Academic
    }

    /// The following step; the last step has none.
    pub fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Contact),
            WizardStep::Contact => Some(WizardStep::Academic),
            WizardStep::Academic => None,
        }
    }

    /// The preceding step; the first step is its own predecessor.
    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::BasicInfo | WizardStep::Location => WizardStep::BasicInfo,
            WizardStep::Contact => WizardStep::Location,
            WizardStep::Academic => WizardStep::Contact,
        }
    }

    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            WizardStep::BasicInfo => &[Field::Name, Field::Description, Field::Website],
            WizardStep::Location => &[
                Field::Location,
                Field::Street,
                Field::City,
                Field::State,
                Field::ZipCode,
            ],
            WizardStep::Contact => &[Field::Phone, Field::Email, Field::AdmissionsEmail],
            WizardStep::Academic => &[Field::Programs],
        }
    }
}

/// Every input of the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Description,
    Website,
    Location,
    Street,
    City,
    State,
    ZipCode,
    Country,
    Phone,
    Fax,
    Email,
    AdmissionsEmail,
    Programs,
}

impl Field {
    /// Key used in [`ValidationErrors`].
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Website => "website",
            Field::Location => "location",
            Field::Street => "address.street",
            Field::City => "address.city",
            Field::State => "address.state",
            Field::ZipCode => "address.zipCode",
            Field::Country => "address.country",
            Field::Phone => "contact.phone",
            Field::Fax => "contact.fax",
            Field::Email => "contact.email",
            Field::AdmissionsEmail => "contact.admissionsEmail",
            Field::Programs => "programs",
        }
    }

    /// Message shown when a required field is left blank.
    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Name => "University name is required",
            Field::Description => "Description is required",
            Field::Website => "Website is required",
            Field::Location => "Location is required",
            Field::Street => "Street address is required",
            Field::City => "City is required",
            Field::State => "State is required",
            Field::ZipCode => "ZIP code is required",
            Field::Country => "Country is required",
            Field::Phone => "Phone is required",
            Field::Fax => "Fax is required",
            Field::Email => "Email is required",
            Field::AdmissionsEmail => "Admissions email is required",
            Field::Programs => "At least one program is required",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressForm {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for AddressForm {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub phone: String,
    pub email: String,
    pub admissions_email: String,
    pub fax: String,
}

/// Everything the wizard has collected so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub description: String,
    pub website: String,
    pub location: String,
    pub address: AddressForm,
    pub contact: ContactForm,
    pub programs: Vec<String>,
}

impl ProfileForm {
    /// Text value of a field. Programs have no single text value.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Website => &self.website,
            Field::Location => &self.location,
            Field::Street => &self.address.street,
            Field::City => &self.address.city,
            Field::State => &self.address.state,
            Field::ZipCode => &self.address.zip_code,
            Field::Country => &self.address.country,
            Field::Phone => &self.contact.phone,
            Field::Fax => &self.contact.fax,
            Field::Email => &self.contact.email,
            Field::AdmissionsEmail => &self.contact.admissions_email,
            Field::Programs => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Website => &mut self.website,
            Field::Location => &mut self.location,
            Field::Street => &mut self.address.street,
            Field::City => &mut self.address.city,
            Field::State => &mut self.address.state,
            Field::ZipCode => &mut self.address.zip_code,
            Field::Country => &mut self.address.country,
            Field::Phone => &mut self.contact.phone,
            Field::Fax => &mut self.contact.fax,
            Field::Email => &mut self.contact.email,
            Field::AdmissionsEmail => &mut self.contact.admissions_email,
            Field::Programs => return None,
        })
    }

    fn is_blank(&self, field: Field) -> bool {
        match field {
            Field::Programs => self.programs.is_empty(),
            other => self.value(other).trim().is_empty(),
        }
    }

    /// Presence check of one step's required fields.
    pub fn validate(&self, step: WizardStep) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in step.required_fields() {
            if self.is_blank(*field) {
                errors.insert(field.key(), field.required_message());
            }
        }
        errors.into_result()
    }

    /// The single update written on submission.
    pub fn to_update(&self) -> UniversityUpdate {
        let text = |value: &str| Some(value.trim().to_string());
        UniversityUpdate {
            name: text(&self.name),
            description: text(&self.description),
            location: text(&self.location),
            website: text(&self.website),
            programs: Some(self.programs.clone()),
            address: Some(Address {
                street: text(&self.address.street),
                city: text(&self.address.city),
                state: text(&self.address.state),
                zip_code: text(&self.address.zip_code),
                country: text(&self.address.country),
            }),
            contact: Some(Contact {
                phone: text(&self.contact.phone),
                email: text(&self.contact.email),
                admissions_email: text(&self.contact.admissions_email),
                fax: crate::models::non_blank(&self.contact.fax),
            }),
            terms_accepted: None,
            profile_completed: Some(true),
        }
    }
}

/// Transition function of the wizard.
///
/// Returns the next step when `step`'s required fields are filled. On the last step a
/// successful validation stays on that step.
pub fn advance(step: WizardStep, form: &ProfileForm) -> Result<WizardStep, ValidationErrors> {
    form.validate(step)?;
    Ok(step.following().unwrap_or(step))
}

/// The wizard as a page holds it: current step, form, and per-field errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileWizard {
    pub step: WizardStep,
    pub form: ProfileForm,
    pub errors: ValidationErrors,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a text field and clear its error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.form.value_mut(field) {
            *slot = value.into();
        }
        self.errors.remove(field.key());
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field.key())
    }

    /// Add a trimmed program unless blank or already listed. Returns whether it was added.
    pub fn add_program(&mut self, program: &str) -> bool {
        let program = program.trim();
        if program.is_empty() || self.form.programs.iter().any(|p| p == program) {
            return false;
        }
        self.form.programs.push(program.to_string());
        self.errors.remove(Field::Programs.key());
        true
    }

    pub fn remove_program(&mut self, index: usize) {
        if index < self.form.programs.len() {
            self.form.programs.remove(index);
        }
    }

    /// Validate the current step and move forward. On failure the step is unchanged
    /// and every blank required field carries an error.
    pub fn next(&mut self) -> bool {
        match advance(self.step, &self.form) {
            Ok(step) => {
                self.step = step;
                self.errors = ValidationErrors::new();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Move back one step without validating. No-op on the first step.
    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }

    /// Validate the final step and produce the update to write.
    pub fn submission(&mut self) -> Result<UniversityUpdate, ValidationErrors> {
        if let Err(errors) = self.form.validate(WizardStep::Academic) {
            self.errors = errors.clone();
            return Err(errors);
        }
        Ok(self.form.to_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(step: WizardStep, wizard: &mut ProfileWizard) {
        match step {
            WizardStep::BasicInfo => {
                wizard.set(Field::Name, "Test University");
                wizard.set(Field::Description, "A place of learning");
                wizard.set(Field::Website, "https://test.edu");
            }
            WizardStep::Location => {
                wizard.set(Field::Location, "Boston, Massachusetts");
                wizard.set(Field::Street, "123 University Avenue");
                wizard.set(Field::City, "Boston");
                wizard.set(Field::State, "Massachusetts");
                wizard.set(Field::ZipCode, "02139");
            }
            WizardStep::Contact => {
                wizard.set(Field::Phone, "+1 (555) 123-4567");
                wizard.set(Field::Email, "info@test.edu");
                wizard.set(Field::AdmissionsEmail, "admissions@test.edu");
            }
            WizardStep::Academic => {
                wizard.add_program("Engineering");
            }
        }
    }

    #[test]
    fn test_next_blocked_until_required_fields_filled() {
        for step in WizardStep::ALL {
            let mut wizard = ProfileWizard {
                step,
                ..ProfileWizard::default()
            };
            if step == WizardStep::Location {
                // country has a default but is not required
                assert_eq!(wizard.form.address.country, "United States");
            }

            assert!(!wizard.next());
            assert_eq!(wizard.step, step);
            assert_eq!(wizard.errors.len(), step.required_fields().len());
            for field in step.required_fields() {
                assert_eq!(wizard.error(*field), Some(field.required_message()));
            }

            filled(step, &mut wizard);
            assert!(wizard.next());
            assert_eq!(wizard.step, step.following().unwrap_or(step));
            assert!(wizard.errors.is_empty());
        }
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut wizard = ProfileWizard::new();
        wizard.set(Field::Name, "   ");
        wizard.set(Field::Description, "desc");
        wizard.set(Field::Website, "https://x.edu");

        assert!(!wizard.next());
        assert_eq!(wizard.errors.fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_previous_never_validates() {
        let mut wizard = ProfileWizard::new();
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::BasicInfo);

        wizard.step = WizardStep::Academic;
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::Contact);
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::Location);
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::BasicInfo);
        assert!(wizard.errors.is_empty());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut wizard = ProfileWizard::new();
        wizard.next();
        assert!(wizard.error(Field::Website).is_some());

        wizard.set(Field::Website, "https://x.edu");
        assert!(wizard.error(Field::Website).is_none());
        assert!(wizard.error(Field::Name).is_some());
    }

    #[test]
    fn test_programs_are_trimmed_and_unique() {
        let mut wizard = ProfileWizard::new();
        assert!(wizard.add_program("  Law "));
        assert!(!wizard.add_program("Law"));
        assert!(!wizard.add_program("   "));
        assert!(wizard.add_program("Medicine"));
        assert_eq!(wizard.form.programs, vec!["Law", "Medicine"]);

        wizard.remove_program(0);
        wizard.remove_program(7);
        assert_eq!(wizard.form.programs, vec!["Medicine"]);
    }

    #[test]
    fn test_advance_on_last_step_stays() {
        let mut form = ProfileForm::default();
        form.programs.push("Physics".to_string());
        assert_eq!(advance(WizardStep::Academic, &form), Ok(WizardStep::Academic));
    }

    #[test]
    fn test_submission_requires_programs() {
        let mut wizard = ProfileWizard {
            step: WizardStep::Academic,
            ..ProfileWizard::default()
        };
        let errors = wizard.submission().unwrap_err();
        assert_eq!(errors.get("programs"), Some("At least one program is required"));
        assert!(wizard.error(Field::Programs).is_some());
    }

    #[test]
    fn test_submission_builds_complete_update() {
        let mut wizard = ProfileWizard::new();
        for step in WizardStep::ALL {
            filled(step, &mut wizard);
            wizard.next();
        }
        assert_eq!(wizard.step, WizardStep::Academic);

        let update = wizard.submission().unwrap();
        assert_eq!(update.name.as_deref(), Some("Test University"));
        assert_eq!(update.profile_completed, Some(true));
        assert_eq!(update.terms_accepted, None);
        assert_eq!(update.programs, Some(vec!["Engineering".to_string()]));
        let contact = update.contact.unwrap();
        assert_eq!(contact.admissions_email.as_deref(), Some("admissions@test.edu"));
        assert_eq!(contact.fax, None);
        assert_eq!(
            update.address.unwrap().country.as_deref(),
            Some("United States")
        );
    }
}
