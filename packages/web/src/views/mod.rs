mod guard;

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod how_it_works;
pub use how_it_works::HowItWorks;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod scholarships;
pub use scholarships::Scholarships;

mod universities;
pub use universities::Universities;

mod university_detail;
pub use university_detail::UniversityDetail;

mod school_terms;
pub use school_terms::SchoolTerms;

mod profile_setup;
pub use profile_setup::ProfileSetup;

mod school_dashboard;
pub use school_dashboard::SchoolDashboard;

mod new_scholarship;
pub use new_scholarship::NewScholarship;

mod placeholders;
pub use placeholders::{AdminDashboard, Contact, NotFound, Services, StudentDashboard};
