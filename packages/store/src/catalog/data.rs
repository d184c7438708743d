//! Sample catalog content standing in for a real catalog service.

use std::sync::LazyLock;

use chrono::NaiveDate;

use super::{
    Application, ApplicationStatus, ScholarshipListing, SchoolAddress, SchoolContact,
    SchoolListing, SchoolType,
};
use crate::models::{Level, Role, User};

static SCHOOLS: LazyLock<Vec<SchoolListing>> = LazyLock::new(build_schools);
static SCHOLARSHIPS: LazyLock<Vec<ScholarshipListing>> = LazyLock::new(build_scholarships);

pub fn schools() -> &'static [SchoolListing] {
    &SCHOOLS
}

pub fn scholarships() -> &'static [ScholarshipListing] {
    &SCHOLARSHIPS
}

pub fn find_school(id: &str) -> Option<&'static SchoolListing> {
    SCHOOLS.iter().find(|s| s.id == id)
}

pub fn sample_student() -> User {
    User {
        id: "1".to_string(),
        email: "student@example.com".to_string(),
        name: "John Doe".to_string(),
        role: Role::Student,
        avatar_url: None,
        has_paid_process: Some(false),
    }
}

pub fn applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".to_string(),
            scholarship_id: "1".to_string(),
            student_id: "1".to_string(),
            status: ApplicationStatus::UnderReview,
            applied_at: date(2024, 1, 15),
            documents: strings(&["transcript.pdf", "essay.pdf", "recommendation.pdf"]),
            notes: None,
        },
        Application {
            id: "2".to_string(),
            scholarship_id: "4".to_string(),
            student_id: "1".to_string(),
            status: ApplicationStatus::Approved,
            applied_at: date(2024, 1, 10),
            documents: strings(&["transcript.pdf", "business_plan.pdf"]),
            notes: Some("Excellent application with strong business plan.".to_string()),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn image(photo: u32, size: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&{size}&dpr=1"
    )
}

struct SchoolSeed {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    description: &'static str,
    photo: u32,
    website: &'static str,
    programs: &'static [&'static str],
    accreditations: &'static [&'static str],
    ranking: u32,
    kind: SchoolType,
    address: [&'static str; 5],
    contact: [&'static str; 4],
}

impl SchoolSeed {
    fn build(self) -> SchoolListing {
        let [street, city, state, zip_code, country] = self.address;
        let [phone, email, admissions_email, fax] = self.contact;
        SchoolListing {
            id: self.id.to_string(),
            name: self.name.to_string(),
            location: self.location.to_string(),
            description: self.description.to_string(),
            image: image(self.photo, "w=800&h=600"),
            website: self.website.to_string(),
            programs: strings(self.programs),
            accreditations: strings(self.accreditations),
            ranking: Some(self.ranking),
            kind: Some(self.kind),
            address: SchoolAddress {
                street: street.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                zip_code: zip_code.to_string(),
                country: country.to_string(),
            },
            contact: SchoolContact {
                phone: phone.to_string(),
                email: email.to_string(),
                admissions_email: admissions_email.to_string(),
                fax: Some(fax.to_string()),
            },
        }
    }
}

fn build_schools() -> Vec<SchoolListing> {
    vec![
        SchoolSeed {
            id: "1",
            name: "Harvard University",
            location: "Cambridge, Massachusetts",
            description: "Harvard University is a private Ivy League research university in Cambridge, Massachusetts. Established in 1636, Harvard is the oldest institution of higher education in the United States and one of the most prestigious universities worldwide.",
            photo: 1454360,
            website: "https://harvard.edu",
            programs: &["Business", "Medicine", "Law", "Engineering", "Liberal Arts"],
            accreditations: &["NEASC", "AACSB", "LCME"],
            ranking: 1,
            kind: SchoolType::Private,
            address: ["Massachusetts Hall, Cambridge", "Cambridge", "Massachusetts", "02138", "United States"],
            contact: ["+1 (617) 495-1000", "info@harvard.edu", "admissions@harvard.edu", "+1 (617) 495-8821"],
        },
        SchoolSeed {
            id: "2",
            name: "Stanford University",
            location: "Stanford, California",
            description: "Stanford University is a private research university in Stanford, California. Stanford is known for its academic strength, wealth, proximity to Silicon Valley, and ranking as one of the world's top universities.",
            photo: 207692,
            website: "https://stanford.edu",
            programs: &["Computer Science", "Engineering", "Business", "Medicine", "Education"],
            accreditations: &["WASC", "AACSB", "ABET"],
            ranking: 2,
            kind: SchoolType::Private,
            address: ["450 Serra Mall", "Stanford", "California", "94305", "United States"],
            contact: ["+1 (650) 723-2300", "info@stanford.edu", "admission@stanford.edu", "+1 (650) 725-2846"],
        },
        SchoolSeed {
            id: "3",
            name: "MIT",
            location: "Cambridge, Massachusetts",
            description: "The Massachusetts Institute of Technology is a private land-grant research university in Cambridge, Massachusetts. MIT has played a key role in the development of modern technology and science.",
            photo: 256490,
            website: "https://mit.edu",
            programs: &["Engineering", "Computer Science", "Physics", "Mathematics", "Economics"],
            accreditations: &["NEASC", "ABET", "AACSB"],
            ranking: 3,
            kind: SchoolType::Private,
            address: ["77 Massachusetts Avenue", "Cambridge", "Massachusetts", "02139", "United States"],
            contact: ["+1 (617) 253-1000", "info@mit.edu", "admissions@mit.edu", "+1 (617) 258-8304"],
        },
        SchoolSeed {
            id: "4",
            name: "Yale University",
            location: "New Haven, Connecticut",
            description: "Yale University is a private Ivy League research university in New Haven, Connecticut. Founded in 1701, Yale is the third-oldest institution of higher education in the United States.",
            photo: 1595391,
            website: "https://yale.edu",
            programs: &["Liberal Arts", "Law", "Medicine", "Drama", "Music"],
            accreditations: &["NEASC", "AACSB", "LCME"],
            ranking: 4,
            kind: SchoolType::Private,
            address: ["38 Hillhouse Avenue", "New Haven", "Connecticut", "06511", "United States"],
            contact: ["+1 (203) 432-4771", "info@yale.edu", "student.questions@yale.edu", "+1 (203) 432-9392"],
        },
        SchoolSeed {
            id: "5",
            name: "Princeton University",
            location: "Princeton, New Jersey",
            description: "Princeton University is a private Ivy League research university in Princeton, New Jersey. Founded in 1746, Princeton is the fourth-oldest college in the United States.",
            photo: 2280549,
            website: "https://princeton.edu",
            programs: &["Engineering", "Public Policy", "Economics", "Physics", "History"],
            accreditations: &["MSCHE", "ABET", "AACSB"],
            ranking: 5,
            kind: SchoolType::Private,
            address: ["Princeton University", "Princeton", "New Jersey", "08544", "United States"],
            contact: ["+1 (609) 258-3000", "uaoffice@princeton.edu", "admission@princeton.edu", "+1 (609) 258-6743"],
        },
        SchoolSeed {
            id: "6",
            name: "University of California, Berkeley",
            location: "Berkeley, California",
            description: "The University of California, Berkeley is a public land-grant research university in Berkeley, California. Established in 1868, UC Berkeley is the flagship institution of the University of California system.",
            photo: 3184360,
            website: "https://berkeley.edu",
            programs: &["Engineering", "Business", "Computer Science", "Law", "Public Health"],
            accreditations: &["WASC", "ABET", "AACSB"],
            ranking: 6,
            kind: SchoolType::Public,
            address: ["200 California Hall", "Berkeley", "California", "94720", "United States"],
            contact: ["+1 (510) 642-6000", "info@berkeley.edu", "admissions@berkeley.edu", "+1 (510) 642-7333"],
        },
    ]
    .into_iter()
    .map(SchoolSeed::build)
    .collect()
}

fn build_scholarships() -> Vec<ScholarshipListing> {
    vec![
        ScholarshipListing {
            id: "1".to_string(),
            title: "International Excellence Scholarship".to_string(),
            description: "Merit-based scholarship for outstanding international students pursuing undergraduate degrees.".to_string(),
            school_id: "1".to_string(),
            school_name: "Harvard University".to_string(),
            amount: 25000.0,
            deadline: date(2024, 3, 15),
            requirements: strings(&["GPA 3.8+", "TOEFL 100+", "SAT 1450+"]),
            is_exclusive: false,
            image: image(267507, "w=1260&h=750"),
            field_of_study: "Any".to_string(),
            level: Level::Undergraduate,
            eligibility: strings(&["International students", "First-time applicants", "Academic excellence"]),
            benefits: strings(&["Tuition reduction", "Academic mentorship", "Career guidance"]),
        },
        ScholarshipListing {
            id: "2".to_string(),
            title: "STEM Innovation Grant".to_string(),
            description: "Exclusive scholarship for international students in Science, Technology, Engineering, and Mathematics programs.".to_string(),
            school_id: "2".to_string(),
            school_name: "Stanford University".to_string(),
            amount: 35000.0,
            deadline: date(2024, 4, 1),
            requirements: strings(&["STEM background", "Research experience", "GRE 320+"]),
            is_exclusive: true,
            image: image(2280549, "w=1260&h=750"),
            field_of_study: "STEM".to_string(),
            level: Level::Graduate,
            eligibility: strings(&["Graduate students", "STEM majors", "Research experience"]),
            benefits: strings(&["Full tuition coverage", "Research opportunities", "Industry connections"]),
        },
        ScholarshipListing {
            id: "3".to_string(),
            title: "Global Leadership Fellowship".to_string(),
            description: "Premium scholarship program designed for future leaders from developing countries.".to_string(),
            school_id: "3".to_string(),
            school_name: "MIT".to_string(),
            amount: 45000.0,
            deadline: date(2024, 5, 20),
            requirements: strings(&["Leadership experience", "Community involvement", "Academic excellence"]),
            is_exclusive: true,
            image: image(1595391, "w=1260&h=750"),
            field_of_study: "Engineering".to_string(),
            level: Level::Graduate,
            eligibility: strings(&["Developing countries", "Leadership background", "Graduate level"]),
            benefits: strings(&["Full scholarship", "Leadership training", "Alumni network access"]),
        },
        ScholarshipListing {
            id: "4".to_string(),
            title: "Business Excellence Award".to_string(),
            description: "Comprehensive scholarship for international MBA candidates with entrepreneurial vision.".to_string(),
            school_id: "1".to_string(),
            school_name: "Harvard University".to_string(),
            amount: 30000.0,
            deadline: date(2024, 6, 30),
            requirements: strings(&["Work experience 3+ years", "GMAT 700+", "Business plan"]),
            is_exclusive: false,
            image: image(3184360, "w=1260&h=750"),
            field_of_study: "Business".to_string(),
            level: Level::Graduate,
            eligibility: strings(&["MBA applicants", "Professional experience", "Entrepreneurial vision"]),
            benefits: strings(&["Partial tuition", "Internship placement", "Networking events"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = schools().iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_every_scholarship_references_a_school() {
        for scholarship in scholarships() {
            let school = find_school(&scholarship.school_id).unwrap();
            assert_eq!(school.name, scholarship.school_name);
        }
    }

    #[test]
    fn test_sample_applications_reference_scholarships() {
        for application in applications() {
            assert!(scholarships()
                .iter()
                .any(|s| s.id == application.scholarship_id));
        }
    }
}
