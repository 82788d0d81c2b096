//! Registration validation rules.
//!
//! Holds the closed sets (genders, years, courses, departments), the maximum
//! number of departments per member, and the compiled patterns for
//! registration numbers, emails and phone numbers.
//!
//! # Configuration
//!
//! - `VALID_COURSES`: comma-separated list of accepted courses
//! - `VALID_DEPARTMENTS`: comma-separated list of accepted departments
//! - `MAX_DEPARTMENTS_PER_MEMBER`: upper bound on selected departments (default: 2)
//!
//! Genders, years and patterns are fixed defaults. Custom patterns can be
//! supplied through [`RegistrationRules::with_patterns`].

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::env::{list_or, parsed_or};

/// `T/<DEG|DIP>/<19xx|20xx>/<sequence>`
pub const DEFAULT_REG_NUMBER_PATTERN: &str = r"^T/(DEG|DIP)/(19|20)[0-9]{2}/[0-9]+$";

/// Format plausibility only; matched case-insensitively.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$";

/// 10 to 15 digits with an optional leading `+`.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?[0-9]{10,15}$";

pub const DEFAULT_GENDERS: &[&str] = &["Male", "Female"];

pub const DEFAULT_YEARS: &[i64] = &[1, 2, 3];

pub const DEFAULT_COURSES: &[&str] = &[
    "Bachelor of Science in Computer Science",
    "Bachelor of Science in Information Technology",
    "Bachelor of Science with Education",
    "Diploma in Computer Science",
    "Diploma in Information and Communication Technology",
];

pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "Programming",
    "Cyber Security",
    "Networking",
    "Graphics Design",
    "Computer Maintenance",
];

pub const DEFAULT_MAX_DEPARTMENTS: usize = 2;

static REG_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_REG_NUMBER_PATTERN).expect("Invalid registration number regex")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    case_insensitive(DEFAULT_EMAIL_PATTERN).expect("Invalid email regex")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PHONE_PATTERN).expect("Invalid phone regex"));

/// The default registration number pattern, compiled once per process.
pub fn default_reg_number_regex() -> &'static Regex {
    &REG_NUMBER_REGEX
}

/// The default email pattern, compiled once per process.
pub fn default_email_regex() -> &'static Regex {
    &EMAIL_REGEX
}

/// The default phone pattern, compiled once per process.
pub fn default_phone_regex() -> &'static Regex {
    &PHONE_REGEX
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Rules applied to every registration payload.
#[derive(Clone, Debug)]
pub struct RegistrationRules {
    pub reg_number_pattern: Regex,
    pub email_pattern: Regex,
    pub phone_pattern: Regex,
    pub genders: Vec<String>,
    pub years: Vec<i64>,
    pub courses: Vec<String>,
    pub departments: Vec<String>,
    pub max_departments_per_member: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            reg_number_pattern: REG_NUMBER_REGEX.clone(),
            email_pattern: EMAIL_REGEX.clone(),
            phone_pattern: PHONE_REGEX.clone(),
            genders: to_owned_list(DEFAULT_GENDERS),
            years: DEFAULT_YEARS.to_vec(),
            courses: to_owned_list(DEFAULT_COURSES),
            departments: to_owned_list(DEFAULT_DEPARTMENTS),
            max_departments_per_member: DEFAULT_MAX_DEPARTMENTS,
        }
    }
}

impl RegistrationRules {
    /// Creates rules from environment variables, falling back to defaults
    /// for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let max_departments = parsed_or("MAX_DEPARTMENTS_PER_MEMBER", DEFAULT_MAX_DEPARTMENTS);
        let max_departments_per_member = if max_departments == 0 {
            tracing::warn!(
                "MAX_DEPARTMENTS_PER_MEMBER must be at least 1, using {}",
                DEFAULT_MAX_DEPARTMENTS
            );
            DEFAULT_MAX_DEPARTMENTS
        } else {
            max_departments
        };

        Self {
            courses: list_or("VALID_COURSES", DEFAULT_COURSES),
            departments: list_or("VALID_DEPARTMENTS", DEFAULT_DEPARTMENTS),
            max_departments_per_member,
            ..Self::default()
        }
    }

    /// Replaces the three patterns. The email pattern is compiled
    /// case-insensitively.
    pub fn with_patterns(
        mut self,
        reg_number: &str,
        email: &str,
        phone: &str,
    ) -> Result<Self, regex::Error> {
        self.reg_number_pattern = Regex::new(reg_number)?;
        self.email_pattern = case_insensitive(email)?;
        self.phone_pattern = Regex::new(phone)?;
        Ok(self)
    }

    pub fn is_valid_gender(&self, gender: &str) -> bool {
        self.genders.iter().any(|g| g == gender)
    }

    pub fn is_valid_year(&self, year: i64) -> bool {
        self.years.contains(&year)
    }

    pub fn is_valid_course(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    pub fn is_valid_department(&self, department: &str) -> bool {
        self.departments.iter().any(|d| d == department)
    }

    /// Lowest and highest accepted year of study.
    pub fn year_bounds(&self) -> Option<(i64, i64)> {
        let min = self.years.iter().min()?;
        let max = self.years.iter().max()?;
        Some((*min, *max))
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
