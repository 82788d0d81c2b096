//! Club member models and DTOs.
//!
//! Registration payloads arrive as untyped JSON objects so that missing
//! fields and wrong scalar types can be reported per field. Once every field
//! has passed validation the payload becomes a [`ValidatedMember`], and only
//! that type can be turned into a stored [`Member`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::registration_number::RegistrationNumber;
use crate::value_types::{Email, PhoneNumber};

/// Payload field names.
pub mod fields {
    pub const REG_NUMBER: &str = "reg_number";
    pub const FULL_NAME: &str = "full_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const GENDER: &str = "gender";
    pub const YEAR_OF_STUDY: &str = "year_of_study";
    pub const COURSE: &str = "course";
    pub const DEPARTMENTS: &str = "departments";

    pub const ALL: [&str; 8] = [
        REG_NUMBER,
        FULL_NAME,
        EMAIL,
        PHONE,
        GENDER,
        YEAR_OF_STUDY,
        COURSE,
        DEPARTMENTS,
    ];
}

/// A raw registration payload as submitted by the registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({
    "reg_number": "T/DEG/2024/001",
    "full_name": "Neema Mushi",
    "email": "neema@example.com",
    "phone": "+255712345678",
    "gender": "Female",
    "year_of_study": 2,
    "course": "Bachelor of Science in Computer Science",
    "departments": ["Programming", "Networking"]
}))]
pub struct RegisterMemberRequest(pub Map<String, Value>);

/// A registration payload whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedMember {
    pub reg_number: RegistrationNumber,
    pub full_name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub gender: String,
    pub year_of_study: u8,
    pub course: String,
    pub departments: Vec<String>,
}

/// A registered club member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub reg_number: RegistrationNumber,
    pub full_name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub gender: String,
    pub year_of_study: u8,
    pub course: String,
    pub departments: Vec<String>,
    pub active: bool,
    pub registered_at: DateTime<Utc>,
}

impl Member {
    pub fn from_validated(validated: ValidatedMember, registered_at: DateTime<Utc>) -> Self {
        Self {
            reg_number: validated.reg_number,
            full_name: validated.full_name,
            email: validated.email,
            phone: validated.phone,
            gender: validated.gender,
            year_of_study: validated.year_of_study,
            course: validated.course,
            departments: validated.departments,
            active: true,
            registered_at,
        }
    }

    /// Departments in their comma-joined storage form.
    pub fn departments_joined(&self) -> String {
        format_departments(&self.departments)
    }
}

pub fn format_departments(departments: &[String]) -> String {
    departments.join(", ")
}

pub fn parse_departments(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckMemberRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub reg_number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckMemberResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated() -> ValidatedMember {
        ValidatedMember {
            reg_number: RegistrationNumber::new("T/DEG/2024/001").unwrap(),
            full_name: "Neema Mushi".to_string(),
            email: Email::new("neema@example.com").unwrap(),
            phone: PhoneNumber::new("+255712345678").unwrap(),
            gender: "Female".to_string(),
            year_of_study: 2,
            course: "Diploma in Computer Science".to_string(),
            departments: vec!["Programming".to_string(), "Networking".to_string()],
        }
    }

    #[test]
    fn test_member_from_validated_is_active() {
        let now = Utc::now();
        let member = Member::from_validated(validated(), now);
        assert!(member.active);
        assert_eq!(member.registered_at, now);
        assert_eq!(member.reg_number, "T/DEG/2024/1");
    }

    #[test]
    fn test_departments_round_trip_through_storage_form() {
        let member = Member::from_validated(validated(), Utc::now());
        let joined = member.departments_joined();
        assert_eq!(joined, "Programming, Networking");
        assert_eq!(parse_departments(&joined), member.departments);
    }

    #[test]
    fn test_parse_departments_drops_blanks() {
        assert_eq!(
            parse_departments(" Programming ,, Networking, "),
            vec!["Programming".to_string(), "Networking".to_string()]
        );
        assert!(parse_departments("").is_empty());
    }

    #[test]
    fn test_check_member_request_validation() {
        let empty = CheckMemberRequest {
            reg_number: String::new(),
        };
        assert!(empty.validate().is_err());

        let filled = CheckMemberRequest {
            reg_number: "T/DEG/2024/1".to_string(),
        };
        assert!(filled.validate().is_ok());
    }

    #[test]
    fn test_register_request_is_transparent() {
        let request: RegisterMemberRequest =
            serde_json::from_str(r#"{"reg_number": "T/DEG/2024/1", "year_of_study": "2"}"#)
                .unwrap();
        assert_eq!(request.0.len(), 2);
        assert_eq!(request.0["year_of_study"], "2");
    }

    #[test]
    fn test_all_fields_listed() {
        assert_eq!(fields::ALL.len(), 8);
        assert!(fields::ALL.contains(&fields::DEPARTMENTS));
    }
}
