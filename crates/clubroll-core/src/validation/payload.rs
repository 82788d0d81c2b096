use clubroll_config::RegistrationRules;
use clubroll_models::{ErrorMap, ValidatedMember, fields};
use serde_json::{Map, Value};

use super::fields::{
    validate_course, validate_departments, validate_email, validate_full_name, validate_gender,
    validate_phone, validate_year_of_study,
};
use super::registration_number::validate_registration_number;

/// Result of validating one registration payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberValidation {
    /// One entry per invalid field.
    pub errors: ErrorMap,
    /// The input with canonicalization applied. A valid registration number
    /// is rewritten in canonical form and a comma-joined departments string
    /// is split into an array. Invalid identifiers are left as submitted.
    pub normalized: Map<String, Value>,
    /// Present only when `errors` is empty.
    pub member: Option<ValidatedMember>,
}

impl MemberValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<ValidatedMember, ErrorMap> {
        match self.member {
            Some(member) if self.errors.is_empty() => Ok(member),
            _ => Err(self.errors),
        }
    }
}

/// Validates every field of a registration payload.
///
/// All field validators run regardless of earlier failures so the error map
/// lists every problem at once. Unknown keys are ignored and carried over
/// into `normalized` untouched.
pub fn validate_member(data: &Map<String, Value>, rules: &RegistrationRules) -> MemberValidation {
    let mut errors = ErrorMap::new();
    let mut normalized = data.clone();

    let reg_number = errors.record(
        fields::REG_NUMBER,
        validate_registration_number(data.get(fields::REG_NUMBER), rules),
    );
    if let Some(reg_number) = &reg_number {
        normalized.insert(
            fields::REG_NUMBER.to_string(),
            Value::String(reg_number.as_str().to_string()),
        );
    }
    let full_name = errors.record(
        fields::FULL_NAME,
        validate_full_name(data.get(fields::FULL_NAME)),
    );
    let email = errors.record(fields::EMAIL, validate_email(data.get(fields::EMAIL), rules));
    let phone = errors.record(fields::PHONE, validate_phone(data.get(fields::PHONE), rules));
    let gender = errors.record(fields::GENDER, validate_gender(data.get(fields::GENDER), rules));
    let year_of_study = errors.record(
        fields::YEAR_OF_STUDY,
        validate_year_of_study(data.get(fields::YEAR_OF_STUDY), rules),
    );
    let course = errors.record(fields::COURSE, validate_course(data.get(fields::COURSE), rules));
    let departments = errors.record(
        fields::DEPARTMENTS,
        validate_departments(data.get(fields::DEPARTMENTS), rules),
    );

    if let Some(Value::String(joined)) = data.get(fields::DEPARTMENTS) {
        let split: Vec<Value> = joined
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| Value::String(d.to_string()))
            .collect();
        normalized.insert(fields::DEPARTMENTS.to_string(), Value::Array(split));
    }

    let member = match (
        reg_number,
        full_name,
        email,
        phone,
        gender,
        year_of_study,
        course,
        departments,
    ) {
        (
            Some(reg_number),
            Some(full_name),
            Some(email),
            Some(phone),
            Some(gender),
            Some(year_of_study),
            Some(course),
            Some(departments),
        ) if errors.is_empty() => Some(ValidatedMember {
            reg_number,
            full_name,
            email,
            phone,
            gender,
            year_of_study,
            course,
            departments,
        }),
        _ => None,
    };

    MemberValidation {
        errors,
        normalized,
        member,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubroll_models::ValidationErrorKind;
    use serde_json::json;

    fn payload() -> Map<String, Value> {
        json!({
            "reg_number": "T/DEG/2024/007",
            "full_name": "Amina Njeri",
            "email": "amina@example.com",
            "phone": "+255712345678",
            "gender": "Female",
            "year_of_study": 2,
            "course": "Bachelor of Science in Computer Science",
            "departments": ["Programming", "Networking"]
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let outcome = validate_member(&payload(), &RegistrationRules::default());

        assert!(outcome.is_valid());
        let member = outcome.member.clone().unwrap();
        assert_eq!(member.reg_number.as_str(), "T/DEG/2024/7");
        assert_eq!(member.year_of_study, 2);
        assert_eq!(outcome.normalized["reg_number"], "T/DEG/2024/7");
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn test_empty_payload_reports_every_field() {
        let outcome = validate_member(&Map::new(), &RegistrationRules::default());

        assert!(!outcome.is_valid());
        assert!(outcome.member.is_none());
        assert_eq!(outcome.errors.len(), fields::ALL.len());
        for field in fields::ALL {
            assert_eq!(
                outcome.errors.kind(field),
                Some(ValidationErrorKind::RequiredFieldMissing),
                "{field}"
            );
        }
    }

    #[test]
    fn test_normalized_reg_number_applied_even_when_invalid() {
        let mut data = payload();
        data.remove("email");

        let outcome = validate_member(&data, &RegistrationRules::default());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.normalized["reg_number"], "T/DEG/2024/7");
        assert!(outcome.errors.contains("email"));
    }

    #[test]
    fn test_invalid_reg_number_is_left_as_submitted() {
        let mut data = payload();
        data.insert("reg_number".into(), json!("X/DEG/2024/007"));

        let outcome = validate_member(&data, &RegistrationRules::default());
        assert!(outcome.errors.contains("reg_number"));
        assert_eq!(outcome.normalized["reg_number"], "X/DEG/2024/007");
    }

    #[test]
    fn test_departments_string_is_split_in_normalized() {
        let mut data = payload();
        data.insert("departments".into(), json!("Programming, Cyber Security"));

        let outcome = validate_member(&data, &RegistrationRules::default());
        assert!(outcome.is_valid());
        assert_eq!(
            outcome.normalized["departments"],
            json!(["Programming", "Cyber Security"])
        );
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let mut data = payload();
        data.insert("nickname".into(), json!("Ami"));

        let outcome = validate_member(&data, &RegistrationRules::default());
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized["nickname"], "Ami");
    }
}
