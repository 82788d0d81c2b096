use clubroll_config::RegistrationRules;
use clubroll_models::{FieldError, RegistrationNumber, RegistrationNumberError};
use serde_json::Value;

use super::is_missing;

/// Validates the `reg_number` field of a payload.
///
/// On success the returned identifier is in canonical form, so two inputs
/// that differ only in sequence zero-padding yield equal values.
pub fn validate_registration_number(
    value: Option<&Value>,
    rules: &RegistrationRules,
) -> Result<RegistrationNumber, FieldError> {
    if is_missing(value) {
        return Err(FieldError::required(
            RegistrationNumberError::Empty.to_string(),
        ));
    }

    let raw = value
        .and_then(Value::as_str)
        .ok_or_else(|| FieldError::type_mismatch("Registration number must be a string"))?;

    validate_registration_str(raw, rules)
}

/// Validates a registration number that is already known to be a string.
pub fn validate_registration_str(
    raw: &str,
    rules: &RegistrationRules,
) -> Result<RegistrationNumber, FieldError> {
    RegistrationNumber::parse_with(raw, &rules.reg_number_pattern).map_err(|err| match err {
        RegistrationNumberError::Empty => FieldError::required(err.to_string()),
        RegistrationNumberError::InvalidFormat(_) => FieldError::format(err.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubroll_models::ValidationErrorKind;
    use serde_json::json;

    fn rules() -> RegistrationRules {
        RegistrationRules::default()
    }

    #[test]
    fn test_valid_number_is_canonicalized() {
        let reg = validate_registration_number(Some(&json!("T/DEG/2024/001")), &rules()).unwrap();
        assert_eq!(reg.as_str(), "T/DEG/2024/1");

        let reg = validate_registration_number(Some(&json!("T/DIP/2024/1025")), &rules()).unwrap();
        assert_eq!(reg.as_str(), "T/DIP/2024/1025");
    }

    #[test]
    fn test_padded_inputs_share_one_canonical_form() {
        let a = validate_registration_str("T/DEG/2020/0544", &rules()).unwrap();
        let b = validate_registration_str("T/DEG/2020/544", &rules()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_is_required() {
        for value in [None, Some(json!(null)), Some(json!(""))] {
            let err = validate_registration_number(value.as_ref(), &rules()).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::RequiredFieldMissing);
            assert_eq!(err.message, "Registration number is required");
        }
    }

    #[test]
    fn test_non_string_is_type_mismatch() {
        let err = validate_registration_number(Some(&json!(2024)), &rules()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TypeMismatch);
        assert_eq!(err.message, "Registration number must be a string");
    }

    #[test]
    fn test_wrong_scheme_is_format_invalid() {
        let err = validate_registration_str("X/DEG/2024/1", &rules()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::FormatInvalid);
        assert!(err.message.contains("T/DEG/2024/001"));
        assert!(err.message.contains("T/DIP/2024/1025"));
    }

    #[test]
    fn test_pattern_constraints() {
        for bad in [
            "T/BSC/2024/1",
            "T/DEG/1899/1",
            "T/DEG/2124/1",
            "T/DEG/24/1",
            "T/DEG/2024/1a",
            "t/deg/2024/1",
            "T/DEG/2024",
        ] {
            assert!(validate_registration_str(bad, &rules()).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_all_zero_sequence_is_valid() {
        let reg = validate_registration_str("T/DEG/2020/000", &rules()).unwrap();
        assert_eq!(reg.as_str(), "T/DEG/2020/0");
    }

    #[test]
    fn test_empty_sequence_canonicalizes_to_zero() {
        let reg = validate_registration_str("T/DEG/2024/", &rules()).unwrap();
        assert_eq!(reg.as_str(), "T/DEG/2024/0");
    }

    #[test]
    fn test_custom_pattern() {
        let rules = RegistrationRules::default()
            .with_patterns(
                r"^S/(BSC|MSC)/20[0-9]{2}/[0-9]+$",
                clubroll_config::registration::DEFAULT_EMAIL_PATTERN,
                clubroll_config::registration::DEFAULT_PHONE_PATTERN,
            )
            .unwrap();

        assert!(validate_registration_str("S/BSC/2023/007", &rules).is_ok());
        assert!(validate_registration_str("T/DEG/2023/7", &rules).is_err());
    }
}
