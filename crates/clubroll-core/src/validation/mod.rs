//! Registration validation.
//!
//! Every validator takes the raw JSON value of one field (absent fields are
//! `None`) plus the configured [`RegistrationRules`](clubroll_config::RegistrationRules)
//! and returns either the typed value or a [`FieldError`](clubroll_models::FieldError).
//! [`validate_member`] runs all of them and aggregates the failures.

pub mod fields;
pub mod payload;
pub mod registration_number;

pub use fields::{
    validate_course, validate_departments, validate_email, validate_full_name, validate_gender,
    validate_phone, validate_year_of_study,
};
pub use payload::{MemberValidation, validate_member};
pub use registration_number::{validate_registration_number, validate_registration_str};

use serde_json::Value;

/// Absent, null, `false`, zero and empty strings, arrays and objects all
/// count as a missing value.
pub(crate) fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some(&Value::Null)));
        assert!(is_missing(Some(&json!(""))));
        assert!(is_missing(Some(&json!(0))));
        assert!(is_missing(Some(&json!(false))));
        assert!(is_missing(Some(&json!([]))));
        assert!(is_missing(Some(&json!({}))));

        assert!(!is_missing(Some(&json!(" "))));
        assert!(!is_missing(Some(&json!(1))));
        assert!(!is_missing(Some(&json!(true))));
        assert!(!is_missing(Some(&json!(["x"]))));
    }
}
