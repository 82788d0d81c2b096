use clubroll_config::RegistrationRules;
use clubroll_models::{Email, FieldError, PhoneNumber};
use serde_json::Value;

use super::is_missing;

const FULL_NAME_MIN_CHARS: usize = 2;
const FULL_NAME_MAX_CHARS: usize = 100;

fn required_str<'a>(value: Option<&'a Value>, label: &str) -> Result<&'a str, FieldError> {
    if is_missing(value) {
        return Err(FieldError::required(format!("{label} is required")));
    }

    value
        .and_then(Value::as_str)
        .ok_or_else(|| FieldError::type_mismatch(format!("{label} must be a string")))
}

/// Returns the trimmed name.
pub fn validate_full_name(value: Option<&Value>) -> Result<String, FieldError> {
    let name = required_str(value, "Full name")?.trim();
    let chars = name.chars().count();

    if chars < FULL_NAME_MIN_CHARS {
        return Err(FieldError::range(format!(
            "Full name must be at least {FULL_NAME_MIN_CHARS} characters"
        )));
    }
    if chars > FULL_NAME_MAX_CHARS {
        return Err(FieldError::range(format!(
            "Full name must not exceed {FULL_NAME_MAX_CHARS} characters"
        )));
    }

    Ok(name.to_string())
}

/// The pattern is matched against the lowercased input as given; the stored
/// address is lowercased.
pub fn validate_email(value: Option<&Value>, rules: &RegistrationRules) -> Result<Email, FieldError> {
    let raw = required_str(value, "Email")?;
    let invalid = || FieldError::format("Invalid email format");

    if !rules.email_pattern.is_match(&raw.to_lowercase()) {
        return Err(invalid());
    }

    Email::parse_with(raw, &rules.email_pattern).map_err(|_| invalid())
}

pub fn validate_phone(
    value: Option<&Value>,
    rules: &RegistrationRules,
) -> Result<PhoneNumber, FieldError> {
    let raw = required_str(value, "Phone number")?;
    let invalid =
        || FieldError::format("Invalid phone number format. Should be 10-15 digits with optional +");

    if !rules.phone_pattern.is_match(raw) {
        return Err(invalid());
    }

    PhoneNumber::parse_with(raw, &rules.phone_pattern).map_err(|_| invalid())
}

pub fn validate_gender(value: Option<&Value>, rules: &RegistrationRules) -> Result<String, FieldError> {
    if is_missing(value) {
        return Err(FieldError::required("Gender is required"));
    }

    match value.and_then(Value::as_str) {
        Some(gender) if rules.is_valid_gender(gender) => Ok(gender.to_string()),
        _ => Err(FieldError::range(format!(
            "Gender must be one of: {}",
            rules.genders.join(", ")
        ))),
    }
}

/// Accepts JSON integers, floats (truncated) and integral strings.
pub fn validate_year_of_study(
    value: Option<&Value>,
    rules: &RegistrationRules,
) -> Result<u8, FieldError> {
    let not_a_number = || FieldError::type_mismatch("Year of study must be a number");

    let year = match value {
        None | Some(Value::Null) => {
            return Err(FieldError::required("Year of study is required"));
        }
        Some(Value::String(s)) if s.is_empty() => {
            return Err(FieldError::required("Year of study is required"));
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| not_a_number())?,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(not_a_number)?,
        Some(_) => return Err(not_a_number()),
    };

    let out_of_range = || match rules.year_bounds() {
        Some((min, max)) => {
            FieldError::range(format!("Year of study must be between {min} and {max}"))
        }
        None => FieldError::range("Year of study is not accepted"),
    };

    if !rules.is_valid_year(year) {
        return Err(out_of_range());
    }

    u8::try_from(year).map_err(|_| out_of_range())
}

pub fn validate_course(value: Option<&Value>, rules: &RegistrationRules) -> Result<String, FieldError> {
    if is_missing(value) {
        return Err(FieldError::required("Course is required"));
    }

    match value.and_then(Value::as_str) {
        Some(course) if rules.is_valid_course(course) => Ok(course.to_string()),
        _ => Err(FieldError::range(format!(
            "Course must be one of: {}",
            rules.courses.join(", ")
        ))),
    }
}

/// Accepts an array of names or a comma-joined string.
///
/// Strings are split on `,` with each piece trimmed and empty pieces
/// dropped. Array elements are taken as given.
pub fn validate_departments(
    value: Option<&Value>,
    rules: &RegistrationRules,
) -> Result<Vec<String>, FieldError> {
    let at_least_one = "At least one department is required";

    let candidates: Vec<Value> = match value {
        None | Some(Value::Null) => return Err(FieldError::required(at_least_one)),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| Value::String(d.to_string()))
            .collect(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => {
            return Err(FieldError::type_mismatch(
                "Departments must be a list or comma-separated string",
            ));
        }
    };

    if candidates.is_empty() {
        return Err(FieldError::collection_size(at_least_one));
    }

    let max = rules.max_departments_per_member;
    if candidates.len() > max {
        return Err(FieldError::collection_size(format!(
            "Maximum {max} departments allowed"
        )));
    }

    let invalid: Vec<String> = candidates
        .iter()
        .filter(|d| !d.as_str().is_some_and(|name| rules.is_valid_department(name)))
        .map(|d| match d {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        })
        .collect();

    if !invalid.is_empty() {
        return Err(FieldError::collection_member(format!(
            "Invalid department(s): {}",
            invalid.join(", ")
        )));
    }

    Ok(candidates
        .into_iter()
        .filter_map(|d| match d {
            Value::String(name) => Some(name),
            _ => None,
        })
        .collect())
}
