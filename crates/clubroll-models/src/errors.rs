//! Field-level validation errors.
//!
//! Every validator reports a [`FieldError`] carrying a [`ValidationErrorKind`]
//! and the message shown to the end user. The payload validator collects them
//! into an [`ErrorMap`] keyed by field name.

use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Empty or absent required input.
    RequiredFieldMissing,
    /// Wrong scalar type for a field.
    TypeMismatch,
    /// Well-typed but fails a structural pattern.
    FormatInvalid,
    /// Value outside the allowed bounds or closed set.
    RangeInvalid,
    /// Collection empty or larger than allowed.
    CollectionSizeInvalid,
    /// One or more collection elements not in the allowed set.
    CollectionMemberInvalid,
    /// Coordinates of the wrong type or outside their geographic range.
    CoordinateInvalid,
    /// Valid coordinates, but too far from the reference point.
    OutOfGeofence,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::RequiredFieldMissing, message)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::TypeMismatch, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::FormatInvalid, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::RangeInvalid, message)
    }

    pub fn collection_size(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::CollectionSizeInvalid, message)
    }

    pub fn collection_member(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::CollectionMemberInvalid, message)
    }
}

/// Field name → error, one entry per invalid field.
///
/// Ordered by field name so that identical input always serializes to
/// identical output. Serializes as a plain `{ field: message }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.insert(field.into(), error);
    }

    /// Records the error of a failed result under `field` and returns the
    /// success value, if any.
    pub fn record<T>(&mut self, field: &str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(field, error);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn kind(&self, field: &str) -> Option<ValidationErrorKind> {
        self.0.get(field).map(|e| e.kind)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ErrorMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field, &error.message)?;
        }
        map.end()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error.message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_success_value() {
        let mut errors = ErrorMap::new();
        let value = errors.record("full_name", Ok::<_, FieldError>("Ada"));
        assert_eq!(value, Some("Ada"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_record_stores_error() {
        let mut errors = ErrorMap::new();
        let value: Option<()> =
            errors.record("email", Err(FieldError::required("Email is required")));
        assert!(value.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.kind("email"),
            Some(ValidationErrorKind::RequiredFieldMissing)
        );
        assert_eq!(errors.message("email"), Some("Email is required"));
    }

    #[test]
    fn test_serializes_as_field_to_message() {
        let mut errors = ErrorMap::new();
        errors.insert("phone", FieldError::format("Invalid phone"));
        errors.insert("email", FieldError::format("Invalid email format"));

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"email":"Invalid email format","phone":"Invalid phone"}"#
        );
    }

    #[test]
    fn test_display() {
        let mut errors = ErrorMap::new();
        errors.insert("gender", FieldError::range("Gender must be one of: Male, Female"));
        assert_eq!(
            errors.to_string(),
            "gender: Gender must be one of: Male, Female"
        );
    }

    #[test]
    fn test_field_error_display_is_message() {
        let err = FieldError::collection_size("Maximum 2 departments allowed");
        assert_eq!(err.to_string(), "Maximum 2 departments allowed");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ValidationErrorKind::CollectionMemberInvalid).unwrap();
        assert_eq!(json, r#""COLLECTION_MEMBER_INVALID""#);
    }
}
