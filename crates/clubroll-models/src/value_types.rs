//! Strongly-typed value types for member contact details.
//!
//! `Email` and `PhoneNumber` are only constructed from input that matched the
//! configured pattern, so a `Member` never holds an unchecked contact value.
//!
//! # Example
//!
//! ```ignore
//! use clubroll_models::value_types::{Email, PhoneNumber};
//!
//! let email: Email = " Ada@Example.com ".parse().unwrap();
//! assert_eq!(email.as_str(), "ada@example.com");
//!
//! let phone: PhoneNumber = "+255712345678".parse().unwrap();
//! assert_eq!(phone.digits_only(), "255712345678");
//! ```

use clubroll_config::registration::{default_email_regex, default_phone_regex};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),
}

// ============================================================================
// Email
// ============================================================================

/// A pattern-checked email address, stored trimmed and lowercased.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, format = "email", example = "member@example.com")]
pub struct Email(String);

impl Email {
    /// Parses with the default email pattern.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        Self::parse_with(email.as_ref(), default_email_regex())
    }

    /// Lowercases and trims, then matches against `pattern`.
    pub fn parse_with(email: &str, pattern: &Regex) -> Result<Self, ValueTypeError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !pattern.is_match(&email) {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// PhoneNumber
// ============================================================================

/// A pattern-checked phone number.
///
/// The default pattern accepts 10 to 15 digits with an optional leading `+`
/// and no separators.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "+255712345678")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses with the default phone pattern.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        Self::parse_with(phone.as_ref(), default_phone_regex())
    }

    pub fn parse_with(phone: &str, pattern: &Regex) -> Result<Self, ValueTypeError> {
        let phone = phone.trim();

        if phone.is_empty() {
            return Err(ValueTypeError::InvalidPhoneNumber(
                "phone number cannot be empty".into(),
            ));
        }

        if !pattern.is_match(phone) {
            return Err(ValueTypeError::InvalidPhoneNumber(format!(
                "'{}' should be 10-15 digits with optional +",
                phone
            )));
        }

        Ok(Self(phone.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn is_international(&self) -> bool {
        self.0.starts_with('+')
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PhoneNumber {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
