//! Registration numbers.
//!
//! A registration number has the shape `SCHEME/TRACK/YEAR/SEQUENCE`, for
//! example `T/DEG/2024/1`. The sequence may be typed with leading zeros
//! (`T/DEG/2024/001`); the canonical form strips them, keeping at least one
//! digit. Two inputs that refer to the same member always canonicalize to the
//! same string, which makes the canonical form the duplicate-detection key.
//!
//! # Example
//!
//! ```ignore
//! use clubroll_models::registration_number::{normalize, RegistrationNumber};
//!
//! assert_eq!(normalize("T/DEG/2020/0544"), "T/DEG/2020/544");
//! assert_eq!(normalize("T/DEG/2020/000"), "T/DEG/2020/0");
//!
//! let reg = RegistrationNumber::new("T/DIP/2024/01025").unwrap();
//! assert_eq!(reg.as_str(), "T/DIP/2024/1025");
//! assert_eq!(reg.track(), Some("DIP"));
//! ```

use clubroll_config::registration::default_reg_number_regex;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationNumberError {
    #[error("Registration number is required")]
    Empty,
    #[error("Invalid registration number format. Examples: T/DEG/2024/001 or T/DIP/2024/1025")]
    InvalidFormat(String),
}

/// Strips leading zeros from the sequence part of a four-part identifier.
///
/// Empty input and inputs that do not split into exactly four parts are
/// returned unchanged; this is canonicalization, not validation.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = raw.split('/').collect();
    let [scheme, track, year, sequence] = parts.as_slice() else {
        return raw.to_string();
    };

    let sequence = match sequence.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    };

    format!("{}/{}/{}/{}", scheme, track, year, sequence)
}

/// A canonical, pattern-checked registration number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[schema(value_type = String, example = "T/DEG/2024/1")]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Normalizes and validates against the default pattern.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, RegistrationNumberError> {
        Self::parse_with(raw.as_ref(), default_reg_number_regex())
    }

    /// Normalizes and validates against a caller-supplied pattern.
    pub fn parse_with(raw: &str, pattern: &Regex) -> Result<Self, RegistrationNumberError> {
        if raw.is_empty() {
            return Err(RegistrationNumberError::Empty);
        }

        let canonical = normalize(raw);
        if !pattern.is_match(&canonical) {
            return Err(RegistrationNumberError::InvalidFormat(raw.to_string()));
        }

        Ok(Self(canonical))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn part(&self, index: usize) -> Option<&str> {
        self.0.split('/').nth(index)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.part(0)
    }

    /// Programme track, `DEG` or `DIP` under the default pattern.
    pub fn track(&self) -> Option<&str> {
        self.part(1)
    }

    pub fn year(&self) -> Option<u16> {
        self.part(2).and_then(|y| y.parse().ok())
    }

    pub fn sequence(&self) -> Option<&str> {
        self.part(3)
    }
}

impl fmt::Debug for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegistrationNumber({})", self.0)
    }
}

impl fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegistrationNumber {
    type Err = RegistrationNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RegistrationNumber {
    type Error = RegistrationNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RegistrationNumber {
    type Error = RegistrationNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for RegistrationNumber {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RegistrationNumber> for String {
    fn from(reg: RegistrationNumber) -> String {
        reg.0
    }
}

impl PartialEq<str> for RegistrationNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RegistrationNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Deserializing canonicalizes, so stored and incoming values compare equal.
impl<'de> Deserialize<'de> for RegistrationNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
