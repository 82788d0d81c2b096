//! # Clubroll Models
//!
//! Domain models and DTOs for the Clubroll API.
//!
//! # Modules
//!
//! - [`attendance`]: Attendance requests and records
//! - [`errors`]: Field-level validation errors and the aggregated [`ErrorMap`]
//! - [`geo`]: Geographic points and geofence verdicts
//! - [`members`]: Club members and registration DTOs
//! - [`registration_number`]: The canonical registration number type
//! - [`value_types`]: Validated email and phone number newtypes
//!
//! # Example
//!
//! ```ignore
//! use clubroll_models::{RegistrationNumber, registration_number::normalize};
//!
//! assert_eq!(normalize("T/DEG/2020/0544"), "T/DEG/2020/544");
//! let reg: RegistrationNumber = "T/DEG/2024/001".parse().unwrap();
//! assert_eq!(reg.as_str(), "T/DEG/2024/1");
//! ```

pub mod attendance;
pub mod errors;
pub mod geo;
pub mod members;
pub mod registration_number;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use attendance::{AttendanceRecord, CheckLocationRequest, MarkAttendanceRequest};
pub use errors::{ErrorMap, FieldError, ValidationErrorKind};
pub use geo::{GeoPoint, GeofenceVerdict, round_meters};
pub use members::{
    CheckMemberRequest, CheckMemberResponse, Member, RegisterMemberRequest, ValidatedMember,
    fields,
};
pub use registration_number::{RegistrationNumber, RegistrationNumberError};
pub use value_types::{Email, PhoneNumber, ValueTypeError};
