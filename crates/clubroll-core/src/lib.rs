//! # Clubroll Core
//!
//! The registration validation pipeline and the geofenced attendance check,
//! plus the error and response types shared by the HTTP layer.
//!
//! - [`validation`]: registration number and full payload validation
//! - [`geofence`]: haversine distance and the attendance geofence
//! - [`errors`]: [`AppError`] with HTTP response conversion
//! - [`response`]: the `{ success, message, data }` envelope
//!
//! Everything in [`validation`] and [`geofence`] is a pure function of its
//! input and the read-only configuration passed in.
//!
//! # Example
//!
//! ```ignore
//! use clubroll_config::{GeofenceConfig, RegistrationRules};
//! use clubroll_core::geofence::GeofenceChecker;
//! use clubroll_core::validation::validate_member;
//!
//! let rules = RegistrationRules::default();
//! let outcome = validate_member(&payload, &rules);
//! if !outcome.is_valid() {
//!     println!("{}", outcome.errors);
//! }
//!
//! let checker = GeofenceChecker::new(&GeofenceConfig::default());
//! let verdict = checker.check(-3.2950, 37.3293);
//! ```

pub mod errors;
pub mod geofence;
pub mod response;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorCode};
pub use geofence::{GeofenceChecker, haversine_distance};
pub use response::{ApiResponse, ErrorBody, ErrorResponse};
pub use validation::{MemberValidation, validate_member, validate_registration_number};
