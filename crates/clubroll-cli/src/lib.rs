//! # Clubroll CLI
//!
//! Offline tools for the registration validator and the attendance geofence.
//!
//! ## Usage
//!
//! ```ignore
//! use clubroll_cli::samples::sample_payloads;
//! use clubroll_config::RegistrationRules;
//!
//! for payload in sample_payloads(&RegistrationRules::default(), 3) {
//!     println!("{}", serde_json::Value::Object(payload));
//! }
//! ```

pub mod samples;
