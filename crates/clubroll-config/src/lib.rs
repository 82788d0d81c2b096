//! # Clubroll Config
//!
//! Configuration types for the Clubroll API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`registration`]: Closed sets and patterns used to validate member registrations
//! - [`geofence`]: Reference point and radius for attendance verification
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Bind address and log directory
//!
//! Every config is built once at startup and shared read-only afterwards.
//!
//! # Example
//!
//! ```ignore
//! use clubroll_config::{CorsConfig, GeofenceConfig, RegistrationRules, ServerConfig};
//!
//! let rules = RegistrationRules::from_env();
//! let geofence = GeofenceConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod geofence;
pub mod registration;
pub mod server;

mod env;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use geofence::GeofenceConfig;
pub use registration::RegistrationRules;
pub use server::ServerConfig;
