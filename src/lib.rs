//! # Clubroll API
//!
//! Backend for a club membership application, built with Axum.
//!
//! ## Overview
//!
//! - **Registration**: every field of a registration payload is validated in
//!   one pass and all problems are reported together
//! - **Registration numbers**: `T/DEG/2024/001` and `T/DEG/2024/1` denote the
//!   same member; the canonical form drops sequence zero-padding
//! - **Attendance**: a member can mark attendance once per day, only from
//!   within a fixed radius of the club's location
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── clubroll-config/  # Environment-driven configuration
//! ├── clubroll-models/  # Domain types and DTOs
//! ├── clubroll-core/    # Validation core, geofence, AppError
//! └── clubroll-cli/     # Operator CLI
//! src/
//! ├── modules/
//! │   ├── members/     # check-member, register, members
//! │   ├── attendance/  # check-location, mark-attendance, attendance
//! │   └── health/      # liveness
//! ├── store.rs         # In-memory member and attendance storage
//! └── validator.rs     # JSON extractors using the error envelope
//! ```
//!
//! Each feature module has a `controller.rs`, `service.rs`, `model.rs` and
//! `router.rs`.
//!
//! ## Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=5000
//! ALLOWED_ORIGINS=http://localhost:5173
//! MAX_DEPARTMENTS_PER_MEMBER=2
//! GEOFENCE_LATITUDE=-3.294995
//! GEOFENCE_LONGITUDE=37.3292853
//! GEOFENCE_RADIUS_METERS=100
//! LOG_DIR=storage/logs
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:5000/swagger-ui`
//! - Scalar: `http://localhost:5000/scalar`

pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

// Re-export workspace crates for convenience
pub use clubroll_config;
pub use clubroll_core;
pub use clubroll_models;
