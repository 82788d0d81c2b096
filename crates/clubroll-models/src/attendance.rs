//! Attendance DTOs and records.
//!
//! Coordinates are accepted as raw JSON values: a browser that could not
//! obtain a GPS fix sends `null` or omits them, and that case is reported as
//! an invalid location rather than a malformed request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::registration_number::RegistrationNumber;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub reg_number: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = -3.294995)]
    pub latitude: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 37.3292853)]
    pub longitude: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckLocationRequest {
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = -3.294995)]
    pub latitude: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 37.3292853)]
    pub longitude: Option<Value>,
}

/// One verified attendance mark. At most one per member per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub reg_number: RegistrationNumber,
    pub full_name: String,
    pub date: NaiveDate,
    pub distance_meters: f64,
    pub marked_at: DateTime<Utc>,
}
