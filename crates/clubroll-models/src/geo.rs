//! Geographic points and geofence verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::errors::ValidationErrorKind;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn has_valid_latitude(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
    }

    pub fn has_valid_longitude(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Renders as `3.294995°S, 37.329285°E`.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let lon_dir = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.6}°{}, {:.6}°{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

/// Whole meters, halves rounded away from zero.
pub fn round_meters(meters: f64) -> i64 {
    meters.round() as i64
}

/// Outcome of a geofence check.
///
/// `distance_meters` is absent when the coordinates themselves were rejected.
/// `kind` is absent when the location was verified.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GeofenceVerdict {
    pub verified: bool,
    pub distance_meters: Option<f64>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValidationErrorKind>,
}

impl GeofenceVerdict {
    pub fn verified(distance_meters: f64, message: impl Into<String>) -> Self {
        Self {
            verified: true,
            distance_meters: Some(distance_meters),
            message: message.into(),
            kind: None,
        }
    }

    pub fn outside(distance_meters: f64, message: impl Into<String>) -> Self {
        Self {
            verified: false,
            distance_meters: Some(distance_meters),
            message: message.into(),
            kind: Some(ValidationErrorKind::OutOfGeofence),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            distance_meters: None,
            message: message.into(),
            kind: Some(ValidationErrorKind::CoordinateInvalid),
        }
    }

    /// Distance rounded to whole meters, as shown to members.
    pub fn rounded_distance(&self) -> Option<i64> {
        self.distance_meters.map(round_meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_southern_eastern() {
        let point = GeoPoint::new(-3.294995, 37.3292853);
        assert_eq!(point.to_string(), "3.294995°S, 37.329285°E");
    }

    #[test]
    fn test_display_northern_western() {
        let point = GeoPoint::new(51.5, -0.1275);
        assert_eq!(point.to_string(), "51.500000°N, 0.127500°W");
    }

    #[test]
    fn test_ranges() {
        assert!(GeoPoint::new(90.0, 180.0).has_valid_latitude());
        assert!(GeoPoint::new(90.0, 180.0).has_valid_longitude());
        assert!(!GeoPoint::new(95.0, 0.0).has_valid_latitude());
        assert!(!GeoPoint::new(0.0, -180.5).has_valid_longitude());
    }

    #[test]
    fn test_verdict_constructors() {
        let ok = GeofenceVerdict::verified(12.4, "ok");
        assert!(ok.verified);
        assert_eq!(ok.kind, None);
        assert_eq!(ok.rounded_distance(), Some(12));

        let far = GeofenceVerdict::outside(250.6, "far");
        assert!(!far.verified);
        assert_eq!(far.kind, Some(ValidationErrorKind::OutOfGeofence));
        assert_eq!(far.rounded_distance(), Some(251));

        let bad = GeofenceVerdict::invalid("bad");
        assert_eq!(bad.distance_meters, None);
        assert_eq!(bad.kind, Some(ValidationErrorKind::CoordinateInvalid));
    }

    #[test]
    fn test_round_meters_halves_away_from_zero() {
        assert_eq!(round_meters(100.5), 101);
        assert_eq!(round_meters(2.5), 3);
        assert_eq!(round_meters(99.49), 99);
    }

    #[test]
    fn test_verdict_serialization_omits_kind_when_verified() {
        let json = serde_json::to_value(GeofenceVerdict::verified(3.0, "ok")).unwrap();
        assert_eq!(json["verified"], true);
        assert_eq!(json["distance_meters"], 3.0);
        assert!(json.get("kind").is_none());
    }
}
