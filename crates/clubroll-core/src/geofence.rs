//! Geofenced attendance check.
//!
//! Distances use the haversine great-circle formula on a spherical Earth,
//! which is accurate to well under a meter at the radii involved here.

use clubroll_config::GeofenceConfig;
use clubroll_models::{GeoPoint, GeofenceVerdict, round_meters};
use serde_json::Value;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const INVALID_FORMAT: &str = "Invalid GPS coordinates format";
const INVALID_LATITUDE: &str = "Invalid latitude value";
const INVALID_LONGITUDE: &str = "Invalid longitude value";

/// Great-circle distance between two points, in meters.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1]. NaN passes through.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Human-readable coordinates, e.g. `3.294995°S, 37.329285°E`.
pub fn format_coordinates(point: &GeoPoint) -> String {
    point.to_string()
}

/// Classifies coordinates against a fixed reference point and radius.
///
/// Built once from [`GeofenceConfig`] and shared read-only.
#[derive(Debug, Clone)]
pub struct GeofenceChecker {
    reference: GeoPoint,
    radius_meters: f64,
    site_label: String,
}

impl GeofenceChecker {
    pub fn new(config: &GeofenceConfig) -> Self {
        Self {
            reference: GeoPoint::new(config.latitude, config.longitude),
            radius_meters: config.radius_meters,
            site_label: config.site_label.clone(),
        }
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    pub fn site_label(&self) -> &str {
        &self.site_label
    }

    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        haversine_distance(&self.reference, point)
    }

    /// Checks a coordinate pair. The boundary is inclusive.
    ///
    /// Never panics: malformed coordinates and numeric faults come back as
    /// unverified verdicts with no distance.
    pub fn check(&self, latitude: f64, longitude: f64) -> GeofenceVerdict {
        if !latitude.is_finite() || !longitude.is_finite() {
            return GeofenceVerdict::invalid(INVALID_FORMAT);
        }

        let point = GeoPoint::new(latitude, longitude);
        if !point.has_valid_latitude() {
            return GeofenceVerdict::invalid(INVALID_LATITUDE);
        }
        if !point.has_valid_longitude() {
            return GeofenceVerdict::invalid(INVALID_LONGITUDE);
        }

        let distance = self.distance_to(&point);
        if !distance.is_finite() {
            tracing::warn!(%point, reference = %self.reference, "Non-finite geofence distance");
            return GeofenceVerdict::invalid(format!(
                "Location validation error: distance from {} to {} is not a number",
                format_coordinates(&point),
                format_coordinates(&self.reference)
            ));
        }

        let shown = round_meters(distance);
        let verdict = if distance <= self.radius_meters {
            GeofenceVerdict::verified(
                distance,
                format!("Location verified ({shown}m from {})", self.site_label),
            )
        } else {
            GeofenceVerdict::outside(
                distance,
                format!(
                    "You must be on {} to mark attendance (You are {shown}m away)",
                    self.site_label
                ),
            )
        };

        tracing::debug!(%point, distance, verified = verdict.verified, "Geofence check");
        verdict
    }

    /// Checks coordinates taken straight from a JSON body.
    ///
    /// Missing values, `null`, strings and booleans are all reported as an
    /// invalid format.
    pub fn check_value(&self, latitude: Option<&Value>, longitude: Option<&Value>) -> GeofenceVerdict {
        match (
            latitude.and_then(Value::as_f64),
            longitude.and_then(Value::as_f64),
        ) {
            (Some(lat), Some(lon)) => self.check(lat, lon),
            _ => GeofenceVerdict::invalid(INVALID_FORMAT),
        }
    }
}

impl Default for GeofenceChecker {
    fn default() -> Self {
        Self::new(&GeofenceConfig::default())
    }
}
