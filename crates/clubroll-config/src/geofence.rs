//! Geofence configuration for attendance verification.
//!
//! # Configuration
//!
//! - `GEOFENCE_LATITUDE`: reference latitude in degrees (default: -3.294995)
//! - `GEOFENCE_LONGITUDE`: reference longitude in degrees (default: 37.3292853)
//! - `GEOFENCE_RADIUS_METERS`: allowed radius, inclusive (default: 100)
//! - `GEOFENCE_SITE_LABEL`: name used in verdict messages (default: "campus")

use crate::env::parsed_or;

pub const DEFAULT_LATITUDE: f64 = -3.294995;
pub const DEFAULT_LONGITUDE: f64 = 37.3292853;
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;
pub const DEFAULT_SITE_LABEL: &str = "campus";

#[derive(Clone, Debug, PartialEq)]
pub struct GeofenceConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub site_label: String,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            radius_meters: DEFAULT_RADIUS_METERS,
            site_label: DEFAULT_SITE_LABEL.to_string(),
        }
    }
}

impl GeofenceConfig {
    /// Creates a `GeofenceConfig` from environment variables.
    ///
    /// Values outside their geographic range, or a non-positive radius, are
    /// ignored in favour of the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let latitude = parsed_or("GEOFENCE_LATITUDE", DEFAULT_LATITUDE);
        let longitude = parsed_or("GEOFENCE_LONGITUDE", DEFAULT_LONGITUDE);
        let radius_meters = parsed_or("GEOFENCE_RADIUS_METERS", DEFAULT_RADIUS_METERS);
        let site_label = std::env::var("GEOFENCE_SITE_LABEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_LABEL.to_string());

        let (latitude, longitude) = if (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
        {
            (latitude, longitude)
        } else {
            tracing::warn!(
                latitude,
                longitude,
                "Geofence reference point out of range, using default"
            );
            (DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
        };

        let radius_meters = if radius_meters.is_finite() && radius_meters > 0.0 {
            radius_meters
        } else {
            tracing::warn!(radius_meters, "Invalid geofence radius, using default");
            DEFAULT_RADIUS_METERS
        };

        Self {
            latitude,
            longitude,
            radius_meters,
            site_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeofenceConfig::default();
        assert_eq!(config.latitude, -3.294995);
        assert_eq!(config.longitude, 37.3292853);
        assert_eq!(config.radius_meters, 100.0);
        assert_eq!(config.site_label, "campus");
    }
}
