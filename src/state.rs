use std::sync::Arc;

use clubroll_config::{CorsConfig, GeofenceConfig, RegistrationRules};
use clubroll_core::GeofenceChecker;

use crate::store::MemberStore;

/// Configuration is built once at startup and shared read-only.
#[derive(Clone, Debug)]
pub struct AppState {
    pub rules: Arc<RegistrationRules>,
    pub geofence: Arc<GeofenceChecker>,
    pub store: MemberStore,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        rules: RegistrationRules,
        geofence_config: &GeofenceConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            rules: Arc::new(rules),
            geofence: Arc::new(GeofenceChecker::new(geofence_config)),
            store: MemberStore::new(),
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    let geofence_config = GeofenceConfig::from_env();
    tracing::info!(
        latitude = geofence_config.latitude,
        longitude = geofence_config.longitude,
        radius_meters = geofence_config.radius_meters,
        "Geofence configured"
    );

    AppState::new(
        RegistrationRules::from_env(),
        &geofence_config,
        CorsConfig::from_env(),
    )
}
