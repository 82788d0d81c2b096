use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use clubroll::router::init_router;
use clubroll::state::AppState;
use clubroll_config::{CorsConfig, GeofenceConfig, RegistrationRules};
use clubroll_core::geofence::EARTH_RADIUS_METERS;
use clubroll_models::GeoPoint;
use fake::Fake;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_state() -> AppState {
    AppState::new(
        RegistrationRules::default(),
        &GeofenceConfig::default(),
        CorsConfig::default(),
    )
}

pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

/// A registration payload that passes validation.
pub fn valid_payload(reg_number: &str) -> Value {
    let name: String = Name().fake();
    json!({
        "reg_number": reg_number,
        "full_name": name,
        "email": "member@example.com",
        "phone": "+255712345678",
        "gender": "Male",
        "year_of_study": 1,
        "course": "Bachelor of Science in Information Technology",
        "departments": ["Programming", "Cyber Security"]
    })
}

/// A point `meters` due north of `origin`.
#[allow(dead_code)]
pub fn north_of(origin: GeoPoint, meters: f64) -> GeoPoint {
    let delta = (meters / EARTH_RADIUS_METERS).to_degrees();
    GeoPoint::new(origin.latitude + delta, origin.longitude)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
