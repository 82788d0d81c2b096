use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_location, get_todays_attendance, mark_attendance};

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/check-location", post(check_location))
        .route("/mark-attendance", post(mark_attendance))
        .route("/attendance", get(get_todays_attendance))
}
