use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use tracing::instrument;

use clubroll_core::{AppError, ApiResponse};

use crate::modules::attendance::model::{
    AttendanceRecord, CheckLocationRequest, GeofenceVerdict, MarkAttendanceRequest,
};
use crate::modules::attendance::service::AttendanceService;
use crate::state::AppState;
use crate::validator::{JsonBody, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/check-location",
    request_body = CheckLocationRequest,
    responses(
        (status = 200, description = "Geofence verdict, verified or not", body = ApiResponse<GeofenceVerdict>),
        (status = 400, description = "Malformed request body", body = clubroll_core::ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn check_location(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CheckLocationRequest>,
) -> Json<ApiResponse<GeofenceVerdict>> {
    let verdict = AttendanceService::check_location(&state.geofence, &dto);
    let message = verdict.message.clone();
    Json(ApiResponse::ok(verdict).with_message(message))
}

#[utoipa::path(
    post,
    path = "/api/mark-attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 201, description = "Attendance marked", body = ApiResponse<AttendanceRecord>),
        (status = 400, description = "Invalid registration number or coordinates", body = clubroll_core::ErrorResponse),
        (status = 403, description = "Member inactive or outside the geofence", body = clubroll_core::ErrorResponse),
        (status = 404, description = "Member not found", body = clubroll_core::ErrorResponse),
        (status = 409, description = "Attendance already marked today", body = clubroll_core::ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<MarkAttendanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AttendanceRecord>>), AppError> {
    let (record, verdict) = AttendanceService::mark_attendance(
        &state.store,
        &state.rules,
        &state.geofence,
        &dto,
        Utc::now(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(record).with_message(verdict.message)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Attendance marked today (UTC)", body = ApiResponse<Vec<AttendanceRecord>>)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn get_todays_attendance(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<AttendanceRecord>>> {
    let today = Utc::now().date_naive();
    Json(ApiResponse::ok(
        AttendanceService::attendance_on(&state.store, today).await,
    ))
}
