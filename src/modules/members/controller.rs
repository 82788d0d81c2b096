use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use clubroll_core::{AppError, ApiResponse};

use crate::modules::members::model::{
    CheckMemberRequest, CheckMemberResponse, Member, RegisterMemberRequest,
};
use crate::modules::members::service::MemberService;
use crate::state::AppState;
use crate::validator::{JsonBody, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/check-member",
    request_body = CheckMemberRequest,
    responses(
        (status = 200, description = "Lookup result", body = ApiResponse<CheckMemberResponse>),
        (status = 400, description = "Missing or malformed registration number", body = clubroll_core::ErrorResponse)
    ),
    tag = "Members"
)]
#[instrument(skip(state))]
pub async fn check_member(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CheckMemberRequest>,
) -> Result<Json<ApiResponse<CheckMemberResponse>>, AppError> {
    let result = MemberService::check_member(&state.store, &state.rules, &dto.reg_number).await?;

    let response = if result.exists {
        ApiResponse::ok(result)
    } else {
        ApiResponse::ok(result).with_message("Member not found")
    };

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterMemberRequest,
    responses(
        (status = 201, description = "Member registered", body = ApiResponse<Member>),
        (status = 400, description = "Validation failed; details maps each invalid field to its message", body = clubroll_core::ErrorResponse),
        (status = 409, description = "Registration number already registered", body = clubroll_core::ErrorResponse)
    ),
    tag = "Members"
)]
#[instrument(skip(state, payload))]
pub async fn register_member(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Member>>), AppError> {
    let member = MemberService::register_member(&state.store, &state.rules, &payload.0).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(member).with_message("Registration successful!")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/members",
    responses(
        (status = 200, description = "Active members", body = ApiResponse<Vec<Member>>)
    ),
    tag = "Members"
)]
#[instrument(skip(state))]
pub async fn get_members(State(state): State<AppState>) -> Json<ApiResponse<Vec<Member>>> {
    let members = MemberService::get_active_members(&state.store).await;
    Json(ApiResponse::ok(members))
}
