use utoipa::OpenApi;

use clubroll_core::{ErrorBody, ErrorCode, ErrorResponse};
use clubroll_models::{
    AttendanceRecord, CheckLocationRequest, CheckMemberRequest, CheckMemberResponse, GeoPoint,
    GeofenceVerdict, MarkAttendanceRequest, Member, RegisterMemberRequest, ValidationErrorKind,
};

use crate::modules::health::model::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::members::controller::check_member,
        crate::modules::members::controller::register_member,
        crate::modules::members::controller::get_members,
        crate::modules::attendance::controller::check_location,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::attendance::controller::get_todays_attendance,
    ),
    components(
        schemas(
            HealthResponse,
            Member,
            CheckMemberRequest,
            CheckMemberResponse,
            RegisterMemberRequest,
            CheckLocationRequest,
            MarkAttendanceRequest,
            AttendanceRecord,
            GeoPoint,
            GeofenceVerdict,
            ValidationErrorKind,
            ErrorCode,
            ErrorBody,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Members", description = "Registration and member lookup"),
        (name = "Attendance", description = "Geofenced attendance marking")
    ),
    info(
        title = "Clubroll API",
        version = "0.1.0",
        description = "Club membership registration with validated payloads and geofenced attendance.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
