use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::{info, instrument, warn};

use clubroll_config::RegistrationRules;
use clubroll_core::{AppError, ErrorCode, GeofenceChecker};
use clubroll_models::ValidationErrorKind;

use crate::modules::attendance::model::{
    AttendanceRecord, CheckLocationRequest, GeofenceVerdict, MarkAttendanceRequest,
};
use crate::modules::members::service::MemberService;
use crate::store::MemberStore;

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(geofence))]
    pub fn check_location(geofence: &GeofenceChecker, dto: &CheckLocationRequest) -> GeofenceVerdict {
        geofence.check_value(dto.latitude.as_ref(), dto.longitude.as_ref())
    }

    /// Marks attendance for an active member standing inside the geofence.
    ///
    /// Checks run in order: registration number format, membership, active
    /// status, location, then the once-per-day rule.
    #[instrument(skip(store, rules, geofence))]
    pub async fn mark_attendance(
        store: &MemberStore,
        rules: &RegistrationRules,
        geofence: &GeofenceChecker,
        dto: &MarkAttendanceRequest,
        now: DateTime<Utc>,
    ) -> Result<(AttendanceRecord, GeofenceVerdict), AppError> {
        let reg_number = MemberService::parse_reg_number(&dto.reg_number, rules)?;

        let member = store.find(&reg_number).await.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::MemberNotFound,
                anyhow!("Member not found. Please register first."),
            )
        })?;

        if !member.active {
            return Err(AppError::forbidden(
                ErrorCode::InactiveMember,
                anyhow!("Your membership is inactive"),
            ));
        }

        let verdict = geofence.check_value(dto.latitude.as_ref(), dto.longitude.as_ref());
        let distance = match (verdict.verified, verdict.distance_meters) {
            (true, Some(distance)) => distance,
            _ if verdict.kind == Some(ValidationErrorKind::OutOfGeofence) => {
                warn!(reg_number = %reg_number, distance = ?verdict.distance_meters, "Attendance denied outside geofence");
                return Err(AppError::forbidden(
                    ErrorCode::LocationDenied,
                    anyhow!(verdict.message.clone()),
                )
                .with_details(json!({
                    "distance_meters": verdict.rounded_distance(),
                    "radius_meters": geofence.radius_meters(),
                })));
            }
            _ => {
                return Err(AppError::bad_request(
                    ErrorCode::InvalidLocation,
                    anyhow!(verdict.message.clone()),
                ));
            }
        };

        let record = store
            .record_attendance(&member, distance, now)
            .await
            .map_err(|err| err.into_app_error())?;

        info!(reg_number = %reg_number, distance, "Attendance marked");
        Ok((record, verdict))
    }

    #[instrument(skip(store))]
    pub async fn attendance_on(store: &MemberStore, date: NaiveDate) -> Vec<AttendanceRecord> {
        store.attendance_on(date).await
    }
}
