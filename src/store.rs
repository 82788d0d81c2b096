//! In-memory member and attendance storage.
//!
//! Members are keyed by their canonical registration number, so two
//! registrations that differ only in sequence zero-padding collide.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, NaiveDate, Utc};
use clubroll_core::{AppError, ErrorCode};
use clubroll_models::{AttendanceRecord, Member, RegistrationNumber};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Member already registered")]
    DuplicateMember(RegistrationNumber),
    #[error("Member not found")]
    MemberNotFound(RegistrationNumber),
    #[error("Attendance already marked for {date}")]
    AlreadyMarked {
        reg_number: RegistrationNumber,
        date: NaiveDate,
    },
}

impl StoreError {
    pub fn into_app_error(self) -> AppError {
        let (status, code) = match self {
            Self::DuplicateMember(_) => (StatusCode::CONFLICT, ErrorCode::DuplicateMember),
            Self::MemberNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::MemberNotFound),
            Self::AlreadyMarked { .. } => (StatusCode::CONFLICT, ErrorCode::AlreadyMarked),
        };
        AppError::new(status, code, self)
    }
}

#[derive(Debug, Default)]
struct Inner {
    members: BTreeMap<RegistrationNumber, Member>,
    attendance: Vec<AttendanceRecord>,
    marked: HashSet<(RegistrationNumber, NaiveDate)>,
}

#[derive(Clone, Debug, Default)]
pub struct MemberStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find(&self, reg_number: &RegistrationNumber) -> Option<Member> {
        self.inner.read().await.members.get(reg_number).cloned()
    }

    pub async fn insert(&self, member: Member) -> Result<Member, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.members.contains_key(&member.reg_number) {
            return Err(StoreError::DuplicateMember(member.reg_number));
        }

        inner
            .members
            .insert(member.reg_number.clone(), member.clone());
        Ok(member)
    }

    /// Active members ordered by registration number.
    pub async fn active_members(&self) -> Vec<Member> {
        self.inner
            .read()
            .await
            .members
            .values()
            .filter(|m| m.active)
            .cloned()
            .collect()
    }

    pub async fn set_active(
        &self,
        reg_number: &RegistrationNumber,
        active: bool,
    ) -> Result<Member, StoreError> {
        let mut inner = self.inner.write().await;
        let member = inner
            .members
            .get_mut(reg_number)
            .ok_or_else(|| StoreError::MemberNotFound(reg_number.clone()))?;

        member.active = active;
        Ok(member.clone())
    }

    /// Records attendance for `member` on the UTC date of `marked_at`.
    ///
    /// A member can be marked at most once per date.
    pub async fn record_attendance(
        &self,
        member: &Member,
        distance_meters: f64,
        marked_at: DateTime<Utc>,
    ) -> Result<AttendanceRecord, StoreError> {
        let date = marked_at.date_naive();
        let mut inner = self.inner.write().await;

        if !inner.marked.insert((member.reg_number.clone(), date)) {
            return Err(StoreError::AlreadyMarked {
                reg_number: member.reg_number.clone(),
                date,
            });
        }

        let record = AttendanceRecord {
            reg_number: member.reg_number.clone(),
            full_name: member.full_name.clone(),
            date,
            distance_meters,
            marked_at,
        };
        inner.attendance.push(record.clone());
        Ok(record)
    }

    pub async fn attendance_on(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.inner
            .read()
            .await
            .attendance
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect()
    }
}
