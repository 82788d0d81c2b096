use anyhow::anyhow;
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use clubroll_config::RegistrationRules;
use clubroll_core::validation::{validate_member, validate_registration_str};
use clubroll_core::{AppError, ErrorCode};
use clubroll_models::RegistrationNumber;

use crate::modules::members::model::{CheckMemberResponse, Member};
use crate::store::MemberStore;

pub struct MemberService;

impl MemberService {
    /// Parses a registration number supplied by a client, trimming it first.
    pub fn parse_reg_number(
        raw: &str,
        rules: &RegistrationRules,
    ) -> Result<RegistrationNumber, AppError> {
        validate_registration_str(raw.trim(), rules)
            .map_err(|err| AppError::bad_request(ErrorCode::InvalidRegNumber, anyhow!(err)))
    }

    #[instrument(skip(store, rules))]
    pub async fn check_member(
        store: &MemberStore,
        rules: &RegistrationRules,
        raw: &str,
    ) -> Result<CheckMemberResponse, AppError> {
        let reg_number = Self::parse_reg_number(raw, rules)?;
        let member = store.find(&reg_number).await;

        Ok(CheckMemberResponse {
            exists: member.is_some(),
            member,
        })
    }

    #[instrument(skip_all)]
    pub async fn register_member(
        store: &MemberStore,
        rules: &RegistrationRules,
        payload: &Map<String, Value>,
    ) -> Result<Member, AppError> {
        let validated = validate_member(payload, rules)
            .into_result()
            .map_err(|errors| {
                warn!(%errors, "Registration rejected");
                AppError::validation(&errors)
            })?;

        let member = Member::from_validated(validated, Utc::now());
        let member = store
            .insert(member)
            .await
            .map_err(|err| err.into_app_error())?;

        info!(reg_number = %member.reg_number, "Member registered");
        Ok(member)
    }

    #[instrument(skip(store))]
    pub async fn get_active_members(store: &MemberStore) -> Vec<Member> {
        store.active_members().await
    }
}
