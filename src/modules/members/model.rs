//! Member DTOs.
//!
//! The request and entity types live in `clubroll-models`; re-exported here
//! so the module reads like every other feature module.

pub use clubroll_models::{
    CheckMemberRequest, CheckMemberResponse, Member, RegisterMemberRequest, ValidatedMember,
};
