use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_member, get_members, register_member};

pub fn init_members_router() -> Router<AppState> {
    Router::new()
        .route("/check-member", post(check_member))
        .route("/register", post(register_member))
        .route("/members", get(get_members))
}
