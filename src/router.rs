use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::health::router::init_health_router;
use crate::modules::members::router::init_members_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use clubroll_config::CorsConfig;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins)
}

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_health_router())
                .merge(init_members_router())
                .merge(init_attendance_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
