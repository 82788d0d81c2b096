use anyhow::Context;
use clubroll::logging::init_tracing;
use clubroll::router::init_router;
use clubroll::state::init_app_state;
use clubroll_config::ServerConfig;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config.log_dir).context("Failed to initialize tracing")?;

    let state = init_app_state();
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://localhost:{}/swagger-ui", server_config.port);
    info!("Scalar UI available at http://localhost:{}/scalar", server_config.port);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
