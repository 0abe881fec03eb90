use lexis_api::{routes, state};
use lexis_common::{config::AppConfig, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = AppConfig::from_env().expect("Failed to load config");
    tracing::info!("Starting Lexis API server");

    let app_state = state::AppState::new(&config)?;
    let app = routes::create_router(app_state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
