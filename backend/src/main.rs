//! AgriDash server binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agridash_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "agridash_server=debug,agridash_backend=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriDash server");
    tracing::info!("Environment: {}", config.environment);

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Seed the in-memory store
    let state = AppState::new(config);
    {
        let data = state.store.read().await;
        tracing::info!(
            fields = data.fields.len(),
            sensors = data.sensors.len(),
            "Mock data loaded"
        );
    }

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
