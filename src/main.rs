use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::api::router;
use todo_api::config::Config;
use todo_api::state::AppState;
use todo_api::{db, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loads .env before the filter reads RUST_LOG.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "todo_api=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    let state = AppState::new(pool);
    let app = router(state).layer(server::cors_layer(&config)?);

    server::serve(app, &config).await
}
