//! cafe-cloud — hosted backend for the Travel Café site
//!
//! Long-running service that:
//! - Serves the public content endpoints (menu, gallery, testimonials, plans)
//! - Accepts public submissions (reservations, contact inquiries, newsletter)
//! - Provides the admin CRUD API (JWT authenticated)
//! - Stores uploaded images in S3 and returns public URLs
//! - Fires the advisory notification webhook after bookings and inquiries

mod api;
mod auth;
mod config;
mod db;
mod error;
mod notify;
mod state;
mod storage;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting cafe-cloud (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("cafe-cloud listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
