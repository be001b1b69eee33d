mod bot;
mod config;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;

    info!("Starting levelboard");

    // Liveness endpoint for the hosting platform's health checks
    let listener = tokio::net::TcpListener::bind(&config.liveness_addr).await?;
    info!("Liveness endpoint listening on {}", config.liveness_addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router::router()).await {
            error!("Liveness server error: {}", e);
        }
    });

    // Start heartbeat scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::heartbeat::start_scheduler(scheduler_db).await {
            error!("Heartbeat scheduler error: {}", e);
        }
    });

    // The bot owns the main task and reconnects until shutdown
    let client = bot::start::init_bot(config, db).await?;
    bot::start::start_bot(client).await
}
