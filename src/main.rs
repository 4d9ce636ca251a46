mod bot;
mod config;
mod error;
mod model;
mod service;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    tracing::info!("Starting audit bot");

    bot::start::start_bot(&config).await
}
