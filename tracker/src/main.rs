//! Binder Tracker - interactive duplicate tracker for card collections.
//!
//! Resolves cards against the card-database API and tallies duplicates
//! per (number, name, variant). All tally, key, and CSV semantics live in
//! `binder-engine`; this binary wires configuration, the HTTP lookup, and
//! the terminal front-end together.

mod api;
mod config;
mod error;
mod ui;

use crate::api::TcgClient;
use crate::config::Config;
use binder_engine::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> error::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binder_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Binder tracker against {}", config.base_url);

    let client = TcgClient::new(&config)?;
    let mut session = Session::new(client);
    match session.load_catalog() {
        Ok(count) => tracing::info!("Loaded {} sets from the catalog", count),
        Err(e) => tracing::warn!("Set catalog unavailable: {}", e),
    }

    let mut ui = ui::Ui::new(session, config.default_set.clone());
    ui.run()
}
