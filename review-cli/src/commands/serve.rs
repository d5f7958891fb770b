//! Serve command - run the HTTP API

use anyhow::Context;
use clap::Args;
use review_api::AppState;
use review_core::Config;
use tokio::net::TcpListener;
use tracing::info;

use super::open_database;

/// Run the HTTP API
#[derive(Args, Debug)]
pub struct ServeArgs {}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        info!("Opening database...");
        let db = open_database(config).await?;

        info!(address = %config.server.bind, "Binding listener");
        let listener = TcpListener::bind(&config.server.bind)
            .await
            .with_context(|| format!("Failed to bind {}", config.server.bind))?;

        review_api::serve(listener, AppState::new(db.clone())).await?;

        db.close().await;
        Ok(())
    }
}
