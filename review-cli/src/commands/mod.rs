//! CLI command implementations

pub mod reviews;
pub mod serve;
pub mod token;
pub mod user;

pub use reviews::ReviewsArgs;
pub use serve::ServeArgs;
pub use token::TokenArgs;
pub use user::UserArgs;

use anyhow::Context;
use review_core::Config;
use review_db::{Database, DatabaseConfig};

/// Connect to the configured database and make sure the schema exists
pub async fn open_database(config: &Config) -> anyhow::Result<Database> {
    let db = Database::connect(DatabaseConfig::from(&config.database))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database.path.display()
            )
        })?;
    db.migrate().await.context("Failed to apply database schema")?;
    Ok(db)
}
