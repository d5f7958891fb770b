//! Token command - print a user's API token

use clap::Args;
use review_core::Config;
use review_db::{TokenRepository, UserRepository};

use super::open_database;

/// Print a user's API token, issuing one if needed
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// User to issue the token for
    pub username: String,
}

impl TokenArgs {
    /// Execute the token command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let db = open_database(config).await?;

        let user = UserRepository::new(db.pool())
            .get_by_username(&self.username)
            .await?;
        let token = TokenRepository::new(db.pool()).get_or_create(user.id).await?;

        println!("{}", token.key);

        db.close().await;
        Ok(())
    }
}
