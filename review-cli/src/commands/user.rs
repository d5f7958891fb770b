//! User management commands

use clap::{Args, Subcommand};
use review_core::Config;
use review_db::UserRepository;

use super::open_database;

/// User management commands
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Account name, shown as the reviewer on their reviews
        username: String,
    },

    /// List registered users
    List,
}

impl UserArgs {
    /// Execute the user command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let db = open_database(config).await?;
        let repo = UserRepository::new(db.pool());

        match &self.command {
            UserCommand::Add { username } => {
                let user = repo.create(username).await?;
                println!("Created user '{}' (id {})", user.username, user.id);
            }
            UserCommand::List => {
                let users = repo.list().await?;
                if users.is_empty() {
                    println!("No users.");
                }
                for user in users {
                    println!(
                        "{:>6}  {:<32}  {}",
                        user.id,
                        user.username,
                        user.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        db.close().await;
        Ok(())
    }
}
