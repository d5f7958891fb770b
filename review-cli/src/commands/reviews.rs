//! Reviews command - administrative listing across all users

use clap::Args;
use review_core::{Config, Review};
use review_db::ReviewRepository;

use super::open_database;

/// List recent reviews from all users
#[derive(Args, Debug)]
pub struct ReviewsArgs {
    /// Show at most this many reviews
    #[arg(short, long, default_value_t = 50)]
    limit: u32,

    /// Show every review
    #[arg(long, conflicts_with = "limit")]
    all: bool,

    /// One line per review: rating, title, company, reviewer
    #[arg(long)]
    short: bool,
}

impl ReviewsArgs {
    /// Execute the reviews command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let db = open_database(config).await?;
        let limit = (!self.all).then_some(self.limit);
        let reviews = ReviewRepository::new(db.pool()).list_recent(limit).await?;

        if reviews.is_empty() {
            println!("No reviews.");
        } else if self.short {
            for review in &reviews {
                println!("{}", review);
            }
        } else {
            println!(
                "{:>6}  {:>6}  {:<24}  {:<24}  {:<16}  {:<39}  created",
                "id", "rating", "title", "company", "reviewer", "ip address"
            );
            for review in &reviews {
                println!("{}", format_row(review));
            }
        }

        db.close().await;
        Ok(())
    }
}

fn format_row(review: &Review) -> String {
    let ip = review
        .ip_address
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>6}  {:>6}  {:<24}  {:<24}  {:<16}  {:<39}  {}",
        review.id,
        review.rating,
        truncate(&review.title, 24),
        truncate(&review.company_name, 24),
        truncate(&review.reviewer.username, 16),
        ip,
        review.created_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Shorten to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
