use std::sync::Arc;

use review_db::Database;

/// State shared by every request handler
pub struct AppState {
    pub db: Database,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(db: Database) -> SharedState {
        Arc::new(Self { db })
    }
}
