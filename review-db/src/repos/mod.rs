//! Repository modules for database operations

pub mod reviews;
pub mod tokens;
pub mod users;

pub use reviews::ReviewRepository;
pub use tokens::TokenRepository;
pub use users::UserRepository;
