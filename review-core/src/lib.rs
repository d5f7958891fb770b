//! Review Core - domain library for the company review service
//!
//! This crate owns the review entity and its constraints, the wire
//! representation used by the HTTP layer, the object-level access policy,
//! and the service configuration. It has no knowledge of HTTP or storage.

pub mod config;
pub mod error;
pub mod identity;
pub mod origin;
pub mod permissions;
pub mod representation;
pub mod review;
pub mod validation;

pub use config::{Config, DatabaseSettings, ServerConfig};
pub use error::{Error, Result};
pub use identity::Identity;
pub use origin::resolve_client_ip;
pub use permissions::{AccessDenied, IsReviewer, ObjectPermission};
pub use representation::{ReviewDraft, ReviewRepresentation};
pub use review::{NewReview, Review};
pub use validation::ValidationErrors;
