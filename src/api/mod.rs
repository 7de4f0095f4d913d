//! Azure Resource Manager / Azure Monitor REST client.
//!
//! One token-fetch POST followed by one management-plane GET per
//! invocation; the token must exist before the data call is made.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;

pub use auth::AuthClient;
pub use client::MetricsClient;
pub use constants::Cloud;
pub use models::{MetricsQuery, MetricsResponse, ResourceScope, TokenInfo};
