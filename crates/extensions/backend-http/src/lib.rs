//! HTTP chat backend for carquery.

mod api;
mod client;

pub use api::HealthStatus;
pub use client::HttpBackend;
