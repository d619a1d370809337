/// Recipe Service Library
///
/// HTTP API for the recipe blog: recipes, reader comments, categories, a
/// recipe sitemap and rule-based cooking tips, backed by a document store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Request payloads and response views
/// - `services`: Business logic layer
/// - `db`: Document store abstraction, MongoDB and in-memory backends, repositories
/// - `serialization`: Store document to API object mapping
/// - `middleware`: Request metrics
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod serialization;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
