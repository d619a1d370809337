/// Shared application state injected into every handler
use crate::config::{Config, EnvPresence};
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the store was not configured at startup
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Front-end origin used in sitemap links
    pub frontend_url: String,
    /// Presence of the store environment variables
    pub env_presence: EnvPresence,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: &Config) -> Self {
        Self {
            store,
            frontend_url: config.frontend_url.clone(),
            env_presence: config.env_presence,
        }
    }

    /// State with an explicit store and front-end origin
    pub fn with_store(store: Arc<dyn DocumentStore>, frontend_url: impl Into<String>) -> Self {
        Self {
            store: Some(store),
            frontend_url: frontend_url.into(),
            env_presence: EnvPresence {
                database_url: true,
                database_name: true,
            },
        }
    }

    /// State with no store; every data endpoint answers "not configured"
    pub fn unconfigured() -> Self {
        Self {
            store: None,
            frontend_url: String::new(),
            env_presence: EnvPresence::default(),
        }
    }

    /// The store handle, or [`AppError::NotConfigured`]
    pub fn store(&self) -> Result<Arc<dyn DocumentStore>> {
        self.store.clone().ok_or(AppError::NotConfigured)
    }
}
