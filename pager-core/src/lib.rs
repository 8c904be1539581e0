use std::sync::Arc;

use twilight_http::Client;

use pager_utils::pagination::{PaginatorConfig, SessionRouter};

pub mod config;

pub use config::{BotConfig, ConfigError};

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub sessions: SessionRouter,
    pub config: Arc<BotConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, config: BotConfig) -> Self {
        Self {
            http,
            sessions: SessionRouter::new(),
            config: Arc::new(config),
        }
    }

    /// Session options seeded from the process configuration.
    pub fn paginator_config(&self) -> PaginatorConfig {
        PaginatorConfig {
            cooldown: self.config.cooldown,
            delete_on_stop: self.config.delete_on_stop,
            ..PaginatorConfig::default()
        }
    }
}
