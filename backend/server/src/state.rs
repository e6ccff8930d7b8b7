use std::{fmt::Display, sync::Arc};

use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, reqwest::Error> {
        let http = Self::client_builder(&config).build()?;

        Ok(Self::with_client(config, http))
    }

    /// Outbound client settings taken from `config`.
    pub fn client_builder(config: &Config) -> ClientBuilder {
        Client::builder().timeout(config.outbound_timeout)
    }

    pub fn with_client(config: Config, http: Client) -> Arc<Self> {
        Arc::new(Self { config, http })
    }

    /// Upstream details only reach the logs at warn level in development.
    pub fn report(&self, context: &str, error: &dyn Display) {
        if self.config.development {
            warn!("{context}: {error}");
        } else {
            debug!("{context}: {error}");
        }
    }
}
