use crate::api::API;

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

pub const DEFAULT_BASE_URL:&str = "https://api.mangarockhd.com/query/web401";
pub const DEFAULT_META_URL:&str = "https://api.mangarockhd.com/meta";
pub const DEFAULT_USER_AGENT:&str = concat!("mangarock/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    IO(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    TOMLDeserialisation(#[from] toml::de::Error),
    #[error("error building http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Client options. Every key is optional when read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub meta_url: String,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            meta_url: DEFAULT_META_URL.to_string(),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_toml(s:&str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path:&Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml(&s)
    }
}

/// Builds an [`API`]. Options are fixed once `build` is called.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Config,
    timeout: Option<Duration>,
    client: Option<Client>,
}
impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config:Config) -> Self {
        Self {
            config,
            timeout: None,
            client: None,
        }
    }

    pub fn base_url(mut self, base_url:&str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    pub fn meta_url(mut self, meta_url:&str) -> Self {
        self.config.meta_url = meta_url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent:&str) -> Self {
        self.config.user_agent = Some(user_agent.to_string());
        self
    }

    /// Takes precedence over `timeout_secs` from the config.
    pub fn timeout(mut self, timeout:Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured client. The user agent and timeout options are then ignored.
    pub fn http_client(mut self, client:Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The per-request timeout the built client will use, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.or_else(|| self.config.timeout_secs.map(Duration::from_secs))
    }

    pub fn build(self) -> Result<API, ConfigError> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(user_agent) = &self.config.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                if let Some(timeout) = self.request_timeout() {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            },
        };

        Ok(API::from_parts(client, &self.config.base_url, &self.config.meta_url))
    }
}
