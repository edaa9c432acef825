use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub const TRELLO_API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const TRELLO_TOKEN_VAR: &str = "TRELLO_TOKEN";

pub const DEFAULT_TRELLO_API_BASE: &str = "https://api.trello.com/1";
pub const DEFAULT_CARD_ID: &str = "6841c9e130900ac5199dc10a";
pub const DEFAULT_CHECKLIST_NAME: &str = "My New Checklist";
pub const DEFAULT_ITEM_NAME: &str = "New Checklist Item";
pub const DEFAULT_UPLOAD_URL: &str = "https://backend-meet-n4rm.onrender.com/api/video/upload";

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub trello: TrelloConfig,
    pub forwarding: ForwardingConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrelloConfig {
    pub api_base: String,
    /// Card that receives new checklists.
    pub card_id: String,
    pub checklist_name: String,
    pub item_name: String,
    /// Credentials come from the environment, never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
    #[serde(skip)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardingConfig {
    pub upload_url: String,
}

#[derive(Debug, Clone)]
pub struct TrelloCredentials {
    pub api_key: String,
    pub token: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TRELLO_API_BASE.to_string(),
            card_id: DEFAULT_CARD_ID.to_string(),
            checklist_name: DEFAULT_CHECKLIST_NAME.to_string(),
            item_name: DEFAULT_ITEM_NAME.to_string(),
            api_key: None,
            token: None,
        }
    }
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }
}

impl TrelloConfig {
    pub fn credentials(&self) -> Result<TrelloCredentials> {
        let api_key = self
            .api_key
            .clone()
            .with_context(|| format!("{} is not set", TRELLO_API_KEY_VAR))?;
        let token = self
            .token
            .clone()
            .with_context(|| format!("{} is not set", TRELLO_TOKEN_VAR))?;
        Ok(TrelloCredentials { api_key, token })
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::config_path()?;
        let mut config = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
            info!("Loaded config from {:?}", config_path);
            config
        } else {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            config
        };

        config.trello.api_key = std::env::var(TRELLO_API_KEY_VAR).ok();
        config.trello.token = std::env::var(TRELLO_TOKEN_VAR).ok();

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_fixed_targets() {
        let config = Config::default();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.trello.api_base, DEFAULT_TRELLO_API_BASE);
        assert_eq!(config.trello.card_id, DEFAULT_CARD_ID);
        assert_eq!(config.trello.checklist_name, "My New Checklist");
        assert_eq!(config.trello.item_name, "New Checklist Item");
        assert_eq!(config.forwarding.upload_url, DEFAULT_UPLOAD_URL);
    }

    #[test]
    fn credentials_require_both_values() {
        let mut trello = TrelloConfig::default();
        assert!(trello.credentials().is_err());

        trello.api_key = Some("key".to_string());
        let err = trello.credentials().unwrap_err();
        assert!(err.to_string().contains(TRELLO_TOKEN_VAR));

        trello.token = Some("token".to_string());
        let creds = trello.credentials().unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.token, "token");
    }

    #[test]
    fn credentials_never_reach_the_config_file() {
        let mut config = Config::default();
        config.trello.api_key = Some("secret-key".to_string());
        config.trello.token = Some("secret-token".to_string());

        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.trello.card_id, DEFAULT_CARD_ID);
        assert_eq!(config.forwarding.upload_url, DEFAULT_UPLOAD_URL);
    }
}
