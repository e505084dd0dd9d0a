use once_cell::sync::Lazy;
use serde::Deserialize;
use std::num::NonZeroUsize;
use thiserror::Error;

use crate::shared::collection_view::ListSettings;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the backend on the page's host
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
}

fn default_debounce_ms() -> u32 {
    300
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Default configuration compiled into the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[list]
page_size_options = [10, 20, 50, 100]
default_page_size = 20
search_debounce_ms = 300

[notifications]
dismiss_after_ms = 6000
"#;

/// localStorage key holding an optional TOML override
pub const CONFIG_OVERRIDE_KEY: &str = "admin_dashboard_config";

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.list.page_size_options.is_empty() {
            return Err(ConfigError::Invalid("list.page_size_options is empty".into()));
        }
        if self.list.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid("page sizes must be positive".into()));
        }
        if !self.list.page_size_options.contains(&self.list.default_page_size) {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} is not one of {:?}",
                self.list.default_page_size, self.list.page_size_options
            )));
        }
        Ok(())
    }

    pub fn list_settings(&self) -> ListSettings {
        let page_size_options: Vec<NonZeroUsize> = self
            .list
            .page_size_options
            .iter()
            .filter_map(|s| NonZeroUsize::new(*s))
            .collect();
        match NonZeroUsize::new(self.list.default_page_size) {
            Some(default_page_size) if !page_size_options.is_empty() => ListSettings {
                page_size_options,
                default_page_size,
            },
            _ => ListSettings::default(),
        }
    }
}

fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_OVERRIDE_KEY).ok()?
}

/// Loads the configuration: the localStorage override when present and valid,
/// otherwise the embedded default.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Some(contents) = read_override() {
        match AppConfig::from_toml_str(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage key {}", CONFIG_OVERRIDE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring config override: {}", e),
        }
    }
    log::info!("Using default embedded configuration");
    AppConfig::from_toml_str(DEFAULT_CONFIG)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Falling back to built-in list settings: {}", e);
        AppConfig {
            api: ApiConfig { port: 3000 },
            list: ListConfig {
                page_size_options: vec![10, 20, 50, 100],
                default_page_size: 20,
                search_debounce_ms: default_debounce_ms(),
            },
            notifications: NotificationConfig {
                dismiss_after_ms: 6000,
            },
        }
    }
});

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.list.default_page_size, 20);

        let settings = config.list_settings();
        let sizes: Vec<usize> = settings.page_size_options.iter().map(|s| s.get()).collect();
        assert_eq!(sizes, vec![10, 20, 50, 100]);
        assert_eq!(settings, ListSettings::default());
    }

    #[test]
    fn test_default_must_be_an_option() {
        let text = DEFAULT_CONFIG.replace("default_page_size = 20", "default_page_size = 25");
        assert!(matches!(
            AppConfig::from_toml_str(&text),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let text = DEFAULT_CONFIG.replace("[10, 20, 50, 100]", "[0, 20]");
        assert!(AppConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn test_debounce_has_default() {
        let text = DEFAULT_CONFIG.replace("search_debounce_ms = 300\n", "");
        let config = AppConfig::from_toml_str(&text).unwrap();
        assert_eq!(config.list.search_debounce_ms, 300);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[api\nport = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
