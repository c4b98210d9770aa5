//! Parse Config from config file

use std::{fs::read_to_string, net::AddrParseError, path::Path, str::FromStr};

use bookshelf_shared::ClientConfig;
use leptos::config::LeptosOptions;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;

#[cfg(test)]
mod test;

/// Where the config is read from, unless `BOOKSHELF_CONFIG` says otherwise
pub const DEFAULT_CONFIG_PATH: &str = "/etc/bookshelf/config.toml";
pub const CONFIG_PATH_ENV: &str = "BOOKSHELF_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(std::io::Error),
    LogLevel(LevelParseError),
    SiteAddrParse(AddrParseError),
    /// The value is not an absolute http(s) url
    BaseUrl { key: &'static str, value: String },
}
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TomlParse(e) => {
                write!(f, "Unable to parse config file as toml: {e}")
            }
            Self::ConfigFileRead(e) => {
                write!(f, "Unable to read config file: {e}")
            }
            Self::LogLevel(e) => {
                write!(f, "Unable to parse log_level: {e}")
            }
            Self::SiteAddrParse(e) => {
                write!(f, "Unable to interpret web.site_addr as socket address: {e}")
            }
            Self::BaseUrl { key, value } => {
                write!(f, "{key} must be an absolute http or https url, got \"{value}\"")
            }
        }
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl From<AddrParseError> for ConfigError {
    fn from(value: AddrParseError) -> Self {
        Self::SiteAddrParse(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:8080)
    site_addr: String,
}

#[derive(Deserialize)]
struct ApiConfigData {
    /// Where the books API lives, e.g. `http://localhost:8000`
    base_url: String,
    /// Where cover images are served from. Defaults to `base_url`.
    asset_base_url: Option<String>,
}

/// The config data as it is present in (a well-formed) toml config file
#[derive(Deserialize)]
struct ConfigData {
    web: WebConfigData,
    api: ApiConfigData,
    log_level: Option<String>,
}

/// Accept absolute http(s) urls only, normalized without a trailing slash
fn base_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::BaseUrl {
            key,
            value: value.to_string(),
        })
    }
}

/// The main config object that will be available across the Serverside application
#[derive(Debug)]
pub struct Config {
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
    /// handed to the browser as-is
    pub client: ClientConfig,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let addr = std::net::SocketAddr::from_str(&value.web.site_addr)?;

        let leptos_options = LeptosOptions::builder()
            .output_name("bookshelf")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = tracing_subscriber::filter::LevelFilter::from_str(
            &value.log_level.unwrap_or("INFO".to_string()),
        )?;

        let api_base_url = base_url("api.base_url", &value.api.base_url)?;
        let asset_base_url = match value.api.asset_base_url {
            Some(x) => base_url("api.asset_base_url", &x)?,
            None => api_base_url.clone(),
        };

        Ok(Self {
            leptos_options,
            log_level,
            client: ClientConfig {
                api_base_url,
                asset_base_url,
            },
        })
    }

    pub fn try_from_toml(content: &str) -> Result<Self, ConfigError> {
        let config_data: ConfigData = toml::from_str(content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }

    pub fn try_create() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or(DEFAULT_CONFIG_PATH.to_string());
        let content = read_to_string(Path::new(&path)).map_err(ConfigError::ConfigFileRead)?;
        Self::try_from_toml(&content)
    }
}
