//! Parse Config from config file

use std::{fs::read_to_string, net::SocketAddr, path::Path, str::FromStr};

use bookshelf_shared::{
    urls::{ApiOrigin, InvalidOrigin},
    ClientSettings, EditionFilter,
};
use leptos::config::LeptosOptions;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;

#[cfg(test)]
mod test;

/// Used when `BOOKSHELF_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "/etc/bookshelf/config.toml";

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(std::io::Error),
    LogLevel(LevelParseError),
    SiteAddrParse(std::net::AddrParseError),
    ApiOrigin(InvalidOrigin),
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
            Self::ApiOrigin(e) => {
                write!(f, "Unable to use api.origin: {e}")
            }
        }
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl From<InvalidOrigin> for ConfigError {
    fn from(value: InvalidOrigin) -> Self {
        Self::ApiOrigin(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:3000)
    site_addr: String,
}

/// Where the browser finds the library backend
#[derive(Deserialize, Default)]
struct ApiConfigData {
    /// scheme, host and port, e.g. `http://localhost:8080`
    origin: Option<String>,
    /// leave books without an edition number out of search results
    #[serde(default)]
    hide_books_without_edition: bool,
}

/// The config data as it is present in (a well-formed) toml config file
#[derive(Deserialize)]
struct ConfigData {
    web: WebConfigData,
    #[serde(default)]
    api: ApiConfigData,
    log_level: Option<String>,
    /// If set, logs are additionally written to daily rotated files in this directory
    log_directory: Option<String>,
}

/// The main config object that will be available across the Serverside application
#[derive(Debug)]
pub struct Config {
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
    pub log_directory: Option<String>,
    /// handed to every browser that loads the app
    pub client_settings: ClientSettings,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let addr = SocketAddr::from_str(&value.web.site_addr).map_err(ConfigError::SiteAddrParse)?;

        let leptos_options = LeptosOptions::builder()
            .output_name("bookshelf")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = LevelFilter::from_str(&value.log_level.unwrap_or("INFO".to_string()))?;

        let api_origin = match value.api.origin {
            Some(origin) => ApiOrigin::parse(&origin)?,
            None => ApiOrigin::default(),
        };
        let edition_filter = if value.api.hide_books_without_edition {
            EditionFilter::HideMissing
        } else {
            EditionFilter::ShowAll
        };

        Ok(Self {
            leptos_options,
            log_level,
            log_directory: value.log_directory,
            client_settings: ClientSettings {
                api_origin,
                edition_filter,
            },
        })
    }

    fn try_from_toml(content: &str) -> Result<Self, ConfigError> {
        let config_data: ConfigData = toml::from_str(content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }

    /// Read the config from `$BOOKSHELF_CONFIG` or [`DEFAULT_CONFIG_PATH`]
    pub fn try_create() -> Result<Self, ConfigError> {
        let path = std::env::var("BOOKSHELF_CONFIG").unwrap_or(DEFAULT_CONFIG_PATH.to_string());
        let content = read_to_string(Path::new(&path)).map_err(ConfigError::ConfigFileRead)?;
        Self::try_from_toml(&content)
    }
}
