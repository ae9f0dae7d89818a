use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::net::SocketAddr;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_settings", skip_on_field_errors = false))]
pub struct Settings {
    /// Socket the API should listen on.
    #[serde(default = "default_api_socket")]
    pub api_socket: SocketAddr,
    /// Database connection URL (postgres:// or sqlite:)
    pub database_url: String,
    /// Maximum number of rows returned by an unpaged search
    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1))]
    pub search_limit: u64,
    /// Page size used when a request does not give one
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 2000))]
    pub default_page_size: u64,
}

impl Settings {
    pub fn new(file: Option<&String>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(f) = file {
            builder = builder.add_source(File::with_name(f).format(FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::default())
            .build()
            .context("Failed to load config")?;
        let r: Settings = config
            .try_deserialize()
            .context("Failed to deserialize config")?;
        r.validate().context("Failed to validate config")?;
        Ok(r)
    }
}

fn default_api_socket() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_search_limit() -> u64 {
    1000
}

fn default_page_size() -> u64 {
    20
}

fn validate_settings(settings: &Settings) -> Result<(), ValidationError> {
    if settings.database_url.trim().is_empty() {
        return Err(ValidationError::new("Database URL must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn from_toml(contents: &str) -> anyhow::Result<Settings> {
        let path = std::env::temp_dir().join(format!(
            "roster-settings-{}-{}.toml",
            std::process::id(),
            contents.len()
        ));
        std::fs::File::create(&path)?.write_all(contents.as_bytes())?;
        let result = Settings::new(Some(&path.to_string_lossy().into_owned()));
        std::fs::remove_file(&path)?;
        result
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml(r#"database_url = "sqlite::memory:""#).unwrap();
        assert_eq!(settings.api_socket, default_api_socket());
        assert_eq!(settings.search_limit, 1000);
        assert_eq!(settings.default_page_size, 20);
    }

    #[test]
    fn test_validation() {
        assert!(from_toml("database_url = \"sqlite::memory:\"\nsearch_limit = 0").is_err());
        assert!(from_toml("database_url = \" \"").is_err());
    }
}
