//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_site(config)?;
    validate_changelog(config)?;
    validate_feed(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_site(config: &Config) -> Result<()> {
    if config.site.title.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "site.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    let url = Url::parse(&config.site.base_url).map_err(|e| ConfigError::InvalidValue {
        field: "site.base_url".to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "site.base_url".to_string(),
            message: "must use http or https".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_feed(config: &Config) -> Result<()> {
    if config.feed.enabled {
        for (field, name) in [
            ("feed.rss_file", &config.feed.rss_file),
            ("feed.atom_file", &config.feed.atom_file),
        ] {
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "file name cannot be empty".to_string(),
                }
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default();
        config.site.title = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.site.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_feed_file() {
        let mut config = Config::default();
        config.feed.rss_file = String::new();
        assert!(validate_config(&config).is_err());
    }
}
