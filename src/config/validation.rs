use crate::config::types::{Config, ExtractionConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_extraction_config(&config.extraction)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must be http or https, got '{}'",
            base.scheme()
        )));
    }

    // Relative listing and detail paths are joined against the base, which
    // only works when the base addresses a directory.
    if !config.base_url.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-url must end with '/', got '{}'",
            config.base_url
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates extraction tuning
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.description_prefix_chars > 16 {
        return Err(ConfigError::Validation(format!(
            "description-prefix-chars must be <= 16, got {}",
            config.description_prefix_chars
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.workbook_path.is_empty() {
        return Err(ConfigError::Validation(
            "workbook-path cannot be empty".to_string(),
        ));
    }

    if config.cache_dir.is_empty() {
        return Err(ConfigError::Validation(
            "cache-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.site.base_url = "ftp://example.com/films/".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_base_url_without_trailing_slash() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com/films".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.site.user_agent = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_oversized_prefix() {
        let mut config = Config::default();
        config.extraction.description_prefix_chars = 17;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_output_paths() {
        let mut config = Config::default();
        config.output.workbook_path = String::new();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.output.cache_dir = String::new();
        assert!(validate(&config).is_err());
    }
}
