use crate::config::types::{Config, ListingConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_listing_config(&config.listing)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates listing configuration
fn validate_listing_config(config: &ListingConfig) -> Result<(), ConfigError> {
    let listing = Url::parse(&config.listing_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid listing-url '{}': {}", config.listing_url, e))
    })?;

    // HTTP is allowed alongside HTTPS to support testing with mock servers
    if listing.scheme() != "http" && listing.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "listing-url must use HTTP or HTTPS, got '{}'",
            listing.scheme()
        )));
    }

    let origin = Url::parse(&config.site_origin).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid site-origin '{}': {}", config.site_origin, e))
    })?;

    if origin.scheme() != "http" && origin.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "site-origin must use HTTP or HTTPS, got '{}'",
            origin.scheme()
        )));
    }

    // The resolver concatenates origin + href, and site-relative hrefs
    // already start with '/'
    if config.site_origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "site-origin must not end with '/', got '{}'",
            config.site_origin
        )));
    }

    if config.preview_limit < 1 || config.preview_limit > 100 {
        return Err(ConfigError::Validation(format!(
            "preview-limit must be between 1 and 100, got {}",
            config.preview_limit
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate scanner name: non-empty, alphanumeric + hyphens only
    if config.scanner_name.is_empty() {
        return Err(ConfigError::Validation(
            "scanner_name cannot be empty".to_string(),
        ));
    }

    if !config
        .scanner_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "scanner_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.scanner_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    // Basic email format check: must contain @ and have text on both sides
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    // Domain part should contain at least one dot
    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_trailing_slash_origin() {
        let mut config = Config::default();
        config.listing.site_origin = "https://sunabaco.com/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_listing_url() {
        let mut config = Config::default();
        config.listing.listing_url = "ftp://sunabaco.com/event/".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_unparseable_listing_url() {
        let mut config = Config::default();
        config.listing.listing_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_preview_limit() {
        let mut config = Config::default();
        config.listing.preview_limit = 0;
        assert!(validate(&config).is_err());

        config.listing.preview_limit = 101;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_scanner_name() {
        let mut config = Config::default();
        config.user_agent.scanner_name = "bad name!".to_string();
        assert!(validate(&config).is_err());

        config.user_agent.scanner_name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("admin@sub.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
    }
}
