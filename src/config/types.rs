use serde::Deserialize;

/// Listing page scanned when no config file overrides it
pub const DEFAULT_LISTING_URL: &str = "https://sunabaco.com/event/";

/// Origin prepended to site-relative event hrefs
pub const DEFAULT_SITE_ORIGIN: &str = "https://sunabaco.com";

/// Number of entries shown in the ranked preview
pub const DEFAULT_PREVIEW_LIMIT: usize = 12;

/// Main configuration structure for Event-Scout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing: ListingConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Listing page configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// URL of the event listing page to fetch
    #[serde(rename = "listing-url")]
    pub listing_url: String,

    /// Origin prepended to site-relative event hrefs (no trailing slash)
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    /// Maximum number of entries in the printed preview
    #[serde(rename = "preview-limit")]
    pub preview_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scanner
    #[serde(rename = "scanner-name")]
    pub scanner_name: String,

    /// Version of the scanner
    #[serde(rename = "scanner-version")]
    pub scanner_version: String,

    /// URL with information about the scanner
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scanner-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scanner_name: "EventScout".to_string(),
            scanner_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/event-scout/event-scout".to_string(),
            contact_email: "scout@event-scout.dev".to_string(),
        }
    }
}
