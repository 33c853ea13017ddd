//! Configuration module for Event-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The config file is optional: every field has a built-in default
//! pointing at the SUNABACO listing, so a bare `event-scout` invocation
//! works without one.
//!
//! # Example
//!
//! ```no_run
//! use event_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scanning: {}", config.listing.listing_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ListingConfig, UserAgentConfig, DEFAULT_LISTING_URL, DEFAULT_PREVIEW_LIMIT,
    DEFAULT_SITE_ORIGIN,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
