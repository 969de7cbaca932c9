//! Client configuration with defaults matching the server routes.
//!
//! The server may embed overrides as JSON in
//! `<meta name="parceiros-config" content="...">`; anything not set there
//! keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 150.0;
pub const DEFAULT_CSRF_META_NAME: &str = "csrf-token";
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_DELETE_CONVERSATIONS_PATH: &str = "/chat/delete_conversations/";
pub const DEFAULT_CREATE_GROUP_PATH: &str = "/chat/create_group/";
pub const DEFAULT_JOIN_COMMUNITY_PREFIX: &str = "/entrar_comunidade/";
pub const DEFAULT_CREATE_COMMUNITY_PATH: &str = "/criar-comunidade/";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout/";
pub const DEFAULT_COMPOSER_MAX_HEIGHT_PX: u32 = 160;
pub const DEFAULT_MENU_OFFSET_TOP_PX: f64 = 8.0;
pub const DEFAULT_MENU_OFFSET_LEFT_PX: f64 = 60.0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(feature = "hydrate")]
const CONFIG_META_SELECTOR: &str = "meta[name=\"parceiros-config\"]";

/// Errors produced while loading [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse client config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid client config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Luminance cut-off. Values in `[0, 1]` are normalized, larger values use the 0-255 scale.
    pub contrast_threshold: f64,
    pub csrf_meta_name: String,
    pub csrf_cookie_name: String,
    pub csrf_header: String,
    pub delete_conversations_path: String,
    pub create_group_path: String,
    pub join_community_prefix: String,
    pub create_community_path: String,
    pub logout_path: String,
    pub composer_max_height_px: u32,
    pub menu_offset_top_px: f64,
    pub menu_offset_left_px: f64,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            csrf_meta_name: DEFAULT_CSRF_META_NAME.to_owned(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            delete_conversations_path: DEFAULT_DELETE_CONVERSATIONS_PATH.to_owned(),
            create_group_path: DEFAULT_CREATE_GROUP_PATH.to_owned(),
            join_community_prefix: DEFAULT_JOIN_COMMUNITY_PREFIX.to_owned(),
            create_community_path: DEFAULT_CREATE_COMMUNITY_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            composer_max_height_px: DEFAULT_COMPOSER_MAX_HEIGHT_PX,
            menu_offset_top_px: DEFAULT_MENU_OFFSET_TOP_PX,
            menu_offset_left_px: DEFAULT_MENU_OFFSET_LEFT_PX,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides embedded in the page, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(CONFIG_META_SELECTOR).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring page config: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Log level from `log_level`, defaulting to `Info` when unrecognized.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.contrast_threshold.is_finite() || self.contrast_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "contrast_threshold must be a non-negative number, got {}",
                self.contrast_threshold
            )));
        }
        let paths = [
            ("delete_conversations_path", &self.delete_conversations_path),
            ("create_group_path", &self.create_group_path),
            ("join_community_prefix", &self.join_community_prefix),
            ("create_community_path", &self.create_community_path),
            ("logout_path", &self.logout_path),
        ];
        for (name, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
