//! # Site configuration (`filmhaven.toml`)
//!
//! Defines the TOML configuration the web frontend embeds at build time
//! (filename: [`SiteConfig::filename`] = `"filmhaven.toml"`). It names the
//! cookies the site writes, how long they live, and the timings of the
//! search box, the movie overlay and the fade animation.
//!
//! ## Structure
//!
//! ```toml
//! [cookies]
//! session = "wfo_session"
//! watchlist = "wfo_watchlist"
//! consent = "cookiePopupDismiss"
//! session_ttl_days = 7
//! watchlist_ttl_days = 365
//! consent_ttl_days = 7
//!
//! [search]
//! debounce_ms = 300
//! max_results = 5
//!
//! [overlay]
//! close_delay_ms = 300
//!
//! [fade]
//! duration_ms = 800
//! frame_ms = 16
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config. Builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`CookieConfig`] | Cookie names and lifetimes in days. |
//! | [`SearchConfig`] | Debounce delay and dropdown result cap. |
//! | [`OverlayConfig`] | Delay between starting the close transition and unmounting the overlay. |
//! | [`FadeConfig`] | Duration and frame interval of the consent-popup fade. |
//!
//! Every section derives `Default` with the production values so a missing or
//! empty file is equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `filmhaven.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub cookies: CookieConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub fade: FadeConfig,
}

/// Cookie names and lifetimes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie holding the URL-encoded JSON session record.
    pub session: String,
    /// Cookie holding the URL-encoded JSON array of watchlisted movie ids.
    pub watchlist: String,
    /// Cookie marking the consent popup as dismissed.
    pub consent: String,
    pub session_ttl_days: u32,
    pub watchlist_ttl_days: u32,
    pub consent_ttl_days: u32,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            session: "wfo_session".to_string(),
            watchlist: "wfo_watchlist".to_string(),
            consent: "cookiePopupDismiss".to_string(),
            session_ttl_days: 7,
            watchlist_ttl_days: 365,
            consent_ttl_days: 7,
        }
    }
}

/// Search box configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before filtering runs.
    pub debounce_ms: u64,
    /// Maximum number of rows shown in the dropdown.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_results: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub close_delay_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { close_delay_ms: 300 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub duration_ms: u64,
    pub frame_ms: u64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            frame_ms: 16,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl OverlayConfig {
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

impl FadeConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl SiteConfig {
    /// Builder method to override the search debounce delay.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.search.debounce_ms = ms;
        self
    }

    /// Builder method to override the dropdown result cap.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.search.max_results = max;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "filmhaven.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.cookies.session, "wfo_session");
        assert_eq!(config.cookies.watchlist_ttl_days, 365);
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml("[search]\nmax_results = 3\n").unwrap();
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.cookies, CookieConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_with_builders() {
        let config = SiteConfig::default()
            .with_debounce_ms(150)
            .with_max_results(10);
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
