//! Cookie-consent flag: a literal `1` cookie written once the banner is dismissed.

use std::sync::Arc;

use crate::config::CookieConfig;
use crate::cookies::{CookieJar, CookieOptions};

const DISMISSED: &str = "1";

#[derive(Clone)]
pub struct ConsentStore {
    jar: Arc<dyn CookieJar>,
    name: String,
    ttl_days: u32,
}

impl ConsentStore {
    pub fn new(jar: Arc<dyn CookieJar>, config: &CookieConfig) -> Self {
        Self {
            jar,
            name: config.consent.clone(),
            ttl_days: config.consent_ttl_days,
        }
    }

    /// Whether the banner was dismissed. Any non-empty value counts.
    pub fn is_dismissed(&self) -> bool {
        match self.jar.get(&self.name) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read consent cookie: {e}");
                false
            }
        }
    }

    /// Whether the banner should be injected on this page load.
    pub fn should_show(&self) -> bool {
        !self.is_dismissed()
    }

    pub fn dismiss(&self) {
        if let Err(e) = self
            .jar
            .set(&self.name, DISMISSED, &CookieOptions::days(self.ttl_days))
        {
            tracing::warn!("Failed to write consent cookie: {e}");
        }
    }
}
