//! # Cookie jar
//!
//! The site keeps its session, watchlist and consent state in first-party
//! cookies. [`CookieJar`] abstracts over where those cookies live so the
//! stores can be exercised natively:
//!
//! | Backend | Platform | Notes |
//! |---------|----------|-------|
//! | [`DocumentCookieJar`] | web | Reads and writes `document.cookie`. |
//! | [`MemoryCookieJar`] | any | Hash map; remembers the options of the last write for assertions. |
//!
//! Values pass through the jar untouched. Encoding is the caller's business:
//! the session and watchlist stores URL-encode their JSON, the consent flag is
//! a bare `1`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::StorageError;

/// `expires` value used to delete a cookie.
pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Attributes written alongside a cookie value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime; `None` makes a browser-session cookie.
    pub max_age: Option<Duration>,
    pub path: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: None,
            path: "/".to_string(),
        }
    }
}

impl CookieOptions {
    /// Cookie on path `/` expiring after `days` days.
    pub fn days(days: u32) -> Self {
        Self {
            max_age: Some(Duration::from_secs(u64::from(days) * SECS_PER_DAY)),
            ..Self::default()
        }
    }
}

/// Storage for named cookie values.
pub trait CookieJar: Send + Sync {
    /// Raw (still encoded) value of the cookie called `name`.
    fn get(&self, name: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), StorageError>;
    /// Expire the cookie immediately.
    fn remove(&self, name: &str) -> Result<(), StorageError>;
}

/// Split a `document.cookie` style header into `(name, value)` pairs.
///
/// Pairs are separated by `;`, surrounding whitespace is trimmed and each pair
/// is split on its first `=`, so values may themselves contain `=`.
pub fn parse_cookie_header(header: &str) -> Vec<(&str, &str)> {
    header
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}

/// Value of the first cookie called `name` in `header`.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    parse_cookie_header(header)
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
}

/// Render the string assigned to `document.cookie` for a write.
pub fn format_set_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!("{name}={value}");
    if let Some(max_age) = options.max_age {
        cookie.push_str(&format!("; max-age={}", max_age.as_secs()));
    }
    cookie.push_str(&format!("; path={}", options.path));
    cookie
}

/// Render the string assigned to `document.cookie` to delete `name`.
pub fn format_remove_cookie(name: &str) -> String {
    format!("{name}=; expires={EXPIRED}; path=/")
}

#[derive(Clone, Debug)]
struct StoredCookie {
    value: String,
    options: CookieOptions,
}

/// In-memory cookie jar for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<Mutex<HashMap<String, StoredCookie>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a `document.cookie` style header.
    pub fn from_header(header: &str) -> Self {
        let jar = Self::new();
        if let Ok(mut cookies) = jar.cookies.lock() {
            for (name, value) in parse_cookie_header(header) {
                cookies.insert(
                    name.to_string(),
                    StoredCookie {
                        value: value.to_string(),
                        options: CookieOptions::default(),
                    },
                );
            }
        }
        jar
    }

    /// Options used by the last write of `name`, if it is still set.
    pub fn options(&self, name: &str) -> Option<CookieOptions> {
        self.cookies
            .lock()
            .ok()?
            .get(name)
            .map(|c| c.options.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, StoredCookie>>, StorageError> {
        self.cookies
            .lock()
            .map_err(|_| StorageError::Backend("cookie jar poisoned".to_string()))
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(name).map(|c| c.value.clone()))
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), StorageError> {
        self.lock()?.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                options: options.clone(),
            },
        );
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        self.lock()?.remove(name);
        Ok(())
    }
}

/// `document.cookie`-backed jar for the web platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl DocumentCookieJar {
    fn document() -> Result<web_sys::HtmlDocument, StorageError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .ok_or(StorageError::Unavailable("no window"))?
            .document()
            .ok_or(StorageError::Unavailable("no document"))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| StorageError::Unavailable("document is not an HTML document"))
    }

    fn write(cookie: &str) -> Result<(), StorageError> {
        Self::document()?
            .set_cookie(cookie)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl CookieJar for DocumentCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        let header = Self::document()?
            .cookie()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?;
        Ok(find_cookie(&header, name).map(str::to_string))
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), StorageError> {
        Self::write(&format_set_cookie(name, value, options))
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        Self::write(&format_remove_cookie(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_header() {
        let pairs = parse_cookie_header("a=1; wfo_session=%7B%7D;b=x=y ; flag");
        assert_eq!(
            pairs,
            vec![("a", "1"), ("wfo_session", "%7B%7D"), ("b", "x=y"), ("flag", "")]
        );
        assert!(parse_cookie_header("").is_empty());
    }

    #[test]
    fn test_find_cookie_exact_name() {
        let header = "wfo_session_old=1; wfo_session=2";
        assert_eq!(find_cookie(header, "wfo_session"), Some("2"));
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn test_format_set_cookie() {
        assert_eq!(
            format_set_cookie("cookiePopupDismiss", "1", &CookieOptions::days(7)),
            "cookiePopupDismiss=1; max-age=604800; path=/"
        );
        assert_eq!(
            format_set_cookie("tmp", "x", &CookieOptions::default()),
            "tmp=x; path=/"
        );
        assert_eq!(
            format_remove_cookie("wfo_session"),
            "wfo_session=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }

    #[test]
    fn test_memory_jar_records_options() {
        let jar = MemoryCookieJar::new();
        jar.set("wfo_watchlist", "%5B%5D", &CookieOptions::days(365))
            .unwrap();

        assert_eq!(jar.get("wfo_watchlist").unwrap().as_deref(), Some("%5B%5D"));
        assert_eq!(
            jar.options("wfo_watchlist").and_then(|o| o.max_age),
            Some(Duration::from_secs(365 * 24 * 60 * 60))
        );

        jar.remove("wfo_watchlist").unwrap();
        assert_eq!(jar.get("wfo_watchlist").unwrap(), None);
        assert_eq!(jar.options("wfo_watchlist"), None);
    }

    #[test]
    fn test_memory_jar_from_header() {
        let jar = MemoryCookieJar::from_header("cookiePopupDismiss=1; other=2");
        assert_eq!(jar.get("cookiePopupDismiss").unwrap().as_deref(), Some("1"));
        assert_eq!(jar.get("other").unwrap().as_deref(), Some("2"));
    }
}
