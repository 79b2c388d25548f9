//! # Session store
//!
//! Keeps the [`SessionRecord`] in a cookie as JSON, URL-encoded once, for seven
//! days on path `/`. The session is the single source of truth for "logged in":
//! [`SessionStore::is_authenticated`] is true iff a record decodes.
//!
//! ## Decoding
//!
//! Older pages wrote the cookie with different encodings, so reading walks the
//! [`CookieDecoding`] strategies in priority order and returns the first one
//! whose output parses as a record:
//!
//! 1. [`Single`](CookieDecoding::Single): one URL decode (what [`SessionStore::set`] writes)
//! 2. [`Double`](CookieDecoding::Double): two URL decodes
//! 3. [`Raw`](CookieDecoding::Raw): no decoding
//! 4. [`Unescape`](CookieDecoding::Unescape): legacy `%XX` / `%uXXXX` escapes

use std::sync::Arc;

use crate::config::CookieConfig;
use crate::cookies::{CookieJar, CookieOptions};
use crate::models::SessionRecord;

/// A way of turning the raw cookie value back into JSON text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieDecoding {
    Single,
    Double,
    Raw,
    Unescape,
}

impl CookieDecoding {
    /// Strategies in the order they are attempted.
    pub const ORDER: [CookieDecoding; 4] = [
        CookieDecoding::Single,
        CookieDecoding::Double,
        CookieDecoding::Raw,
        CookieDecoding::Unescape,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CookieDecoding::Single => "single decode",
            CookieDecoding::Double => "double decode",
            CookieDecoding::Raw => "no decode",
            CookieDecoding::Unescape => "unescape",
        }
    }

    /// Decode `raw`, or `None` when the escapes do not form valid text.
    pub fn decode(self, raw: &str) -> Option<String> {
        match self {
            CookieDecoding::Single => url_decode(raw),
            CookieDecoding::Double => url_decode(&url_decode(raw)?),
            CookieDecoding::Raw => Some(raw.to_string()),
            CookieDecoding::Unescape => Some(unescape(raw)),
        }
    }
}

fn url_decode(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|s| s.into_owned())
}

/// Legacy `unescape`: `%uXXXX` is a UTF-16 code unit, `%XX` is a Latin-1 byte.
/// Anything that is not a well-formed escape is copied through unchanged.
fn unescape(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '%' {
            if chars.get(i + 1) == Some(&'u') {
                if let Some(unit) = hex_value(&chars, i + 2, 4) {
                    units.push(unit);
                    i += 6;
                    continue;
                }
            } else if let Some(byte) = hex_value(&chars, i + 1, 2) {
                units.push(byte);
                i += 3;
                continue;
            }
        }
        let mut buf = [0u16; 2];
        units.extend_from_slice(chars[i].encode_utf16(&mut buf));
        i += 1;
    }
    String::from_utf16_lossy(&units)
}

fn hex_value(chars: &[char], start: usize, len: usize) -> Option<u16> {
    let digits: String = chars.get(start..start + len)?.iter().collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(&digits, 16).ok()
}

/// Any JSON object is a session; other JSON values (`null`, numbers, arrays) are not.
fn parse_record(text: &str) -> Result<SessionRecord, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("session is not a JSON object"));
    }
    serde_json::from_value(value)
}

/// Decode a raw session cookie value with the first strategy that yields a record.
pub fn decode_session(raw: &str) -> Option<(CookieDecoding, SessionRecord)> {
    for strategy in CookieDecoding::ORDER {
        let Some(text) = strategy.decode(raw) else {
            tracing::debug!("session cookie: {} failed to decode", strategy.name());
            continue;
        };
        match parse_record(&text) {
            Ok(record) => {
                tracing::debug!("session cookie: {} succeeded", strategy.name());
                return Some((strategy, record));
            }
            Err(e) => tracing::debug!("session cookie: {} failed: {e}", strategy.name()),
        }
    }
    None
}

/// Cookie-backed session store.
#[derive(Clone)]
pub struct SessionStore {
    jar: Arc<dyn CookieJar>,
    name: String,
    ttl_days: u32,
}

impl SessionStore {
    pub fn new(jar: Arc<dyn CookieJar>, config: &CookieConfig) -> Self {
        Self {
            jar,
            name: config.session.clone(),
            ttl_days: config.session_ttl_days,
        }
    }

    /// The current session record, or `None` when absent or undecodable.
    pub fn get(&self) -> Option<SessionRecord> {
        let raw = match self.jar.get(&self.name) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read session cookie: {e}");
                return None;
            }
        };
        if raw.is_empty() {
            return None;
        }
        let decoded = decode_session(&raw);
        if decoded.is_none() {
            tracing::warn!("Session cookie present but no decoding produced a record");
        }
        decoded.map(|(_, record)| record)
    }

    /// Store `record` as JSON, URL-encoded once.
    pub fn set(&self, record: &SessionRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize session: {e}");
                return;
            }
        };
        let value = urlencoding::encode(&json);
        match self
            .jar
            .set(&self.name, &value, &CookieOptions::days(self.ttl_days))
        {
            Ok(()) => tracing::info!("Session stored for {}", record.login),
            Err(e) => tracing::warn!("Failed to write session cookie: {e}"),
        }
    }

    pub fn remove(&self) {
        match self.jar.remove(&self.name) {
            Ok(()) => tracing::info!("Session removed"),
            Err(e) => tracing::warn!("Failed to remove session cookie: {e}"),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::MemoryCookieJar;
    use std::time::Duration;

    const ENCODED: &str = "%7B%22id%22%3A6%2C%22login%22%3A%22Naterek%22%2C%22email%22%3A%22bres.maksymilian%40wp.pl%22%7D";

    fn naterek() -> SessionRecord {
        SessionRecord {
            id: 6.into(),
            login: "Naterek".to_string(),
            email: "bres.maksymilian@wp.pl".to_string(),
        }
    }

    fn store_with(jar: &MemoryCookieJar) -> SessionStore {
        SessionStore::new(Arc::new(jar.clone()), &CookieConfig::default())
    }

    #[test]
    fn test_set_then_get() {
        let jar = MemoryCookieJar::new();
        let store = store_with(&jar);
        assert!(!store.is_authenticated());

        store.set(&naterek());

        assert_eq!(store.get(), Some(naterek()));
        assert!(store.is_authenticated());
        assert_eq!(
            jar.options("wfo_session").and_then(|o| o.max_age),
            Some(Duration::from_secs(7 * 24 * 60 * 60))
        );
        assert_eq!(jar.options("wfo_session").map(|o| o.path).as_deref(), Some("/"));
    }

    #[test]
    fn test_set_encodes_once() {
        let jar = MemoryCookieJar::new();
        store_with(&jar).set(&naterek());
        assert_eq!(jar.get("wfo_session").unwrap().as_deref(), Some(ENCODED));
    }

    #[test]
    fn test_known_cookie_uses_single_decode() {
        let (strategy, record) = decode_session(ENCODED).unwrap();
        assert_eq!(strategy, CookieDecoding::Single);
        assert_eq!(record, naterek());

        let jar = MemoryCookieJar::from_header(&format!("wfo_session={ENCODED}"));
        assert_eq!(store_with(&jar).get(), Some(naterek()));
    }

    #[test]
    fn test_double_encoded_cookie() {
        let twice = urlencoding::encode(ENCODED).into_owned();
        let (strategy, record) = decode_session(&twice).unwrap();
        assert_eq!(strategy, CookieDecoding::Double);
        assert_eq!(record, naterek());
    }

    #[test]
    fn test_unencoded_json_cookie_still_reads() {
        let raw = r#"{"id":1,"login":"100%","email":""}"#;
        let (_, record) = decode_session(raw).unwrap();
        assert_eq!(record.login, "100%");
    }

    #[test]
    fn test_latin1_escaped_cookie_falls_back_to_unescape() {
        // %F3 is not valid UTF-8 percent-encoding, so both URL decodes fail.
        let raw = "%7B%22id%22%3A2%2C%22login%22%3A%22Z%F3sia%22%7D";
        let (strategy, record) = decode_session(raw).unwrap();
        assert_eq!(strategy, CookieDecoding::Unescape);
        assert_eq!(record.login, "Zósia");
    }

    #[test]
    fn test_foreign_record_shapes_count_as_logged_in() {
        for json in [r#"{"id":"u-6","login":"Naterek"}"#, r#"{"id":6,"name":"Naterek"}"#] {
            let jar = MemoryCookieJar::new();
            jar.set("wfo_session", &urlencoding::encode(json), &CookieOptions::days(7))
                .unwrap();
            let store = store_with(&jar);
            assert!(store.get().is_some(), "{json}");
            assert!(store.is_authenticated(), "{json}");
        }
    }

    #[test]
    fn test_non_object_json_is_not_a_session() {
        for raw in ["null", "6", "%5B%5D", "%22Naterek%22"] {
            assert_eq!(decode_session(raw), None, "{raw}");
        }
    }

    #[test]
    fn test_garbage_cookie_is_absent() {
        let jar = MemoryCookieJar::from_header("wfo_session=garbage");
        let store = store_with(&jar);
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_remove() {
        let jar = MemoryCookieJar::new();
        let store = store_with(&jar);
        store.set(&naterek());
        store.remove();
        assert_eq!(store.get(), None);
        assert_eq!(jar.get("wfo_session").unwrap(), None);
    }

    #[test]
    fn test_unescape_passes_through_malformed_escapes() {
        assert_eq!(unescape("50%"), "50%");
        assert_eq!(unescape("%zz%u12"), "%zz%u12");
        assert_eq!(unescape("a%20b"), "a b");
        assert_eq!(unescape("%u0141ukasz"), "Łukasz");
    }
}
