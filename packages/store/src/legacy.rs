//! Keys written to `localStorage` by the older token-based login scheme.
//!
//! That scheme was never reconciled with the session cookie. The session
//! cookie is authoritative now: these keys are removed and never read as
//! proof of identity. Ids in the legacy watchlist are carried over to the
//! watchlist cookie before its key goes.

use crate::kv::KvBridge;
use crate::models::MovieId;
use crate::watchlist::WatchlistStore;

pub const AUTH_TOKEN_KEY: &str = "filmhaven_auth_token";
pub const USER_DATA_KEY: &str = "filmhaven_user_data";
pub const WATCHLIST_KEY: &str = "filmhaven_watchlist";

pub const LEGACY_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, USER_DATA_KEY, WATCHLIST_KEY];

/// What [`purge_legacy_auth`] found and removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyPurge {
    pub removed: Vec<&'static str>,
    /// A legacy token was present. Its holder is not logged in under the
    /// session cookie and has to sign in again.
    pub had_token: bool,
    /// Ids moved from the legacy watchlist into the watchlist cookie.
    pub migrated: Vec<MovieId>,
}

/// Remove every legacy key that is present.
///
/// The legacy watchlist is merged into `watchlist` first. If it cannot be
/// read as a list of ids it is left in place rather than dropped.
pub fn purge_legacy_auth(kv: &KvBridge, watchlist: &WatchlistStore) -> LegacyPurge {
    let mut purge = LegacyPurge::default();
    for key in LEGACY_KEYS {
        if !kv.contains(key) {
            continue;
        }
        if key == WATCHLIST_KEY {
            let Some(ids) = kv.get::<Vec<MovieId>>(key) else {
                tracing::warn!("Keeping unreadable legacy watchlist {key}");
                continue;
            };
            for id in &ids {
                watchlist.add(*id);
            }
            purge.migrated = ids;
        }
        kv.remove(key);
        purge.removed.push(key);
    }
    purge.had_token = purge.removed.contains(&AUTH_TOKEN_KEY);
    if !purge.removed.is_empty() {
        tracing::info!("Removed legacy auth keys: {:?}", purge.removed);
    }
    purge
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::CookieConfig;
    use crate::cookies::MemoryCookieJar;
    use crate::kv::{KeyValueStore, MemoryKeyValueStore};

    fn watchlist() -> WatchlistStore {
        WatchlistStore::new(Arc::new(MemoryCookieJar::new()), &CookieConfig::default())
    }

    #[test]
    fn test_purge_removes_only_present_keys() {
        let backend = MemoryKeyValueStore::new();
        backend
            .set_raw(USER_DATA_KEY, r#"{"id":"k3j","email":"a@b.pl","fullName":"A"}"#)
            .unwrap();
        backend.set_raw("unrelated", "1").unwrap();
        let kv = KvBridge::new(Arc::new(backend.clone()));

        let purge = purge_legacy_auth(&kv, &watchlist());

        assert_eq!(purge.removed, vec![USER_DATA_KEY]);
        assert!(!purge.had_token);
        assert_eq!(backend.get_raw(USER_DATA_KEY).unwrap(), None);
        assert_eq!(backend.get_raw("unrelated").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_purge_reports_token() {
        let backend = MemoryKeyValueStore::new();
        // Malformed JSON still counts as present.
        backend.set_raw(AUTH_TOKEN_KEY, "raw-token").unwrap();
        let kv = KvBridge::new(Arc::new(backend));

        let watchlist = watchlist();
        let purge = purge_legacy_auth(&kv, &watchlist);
        assert!(purge.had_token);
        assert!(!kv.contains(AUTH_TOKEN_KEY));

        assert_eq!(purge_legacy_auth(&kv, &watchlist), LegacyPurge::default());
    }

    #[test]
    fn test_legacy_watchlist_is_merged_before_removal() {
        let backend = MemoryKeyValueStore::new();
        backend.set_raw(WATCHLIST_KEY, "[3,7]").unwrap();
        let kv = KvBridge::new(Arc::new(backend.clone()));
        let watchlist = watchlist();
        watchlist.add(7);
        watchlist.add(1);

        let purge = purge_legacy_auth(&kv, &watchlist);

        assert_eq!(purge.removed, vec![WATCHLIST_KEY]);
        assert_eq!(purge.migrated, vec![3, 7]);
        assert_eq!(watchlist.get(), vec![7, 1, 3]);
        assert_eq!(backend.get_raw(WATCHLIST_KEY).unwrap(), None);
    }

    #[test]
    fn test_unreadable_legacy_watchlist_is_kept() {
        let backend = MemoryKeyValueStore::new();
        backend.set_raw(WATCHLIST_KEY, r#"{"ids":"3"}"#).unwrap();
        let kv = KvBridge::new(Arc::new(backend.clone()));

        let purge = purge_legacy_auth(&kv, &watchlist());

        assert!(purge.removed.is_empty());
        assert!(purge.migrated.is_empty());
        assert_eq!(backend.get_raw(WATCHLIST_KEY).unwrap().as_deref(), Some(r#"{"ids":"3"}"#));
    }
}
