pub mod config;
pub mod consent;
pub mod cookies;
pub mod error;
pub mod fade;
pub mod kv;
pub mod legacy;
pub mod models;
pub mod search;
pub mod session;
pub mod watchlist;

pub use config::SiteConfig;
pub use consent::ConsentStore;
pub use cookies::{CookieJar, CookieOptions, MemoryCookieJar};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookies::DocumentCookieJar;
pub use error::StorageError;
pub use fade::Fade;
pub use kv::{KeyValueStore, KvBridge, MemoryKeyValueStore};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use kv::LocalStorage;
pub use models::{Movie, MovieCatalog, MovieId, SessionRecord};
pub use search::{SearchHit, SearchOutcome};
pub use session::SessionStore;
pub use watchlist::WatchlistStore;
