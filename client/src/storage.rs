use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access";
/// Storage key for the longer-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Key-value persistence for the session token pair.
///
/// The session/auth layer owns the storage lifecycle; the client only reads
/// and updates the two keys whose meaning it owns. Implementations must be
/// shareable across tasks.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store used when no external persistence is wired in.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_token_pair() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);

        store.set(ACCESS_TOKEN_KEY, "tok");
        store.set(REFRESH_TOKEN_KEY, "ref");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));

        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));
    }
}
