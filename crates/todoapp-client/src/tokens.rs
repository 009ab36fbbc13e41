use std::sync::Mutex;

/// Storage for the session's token pair.
///
/// The browser client kept these in local storage; any implementation works
/// as long as it is safe to share across tasks.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, token: String);
    fn set_tokens(&self, access_token: String, refresh_token: String);
    fn clear(&self);
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<StoredTokens>,
}

#[derive(Debug, Default)]
struct StoredTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner.lock().unwrap().access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.lock().unwrap().refresh_token.clone()
    }

    fn set_access_token(&self, token: String) {
        self.inner.lock().unwrap().access_token = Some(token);
    }

    fn set_tokens(&self, access_token: String, refresh_token: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.access_token = Some(access_token);
        inner.refresh_token = Some(refresh_token);
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.access_token = None;
        inner.refresh_token = None;
    }
}
