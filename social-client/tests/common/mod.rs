//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use social_client::config::ClientConfig;
use social_client::core::{LoginRedirect, SessionKey, SessionStore};
use social_client::services::store::MemorySessionStore;
use social_client::ApiClient;

/// Counts how often the client sent the user back to login
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    count: AtomicUsize,
}

impl RecordingRedirect {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Fixture {
    pub client: Arc<ApiClient>,
    pub store: Arc<MemorySessionStore>,
    pub redirect: Arc<RecordingRedirect>,
}

impl Fixture {
    pub fn new(server_url: &str) -> Self {
        let store = Arc::new(MemorySessionStore::new());
        let redirect = Arc::new(RecordingRedirect::default());
        let client = ApiClient::new(
            ClientConfig::with_base_url(server_url),
            store.clone(),
            redirect.clone(),
        )
        .expect("client should build");

        Self {
            client: Arc::new(client),
            store,
            redirect,
        }
    }

    /// Fixture with a stored token pair
    pub fn logged_in(server_url: &str, access: &str, refresh: Option<&str>) -> Self {
        let fixture = Self::new(server_url);
        fixture.store.set(SessionKey::AccessToken, access).unwrap();
        if let Some(refresh) = refresh {
            fixture.store.set(SessionKey::RefreshToken, refresh).unwrap();
        }
        fixture.store.set(SessionKey::User, r#"{"id":7,"username":"ana"}"#).unwrap();
        fixture
    }

    pub fn get(&self, key: SessionKey) -> Option<String> {
        self.store.get(key).unwrap()
    }

    pub fn assert_session_cleared(&self) {
        for key in SessionKey::ALL {
            assert_eq!(self.get(key), None, "{} should be cleared", key.as_str());
        }
    }
}
