//! Session
//!
//! The authentication flag and its persisted token. A `Session` is an
//! explicit value handed to whatever needs it; there is no global flag.
//!
//! - [`store`]: `TokenStore` capability plus memory and file backends
//! - [`guard`]: route resolution from the flag

pub mod guard;
pub mod store;

pub use guard::{resolve, Route, RouteDecision};
pub use store::{MemoryTokenStore, TokenStore, TOKEN_KEY};

#[cfg(feature = "native")]
pub use store::{FileTokenStore, StoredToken};

use crate::error::StoreError;

/// Authentication state backed by a token store
#[derive(Debug, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
    authenticated: bool,
}

impl<S: TokenStore> Session<S> {
    /// Restore from storage. Presence of a token is trusted as-is.
    pub fn restore(store: S) -> Self {
        let authenticated = store.get().is_some();
        tracing::debug!(authenticated, "Session restored");
        Self {
            store,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a freshly issued token and mark the session authenticated
    pub fn login(&mut self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)?;
        self.authenticated = true;
        tracing::info!("Session started");
        Ok(())
    }

    /// Drop the token and mark the session unauthenticated.
    ///
    /// The flag is cleared even if the store fails to forget the token.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.authenticated = false;
        tracing::info!("Session ended");
        self.store.clear()
    }

    /// Guard a navigation against the current flag
    pub fn resolve(&self, path: &str) -> RouteDecision {
        guard::resolve(path, self.authenticated)
    }
}
