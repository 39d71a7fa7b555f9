//! Browser Session
//!
//! The session lives in a signal so the router and the navigation bar
//! react to login and logout. The token itself is kept in `localStorage`.

use leptos::*;
use recidivision::error::StoreError;
use recidivision::session::{RouteDecision, Session, TokenStore, TOKEN_KEY};

/// `localStorage`-backed token store
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn storage_or_err() -> Result<web_sys::Storage, StoreError> {
    local_storage().ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        storage_or_err()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        storage_or_err()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

/// Application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<Session<BrowserTokenStore>>,
}

/// Restore the session from storage and provide it to the component tree
pub fn provide_app_state() {
    let state = AppState {
        session: create_rw_signal(Session::restore(BrowserTokenStore)),
    };

    provide_context(state);
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token())
    }

    pub fn resolve(&self, path: &str) -> RouteDecision {
        self.session.with(|s| s.resolve(path))
    }

    /// Persist a freshly issued token
    pub fn login(&self, token: &str) -> Result<(), StoreError> {
        self.session
            .try_update(|s| s.login(token))
            .unwrap_or_else(|| Err(StoreError::Unavailable("session disposed".to_string())))
    }

    pub fn logout(&self) {
        self.session.update(|s| {
            if let Err(e) = s.logout() {
                web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
            }
        });
    }
}
