use shared::{Alerts, Navigate, StoreError, TokenStore};
use web_sys::Storage;
use yew_router::prelude::*;

use crate::Route;

/// `None` when there is no window or the page may not use `localStorage`.
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn write_token(storage: Option<Storage>, key: &str, token: &str) -> Result<(), StoreError> {
    let storage = storage.ok_or_else(|| StoreError("local storage is unavailable".into()))?;
    storage
        .set_item(key, token)
        .map_err(|e| StoreError(format!("{:?}", e)))
}

fn read_token(storage: Option<Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok().flatten()
}

/// `localStorage`, written raw so the token is readable without JSON decoding.
pub struct BrowserStorage;

impl TokenStore for BrowserStorage {
    fn put(&self, key: &str, token: &str) -> Result<(), StoreError> {
        write_token(local_storage(), key, token)
    }
}

pub fn stored_token(key: &str) -> Option<String> {
    read_token(local_storage(), key)
}

pub struct BrowserAlerts;

impl Alerts for BrowserAlerts {
    fn warn(&self, message: &str) {
        match web_sys::window() {
            Some(w) => {
                if let Err(e) = w.alert_with_message(message) {
                    log::warn!("alert failed: {:?}", e);
                }
            }
            None => log::warn!("no window to alert: {}", message),
        }
    }
}

/// `None` when the component was rendered outside a router.
pub struct RouterNavigate(pub Option<Navigator>);

impl Navigate for RouterNavigate {
    fn navigate(&self, path: &str) {
        let Some(navigator) = &self.0 else {
            log::warn!("no router to navigate to {}", path);
            return;
        };
        match Route::recognize(path) {
            Some(route) => navigator.push(&route),
            None => log::warn!("no route for {}", path),
        }
    }
}
