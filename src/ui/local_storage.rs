//! `localStorage`-backed key-value store for the waitlist

use crate::core::{KeyValueStore, WaitlistError};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// The window's `localStorage`
///
/// Every call looks the storage object up again; private browsing modes can
/// deny access at any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, WaitlistError> {
        let window = web_sys::window()
            .ok_or_else(|| WaitlistError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| WaitlistError::Storage("localStorage disabled".to_string()))
    }
}

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

#[cfg(feature = "ssr")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, WaitlistError> {
        Err(server_side())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), WaitlistError> {
        Err(server_side())
    }
}

#[cfg(not(feature = "ssr"))]
fn js_error(err: wasm_bindgen::JsValue) -> WaitlistError {
    WaitlistError::Storage(format!("{:?}", err))
}

#[cfg(feature = "ssr")]
fn server_side() -> WaitlistError {
    WaitlistError::Storage("localStorage is only available in the browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Submission, Waitlist, submit};

    #[test]
    fn test_server_side_store_is_unavailable() {
        let store = BrowserStorage;
        assert!(matches!(
            store.get_item("hydroblt_waitlist"),
            Err(WaitlistError::Storage(_))
        ));
        assert!(matches!(
            store.set_item("hydroblt_waitlist", "[]"),
            Err(WaitlistError::Storage(_))
        ));
    }

    #[test]
    fn test_unavailable_store_still_joins() {
        let waitlist = Waitlist::new(BrowserStorage);
        let submission = submit(&waitlist, "Jo", "jo@example.com", "2026-10-18T00:00:00.000Z");

        match submission {
            Submission::Joined { persist_error, .. } => assert!(persist_error.is_some()),
            Submission::Rejected(err) => panic!("unexpected rejection: {err}"),
        }
    }
}
