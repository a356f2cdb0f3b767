use web_sys::window;

use crate::shared::context::ClientContext;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const PREFERENCE_PREFIX: &str = "pref_";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn preference_key(key: &str) -> String {
    format!("{}{}", PREFERENCE_PREFIX, key)
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Контекст браузера: токен и настройки живут в localStorage.
/// Без window всё читается как `None`, запись ничего не делает.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserContext;

impl ClientContext for BrowserContext {
    fn auth_token(&self) -> Option<String> {
        get_access_token()
    }

    fn preference(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(&preference_key(key)).ok()?
    }

    fn set_preference(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(&preference_key(key), value);
        }
    }
}
