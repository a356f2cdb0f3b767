use contracts::system::auth::UserPermissions;
use leptos::prelude::*;

use crate::shared::api_client::HttpClient;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::BrowserContext;

/// Клиент бэкенда и права пользователя, общие для всех страниц
#[derive(Clone)]
pub struct AppGlobalContext {
    pub client: HttpClient<BrowserContext>,
    pub permissions: RwSignal<UserPermissions>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(ApiConfig::from_window(), BrowserContext),
            permissions: RwSignal::new(UserPermissions::default()),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
