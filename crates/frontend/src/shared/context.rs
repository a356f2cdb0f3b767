//! Контекст клиента: токен авторизации и сохранённые настройки пользователя.
//!
//! Контроллеры и загрузчики получают контекст при создании и не читают
//! localStorage напрямую.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub trait ClientContext {
    /// Access token для заголовка `Authorization`
    fn auth_token(&self) -> Option<String>;

    /// Прочитать сохранённую настройку
    fn preference(&self, key: &str) -> Option<String>;

    /// Сохранить настройку
    fn set_preference(&self, key: &str, value: &str);
}

/// Контекст в памяти: для тестов и окружений без браузера
#[derive(Debug, Clone, Default)]
pub struct MemoryContext {
    token: Arc<RwLock<Option<String>>>,
    preferences: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryContext {
    pub fn with_token(token: &str) -> Self {
        let context = Self::default();
        context.set_token(Some(token.to_string()));
        context
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }
}

impl ClientContext for MemoryContext {
    fn auth_token(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }

    fn preference(&self, key: &str) -> Option<String> {
        self.preferences.read().ok()?.get(key).cloned()
    }

    fn set_preference(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.preferences.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }
}
