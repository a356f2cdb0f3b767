use serde::{Deserialize, Serialize};

/// Права текущего пользователя на изменение справочников и списков
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserPermissions {
    #[serde(rename = "canEdit", default)]
    pub can_edit: bool,
    #[serde(rename = "canCreate", default)]
    pub can_create: bool,
    #[serde(rename = "canDelete", default)]
    pub can_delete: bool,
}

impl UserPermissions {
    pub fn full() -> Self {
        Self {
            can_edit: true,
            can_create: true,
            can_delete: true,
        }
    }
}

/// Ответ `GET /api/system/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: UserPermissions,
}

impl UserInfo {
    /// Администратору доступно всё независимо от выданных прав
    pub fn effective_permissions(&self) -> UserPermissions {
        if self.is_admin {
            UserPermissions::full()
        } else {
            self.permissions
        }
    }
}
