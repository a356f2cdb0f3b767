use contracts::system::auth::{UserInfo, UserPermissions};

/// Проверки прав, которые выдаёт внешний слой авторизации.
/// Сами права здесь не вычисляются, только учитываются перед действием.
pub trait Capabilities {
    fn can_edit(&self) -> bool;
    fn can_create(&self) -> bool;
    fn can_delete(&self) -> bool;
}

impl Capabilities for UserPermissions {
    fn can_edit(&self) -> bool {
        self.can_edit
    }

    fn can_create(&self) -> bool {
        self.can_create
    }

    fn can_delete(&self) -> bool {
        self.can_delete
    }
}

impl Capabilities for UserInfo {
    fn can_edit(&self) -> bool {
        self.effective_permissions().can_edit
    }

    fn can_create(&self) -> bool {
        self.effective_permissions().can_create
    }

    fn can_delete(&self) -> bool {
        self.effective_permissions().can_delete
    }
}
