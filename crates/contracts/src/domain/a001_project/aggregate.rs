use crate::shared::ordering::OrderedItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Статус проекта. Неизвестные значения с сервера читаются как `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
    Archived,
    #[default]
    #[serde(other)]
    Draft,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Draft,
        ProjectStatus::Active,
        ProjectStatus::Paused,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    /// Имя статуса для UI
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Черновик",
            ProjectStatus::Active => "В работе",
            ProjectStatus::Paused => "Приостановлен",
            ProjectStatus::Completed => "Завершён",
            ProjectStatus::Archived => "Архив",
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Проект в списке проектов (`GET /api/projects`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: String,
    #[serde(default)]
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(rename = "counterpartyId", default)]
    pub counterparty_id: Option<String>,
    #[serde(rename = "orderIndex", default)]
    pub order_index: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl OrderedItem for ProjectDto {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn set_order_index(&mut self, index: i32) {
        self.order_index = index;
    }
}
