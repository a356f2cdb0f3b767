use contracts::domain::a001_project::{ProjectDto, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::shared::context::ClientContext;
use crate::shared::reorder::DisplayFilter;

/// Ключ настройки с выбранными статусами
pub const STATUS_FILTER_KEY: &str = "a001_project_status_filter";

/// Набор статусов, проекты с которыми показываются в списке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectStatusFilter {
    statuses: Vec<ProjectStatus>,
}

impl Default for ProjectStatusFilter {
    fn default() -> Self {
        Self {
            statuses: ProjectStatus::ALL
                .into_iter()
                .filter(|s| *s != ProjectStatus::Archived)
                .collect(),
        }
    }
}

impl ProjectStatusFilter {
    pub fn contains(&self, status: ProjectStatus) -> bool {
        self.statuses.contains(&status)
    }

    pub fn toggle(&mut self, status: ProjectStatus) {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
        } else {
            self.statuses.push(status);
        }
    }

    /// Фильтр для контроллера списка
    pub fn to_display_filter(&self) -> DisplayFilter<ProjectDto> {
        let statuses = self.statuses.clone();
        Arc::new(move |project: &ProjectDto| statuses.contains(&project.status))
    }

    /// Читает сохранённый фильтр; нечитаемое значение заменяется умолчанием
    pub fn load(context: &impl ClientContext) -> Self {
        context
            .preference(STATUS_FILTER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, context: &impl ClientContext) {
        match serde_json::to_string(self) {
            Ok(raw) => context.set_preference(STATUS_FILTER_KEY, &raw),
            Err(e) => log::warn!("project filter not saved: {}", e),
        }
    }
}
