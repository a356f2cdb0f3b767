//! Данные для расчётных колонок «Начало» / «Окончание» списка проектов.

use contracts::domain::a001_project::ProjectDto;
use contracts::domain::a002_product::ProductDto;
use contracts::domain::a003_work_stage::WorkStageDto;
use std::collections::HashMap;

use crate::domain::a002_product::api::fetch_products;
use crate::domain::a003_work_stage::api::fetch_work_stages;
use crate::shared::api_client::{ApiError, RemoteStore};
use crate::shared::timeline::{IntervalBearing, StageContainer};

/// Изделие вместе с его этапами работ
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStages {
    pub product: ProductDto,
    pub stages: Vec<WorkStageDto>,
}

impl StageContainer for ProductStages {
    type Stage = WorkStageDto;

    fn stages(&self) -> &[WorkStageDto] {
        &self.stages
    }
}

/// Все изделия проекта с этапами, загруженные за один проход
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTimeline {
    pub project_id: String,
    pub products: Vec<ProductStages>,
}

impl IntervalBearing for ProjectTimeline {
    type Child = ProductStages;

    fn children(&self) -> &[ProductStages] {
        &self.products
    }
}

/// Загружает изделия проекта, затем этапы каждого изделия по очереди
pub async fn load_project_timeline<S: RemoteStore>(
    store: &S,
    project_id: &str,
) -> Result<ProjectTimeline, ApiError> {
    let products = fetch_products(store, project_id).await?;

    let mut entries = Vec::with_capacity(products.len());
    for product in products {
        let stages = fetch_work_stages(store, &product.id).await?;
        entries.push(ProductStages { product, stages });
    }

    Ok(ProjectTimeline {
        project_id: project_id.to_string(),
        products: entries,
    })
}

/// Сроки для всех проектов списка. Проект, который не удалось загрузить,
/// пропускается: его колонки остаются пустыми.
pub async fn load_timelines<S: RemoteStore>(
    store: &S,
    projects: &[ProjectDto],
) -> HashMap<String, ProjectTimeline> {
    let mut timelines = HashMap::with_capacity(projects.len());
    for project in projects {
        match load_project_timeline(store, &project.id).await {
            Ok(timeline) => {
                timelines.insert(project.id.clone(), timeline);
            }
            Err(e) => log::warn!("timeline for project {} skipped: {}", project.id, e),
        }
    }
    timelines
}
