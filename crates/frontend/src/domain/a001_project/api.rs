use contracts::domain::a001_project::ProjectDto;

use crate::shared::api_client::{ApiError, RemoteStore};

pub const PROJECTS_PATH: &str = "/api/projects";
pub const PROJECTS_REORDER_PATH: &str = "/api/projects/reorder";

/// Fetch all projects
pub async fn fetch_projects<S: RemoteStore>(store: &S) -> Result<Vec<ProjectDto>, ApiError> {
    store.get_json::<Vec<ProjectDto>>(PROJECTS_PATH).await
}
