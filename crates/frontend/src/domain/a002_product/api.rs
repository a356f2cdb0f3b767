use contracts::domain::a002_product::ProductDto;

use crate::shared::api_client::{ApiError, RemoteStore};
use crate::shared::api_utils::child_collection_path;

/// Изделия проекта
pub async fn fetch_products<S: RemoteStore>(
    store: &S,
    project_id: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    store
        .get_json::<Vec<ProductDto>>(&child_collection_path("projects", project_id, "products"))
        .await
}
