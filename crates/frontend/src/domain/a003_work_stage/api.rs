use contracts::domain::a003_work_stage::WorkStageDto;

use crate::shared::api_client::{ApiError, RemoteStore};
use crate::shared::api_utils::child_collection_path;

pub const WORK_STAGES_REORDER_PATH: &str = "/api/work-stages/reorder";

/// Этапы работ по изделию
pub async fn fetch_work_stages<S: RemoteStore>(
    store: &S,
    product_id: &str,
) -> Result<Vec<WorkStageDto>, ApiError> {
    store
        .get_json::<Vec<WorkStageDto>>(&child_collection_path("products", product_id, "work-stages"))
        .await
}
