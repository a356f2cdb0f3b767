use crate::shared::ordering::OrderedItem;
use serde::{Deserialize, Serialize};

/// Этап работ по изделию (`GET /api/products/{id}/work-stages`)
///
/// Даты приходят строками ISO-8601 как есть; пустые и битые значения
/// встречаются и отсекаются при расчёте сроков, а не здесь.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkStageDto {
    pub id: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    /// Ссылка на вид работ
    #[serde(rename = "workTypeId", default)]
    pub work_type_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "orderIndex", default)]
    pub order_index: i32,
}

impl OrderedItem for WorkStageDto {
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
