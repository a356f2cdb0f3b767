use serde::{Deserialize, Serialize};

/// Изделие проекта (`GET /api/projects/{id}/products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    /// Ссылка на номенклатуру
    #[serde(rename = "nomenclatureId", default)]
    pub nomenclature_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(rename = "orderIndex", default)]
    pub order_index: i32,
}
