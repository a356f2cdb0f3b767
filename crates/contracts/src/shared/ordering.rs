use serde::{Deserialize, Serialize};

/// Элемент списка с ручной сортировкой (проекты, этапы работ)
///
/// `order_index` задаёт позицию при отображении; значения не обязаны
/// идти подряд, при равенстве сохраняется порядок загрузки.
pub trait OrderedItem {
    /// Стабильный идентификатор, уникальный в пределах списка
    fn item_id(&self) -> &str;

    fn order_index(&self) -> i32;

    fn set_order_index(&mut self, index: i32);
}

/// Позиция одного элемента в запросе переупорядочивания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: String,
    #[serde(rename = "orderIndex")]
    pub order_index: i32,
}

/// Тело `PUT /{collection}/reorder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

impl ReorderRequest {
    /// Собирает запрос из уже упорядоченной последовательности:
    /// позиция в последовательности становится `orderIndex` (с нуля).
    pub fn from_sequence<'a, T, I>(sequence: I) -> Self
    where
        T: OrderedItem + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let items = sequence
            .into_iter()
            .enumerate()
            .map(|(position, item)| ReorderItem {
                id: item.item_id().to_string(),
                order_index: position as i32,
            })
            .collect();
        Self { items }
    }
}

fn default_success() -> bool {
    true
}

/// Ответ сервера на успешный (2xx) запрос переупорядочивания.
/// Пустое тело тоже считается успехом.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReorderResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Структурированная ошибка бэкенда: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Извлекает причину из тела ответа, если оно в ожидаемом формате
    pub fn reason_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error)
            .filter(|e| !e.trim().is_empty())
    }
}
