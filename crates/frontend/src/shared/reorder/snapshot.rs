use contracts::shared::ordering::OrderedItem;
use std::collections::HashMap;

/// Копия `id → orderIndex` всего списка, снятая до перемещения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSnapshot {
    entries: Vec<(String, i32)>,
}

impl OrderSnapshot {
    pub fn capture<T: OrderedItem>(items: &[T]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| (item.item_id().to_string(), item.order_index()))
                .collect(),
        }
    }

    /// Восстанавливает индексы по id. Элементы, которых не было при
    /// снятии копии, не трогаются.
    pub fn restore<T: OrderedItem>(&self, items: &mut [T]) {
        let saved: HashMap<&str, i32> = self
            .entries
            .iter()
            .map(|(id, index)| (id.as_str(), *index))
            .collect();

        for item in items.iter_mut() {
            if let Some(&index) = saved.get(item.item_id()) {
                item.set_order_index(index);
            }
        }
    }
}
