use contracts::shared::ordering::{OrderedItem, ReorderRequest};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::snapshot::OrderSnapshot;
use crate::shared::api_client::{ApiError, RemoteStore};
use crate::shared::capabilities::Capabilities;

/// Условие видимости элемента (например, «статус входит в набор»)
pub type DisplayFilter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Чем закончилась попытка сохранить порядок
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Сервер принял порядок, он стал основным
    Committed,
    /// Сервер отказал, порядок возвращён к снимку
    RolledBack(ApiError),
    /// Нет несохранённого перемещения
    NothingPending,
    /// Предыдущее сохранение ещё не завершилось
    Busy,
}

/// Список с ручным порядком и оптимистичным перемещением.
///
/// Элементы хранятся в порядке загрузки, отображаемый порядок получается
/// стабильной сортировкой по `order_index`. Перемещение считается по
/// видимым элементам, а в полный список переносится только по id.
pub struct ReorderableList<T> {
    items: Vec<T>,
    filter: Option<DisplayFilter<T>>,
    snapshot: Option<OrderSnapshot>,
    is_reordering: bool,
    editable: bool,
    error: Option<String>,
}

impl<T> Default for ReorderableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: None,
            snapshot: None,
            is_reordering: false,
            editable: false,
            error: None,
        }
    }
}

impl<T: OrderedItem> ReorderableList<T> {
    /// Список только для чтения; перемещение разрешают права пользователя
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_capabilities(mut self, capabilities: &impl Capabilities) -> Self {
        self.apply_capabilities(capabilities);
        self
    }

    pub fn apply_capabilities(&mut self, capabilities: &impl Capabilities) {
        self.editable = capabilities.can_edit();
    }

    pub fn set_filter(&mut self, filter: Option<DisplayFilter<T>>) {
        self.filter = filter;
    }

    /// Все элементы в порядке загрузки, включая скрытые фильтром
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_reordering(&self) -> bool {
        self.is_reordering
    }

    /// Можно ли сейчас начинать перетаскивание
    pub fn can_move(&self) -> bool {
        self.editable && !self.is_reordering
    }

    /// Есть перемещение, ещё не подтверждённое сервером
    pub fn has_pending(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn is_visible(&self, item: &T) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(item))
    }

    /// Видимые элементы по возрастанию `order_index`,
    /// при равенстве в порядке загрузки
    pub fn current_order(&self) -> Vec<&T> {
        let mut visible: Vec<&T> = self
            .items
            .iter()
            .filter(|item| self.is_visible(item))
            .collect();
        visible.sort_by_key(|item| item.order_index());
        visible
    }

    /// Заменить данные свежей загрузкой. Пока идёт сохранение, загрузка
    /// отклоняется: иначе откат применился бы к чужим данным.
    pub fn replace_items(&mut self, items: Vec<T>) -> bool {
        if self.is_reordering {
            warn!("reorder: reload ignored while commit is in flight");
            return false;
        }
        self.items = items;
        self.snapshot = None;
        true
    }

    /// Перемещает `active_id` на место `over_id` среди видимых элементов
    /// и сразу пересчитывает индексы. Возвращает `false`, если ничего
    /// не изменилось.
    pub fn begin_move(&mut self, active_id: &str, over_id: &str) -> bool {
        if !self.can_move() || active_id == over_id {
            return false;
        }

        let mut sequence: Vec<String> = self
            .current_order()
            .into_iter()
            .map(|item| item.item_id().to_string())
            .collect();

        let Some(from) = sequence.iter().position(|id| id == active_id) else {
            return false;
        };
        let Some(to) = sequence.iter().position(|id| id == over_id) else {
            return false;
        };

        if self.snapshot.is_none() {
            self.snapshot = Some(OrderSnapshot::capture(&self.items));
        }

        let moved = sequence.remove(from);
        sequence.insert(to, moved);

        let positions: HashMap<&str, i32> = sequence
            .iter()
            .enumerate()
            .map(|(position, id)| (id.as_str(), position as i32))
            .collect();

        for item in self.items.iter_mut() {
            if let Some(&position) = positions.get(item.item_id()) {
                item.set_order_index(position);
            }
        }

        debug!("reorder: moved {} from {} to {}", active_id, from, to);
        true
    }

    /// Включает защиту от повторного входа и возвращает запрос с полным
    /// видимым порядком. `None`, если сохранять нечего или уже сохраняется.
    pub fn prepare_commit(&mut self) -> Option<ReorderRequest> {
        if self.is_reordering || self.snapshot.is_none() {
            return None;
        }
        self.is_reordering = true;
        Some(ReorderRequest::from_sequence(self.current_order()))
    }

    /// Применяет ответ сервера: при успехе порядок становится основным,
    /// при ошибке весь список возвращается к снимку.
    pub fn finish_commit(&mut self, result: Result<(), ApiError>) -> CommitOutcome {
        if !self.is_reordering {
            return CommitOutcome::NothingPending;
        }
        self.is_reordering = false;

        match result {
            Ok(()) => {
                self.snapshot = None;
                self.error = None;
                debug!("reorder: order committed");
                CommitOutcome::Committed
            }
            Err(err) => {
                if let Some(snapshot) = self.snapshot.take() {
                    snapshot.restore(&mut self.items);
                }
                warn!("reorder: commit failed, order rolled back: {}", err);
                self.error = Some(format!(
                    "Не удалось сохранить порядок: {}",
                    err.user_message()
                ));
                CommitOutcome::RolledBack(err)
            }
        }
    }

    /// Сохраняет текущий порядок в `store` по адресу `path`.
    /// Ошибки не выходят наружу: они превращаются в откат и сообщение.
    pub async fn commit<S: RemoteStore>(&mut self, store: &S, path: &str) -> CommitOutcome {
        if self.is_reordering {
            return CommitOutcome::Busy;
        }
        let Some(request) = self.prepare_commit() else {
            return CommitOutcome::NothingPending;
        };
        let result = store.put_reorder(path, &request).await;
        self.finish_commit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::MockStore;
    use contracts::shared::ordering::ReorderItem;
    use contracts::system::auth::UserPermissions;
    use futures::executor::block_on;

    const PATH: &str = "/api/projects/reorder";

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        idx: i32,
        hidden: bool,
    }

    impl OrderedItem for Row {
        fn item_id(&self) -> &str {
            self.id
        }

        fn order_index(&self) -> i32 {
            self.idx
        }

        fn set_order_index(&mut self, index: i32) {
            self.idx = index;
        }
    }

    fn row(id: &'static str, idx: i32) -> Row {
        Row { id, idx, hidden: false }
    }

    fn hidden(id: &'static str, idx: i32) -> Row {
        Row { id, idx, hidden: true }
    }

    fn editable(items: Vec<Row>) -> ReorderableList<Row> {
        ReorderableList::new(items).with_capabilities(&UserPermissions::full())
    }

    fn visible_only() -> Option<DisplayFilter<Row>> {
        Some(Arc::new(|r: &Row| !r.hidden))
    }

    fn ids(list: &ReorderableList<Row>) -> Vec<&'static str> {
        list.current_order().iter().map(|r| r.id).collect()
    }

    fn index_of(list: &ReorderableList<Row>, id: &str) -> i32 {
        list.items().iter().find(|r| r.id == id).unwrap().idx
    }

    #[test]
    fn test_current_order_is_stable_by_index() {
        let list = editable(vec![row("a", 2), row("b", 0), row("c", 2), row("d", 0)]);
        assert_eq!(ids(&list), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_current_order_applies_filter() {
        let mut list = editable(vec![row("a", 0), hidden("h", 1), row("b", 2)]);
        list.set_filter(visible_only());
        assert_eq!(ids(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_move_forward_is_single_slot_move() {
        let mut list = editable(vec![row("a", 0), row("b", 1), row("c", 2), row("d", 3)]);

        assert!(list.begin_move("a", "c"));
        assert_eq!(ids(&list), vec!["b", "c", "a", "d"]);
        assert_eq!(index_of(&list, "a"), 2);
        assert_eq!(index_of(&list, "d"), 3);
    }

    #[test]
    fn test_move_backward() {
        let mut list = editable(vec![row("a", 0), row("b", 1), row("c", 2), row("d", 3)]);

        assert!(list.begin_move("d", "b"));
        assert_eq!(ids(&list), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_maps_filtered_positions_by_id() {
        let mut list = editable(vec![
            row("a", 0),
            hidden("h1", 1),
            row("b", 2),
            row("c", 3),
            hidden("h2", 4),
            row("d", 5),
        ]);
        list.set_filter(visible_only());

        assert!(list.begin_move("a", "c"));

        assert_eq!(ids(&list), vec!["b", "c", "a", "d"]);
        assert_eq!(index_of(&list, "b"), 0);
        assert_eq!(index_of(&list, "c"), 1);
        assert_eq!(index_of(&list, "a"), 2);
        assert_eq!(index_of(&list, "d"), 3);
        // скрытые элементы сохраняют свои индексы
        assert_eq!(index_of(&list, "h1"), 1);
        assert_eq!(index_of(&list, "h2"), 4);
        // и порядок загрузки не меняется
        let backing: Vec<_> = list.items().iter().map(|r| r.id).collect();
        assert_eq!(backing, vec!["a", "h1", "b", "c", "h2", "d"]);
    }

    #[test]
    fn test_noop_moves() {
        let mut list = editable(vec![row("a", 0), row("b", 1), hidden("h", 2)]);
        list.set_filter(visible_only());
        let before = list.items().to_vec();

        assert!(!list.begin_move("a", "a"));
        assert!(!list.begin_move("missing", "b"));
        assert!(!list.begin_move("a", "missing"));
        assert!(!list.begin_move("h", "a"));

        assert_eq!(list.items(), before.as_slice());
        assert!(!list.has_pending());
    }

    #[test]
    fn test_read_only_list_ignores_moves() {
        let mut list = ReorderableList::new(vec![row("a", 0), row("b", 1)]);

        assert!(!list.begin_move("a", "b"));
        assert_eq!(ids(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_commit_success_sends_filtered_sequence() {
        let store = MockStore::default();
        let mut list = editable(vec![row("a", 0), hidden("h", 1), row("b", 2), row("c", 3)]);
        list.set_filter(visible_only());

        list.begin_move("c", "a");
        let outcome = block_on(list.commit(&store, PATH));

        assert_eq!(outcome, CommitOutcome::Committed);
        assert!(!list.has_pending());
        assert!(!list.is_reordering());
        assert_eq!(list.error(), None);

        let calls = store.reorder_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PATH);
        assert_eq!(
            calls[0].1.items,
            vec![
                ReorderItem { id: "c".into(), order_index: 0 },
                ReorderItem { id: "a".into(), order_index: 1 },
                ReorderItem { id: "b".into(), order_index: 2 },
            ]
        );
    }

    #[test]
    fn test_rejected_commit_restores_snapshot_exactly() {
        let store = MockStore::default();
        store.fail_reorder(ApiError::Rejected {
            status: 409,
            reason: Some("Список изменён".into()),
        });
        let mut list = editable(vec![row("a", 0), hidden("h", 7), row("b", 3), row("c", 3)]);
        list.set_filter(visible_only());
        let before = list.items().to_vec();
        let order_before = ids(&list);

        list.begin_move("a", "c");
        assert_ne!(ids(&list), order_before);

        let outcome = block_on(list.commit(&store, PATH));

        assert!(matches!(outcome, CommitOutcome::RolledBack(_)));
        assert_eq!(list.items(), before.as_slice());
        assert_eq!(ids(&list), order_before);
        assert!(!list.is_reordering());
        assert_eq!(list.error(), Some("Не удалось сохранить порядок: Список изменён"));

        list.dismiss_error();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_network_failure_rolls_back() {
        let store = MockStore::default();
        store.fail_reorder(ApiError::Network("connection reset".into()));
        let mut list = editable(vec![row("a", 0), row("b", 1)]);

        list.begin_move("b", "a");
        let outcome = block_on(list.commit(&store, PATH));

        assert_eq!(
            outcome,
            CommitOutcome::RolledBack(ApiError::Network("connection reset".into()))
        );
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert_eq!(
            list.error(),
            Some("Не удалось сохранить порядок: нет связи с сервером")
        );
    }

    #[test]
    fn test_rollback_returns_to_first_snapshot_after_several_moves() {
        let store = MockStore::default();
        store.fail_reorder(ApiError::Rejected { status: 500, reason: None });
        let mut list = editable(vec![row("a", 0), row("b", 1), row("c", 2)]);

        list.begin_move("a", "c");
        list.begin_move("b", "a");
        block_on(list.commit(&store, PATH));

        assert_eq!(ids(&list), vec!["a", "b", "c"]);
        assert_eq!(index_of(&list, "c"), 2);
    }

    #[test]
    fn test_late_error_after_success_does_not_roll_back() {
        let store = MockStore::default();
        let mut list = editable(vec![row("a", 0), row("b", 1)]);

        list.begin_move("b", "a");
        assert_eq!(block_on(list.commit(&store, PATH)), CommitOutcome::Committed);

        let outcome = list.finish_commit(Err(ApiError::Network("late".into())));
        assert_eq!(outcome, CommitOutcome::NothingPending);
        assert_eq!(ids(&list), vec!["b", "a"]);
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_guard_blocks_moves_commits_and_reloads() {
        let store = MockStore::default();
        let mut list = editable(vec![row("a", 0), row("b", 1), row("c", 2)]);

        list.begin_move("c", "a");
        let request = list.prepare_commit().unwrap();
        assert_eq!(request.items.len(), 3);
        assert!(list.is_reordering());
        let during = list.items().to_vec();

        assert!(!list.begin_move("a", "b"));
        assert_eq!(block_on(list.commit(&store, PATH)), CommitOutcome::Busy);
        assert!(list.prepare_commit().is_none());
        assert!(!list.replace_items(vec![row("z", 0)]));
        assert_eq!(list.items(), during.as_slice());
        assert!(store.reorder_calls().is_empty());

        assert_eq!(list.finish_commit(Ok(())), CommitOutcome::Committed);
        assert!(list.begin_move("a", "b"));
    }

    #[test]
    fn test_commit_without_move_sends_nothing() {
        let store = MockStore::default();
        let mut list = editable(vec![row("a", 0)]);

        assert_eq!(block_on(list.commit(&store, PATH)), CommitOutcome::NothingPending);
        assert!(store.reorder_calls().is_empty());
    }

    #[test]
    fn test_reload_drops_stale_snapshot() {
        let mut list = editable(vec![row("a", 0), row("b", 1)]);
        list.begin_move("a", "b");
        assert!(list.has_pending());

        assert!(list.replace_items(vec![row("a", 5), row("b", 4)]));
        assert!(!list.has_pending());
        assert_eq!(ids(&list), vec!["b", "a"]);
    }
}
