use contracts::shared::ordering::{OrderedItem, ReorderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::list::{CommitOutcome, DisplayFilter, ReorderableList};
use crate::shared::api_client::RemoteStore;
use crate::shared::capabilities::Capabilities;

/// Реактивная обёртка над `ReorderableList` для компонентов списков
pub struct ReorderResource<T: Send + Sync + 'static> {
    list: RwSignal<ReorderableList<T>>,
}

impl<T: Send + Sync + 'static> Clone for ReorderResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ReorderResource<T> {}

impl<T> ReorderResource<T>
where
    T: OrderedItem + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ReorderableList::default()),
        }
    }

    /// Видимые элементы в текущем порядке (отслеживается)
    pub fn visible(&self) -> Vec<T> {
        self.list
            .with(|list| list.current_order().into_iter().cloned().collect())
    }

    pub fn set_items(&self, items: Vec<T>) {
        self.list.update(|list| {
            list.replace_items(items);
        });
    }

    pub fn set_filter(&self, filter: Option<DisplayFilter<T>>) {
        self.list.update(|list| list.set_filter(filter));
    }

    pub fn apply_capabilities(&self, capabilities: &impl Capabilities) {
        self.list.update(|list| list.apply_capabilities(capabilities));
    }

    pub fn can_move(&self) -> bool {
        self.list.with(|list| list.can_move())
    }

    pub fn is_reordering(&self) -> bool {
        self.list.with(|list| list.is_reordering())
    }

    pub fn error(&self) -> Option<String> {
        self.list.with(|list| list.error().map(str::to_string))
    }

    pub fn dismiss_error(&self) {
        self.list.update(|list| list.dismiss_error());
    }

    /// Перемещение применяется сразу, сохранение уходит в фоне.
    /// Пока оно не завершилось, новые перемещения игнорируются.
    pub fn move_and_commit<S>(&self, store: S, path: String, active_id: String, over_id: String)
    where
        S: RemoteStore + 'static,
    {
        let request: Option<ReorderRequest> = self
            .list
            .try_update(|list| {
                if list.begin_move(&active_id, &over_id) {
                    list.prepare_commit()
                } else {
                    None
                }
            })
            .flatten();

        let Some(request) = request else {
            return;
        };

        let list = self.list;
        spawn_local(async move {
            let result = store.put_reorder(&path, &request).await;
            let outcome = list.try_update(|l| l.finish_commit(result));
            if let Some(CommitOutcome::RolledBack(err)) = outcome {
                log::error!("reorder {} failed: {}", path, err);
            }
        });
    }
}

impl<T> Default for ReorderResource<T>
where
    T: OrderedItem + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use crate::shared::testing::MockStore;
    use any_spawner::Executor;
    use contracts::system::auth::UserPermissions;
    use leptos::reactive::owner::Owner;

    const PATH: &str = "/api/work-stages/reorder";

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        idx: i32,
    }

    impl OrderedItem for Row {
        fn item_id(&self) -> &str {
            &self.id
        }

        fn order_index(&self) -> i32 {
            self.idx
        }

        fn set_order_index(&mut self, index: i32) {
            self.idx = index;
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter()
            .enumerate()
            .map(|(idx, id)| Row {
                id: id.to_string(),
                idx: idx as i32,
            })
            .collect()
    }

    fn order(resource: &ReorderResource<Row>) -> Vec<String> {
        resource.visible().into_iter().map(|r| r.id).collect()
    }

    fn editable_resource() -> ReorderResource<Row> {
        let resource = ReorderResource::new();
        resource.apply_capabilities(&UserPermissions::full());
        resource.set_items(rows(&["a", "b", "c"]));
        resource
    }

    #[test]
    fn test_drag_applies_at_once_and_rolls_back_after_rejection() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let store = MockStore::default();
            store.fail_reorder(ApiError::Rejected {
                status: 409,
                reason: Some("Список изменён".into()),
            });
            let resource = editable_resource();

            resource.move_and_commit(store.clone(), PATH.to_string(), "a".into(), "c".into());
            assert_eq!(order(&resource), vec!["b", "c", "a"]);
            assert!(resource.is_reordering());
            assert!(!resource.can_move());

            // второе перетаскивание до ответа сервера игнорируется
            resource.move_and_commit(store.clone(), PATH.to_string(), "b".into(), "a".into());
            assert_eq!(order(&resource), vec!["b", "c", "a"]);

            Executor::poll_local();

            assert_eq!(store.reorder_calls().len(), 1);
            assert_eq!(order(&resource), vec!["a", "b", "c"]);
            assert!(!resource.is_reordering());
            assert_eq!(
                resource.error().as_deref(),
                Some("Не удалось сохранить порядок: Список изменён")
            );

            resource.dismiss_error();
            assert_eq!(resource.error(), None);
        });
    }

    #[test]
    fn test_drag_commit_success_keeps_new_order() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let store = MockStore::default();
            let resource = editable_resource();

            resource.move_and_commit(store.clone(), PATH.to_string(), "c".into(), "a".into());
            Executor::poll_local();

            let calls = store.reorder_calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].0, PATH);
            assert_eq!(order(&resource), vec!["c", "a", "b"]);
            assert!(!resource.is_reordering());
            assert!(resource.can_move());
            assert_eq!(resource.error(), None);
        });
    }

    #[test]
    fn test_drag_on_read_only_resource_sends_nothing() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let store = MockStore::default();
            let resource = ReorderResource::<Row>::new();
            resource.set_items(rows(&["a", "b"]));

            resource.move_and_commit(store.clone(), PATH.to_string(), "b".into(), "a".into());
            Executor::poll_local();

            assert!(store.reorder_calls().is_empty());
            assert_eq!(order(&resource), vec!["a", "b"]);
            assert!(!resource.is_reordering());
        });
    }
}
