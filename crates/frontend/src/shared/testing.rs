//! Хранилище в памяти вместо бэкенда для тестов контроллеров и загрузчиков.

use contracts::shared::ordering::ReorderRequest;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::api_client::{ApiError, RemoteStore};

/// Клоны делят одно состояние: один можно отдать в `spawn_local`,
/// а по другому проверять вызовы.
#[derive(Default, Clone)]
pub struct MockStore {
    responses: Rc<RefCell<HashMap<String, Result<serde_json::Value, ApiError>>>>,
    reorder_failure: Rc<RefCell<Option<ApiError>>>,
    reorder_calls: Rc<RefCell<Vec<(String, ReorderRequest)>>>,
    get_calls: Rc<RefCell<Vec<String>>>,
}

impl MockStore {
    pub fn respond(&self, path: &str, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(path.to_string(), Ok(body));
    }

    pub fn fail_get(&self, path: &str, err: ApiError) {
        self.responses
            .borrow_mut()
            .insert(path.to_string(), Err(err));
    }

    pub fn fail_reorder(&self, err: ApiError) {
        *self.reorder_failure.borrow_mut() = Some(err);
    }

    pub fn reorder_calls(&self) -> Vec<(String, ReorderRequest)> {
        self.reorder_calls.borrow().clone()
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.get_calls.borrow().clone()
    }
}

impl RemoteStore for MockStore {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_calls.borrow_mut().push(path.to_string());
        let response = self.responses.borrow().get(path).cloned();
        match response {
            Some(Ok(body)) => {
                serde_json::from_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
            }
            Some(Err(err)) => Err(err),
            None => Err(ApiError::Rejected {
                status: 404,
                reason: None,
            }),
        }
    }

    async fn put_reorder(&self, path: &str, request: &ReorderRequest) -> Result<(), ApiError> {
        self.reorder_calls
            .borrow_mut()
            .push((path.to_string(), request.clone()));
        match self.reorder_failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
