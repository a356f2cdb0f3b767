//! HTTP-клиент бэкенда и типизированные ошибки запросов.
//!
//! `RemoteStore` отделяет контроллеры от транспорта: в браузере работает
//! `HttpClient` на gloo-net, в тестах подставляется хранилище в памяти.

use contracts::shared::ordering::{ErrorResponse, ReorderRequest, ReorderResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::api_utils::ApiConfig;
use super::context::ClientContext;

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(": {}", r),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request rejected (HTTP {status}){}", reason_suffix(.reason))]
    Rejected { status: u16, reason: Option<String> },

    #[error("Failed to parse response: {0}")]
    Malformed(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Ошибка по статусу и телу не-2xx ответа
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            reason: ErrorResponse::reason_from_body(body),
        }
    }

    /// Причина, присланная сервером, если есть
    pub fn server_reason(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// Текст для пользователя: причина от сервера или описание по виду ошибки
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                reason: Some(reason),
                ..
            } => reason.clone(),
            ApiError::Rejected { status, reason: None } => {
                format!("сервер отклонил запрос (HTTP {})", status)
            }
            ApiError::Network(_) => "нет связи с сервером".to_string(),
            ApiError::Malformed(_) => "некорректный ответ сервера".to_string(),
            ApiError::Serialize(_) => "не удалось сформировать запрос".to_string(),
        }
    }
}

/// Разбор ответа на `PUT /{collection}/reorder`
pub fn interpret_reorder_response(status: u16, body: &str) -> Result<(), ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }

    if body.trim().is_empty() {
        return Ok(());
    }

    let response =
        ReorderResponse::parse(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if response.success {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            status,
            reason: response.error.filter(|e| !e.trim().is_empty()),
        })
    }
}

/// Удалённое хранилище, которому принадлежит окончательный порядок
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn put_reorder(&self, path: &str, request: &ReorderRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpClient<C> {
    config: ApiConfig,
    context: C,
}

impl<C: ClientContext> HttpClient<C> {
    pub fn new(config: ApiConfig, context: C) -> Self {
        Self { config, context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    fn auth_header(&self) -> Option<String> {
        self.context
            .auth_token()
            .map(|token| format!("Bearer {}", token))
    }
}

impl<C: ClientContext> RemoteStore for HttpClient<C> {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = Request::get(&self.config.url(path))
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache");
        if let Some(auth_header) = self.auth_header() {
            request = request.header("Authorization", &auth_header);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn put_reorder(&self, path: &str, request: &ReorderRequest) -> Result<(), ApiError> {
        let mut builder = Request::put(&self.config.url(path));
        if let Some(auth_header) = self.auth_header() {
            builder = builder.header("Authorization", &auth_header);
        }

        let response = builder
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        interpret_reorder_response(status, &body)
    }
}
