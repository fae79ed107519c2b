//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Ошибка загрузки данных с бэкенда.
///
/// Сеть, HTTP-статус и разбор ответа сведены в один тип: вызывающий код
/// одинаково логирует их и ничего не перерисовывает.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/get_boxes/3/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET-запрос с разбором JSON-ответа
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchFailure> {
    let body = get_text(path).await?;
    decode_json(&body)
}

/// GET-запрос; тело успешного ответа как текст
pub async fn get_text(path: &str) -> Result<String, FetchFailure> {
    let url = api_url(path);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))
}

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchFailure> {
    serde_json::from_str(body).map_err(|e| FetchFailure::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_error_kind() {
        let err = decode_json::<Vec<i32>>("{not json").unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)));
        assert_eq!(decode_json::<Vec<i32>>("[1,2]"), Ok(vec![1, 2]));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(FetchFailure::Status(502).to_string(), "HTTP error: 502");
        assert_eq!(
            FetchFailure::Network("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
