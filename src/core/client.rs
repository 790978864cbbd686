//! Page info client
//!
//! This module provides an async HTTP client for the page info function.
//! Each call issues exactly one GET request carrying the project and the
//! percent-encoded page title as headers, and returns the decoded JSON body
//! together with the request parameters.

use crate::core::config::Config;
use crate::core::constants::header;
use crate::models::page_info::PageInfoRecord;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Characters left unescaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Error types that can occur while fetching page info
#[derive(Debug, thiserror::Error)]
pub enum PageInfoError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Percent-encode a page title for the `title` header
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(title, URI_COMPONENT).to_string()
}

/// Async client for the page info function
#[derive(Debug, Clone)]
pub struct PageInfoClient {
    client: Client,
    endpoint: String,
}

impl PageInfoClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the page info function
    /// * `timeout` - Optional request timeout in seconds
    pub fn new(endpoint: String, timeout: Option<u64>) -> Result<Self, PageInfoError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| PageInfoError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, PageInfoError> {
        Self::new(config.endpoint_url(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch metadata for a page within a project
    ///
    /// The project is sent unvalidated. The response status is not inspected:
    /// any response whose body is JSON resolves successfully.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the request cannot be sent or the body cannot be
    /// read, and `Decode` if the body is not JSON.
    pub async fn fetch_page_info(
        &self,
        project: &str,
        title: &str,
    ) -> Result<PageInfoRecord, PageInfoError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let encoded_title = encode_title(title);

        debug!(
            "[{}] GET {} project={} title={}",
            request_id, self.endpoint, project, encoded_title
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::PROJECT, project)
            .header(header::TITLE, &encoded_title)
            .send()
            .await
            .map_err(|e| {
                error!("[{}] Page info request failed: {}", request_id, e);
                PageInfoError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!("[{}] Response status {}", request_id, status);

        let body = response.bytes().await.map_err(|e| {
            error!("[{}] Failed to read response body: {}", request_id, e);
            PageInfoError::Transport(e.to_string())
        })?;

        let info: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            error!(
                "[{}] Response body is not JSON (status {}): {}",
                request_id, status, e
            );
            PageInfoError::Decode(e.to_string())
        })?;

        Ok(PageInfoRecord {
            project: project.to_string(),
            title: title.to_string(),
            info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PAGE_INFO_PATH;
    use axum::{Router, http::HeaderMap, http::StatusCode, routing::get};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen {
        hits: Arc<AtomicUsize>,
        headers: Arc<Mutex<Vec<(String, String)>>>,
    }

    async fn spawn_endpoint(status: StatusCode, body: &'static str) -> (String, Seen) {
        let seen = Seen::default();
        let state = seen.clone();

        let app = Router::new().route(
            PAGE_INFO_PATH,
            get(move |headers: HeaderMap| {
                let state = state.clone();
                async move {
                    state.hits.fetch_add(1, Ordering::SeqCst);
                    let value = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string()
                    };
                    state
                        .headers
                        .lock()
                        .unwrap()
                        .push((value(header::PROJECT), value(header::TITLE)));
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}{}", addr, PAGE_INFO_PATH), seen)
    }

    #[test]
    fn test_encode_title_space() {
        assert_eq!(encode_title("Home Page"), "Home%20Page");
    }

    #[test]
    fn test_encode_title_reserved() {
        assert_eq!(encode_title("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
        assert_eq!(encode_title("50%+"), "50%25%2B");
    }

    #[test]
    fn test_encode_title_unreserved_kept() {
        assert_eq!(encode_title("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
    }

    #[test]
    fn test_encode_title_non_ascii() {
        assert_eq!(encode_title("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[tokio::test]
    async fn test_sends_project_and_encoded_title() {
        let (url, seen) = spawn_endpoint(StatusCode::OK, "{}").await;
        let client = PageInfoClient::new(url, None).unwrap();

        client.fetch_page_info("kondoumh", "Home Page").await.unwrap();

        let headers = seen.headers.lock().unwrap().clone();
        assert_eq!(
            headers,
            vec![("kondoumh".to_string(), "Home%20Page".to_string())]
        );
    }

    #[tokio::test]
    async fn test_returns_body_unmodified() {
        let (url, _seen) = spawn_endpoint(
            StatusCode::OK,
            r#"{"exists": true, "path": "/wiki/Home_Page"}"#,
        )
        .await;
        let client = PageInfoClient::new(url, None).unwrap();

        let record = client.fetch_page_info("kondoumh", "Home Page").await.unwrap();

        assert_eq!(record.info, json!({"exists": true, "path": "/wiki/Home_Page"}));
        assert_eq!(record.project, "kondoumh");
        assert_eq!(record.title, "Home Page");
    }

    #[tokio::test]
    async fn test_non_json_body_fails() {
        let (url, _seen) = spawn_endpoint(StatusCode::OK, "<html>not json</html>").await;
        let client = PageInfoClient::new(url, None).unwrap();

        let result = client.fetch_page_info("icons", "Logo").await;

        assert!(matches!(result, Err(PageInfoError::Decode(_))));
    }

    #[tokio::test]
    async fn test_status_not_inspected() {
        let (url, seen) =
            spawn_endpoint(StatusCode::NOT_FOUND, r#"{"exists": false}"#).await;
        let client = PageInfoClient::new(url, None).unwrap();

        let record = client.fetch_page_info("help-jp", "Missing").await.unwrap();

        assert_eq!(record.info, json!({"exists": false}));
        assert_eq!(seen.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_project_passed_through() {
        let (url, seen) = spawn_endpoint(StatusCode::OK, "null").await;
        let client = PageInfoClient::new(url, None).unwrap();

        let record = client.fetch_page_info("not-a-project", "x").await.unwrap();

        assert_eq!(record.info, serde_json::Value::Null);
        assert_eq!(seen.headers.lock().unwrap()[0].0, "not-a-project");
    }

    #[tokio::test]
    async fn test_server_error_with_bad_body_is_not_retried() {
        let (url, seen) =
            spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error").await;
        let client = PageInfoClient::new(url, None).unwrap();

        let result = client.fetch_page_info("kondoumh", "Home Page").await;

        assert!(matches!(result, Err(PageInfoError::Decode(_))));
        assert_eq!(seen.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_fails() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            PageInfoClient::new(format!("http://{}{}", addr, PAGE_INFO_PATH), Some(5)).unwrap();
        let result = client.fetch_page_info("kondoumh", "Home Page").await;

        assert!(matches!(result, Err(PageInfoError::Transport(_))));
    }

    #[tokio::test]
    async fn test_concurrent_calls_keep_their_own_title() {
        let (url, seen) = spawn_endpoint(StatusCode::OK, "{}").await;
        let client = PageInfoClient::new(url, None).unwrap();

        let (a, b) = tokio::join!(
            client.fetch_page_info("kondoumh", "First"),
            client.fetch_page_info("icons", "Second"),
        );

        assert_eq!(a.unwrap().title, "First");
        assert_eq!(b.unwrap().title, "Second");
        assert_eq!(seen.hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            base_url: "https://wiki.example.org".to_string(),
            path: PAGE_INFO_PATH.to_string(),
            request_timeout: None,
            log_level: "info".to_string(),
        };
        let client = PageInfoClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://wiki.example.org/.netlify/functions/pageInfo"
        );
    }
}
