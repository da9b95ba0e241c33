//! Low-level HTTP client shared by the endpoint wrappers.
//!
//! `ApiClient` owns the base URL and the connection pool, attaches bearer
//! tokens, and maps failures into [`ApiError`]. Endpoint modules stay a
//! line or two per call.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend error envelope; the message field is best-effort.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Fail non-2xx responses, preferring the backend's error message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
        Err(ApiError::status(status.as_u16(), message))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(ApiError::from)
    }

    /// GET expecting a JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::GET, path, token)
            .query(query)
            .send()
            .await?;
        Self::read_json(Self::check(response).await?).await
    }

    /// POST a JSON body, expecting a JSON body back.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        Self::read_json(Self::check(response).await?).await
    }

    /// POST with no request body, discarding any response body.
    ///
    /// Like/unlike and view-count endpoints answer 2xx with an empty or
    /// irrelevant body; only the status matters.
    pub async fn post_unit(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::POST, path, token).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// DELETE, discarding any response body.
    pub async fn delete_unit(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::DELETE, path, token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_error_body_tolerates_absent_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
    }
}
