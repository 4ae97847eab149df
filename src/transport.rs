//! Single-shot HTTP transport shared by the file and folder clients.

use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, Result};

/// Request payloads the API accepts.
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

impl Body {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }
}

/// Performs exactly one HTTP call per operation. No retries.
#[derive(Clone)]
pub struct Transport {
    http: Client,
    timeout: Option<Duration>,
}

impl Transport {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            timeout: None,
        }
    }

    /// Apply `timeout` to every request. Unset by default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send one request and fail on any non-success status.
    pub async fn send(&self, method: Method, url: &str, body: Body) -> Result<Response> {
        tracing::debug!(%method, url, "Sending request");

        let mut request = self.http.request(method, url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), url, "Request rejected");
            return Err(StorageError::Api {
                status: status.as_u16(),
                message: error_body.trim().to_string(),
            });
        }

        Ok(response)
    }

    /// Send a request and parse the JSON response body.
    pub async fn fetch<T: DeserializeOwned>(&self, method: Method, url: &str, body: Body) -> Result<T> {
        let response = self.send(method, url, body).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request whose response body is not needed.
    pub async fn execute(&self, method: Method, url: &str, body: Body) -> Result<()> {
        self.send(method, url, body).await?;
        Ok(())
    }
}
