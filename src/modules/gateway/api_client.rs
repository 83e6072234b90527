use std::sync::RwLock;

use reqwest::header;
use serde_json::Value;

use crate::shared::types::ApiResponse;

/// HTTP verb of an outgoing gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    Get,
    Post,
    Put,
    Delete,
}

/// An outgoing request as the gateway services describe it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub api_type: ApiType,
    pub url: String,
    pub data: Option<Value>,
    pub with_bearer: bool,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            api_type: ApiType::Get,
            url: url.into(),
            data: None,
            with_bearer: false,
        }
    }

    pub fn post(url: impl Into<String>, data: Value) -> Self {
        Self {
            api_type: ApiType::Post,
            url: url.into(),
            data: Some(data),
            with_bearer: false,
        }
    }

    pub fn put(url: impl Into<String>, data: Value) -> Self {
        Self {
            api_type: ApiType::Put,
            url: url.into(),
            data: Some(data),
            with_bearer: false,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            api_type: ApiType::Delete,
            url: url.into(),
            data: None,
            with_bearer: false,
        }
    }

    pub fn with_bearer(mut self) -> Self {
        self.with_bearer = true;
        self
    }
}

/// Gateway client used by a front-end process to call the API. Every call
/// comes back in the same envelope shape the server produces; transport
/// failures are folded into an error envelope instead of surfacing as a
/// distinct error type.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Store the bearer token attached to subsequent authorized requests.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub async fn send(&self, request: ApiRequest) -> ApiResponse<Value> {
        let url = format!("{}{}", self.base_url, request.url);
        let mut builder = match request.api_type {
            ApiType::Get => self.http.get(&url),
            ApiType::Post => self.http.post(&url),
            ApiType::Put => self.http.put(&url),
            ApiType::Delete => self.http.delete(&url),
        };

        if let Some(data) = &request.data {
            builder = builder.json(data);
        }
        if request.with_bearer {
            let token = self.token.read().ok().and_then(|t| t.clone());
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Self::transport_error(format!("Request failed: {}", e)),
        };

        let status = response.status();
        match response.json::<ApiResponse<Value>>().await {
            Ok(envelope) => envelope,
            Err(_) if status.is_success() => {
                // Bodyless success, e.g. a bare 204 from PATCH.
                ApiResponse::no_content()
            }
            Err(e) => Self::transport_error(format!("Failed to decode response: {}", e)),
        }
    }

    fn transport_error(message: String) -> ApiResponse<Value> {
        ApiResponse::error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            vec![message],
        )
    }
}
