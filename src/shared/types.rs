use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope returned by every API operation.
///
/// Invariant: `is_success == false` implies `error_messages` is non-empty,
/// and `result` is only meaningful when `is_success == true`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub is_success: bool,
    #[serde(default)]
    pub error_messages: Vec<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope carrying a payload.
    pub fn ok(result: T) -> Self {
        Self {
            status_code: 200,
            is_success: true,
            error_messages: Vec::new(),
            result: Some(result),
        }
    }

    /// 201 envelope carrying the created resource.
    pub fn created(result: T) -> Self {
        Self {
            status_code: 201,
            is_success: true,
            error_messages: Vec::new(),
            result: Some(result),
        }
    }

    /// Success envelope with no-content semantics (update/delete).
    pub fn no_content() -> Self {
        Self {
            status_code: 204,
            is_success: true,
            error_messages: Vec::new(),
            result: None,
        }
    }

    pub fn error(status_code: u16, messages: Vec<String>) -> ApiResponse<T> {
        let error_messages = if messages.is_empty() {
            // The envelope contract requires at least one message on failure.
            vec!["An unspecified error occurred".to_string()]
        } else {
            messages
        };
        ApiResponse {
            status_code,
            is_success: false,
            error_messages,
            result: None,
        }
    }
}

/// Pagination metadata attached to list responses as the `X-Pagination`
/// response header, out-of-band from the envelope body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: i32,
    pub page_size: i32,
}

impl Pagination {
    pub fn header_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_always_carries_a_message() {
        let envelope = ApiResponse::<()>::error(500, Vec::new());
        assert!(!envelope.is_success);
        assert!(!envelope.error_messages.is_empty());
    }

    #[test]
    fn success_envelope_has_no_errors() {
        let envelope = ApiResponse::ok("payload");
        assert!(envelope.is_success);
        assert!(envelope.error_messages.is_empty());
        assert_eq!(envelope.result, Some("payload"));
    }

    #[test]
    fn pagination_serializes_to_camel_case_json() {
        let header = Pagination {
            page_number: 2,
            page_size: 10,
        }
        .header_value();
        assert_eq!(header, r#"{"pageNumber":2,"pageSize":10}"#);
    }
}
