use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum MealMindApiError {
    Server(StatusCode, ErrorDetail),
    Internal(ApiError),
    InvalidUrl(String),
}

impl From<ApiError> for MealMindApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, body) | ApiError::ServerError(status, body) => {
                MealMindApiError::Server(status, ErrorDetail::from_body(&body))
            }
            e => MealMindApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for MealMindApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealMindApiError::Internal(e) => write!(f, "Internal error: {}", e),
            MealMindApiError::Server(status, detail) => write!(f, "({}) {}", status, detail),
            MealMindApiError::InvalidUrl(e) => write!(f, "Invalid base URL: {}", e),
        }
    }
}

impl std::error::Error for MealMindApiError {}

/// Error body returned by the backend.
///
/// FastAPI reports `{"detail": "..."}` for handled errors and
/// `{"detail": [{...}]}` for validation failures; anything else is kept raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            detail: serde_json::Value::String(body.trim().to_string()),
        })
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_json_string() {
        let detail = ErrorDetail::from_body(r#"{"detail":"Not Found"}"#);
        assert_eq!(detail.to_string(), "Not Found");
    }

    #[test]
    fn test_error_detail_from_validation_list() {
        let body = r#"{"detail":[{"loc":["query","ingredients"],"msg":"field required"}]}"#;
        let detail = ErrorDetail::from_body(body);
        assert!(detail.detail.is_array());
        assert!(detail.to_string().contains("field required"));
    }

    #[test]
    fn test_error_detail_from_plain_text() {
        let detail = ErrorDetail::from_body("Internal Server Error\n");
        assert_eq!(detail.to_string(), "Internal Server Error");
    }
}
