use crate::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by both lead sync handlers: `message` on success,
/// `error` (plus optional `details`) on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status_code: u16,
    pub body: RelayBody,
}

impl RelayResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: RelayBody {
                message: Some(message.into()),
                ..RelayBody::default()
            },
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.body.id = id;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.body.data = Some(data);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl From<AppError> for RelayResponse {
    fn from(err: AppError) -> Self {
        Self {
            status_code: err.status_code(),
            body: RelayBody {
                error: Some(err.headline()),
                details: err.details(),
                ..RelayBody::default()
            },
        }
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::RelayResponse;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl IntoResponse for RelayResponse {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(self.body)).into_response()
        }
    }
}
