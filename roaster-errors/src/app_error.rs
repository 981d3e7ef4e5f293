use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON payload")]
    InvalidJson,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Tell me about at least one tool before I start roasting.")]
    EmptyStack,

    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("The Roast Bot returned an empty response.")]
    EmptyReply,

    #[error("Unexpected error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingConfig(_) => 500,
            Self::MethodNotAllowed => 405,
            Self::InvalidJson | Self::MissingFields(_) | Self::EmptyStack => 400,
            Self::Upstream { status, .. } => *status,
            Self::EmptyReply => 502,
            Self::Transport(_) | Self::Internal(_) => 500,
        }
    }

    /// Short text shown to the visitor on the form's status line.
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingConfig(_) => "The Roast Bot has no API key yet. Ask the site owner to configure one.",
            Self::MethodNotAllowed => "That request method is not supported here.",
            Self::InvalidJson => "The request could not be read. Try again.",
            Self::MissingFields(_) => "Fill in your work email so we know where the roast goes.",
            Self::EmptyStack => "Tell me about at least one tool before I start roasting.",
            Self::Upstream { .. } => "The Roast Bot could not reach its brain. Try again in a minute.",
            Self::EmptyReply => "The Roast Bot returned an empty response.",
            Self::Transport(_) => "The Roast Bot lost its connection. Try again in a minute.",
            Self::Internal(_) => "Something broke on our side. Try again later.",
        }
    }

    /// Error text for the JSON envelope. Unexpected failures keep the reason
    /// out of the headline and carry it in `details` instead.
    pub fn headline(&self) -> String {
        match self {
            Self::Transport(_) => "Unexpected error".to_string(),
            Self::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            Self::MissingFields(fields) => Some(Value::from(fields.clone())),
            Self::Upstream { details, .. } => Some(details.clone().unwrap_or(Value::Null)),
            Self::Transport(reason) | Self::Internal(reason) => Some(Value::from(reason.as_str())),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::AppError;
    use crate::RelayResponse;
    use axum::response::{IntoResponse, Response};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            RelayResponse::from(self).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingConfig("HubSpot token").status_code(), 500);
        assert_eq!(AppError::MethodNotAllowed.status_code(), 405);
        assert_eq!(AppError::InvalidJson.status_code(), 400);
        assert_eq!(AppError::MissingFields(vec!["email".into()]).status_code(), 400);
        assert_eq!(AppError::EmptyReply.status_code(), 502);
        let upstream = AppError::Upstream {
            status: 409,
            message: "Contact already exists".into(),
            details: None,
        };
        assert_eq!(upstream.status_code(), 409);
    }

    #[test]
    fn test_missing_fields_lists_every_field() {
        let err = AppError::MissingFields(vec!["email".into(), "companyName".into()]);
        assert_eq!(err.to_string(), "Missing required fields: email, companyName");
        assert_eq!(err.details(), Some(json!(["email", "companyName"])));
    }

    #[test]
    fn test_missing_config_names_the_credential() {
        let err = AppError::MissingConfig("Google Docs webhook");
        assert_eq!(err.to_string(), "Google Docs webhook is not configured");
        assert_eq!(err.details(), None);
    }

    #[test]
    fn test_roast_failures_have_distinct_user_messages() {
        let messages = [
            AppError::MissingConfig("OpenAI API key").user_message().to_string(),
            AppError::Upstream {
                status: 500,
                message: "OpenAI API request failed.".into(),
                details: None,
            }
            .user_message()
            .to_string(),
            AppError::EmptyReply.user_message().to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_transport_keeps_reason_in_details() {
        let err = AppError::Transport("connection refused".into());
        assert_eq!(err.headline(), "Unexpected error");
        assert_eq!(err.details(), Some(json!("connection refused")));
    }
}
