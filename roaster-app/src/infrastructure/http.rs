use roaster_errors::AppError;
use serde_json::Value;
use std::time::Duration;

pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

/// Upstream body as JSON; `null` when it is empty or not JSON.
pub async fn json_body(response: reqwest::Response) -> Value {
    match response.bytes().await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        Err(e) => {
            tracing::warn!("Failed to read upstream body: {}", e);
            Value::Null
        }
    }
}

pub fn transport_error(service: &str, err: reqwest::Error) -> AppError {
    tracing::error!("{} request failed: {}", service, err);
    AppError::Transport(err.to_string())
}
