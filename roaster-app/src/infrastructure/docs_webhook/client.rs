use crate::config::DocsWebhookSettings;
use crate::domain::LeadPayload;
use crate::infrastructure::http::{json_body, transport_error};
use roaster_errors::AppError;
use serde_json::Value;

/// Posts captured leads to a generic JSON webhook (a Google Docs appender in
/// production).
pub struct DocsWebhookClient {
    http_client: reqwest::Client,
    settings: DocsWebhookSettings,
}

impl DocsWebhookClient {
    pub fn new(http_client: reqwest::Client, settings: DocsWebhookSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    pub fn ensure_configured(&self) -> Result<(), AppError> {
        self.webhook_url().map(|_| ())
    }

    fn webhook_url(&self) -> Result<&str, AppError> {
        self.settings
            .url
            .as_deref()
            .ok_or(AppError::MissingConfig("Google Docs webhook"))
    }

    pub async fn append(&self, lead: &LeadPayload) -> Result<Value, AppError> {
        let url = self.webhook_url()?;

        let response = self
            .http_client
            .post(url)
            .json(lead)
            .send()
            .await
            .map_err(|e| transport_error("Google Docs webhook", e))?;

        let status = response.status();
        let data = json_body(response).await;

        if !status.is_success() {
            tracing::error!("Google Docs webhook failed: {} - {}", status, data);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: "Failed to sync with Google Docs".to_string(),
                details: Some(data),
            });
        }

        Ok(data)
    }
}
