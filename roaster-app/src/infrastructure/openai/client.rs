use super::prompt::{build_user_message, SYSTEM_PROMPT};
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiSettings;
use crate::domain::CompanyDetails;
use crate::infrastructure::http::{json_body, transport_error};
use roaster_errors::AppError;

pub struct OpenAiClient {
    http_client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiClient {
    pub fn new(http_client: reqwest::Client, settings: OpenAiSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.settings
            .api_key
            .as_deref()
            .ok_or(AppError::MissingConfig("OpenAI API key"))
    }

    /// One chat completion for the given stack. The key is checked before any
    /// request goes out; nothing is retried.
    pub async fn generate_roast(
        &self,
        tool_summary: &str,
        company: &CompanyDetails,
    ) -> Result<String, AppError> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest::new(
            &self.settings.model,
            SYSTEM_PROMPT,
            build_user_message(tool_summary, company),
            self.settings.max_tokens,
            self.settings.temperature,
        );

        let response = self
            .http_client
            .post(&self.settings.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error("OpenAI", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let details = json_body(response).await;
            tracing::error!("OpenAI error: {} - {}", status, details);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: "OpenAI API request failed.".to_string(),
                details: Some(details),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Unreadable OpenAI completion: {}", e);
            AppError::EmptyReply
        })?;

        completion.first_text().ok_or(AppError::EmptyReply)
    }
}
