use super::types::{ContactUpsert, ContactUpsertRequest, NoteRequest};
use crate::config::HubSpotSettings;
use crate::domain::LeadPayload;
use crate::infrastructure::http::{json_body, transport_error};
use roaster_errors::AppError;
use serde_json::Value;

const CONTACT_UPSERT_PATH: &str = "/contacts/v1/contact/createOrUpdate/email";
const ENGAGEMENTS_PATH: &str = "/engagements/v1/engagements";

pub struct HubSpotClient {
    http_client: reqwest::Client,
    settings: HubSpotSettings,
}

impl HubSpotClient {
    pub fn new(http_client: reqwest::Client, settings: HubSpotSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    pub fn require_company(&self) -> bool {
        self.settings.require_company
    }

    pub fn ensure_configured(&self) -> Result<(), AppError> {
        self.token().map(|_| ())
    }

    fn token(&self) -> Result<&str, AppError> {
        self.settings
            .token
            .as_deref()
            .ok_or(AppError::MissingConfig("HubSpot token"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_base.trim_end_matches('/'), path)
    }

    /// Creates the contact, or updates the one that already has this email.
    pub async fn upsert_contact(
        &self,
        email: &str,
        lead: &LeadPayload,
    ) -> Result<ContactUpsert, AppError> {
        let token = self.token()?;
        let url = self.url(&format!(
            "{}/{}",
            CONTACT_UPSERT_PATH,
            urlencoding::encode(email)
        ));

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token)
            .json(&ContactUpsertRequest::from_lead(email, lead))
            .send()
            .await
            .map_err(|e| transport_error("HubSpot", e))?;

        let status = response.status();
        let data = json_body(response).await;

        if !status.is_success() {
            tracing::error!("HubSpot contact upsert failed: {} - {}", status, data);
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Failed to create or update contact")
                .to_string();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
                details: Some(data),
            });
        }

        Ok(ContactUpsert::from_response(data))
    }

    pub async fn attach_note(
        &self,
        contact_id: Value,
        tech_stack: &str,
        roast: Option<&str>,
    ) -> Result<(), AppError> {
        let token = self.token()?;

        let response = self
            .http_client
            .post(self.url(ENGAGEMENTS_PATH))
            .bearer_auth(token)
            .json(&NoteRequest::for_contact(contact_id, tech_stack, roast))
            .send()
            .await
            .map_err(|e| transport_error("HubSpot", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let details = json_body(response).await;
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: "Failed to attach tech stack note".to_string(),
                details: Some(details),
            });
        }

        Ok(())
    }
}
