use crate::domain::{LeadField, LeadPayload};
use crate::infrastructure::docs_webhook::DocsWebhookClient;
use crate::infrastructure::hubspot::{ContactUpsert, HubSpotClient};
use roaster_errors::{AppError, RelayResponse};

const RELAXED_FIELDS: &[LeadField] = &[LeadField::Email];
const STRICT_FIELDS: &[LeadField] = &[
    LeadField::Email,
    LeadField::CompanyName,
    LeadField::CompanySize,
];

fn ensure_post(method: &str) -> Result<(), AppError> {
    if method.eq_ignore_ascii_case("POST") {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

fn into_relay(service: &str, result: Result<RelayResponse, AppError>) -> RelayResponse {
    result.unwrap_or_else(|err| {
        match &err {
            AppError::Upstream { .. } | AppError::Transport(_) | AppError::Internal(_) => {
                tracing::error!("{} sync failed: {}", service, err)
            }
            _ => tracing::info!("{} sync rejected: {}", service, err),
        }
        RelayResponse::from(err)
    })
}

/// Upserts the lead as a CRM contact and, when a tech stack came along,
/// records it as a note on that contact.
pub struct CrmSync {
    client: HubSpotClient,
}

impl CrmSync {
    pub fn new(client: HubSpotClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, method: &str, body: &[u8]) -> RelayResponse {
        into_relay("CRM", self.try_handle(method, body).await)
    }

    async fn try_handle(&self, method: &str, body: &[u8]) -> Result<RelayResponse, AppError> {
        ensure_post(method)?;
        self.client.ensure_configured()?;
        let lead = LeadPayload::from_json(body)?;
        self.sync(&lead).await
    }

    fn required_fields(&self) -> &'static [LeadField] {
        if self.client.require_company() {
            STRICT_FIELDS
        } else {
            RELAXED_FIELDS
        }
    }

    pub async fn sync(&self, lead: &LeadPayload) -> Result<RelayResponse, AppError> {
        self.client.ensure_configured()?;
        lead.require(self.required_fields())?;
        let email = lead
            .email()
            .ok_or_else(|| AppError::MissingFields(vec!["email".to_string()]))?;

        let contact = self.client.upsert_contact(email, lead).await?;
        tracing::info!(contact_id = ?contact.id_string(), "CRM contact upserted");

        if let Some(tech_stack) = lead.tech_stack() {
            self.attach_note(&contact, tech_stack, lead.roast.as_deref())
                .await;
        }

        Ok(RelayResponse::ok("Contact created or updated")
            .with_id(contact.id_string())
            .with_data(contact.data))
    }

    // Best effort: the contact already exists at this point, so a failed note
    // is logged and never changes the response.
    async fn attach_note(&self, contact: &ContactUpsert, tech_stack: &str, roast: Option<&str>) {
        let Some(contact_id) = contact.contact_id.clone() else {
            tracing::warn!("CRM returned no contact id, skipping tech stack note");
            return;
        };

        if let Err(e) = self.client.attach_note(contact_id, tech_stack, roast).await {
            tracing::warn!("Failed to attach tech stack note: {}", e);
        }
    }
}

/// Appends the lead to the document webhook.
pub struct DocumentSync {
    client: DocsWebhookClient,
}

impl DocumentSync {
    pub fn new(client: DocsWebhookClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, method: &str, body: &[u8]) -> RelayResponse {
        into_relay("Document", self.try_handle(method, body).await)
    }

    async fn try_handle(&self, method: &str, body: &[u8]) -> Result<RelayResponse, AppError> {
        ensure_post(method)?;
        self.client.ensure_configured()?;
        let lead = LeadPayload::from_json(body)?;
        self.forward(&lead).await
    }

    /// In-process entry used by the form after a roast is shown.
    pub async fn forward(&self, lead: &LeadPayload) -> Result<RelayResponse, AppError> {
        self.client.ensure_configured()?;
        lead.require(RELAXED_FIELDS)?;

        let data = self.client.append(lead).await?;
        tracing::info!("Lead synced to document webhook");

        Ok(RelayResponse::ok("Submission synced to Google Docs").with_data(data))
    }
}
