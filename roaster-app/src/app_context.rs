use crate::application::{CrmSync, DocumentSync, FormSession, GenerateRoast};
use crate::config::Settings;
use crate::infrastructure::docs_webhook::DocsWebhookClient;
use crate::infrastructure::http::build_http_client;
use crate::infrastructure::hubspot::HubSpotClient;
use crate::infrastructure::openai::OpenAiClient;
use std::sync::Arc;

/// Immutable, shared across requests. Everything mutable lives in a
/// per-request `FormSession`.
#[derive(Clone)]
pub struct AppContext {
    pub generate_roast: Arc<GenerateRoast>,
    pub crm_sync: Arc<CrmSync>,
    pub document_sync: Arc<DocumentSync>,
    pub settings: Arc<Settings>,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        let http_client = build_http_client(settings.http_timeout);

        Self {
            generate_roast: Arc::new(GenerateRoast::new(OpenAiClient::new(
                http_client.clone(),
                settings.openai.clone(),
            ))),
            crm_sync: Arc::new(CrmSync::new(HubSpotClient::new(
                http_client.clone(),
                settings.hubspot.clone(),
            ))),
            document_sync: Arc::new(DocumentSync::new(DocsWebhookClient::new(
                http_client,
                settings.docs_webhook.clone(),
            ))),
            settings: Arc::new(settings),
        }
    }

    pub fn from_env() -> Self {
        let settings = Settings::from_env();

        if settings.openai.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; roast requests will fail");
        }
        if settings.hubspot.token.is_none() {
            tracing::warn!("HUBSPOT_PRIVATE_APP_TOKEN is not set; CRM sync is disabled");
        }
        if settings.docs_webhook.url.is_none() {
            tracing::warn!("GOOGLE_DOCS_WEBHOOK_URL is not set; document sync is disabled");
        }

        Self::new(settings)
    }

    pub fn form_session(&self) -> FormSession {
        FormSession::new(self)
    }
}
