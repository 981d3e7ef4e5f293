use super::{DocumentSync, GenerateRoast, Roast};
use crate::domain::{CompanyDetails, FormInput, ShareCard, Submission};
use crate::infrastructure::security::InputSanitizer;
use crate::AppContext;
use roaster_errors::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub const EMPTY_STACK_STATUS: &str = "Tell me about at least one tool before I start roasting.";
pub const MISSING_EMAIL_STATUS: &str = "Add your work email so we know where to send the roast.";
pub const ANALYZING_STATUS: &str = "Analyzing your tech stack... sharpening the knives 🔪…";
pub const FAILURE_STATUS: &str = "The Roast Bot is taking a break. Try again in a minute.";

#[derive(Debug)]
pub enum FormOutcome {
    /// Refused locally, nothing was sent anywhere.
    Rejected(AppError),
    Roasted(Roast),
    Failed(AppError),
}

/// State of one stack form: status line, in-flight flag and the roast kept
/// for sharing. `submit` borrows the session mutably, so a session never has
/// two submissions in flight.
pub struct FormSession {
    id: Uuid,
    generate_roast: Arc<GenerateRoast>,
    document_sync: Arc<DocumentSync>,
    share_url: String,
    status: String,
    busy: bool,
    latest: Option<ShareCard>,
}

impl FormSession {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            generate_roast: ctx.generate_roast.clone(),
            document_sync: ctx.document_sync.clone(),
            share_url: ctx.settings.share_url.clone(),
            status: String::new(),
            busy: false,
            latest: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// True only while a roast request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn share_card(&self) -> Option<&ShareCard> {
        self.latest.as_ref()
    }

    pub fn share_caption(&self) -> Option<String> {
        self.latest.as_ref().map(|card| card.caption(&self.share_url))
    }

    pub async fn submit(&mut self, input: &FormInput) -> FormOutcome {
        let tools = InputSanitizer::clean_tools(input.tool_list());
        let company = CompanyDetails::new(
            &InputSanitizer::clean_field(&input.company_name),
            &input.company_size,
            &InputSanitizer::clean_field(&input.email),
        );

        if tools.is_empty() {
            return self.reject(EMPTY_STACK_STATUS, AppError::EmptyStack);
        }
        if company.email.is_empty() {
            return self.reject(
                MISSING_EMAIL_STATUS,
                AppError::MissingFields(vec!["email".to_string()]),
            );
        }

        let submission = Submission::new(company, tools);
        self.busy = true;
        self.status = ANALYZING_STATUS.to_string();

        let outcome = self.roast(&submission).await;

        self.busy = false;
        outcome
    }

    fn reject(&mut self, status: &str, err: AppError) -> FormOutcome {
        tracing::info!(session = %self.id, "Form rejected locally: {}", err);
        self.status = status.to_string();
        self.latest = None;
        FormOutcome::Rejected(err)
    }

    async fn roast(&mut self, submission: &Submission) -> FormOutcome {
        let result = self.generate_roast.execute(submission).await;
        match result {
            Ok(roast) => {
                self.latest = Some(ShareCard::new(
                    roast.sections.clone(),
                    submission.company.clone(),
                ));
                self.status.clear();
                self.forward_lead(submission, &roast.raw_text).await;
                FormOutcome::Roasted(roast)
            }
            Err(err) => {
                tracing::error!(session = %self.id, "Roast failed: {}", err);
                self.latest = None;
                self.status = FAILURE_STATUS.to_string();
                FormOutcome::Failed(err)
            }
        }
    }

    // The roast is already on screen; a failed sync is only logged.
    async fn forward_lead(&self, submission: &Submission, roast_text: &str) {
        let lead = submission.lead_payload(roast_text);
        match self.document_sync.forward(&lead).await {
            Ok(_) => {}
            Err(AppError::MissingConfig(what)) => {
                tracing::debug!(session = %self.id, "Skipping lead sync: {} is not configured", what)
            }
            Err(e) => tracing::warn!(session = %self.id, "Lead sync failed: {}", e),
        }
    }
}
