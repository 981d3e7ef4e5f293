use crate::domain::{parse_roast_reply, RoastResult, Submission};
use crate::infrastructure::openai::OpenAiClient;
use roaster_errors::AppError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roast {
    pub raw_text: String,
    pub sections: RoastResult,
}

pub struct GenerateRoast {
    client: OpenAiClient,
}

impl GenerateRoast {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self, submission: &Submission) -> Result<Roast, AppError> {
        let summary = submission.tool_summary();
        tracing::info!(tools = submission.tools.len(), "Requesting roast");

        let raw_text = self
            .client
            .generate_roast(&summary, &submission.company)
            .await?;

        let sections = parse_roast_reply(&raw_text);
        if sections.roast.is_empty() {
            tracing::warn!("Roast reply had no Roast: section");
        }

        Ok(Roast { raw_text, sections })
    }
}
