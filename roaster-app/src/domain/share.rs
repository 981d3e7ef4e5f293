use super::{CompanyDetails, RoastResult};

const CAPTION_HASHTAGS: &str = "#RoastMyStack #TechStack";

/// The last rendered roast of one form session, kept for sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub result: RoastResult,
    pub company: CompanyDetails,
}

impl ShareCard {
    pub fn new(result: RoastResult, company: CompanyDetails) -> Self {
        Self { result, company }
    }

    pub fn caption(&self, share_url: &str) -> String {
        let company = if self.company.name.is_empty() {
            "Our stack"
        } else {
            self.company.name.as_str()
        };
        let score = if self.result.score_raw.is_empty() {
            "—/100"
        } else {
            self.result.score_raw.as_str()
        };

        let headline = format!("{company} just scored {score} in Roast My Tech Stack.");
        let call_to_action = format!("Think you can handle the truth? {share_url}");

        [
            Some(headline.as_str()),
            self.result.first_sentence(),
            Some(call_to_action.as_str()),
            Some(CAPTION_HASHTAGS),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}
