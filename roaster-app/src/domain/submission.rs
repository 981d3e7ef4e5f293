use super::{CompanyDetails, LeadPayload};
use serde::{Deserialize, Serialize};

/// Raw form fields as posted by the stack form, before any validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub other_tools: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default, alias = "companyEmail")]
    pub email: String,
}

impl FormInput {
    /// Decodes an `application/x-www-form-urlencoded` body. `tools` may repeat,
    /// one entry per checked box; unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut input = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "tools" => input.tools.push(value.into_owned()),
                "otherTools" => input.other_tools = value.into_owned(),
                "companyName" => input.company_name = value.into_owned(),
                "companySize" => input.company_size = value.into_owned(),
                "companyEmail" | "email" => input.email = value.into_owned(),
                _ => {}
            }
        }
        input
    }

    /// Checked tools in selection order followed by the comma separated
    /// free-text entries. Blank entries are dropped, duplicates are kept.
    /// An entry of nothing but control characters counts as blank.
    pub fn tool_list(&self) -> Vec<String> {
        let selected = self.tools.iter().map(|tool| trim_blank(tool));
        let others = self.other_tools.split(',').map(trim_blank);

        selected
            .chain(others)
            .filter(|tool| !tool.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn company_details(&self) -> CompanyDetails {
        CompanyDetails::new(&self.company_name, &self.company_size, &self.email)
    }
}

fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c.is_control())
}

/// One accepted form submission. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub company: CompanyDetails,
    pub tools: Vec<String>,
}

impl Submission {
    pub fn new(company: CompanyDetails, tools: Vec<String>) -> Self {
        Self { company, tools }
    }

    pub fn tool_summary(&self) -> String {
        self.tools.join(", ")
    }

    pub fn lead_payload(&self, roast_text: &str) -> LeadPayload {
        let non_empty = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());

        LeadPayload {
            email: non_empty(&self.company.email),
            company_name: non_empty(&self.company.name),
            company_size: self.company.size.map(|s| s.as_str().to_string()),
            tech_stack: non_empty(&self.tool_summary()),
            roast: non_empty(roast_text),
        }
    }
}
