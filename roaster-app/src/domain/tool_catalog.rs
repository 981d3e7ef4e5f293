use serde::Serialize;
use serde_json::Value;

const DEFAULT_SECTIONS: &[(&str, &str, &[&str])] = &[
    (
        "popular",
        "Popular tools",
        &[
            "Slack",
            "Microsoft Teams",
            "Google Docs",
            "Salesforce",
            "Google Drive",
            "Dropbox",
            "Zoom",
            "Google Meet",
            "QuickBooks",
            "Xero",
            "Zendesk",
            "AWS",
            "Azure",
            "GitHub",
            "Linear",
            "Intercom",
            "Figma",
            "Notion",
        ],
    ),
    (
        "collaboration",
        "Marketing tools",
        &["Webflow", "Squarespace", "Ahrefs", "Mailchimp"],
    ),
    (
        "security",
        "Security tools",
        &["Okta", "Auth0", "1Password", "Snyk", "Vanta"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSection {
    pub id: String,
    pub title: String,
    pub tools: Vec<String>,
}

/// Checkbox sections offered on the stack form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCatalog {
    sections: Vec<ToolSection>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        let sections = DEFAULT_SECTIONS
            .iter()
            .map(|(id, title, tools)| ToolSection {
                id: id.to_string(),
                title: title.to_string(),
                tools: tools.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { sections }
    }
}

impl ToolCatalog {
    /// Default sections plus operator supplied tools, shaped as
    /// `{ "security": ["Custom Tool"] }`. Anything that is not a list of
    /// non-blank strings under a known section id is skipped.
    pub fn with_custom_tools(custom: &Value) -> Self {
        let mut catalog = Self::default();
        let Some(custom) = custom.as_object() else {
            return catalog;
        };

        for section in &mut catalog.sections {
            let Some(extra) = custom.get(&section.id).and_then(Value::as_array) else {
                continue;
            };
            section.tools.extend(
                extra
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|tool| !tool.is_empty())
                    .map(str::to_string),
            );
        }
        catalog
    }

    pub fn sections(&self) -> &[ToolSection] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_sections_in_order() {
        let catalog = ToolCatalog::default();
        let ids: Vec<_> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["popular", "collaboration", "security"]);
        assert_eq!(catalog.sections()[0].tools.len(), 18);
        assert_eq!(catalog.sections()[1].title, "Marketing tools");
    }

    #[test]
    fn test_custom_tools_are_appended_after_defaults() {
        let catalog = ToolCatalog::with_custom_tools(&json!({
            "security": ["  Custom Vault ", "", 42, "Bitwarden"],
            "unknown": ["Ignored"],
            "popular": "not a list"
        }));

        let security = &catalog.sections()[2];
        assert_eq!(
            &security.tools[security.tools.len() - 2..],
            &["Custom Vault".to_string(), "Bitwarden".to_string()]
        );
        assert_eq!(catalog.sections()[0], ToolCatalog::default().sections()[0]);
    }

    #[test]
    fn test_non_object_custom_tools_fall_back_to_defaults() {
        assert_eq!(ToolCatalog::with_custom_tools(&json!(["Slack"])), ToolCatalog::default());
        assert_eq!(ToolCatalog::with_custom_tools(&Value::Null), ToolCatalog::default());
    }
}
