use crate::domain::ToolCatalog;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_HUBSPOT_API_BASE: &str = "https://api.hubapi.com";
const DEFAULT_SHARE_URL: &str = "https://prmt.com/roast";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct HubSpotSettings {
    pub token: Option<String>,
    pub api_base: String,
    /// Strict mode also requires `companyName` and `companySize`.
    pub require_company: bool,
}

#[derive(Debug, Clone)]
pub struct DocsWebhookSettings {
    pub url: Option<String>,
}

/// Runtime settings read from the environment. Credentials are optional
/// here; each relay reports its own missing credential per request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai: OpenAiSettings,
    pub hubspot: HubSpotSettings,
    pub docs_webhook: DocsWebhookSettings,
    pub catalog: ToolCatalog,
    pub share_url: String,
    pub http_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            openai: OpenAiSettings {
                api_key: var("OPENAI_API_KEY"),
                api_url: var("OPENAI_API_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
                model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                max_tokens: parse_var(var("OPENAI_MAX_TOKENS")).unwrap_or(DEFAULT_MAX_TOKENS),
                temperature: parse_var(var("OPENAI_TEMPERATURE")).unwrap_or(DEFAULT_TEMPERATURE),
            },
            hubspot: HubSpotSettings {
                token: var("HUBSPOT_PRIVATE_APP_TOKEN"),
                api_base: var("HUBSPOT_API_BASE")
                    .unwrap_or_else(|| DEFAULT_HUBSPOT_API_BASE.to_string()),
                require_company: var("CRM_REQUIRE_COMPANY")
                    .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                    .unwrap_or(false),
            },
            docs_webhook: DocsWebhookSettings {
                url: var("GOOGLE_DOCS_WEBHOOK_URL"),
            },
            catalog: var("ROASTER_CUSTOM_TOOLS")
                .map(|raw| match serde_json::from_str(&raw) {
                    Ok(custom) => ToolCatalog::with_custom_tools(&custom),
                    Err(e) => {
                        tracing::warn!("Ignoring ROASTER_CUSTOM_TOOLS: {}", e);
                        ToolCatalog::default()
                    }
                })
                .unwrap_or_default(),
            share_url: var("ROASTER_SHARE_URL").unwrap_or_else(|| DEFAULT_SHARE_URL.to_string()),
            http_timeout: Duration::from_secs(
                parse_var(var("HTTP_TIMEOUT_SECS")).unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(var("PORT")).unwrap_or(DEFAULT_PORT),
        }
    }
}

fn parse_var<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
