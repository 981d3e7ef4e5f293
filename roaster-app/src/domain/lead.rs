use roaster_errors::AppError;
use serde::{Deserialize, Serialize};

/// Lead captured by the form, as received by the sync handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Email,
    CompanyName,
    CompanySize,
}

impl LeadField {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::CompanySize => "companySize",
        }
    }
}

impl LeadPayload {
    /// An empty body counts as `{}`. Anything but a JSON object is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) if value.is_object() => {
                serde_json::from_value(value).map_err(|_| AppError::InvalidJson)
            }
            _ => Err(AppError::InvalidJson),
        }
    }

    pub fn field(&self, field: LeadField) -> Option<&str> {
        let value = match field {
            LeadField::Email => &self.email,
            LeadField::CompanyName => &self.company_name,
            LeadField::CompanySize => &self.company_size,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.field(LeadField::Email)
    }

    pub fn tech_stack(&self) -> Option<&str> {
        self.tech_stack
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Fails with every missing field listed, in the order given.
    pub fn require(&self, fields: &[LeadField]) -> Result<(), AppError> {
        let missing: Vec<String> = fields
            .iter()
            .filter(|field| self.field(**field).is_none())
            .map(|field| field.wire_name().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingFields(missing))
        }
    }
}
