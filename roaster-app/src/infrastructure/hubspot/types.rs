use crate::domain::LeadPayload;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ContactUpsertRequest {
    pub properties: Vec<ContactProperty>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactProperty {
    pub property: &'static str,
    pub value: String,
}

impl ContactUpsertRequest {
    pub fn from_lead(email: &str, lead: &LeadPayload) -> Self {
        let optional = [
            ("company", lead.company_name.as_deref()),
            ("company_size", lead.company_size.as_deref()),
        ];

        let properties = std::iter::once(ContactProperty {
            property: "email",
            value: email.to_string(),
        })
        .chain(optional.into_iter().filter_map(|(property, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some(ContactProperty {
                property,
                value: value.to_string(),
            })
        }))
        .collect();

        Self { properties }
    }
}

#[derive(Debug, Serialize)]
pub struct NoteRequest {
    pub engagement: Engagement,
    pub associations: Associations,
    pub metadata: NoteMetadata,
}

#[derive(Debug, Serialize)]
pub struct Engagement {
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Associations {
    pub contact_ids: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct NoteMetadata {
    pub body: String,
}

impl NoteRequest {
    pub fn for_contact(contact_id: Value, tech_stack: &str, roast: Option<&str>) -> Self {
        let mut body = format!("Tech stack: {tech_stack}");
        if let Some(roast) = roast.map(str::trim).filter(|r| !r.is_empty()) {
            body.push_str(&format!("\n\nRoast: {roast}"));
        }

        Self {
            engagement: Engagement {
                active: true,
                kind: "NOTE",
            },
            associations: Associations {
                contact_ids: vec![contact_id],
            },
            metadata: NoteMetadata { body },
        }
    }
}

/// Result of the contact upsert: the raw upstream payload plus the contact
/// id when the upstream returned one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactUpsert {
    pub contact_id: Option<Value>,
    pub data: Value,
}

impl ContactUpsert {
    pub fn from_response(data: Value) -> Self {
        let contact_id = data
            .get("vid")
            .or_else(|| data.get("id"))
            .filter(|id| id.is_number() || id.is_string())
            .cloned();
        Self { contact_id, data }
    }

    pub fn id_string(&self) -> Option<String> {
        match self.contact_id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
