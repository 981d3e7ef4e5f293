use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "501-1000")]
    UpTo1000,
    #[serde(rename = "1001+")]
    Over1000,
}

impl CompanySize {
    pub const ALL: [CompanySize; 6] = [
        Self::UpTo10,
        Self::UpTo50,
        Self::UpTo200,
        Self::UpTo500,
        Self::UpTo1000,
        Self::Over1000,
    ];

    /// Bucket value as submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo10 => "1-10",
            Self::UpTo50 => "11-50",
            Self::UpTo200 => "51-200",
            Self::UpTo500 => "201-500",
            Self::UpTo1000 => "501-1000",
            Self::Over1000 => "1001+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo1000 => "501-1,000",
            Self::Over1000 => "1,001+",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCompanySize(pub String);

impl fmt::Display for UnknownCompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown company size bucket: {}", self.0)
    }
}

impl std::error::Error for UnknownCompanySize {}

impl FromStr for CompanySize {
    type Err = UnknownCompanySize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s || size.label() == s)
            .ok_or_else(|| UnknownCompanySize(s.to_string()))
    }
}

/// Company metadata collected next to the tool list. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub name: String,
    pub size: Option<CompanySize>,
    pub email: String,
}

impl CompanyDetails {
    pub fn new(name: &str, size: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            size: size.parse().ok(),
            email: email.trim().to_string(),
        }
    }

    /// `"Acme • 11-50"`, skipping whatever is missing.
    pub fn meta_line(&self) -> String {
        [
            Some(self.name.as_str()).filter(|n| !n.is_empty()),
            self.size.map(|s| s.label()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parses_values_and_labels() {
        assert_eq!("501-1000".parse::<CompanySize>(), Ok(CompanySize::UpTo1000));
        assert_eq!("1,001+".parse::<CompanySize>(), Ok(CompanySize::Over1000));
        assert_eq!(" 11-50 ".parse::<CompanySize>(), Ok(CompanySize::UpTo50));
        assert!("".parse::<CompanySize>().is_err());
        assert!("huge".parse::<CompanySize>().is_err());
    }

    #[test]
    fn test_size_serializes_as_bucket_string() {
        let json = serde_json::to_string(&CompanySize::Over1000).unwrap();
        assert_eq!(json, "\"1001+\"");
    }

    #[test]
    fn test_unknown_size_is_treated_as_missing() {
        let details = CompanyDetails::new(" Acme ", "enormous", " jane@acme.io ");
        assert_eq!(details.name, "Acme");
        assert_eq!(details.size, None);
        assert_eq!(details.email, "jane@acme.io");
    }

    #[test]
    fn test_meta_line() {
        assert_eq!(CompanyDetails::new("Acme", "501-1000", "").meta_line(), "Acme • 501-1,000");
        assert_eq!(CompanyDetails::new("", "1-10", "").meta_line(), "1-10");
        assert_eq!(CompanyDetails::default().meta_line(), "");
    }
}
