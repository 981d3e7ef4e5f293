mod company;
mod lead;
mod roast;
mod share;
mod submission;
mod tool_catalog;

pub use company::{CompanyDetails, CompanySize, UnknownCompanySize};
pub use lead::{LeadField, LeadPayload};
pub use roast::{parse_roast_reply, RoastResult, ScoreDisplay};
pub use share::ShareCard;
pub use submission::{FormInput, Submission};
pub use tool_catalog::{ToolCatalog, ToolSection};
