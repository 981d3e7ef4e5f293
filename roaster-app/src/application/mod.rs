mod form_session;
mod generate_roast;
mod sync_lead;

pub use form_session::{
    FormOutcome, FormSession, ANALYZING_STATUS, EMPTY_STACK_STATUS, FAILURE_STATUS,
    MISSING_EMAIL_STATUS,
};
pub use generate_roast::{GenerateRoast, Roast};
pub use sync_lead::{CrmSync, DocumentSync};
