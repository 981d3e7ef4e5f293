mod app_error;
mod relay_response;

pub use app_error::AppError;
pub use relay_response::{RelayBody, RelayResponse};
