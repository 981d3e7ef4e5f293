mod client;
mod prompt;
mod types;

pub use client::OpenAiClient;
pub use prompt::{build_user_message, SYSTEM_PROMPT};
