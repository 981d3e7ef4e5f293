pub mod docs_webhook;
pub mod http;
pub mod hubspot;
pub mod openai;
pub mod security;
