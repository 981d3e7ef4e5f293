mod client;

pub use client::DocsWebhookClient;
