mod client;
mod types;

pub use client::HubSpotClient;
pub use types::ContactUpsert;
