// HTTP client for the Chatdeck management API

mod client;
mod error;

pub use client::ManagementClient;
pub use error::ClientError;
