// Public contracts for the Chatdeck management API
// This crate defines the config form DTOs, provider variants, validation,
// and the default-config resolver shared by the client and the CLI.

pub mod chat;
pub mod common;
pub mod defaults;
pub mod error;
pub mod form;
pub mod providers;

pub use chat::*;
pub use common::*;
pub use defaults::*;
pub use error::*;
pub use form::*;
pub use providers::*;
