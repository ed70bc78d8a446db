// Chat behavior settings shared by every provider variant

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Message shown when a conversation starter is blank
pub const EMPTY_STARTER_MESSAGE: &str = "A conversation starter message must be non-empty";

/// Chat behavior settings: the system prompt and the suggested opening
/// prompts shown to end users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatConfig {
    /// Instructions prepended to every conversation; null clears them
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Suggested opening prompts, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_starters: Option<Vec<String>>,
}

impl ChatConfig {
    /// Check that every conversation starter present is a non-blank string.
    ///
    /// An absent or empty list is fine; a list containing any
    /// whitespace-only entry is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(starters) = &self.conversation_starters {
            if starters.iter().any(|s| s.trim().is_empty()) {
                return Err(ValidationError::field(
                    "conversation_starters",
                    EMPTY_STARTER_MESSAGE,
                ));
            }
        }
        Ok(())
    }
}
