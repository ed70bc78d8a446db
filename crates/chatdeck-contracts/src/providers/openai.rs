// OpenAI provider settings

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_non_blank, ValidationError};

/// Settings for a deployment backed by the OpenAI API.
///
/// The API key is optional here because it may already be provisioned
/// server-side; when present it must not be blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OpenAiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("model", &self.model)?;
        if let Some(key) = &self.api_key {
            require_non_blank("api_key", key)?;
        }
        Ok(())
    }
}
