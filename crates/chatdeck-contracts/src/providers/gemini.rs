// Gemini provider settings

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_non_blank, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeminiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("model", &self.model)?;
        if let Some(key) = &self.api_key {
            require_non_blank("api_key", key)?;
        }
        Ok(())
    }
}
