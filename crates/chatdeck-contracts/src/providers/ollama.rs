// Ollama provider settings

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_non_blank, require_url, ValidationError};

/// Settings for a self-hosted Ollama backend.
///
/// Unlike the hosted providers there is no API key; the deployment reaches
/// the instance directly at `base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            model: "llama3.1".to_string(),
        }
    }
}

impl OllamaConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_url("base_url", &self.base_url)?;
        require_non_blank("model", &self.model)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(OllamaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let config = OllamaConfig {
            base_url: "not a url".to_string(),
            ..OllamaConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Field { field: "base_url", .. }
        ));
    }
}
