// Azure OpenAI provider settings

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_non_blank, require_url, ValidationError};

/// Settings for a deployment backed by Azure OpenAI.
///
/// `endpoint` and `deployment` start out unset and must be filled in before
/// the config passes validation; the structural match alone accepts a
/// partially filled form so the UI can persist drafts field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AzureOpenAiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    pub api_version: String,
}

impl Default for AzureOpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: None,
            api_version: "2024-06-01".to_string(),
        }
    }
}

impl AzureOpenAiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.endpoint {
            Some(endpoint) => require_url("endpoint", endpoint)?,
            None => {
                return Err(ValidationError::field(
                    "endpoint",
                    "an Azure OpenAI endpoint is required",
                ))
            }
        }
        match &self.deployment {
            Some(deployment) => require_non_blank("deployment", deployment)?,
            None => {
                return Err(ValidationError::field(
                    "deployment",
                    "a deployment name is required",
                ))
            }
        }
        if let Some(key) = &self.api_key {
            require_non_blank("api_key", key)?;
        }
        require_non_blank("api_version", &self.api_version)?;
        Ok(())
    }
}
