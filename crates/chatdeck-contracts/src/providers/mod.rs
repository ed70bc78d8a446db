// Provider configuration variants
//
// Each supported backend contributes a config shape tagged by
// `model_provider`. Validation beyond the structural match lives in one
// function per variant, dispatched through `ProviderConfig::validate`.

mod azure;
mod gemini;
mod ollama;
mod openai;

pub use azure::AzureOpenAiConfig;
pub use gemini::GeminiConfig;
pub use ollama::OllamaConfig;
pub use openai::OpenAiConfig;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Discriminant selecting which provider shape applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ModelProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
    #[serde(rename = "azure-openai")]
    AzureOpenAi,
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvider::OpenAi => write!(f, "openai"),
            ModelProvider::Gemini => write!(f, "gemini"),
            ModelProvider::Ollama => write!(f, "ollama"),
            ModelProvider::AzureOpenAi => write!(f, "azure-openai"),
        }
    }
}

impl std::str::FromStr for ModelProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ModelProvider::OpenAi),
            "gemini" => Ok(ModelProvider::Gemini),
            "ollama" => Ok(ModelProvider::Ollama),
            "azure-openai" => Ok(ModelProvider::AzureOpenAi),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// Provider-specific settings, discriminated by the `model_provider` tag.
///
/// Deserializing rejects unknown tags and shape mismatches; `validate`
/// re-checks the selected variant's field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "model_provider")]
pub enum ProviderConfig {
    #[serde(rename = "openai")]
    OpenAi(OpenAiConfig),
    #[serde(rename = "gemini")]
    Gemini(GeminiConfig),
    #[serde(rename = "ollama")]
    Ollama(OllamaConfig),
    #[serde(rename = "azure-openai")]
    AzureOpenAi(AzureOpenAiConfig),
}

impl ProviderConfig {
    /// The discriminant for this variant
    pub fn provider(&self) -> ModelProvider {
        match self {
            ProviderConfig::OpenAi(_) => ModelProvider::OpenAi,
            ProviderConfig::Gemini(_) => ModelProvider::Gemini,
            ProviderConfig::Ollama(_) => ModelProvider::Ollama,
            ProviderConfig::AzureOpenAi(_) => ModelProvider::AzureOpenAi,
        }
    }

    /// Run the matching variant's field checks
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ProviderConfig::OpenAi(config) => config.validate(),
            ProviderConfig::Gemini(config) => config.validate(),
            ProviderConfig::Ollama(config) => config.validate(),
            ProviderConfig::AzureOpenAi(config) => config.validate(),
        }
    }

    /// Default settings for the given provider
    pub fn default_for(provider: ModelProvider) -> Self {
        match provider {
            ModelProvider::OpenAi => ProviderConfig::OpenAi(OpenAiConfig::default()),
            ModelProvider::Gemini => ProviderConfig::Gemini(GeminiConfig::default()),
            ModelProvider::Ollama => ProviderConfig::Ollama(OllamaConfig::default()),
            ModelProvider::AzureOpenAi => ProviderConfig::AzureOpenAi(AzureOpenAiConfig::default()),
        }
    }
}

/// Entry in the provider picker shown by the admin UI
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SupportedProvider {
    pub name: String,
    pub value: ModelProvider,
}

/// The providers an operator can choose from, in display order
pub fn supported_providers() -> Vec<SupportedProvider> {
    vec![
        SupportedProvider {
            name: "OpenAI".to_string(),
            value: ModelProvider::OpenAi,
        },
        SupportedProvider {
            name: "Gemini".to_string(),
            value: ModelProvider::Gemini,
        },
        SupportedProvider {
            name: "Ollama".to_string(),
            value: ModelProvider::Ollama,
        },
        SupportedProvider {
            name: "Azure OpenAI".to_string(),
            value: ModelProvider::AzureOpenAi,
        },
    ]
}

/// Shared check for fields that must contain visible characters
pub(crate) fn require_non_blank(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::field(field, format!("{} must not be blank", field)));
    }
    Ok(())
}

/// Shared check for fields that must parse as a URL
pub(crate) fn require_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::field(field, format!("invalid URL: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_tag_roundtrip() {
        for (tag, provider) in [
            ("openai", ModelProvider::OpenAi),
            ("gemini", ModelProvider::Gemini),
            ("ollama", ModelProvider::Ollama),
            ("azure-openai", ModelProvider::AzureOpenAi),
        ] {
            assert_eq!(provider.to_string(), tag);
            assert_eq!(tag.parse::<ModelProvider>(), Ok(provider));
        }
    }

    #[test]
    fn test_unknown_provider_string_rejected() {
        assert!("mistral".parse::<ModelProvider>().is_err());
    }

    #[test]
    fn test_tagged_deserialization_dispatches_on_model_provider() {
        let config: ProviderConfig = serde_json::from_value(json!({
            "model_provider": "ollama",
            "base_url": "http://127.0.0.1:11434",
            "model": "llama3.1",
        }))
        .expect("deserialize");
        assert_eq!(config.provider(), ModelProvider::Ollama);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result: Result<ProviderConfig, _> = serde_json::from_value(json!({
            "model_provider": "mistral",
            "model": "mistral-large",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_serialized_at_top_level() {
        let config = ProviderConfig::default_for(ModelProvider::OpenAi);
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["model_provider"], "openai");
        assert_eq!(json["model"], "gpt-4o-mini");
    }

    #[test]
    fn test_supported_providers_order() {
        let names: Vec<String> = supported_providers().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["OpenAI", "Gemini", "Ollama", "Azure OpenAI"]);
    }
}
