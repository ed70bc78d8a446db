// The merged config record exchanged with the management API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::chat::ChatConfig;
use crate::error::ValidationError;
use crate::providers::ProviderConfig;

/// A config record as exchanged with the management API.
///
/// The wire shape is flat: provider fields, chat fields, and the
/// server-owned `configured` flag all live at the top level, with
/// `model_provider` selecting which provider shape applies. A record with no
/// `model_provider` parses as a provider-less form (the renderable empty
/// state); everything else must match one of the supported variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Value")]
pub struct ConfigForm {
    #[serde(flatten)]
    pub provider: Option<ProviderConfig>,

    #[serde(flatten)]
    pub chat: ChatConfig,

    /// Set by the server once the deployment has a working provider.
    /// Never echoed back on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

impl TryFrom<Value> for ConfigForm {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ConfigForm::from_value(&value)
    }
}

impl ConfigForm {
    /// Parse a raw JSON record, matching it against the supported provider
    /// shapes when a `model_provider` tag is present.
    ///
    /// An unknown tag or a shape mismatch is rejected with the underlying
    /// decoder message.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = value
            .as_object()
            .ok_or_else(|| ValidationError::shape("expected a JSON object"))?;

        let provider = if fields.contains_key("model_provider") {
            let provider =
                ProviderConfig::deserialize(value).map_err(|e| ValidationError::shape(e.to_string()))?;
            Some(provider)
        } else {
            None
        };

        let chat =
            ChatConfig::deserialize(value).map_err(|e| ValidationError::shape(e.to_string()))?;

        let configured = match fields.get("configured") {
            Some(flag) => Some(
                bool::deserialize(flag)
                    .map_err(|_| ValidationError::field("configured", "must be a boolean"))?,
            ),
            None => None,
        };

        Ok(Self {
            provider,
            chat,
            configured,
        })
    }

    /// Validate a parsed form before submitting it.
    ///
    /// Structural matching happens at parse time; this re-checks the
    /// selected variant's field values (dispatched on `model_provider`) and
    /// the shared chat settings. A provider must be selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.chat.validate()?;
        match &self.provider {
            Some(provider) => provider.validate(),
            None => Err(ValidationError::MissingProvider),
        }
    }
}
