// Default-config resolution
//
// Hardcoded baselines so the UI can seed a form for a newly selected
// provider without a round trip to the server.

use crate::chat::ChatConfig;
use crate::form::ConfigForm;
use crate::providers::{ModelProvider, ProviderConfig};

/// Resolve the baseline config for a provider name.
///
/// The baseline always carries an unset system prompt, an empty starter
/// list, and `configured: false`; known providers add their default
/// settings on top. Unknown names yield just the baseline.
pub fn default_config(provider: &str) -> ConfigForm {
    ConfigForm {
        provider: provider
            .parse::<ModelProvider>()
            .ok()
            .map(ProviderConfig::default_for),
        chat: ChatConfig {
            system_prompt: None,
            conversation_starters: Some(Vec::new()),
        },
        configured: Some(false),
    }
}
