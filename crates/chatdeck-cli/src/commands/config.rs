// Config inspection and update commands

use anyhow::{Context, Result};
use chatdeck_client::ManagementClient;
use chatdeck_contracts::{default_config, ConfigForm, ProviderConfig};
use clap::Subcommand;

use crate::output::{print_field, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current deployment config
    Show,

    /// Validate a config file and submit it
    Set {
        /// JSON or YAML file with the config record
        #[arg(short, long)]
        file: String,
    },

    /// Print the default config for a provider
    Defaults {
        /// Provider tag (openai, gemini, ollama, azure-openai)
        provider: String,
    },
}

pub async fn run(
    command: ConfigCommand,
    client: &ManagementClient,
    output: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let form = client.fetch_config().await?;
            print_config(&form, output);
            Ok(())
        }
        ConfigCommand::Set { file } => {
            let form = load_form(&file)?;
            form.validate()
                .with_context(|| format!("Config in {} failed validation", file))?;

            let updated = client.update_config(&form).await?;
            if output.is_text() {
                println!("Config updated");
            }
            print_config(&updated, output);
            Ok(())
        }
        ConfigCommand::Defaults { provider } => {
            let form = default_config(&provider);
            print_config(&form, output);
            Ok(())
        }
    }
}

/// Parse a config record from a JSON or YAML file (by extension)
fn load_form(file: &str) -> Result<ConfigForm> {
    let raw = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;

    let value: serde_json::Value = if file.ends_with(".yaml") || file.ends_with(".yml") {
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse YAML in {}", file))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON in {}", file))?
    };

    Ok(ConfigForm::from_value(&value)?)
}

fn print_config(form: &ConfigForm, output: OutputFormat) {
    if !output.is_text() {
        output.print_value(form);
        return;
    }

    match &form.provider {
        Some(provider) => {
            print_field("Provider", &provider.provider().to_string());
            print_provider(provider);
        }
        None => print_field("Provider", "(not set)"),
    }

    print_field(
        "System prompt",
        form.chat.system_prompt.as_deref().unwrap_or("(none)"),
    );
    match &form.chat.conversation_starters {
        Some(starters) if !starters.is_empty() => {
            print_field("Starters", &starters.join(" | "));
        }
        _ => print_field("Starters", "(none)"),
    }
    if let Some(configured) = form.configured {
        print_field("Configured", if configured { "yes" } else { "no" });
    }
}

fn print_provider(provider: &ProviderConfig) {
    // API keys are never printed, only whether one is present
    let key_status = |key: &Option<String>| if key.is_some() { "set" } else { "not set" };

    match provider {
        ProviderConfig::OpenAi(config) => {
            print_field("Model", &config.model);
            print_field("API key", key_status(&config.api_key));
        }
        ProviderConfig::Gemini(config) => {
            print_field("Model", &config.model);
            print_field("API key", key_status(&config.api_key));
        }
        ProviderConfig::Ollama(config) => {
            print_field("Base URL", &config.base_url);
            print_field("Model", &config.model);
        }
        ProviderConfig::AzureOpenAi(config) => {
            print_field("Endpoint", config.endpoint.as_deref().unwrap_or("(not set)"));
            print_field(
                "Deployment",
                config.deployment.as_deref().unwrap_or("(not set)"),
            );
            print_field("API version", &config.api_version);
            print_field("API key", key_status(&config.api_key));
        }
    }
}
