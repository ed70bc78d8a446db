// Chatdeck CLI

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chatdeck")]
#[command(about = "Chatdeck CLI - Inspect and change the chat deployment config")]
#[command(version)]
pub struct Cli {
    /// Management API base URL
    #[arg(
        long,
        env = "CHATDECK_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and change the deployment config
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },

    /// List the providers an operator can choose from
    Providers,

    /// List the models available for a provider
    Models {
        /// Provider tag (openai, gemini, ollama, azure-openai)
        provider: String,

        /// Point the lookup at a non-default provider instance
        #[arg(long)]
        provider_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatdeck_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = chatdeck_client::ManagementClient::new(&cli.api_url);
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Config { command } => {
            commands::config::run(command, &client, output_format).await
        }
        Commands::Providers => commands::providers::run(output_format),
        Commands::Models {
            provider,
            provider_url,
        } => commands::models::run(&client, output_format, &provider, provider_url.as_deref()).await,
    }
}
