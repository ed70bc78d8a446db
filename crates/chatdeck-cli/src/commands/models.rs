// Model listing command

use anyhow::Result;
use chatdeck_client::ManagementClient;

use crate::output::OutputFormat;

pub async fn run(
    client: &ManagementClient,
    output: OutputFormat,
    provider: &str,
    provider_url: Option<&str>,
) -> Result<()> {
    let models = client.fetch_models(provider, provider_url).await?;

    if output.is_text() {
        if models.is_empty() {
            println!("No models found for {}", provider);
            return Ok(());
        }
        for model in &models {
            println!("{}", model);
        }
    } else {
        output.print_value(&models);
    }

    Ok(())
}
