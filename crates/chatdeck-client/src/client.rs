// HTTP client wrapper for the management config endpoints

use chatdeck_contracts::{ConfigForm, DataResponse};

use crate::error::ClientError;

/// Typed wrapper over `/api/management/config*`.
///
/// Stateless per call; the base URL is the only configuration. No retries
/// or timeouts are applied here, callers that need them wrap these calls.
pub struct ManagementClient {
    base_url: String,
    http: reqwest::Client,
}

impl ManagementClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the current deployment config.
    ///
    /// A non-success response degrades to the empty default form so the UI
    /// always has something renderable; the body is logged instead of
    /// surfaced. Transport failures still return `Err`.
    pub async fn fetch_config(&self) -> Result<ConfigForm, ClientError> {
        let url = format!("{}/api/management/config", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "config fetch failed, falling back to empty defaults"
            );
            return Ok(ConfigForm::default());
        }

        Ok(response.json().await?)
    }

    /// Submit an updated config and return the record the server persisted.
    ///
    /// The server-owned `configured` flag is stripped from the request body.
    pub async fn update_config(&self, form: &ConfigForm) -> Result<ConfigForm, ClientError> {
        let mut body = serde_json::to_value(form)?;
        if let Some(fields) = body.as_object_mut() {
            fields.remove("configured");
        }

        let url = format!("{}/api/management/config", self.base_url);
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let updated: DataResponse<ConfigForm> = response.json().await?;
        Ok(updated.data)
    }

    /// List the models available for a provider.
    ///
    /// `provider_url` points the lookup at a non-default instance (Ollama
    /// mostly) and is only sent when given.
    pub async fn fetch_models(
        &self,
        provider: &str,
        provider_url: Option<&str>,
    ) -> Result<Vec<String>, ClientError> {
        let mut query: Vec<(&str, &str)> = vec![("provider", provider)];
        if let Some(provider_url) = provider_url {
            query.push(("provider_url", provider_url));
        }

        let url = format!("{}/api/management/config/models", self.base_url);
        let response = self.http.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ManagementClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
