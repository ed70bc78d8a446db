// Integration tests for the management API client
// Run with: cargo test -p chatdeck-client

use chatdeck_client::{ClientError, ManagementClient};
use chatdeck_contracts::{ConfigForm, ModelProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests whose JSON body lacks the given top-level key
struct BodyLacksKey(&'static str);

impl Match for BodyLacksKey {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .map(|body| body.get(self.0).is_none())
            .unwrap_or(false)
    }
}

fn openai_record() -> serde_json::Value {
    json!({
        "model_provider": "openai",
        "model": "gpt-4o-mini",
        "api_key": "sk-test",
        "system_prompt": "You are helpful",
        "conversation_starters": ["What can you do?"],
        "configured": true,
    })
}

#[tokio::test]
async fn fetch_config_returns_parsed_form() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/management/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_record()))
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let form = client.fetch_config().await.expect("fetch");

    let provider = form.provider.expect("provider set");
    assert_eq!(provider.provider(), ModelProvider::OpenAi);
    assert_eq!(form.chat.system_prompt.as_deref(), Some("You are helpful"));
    assert_eq!(form.configured, Some(true));
}

#[tokio::test]
async fn fetch_config_degrades_to_empty_defaults_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/management/config"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let form = client.fetch_config().await.expect("no error raised");

    assert_eq!(form, ConfigForm::default());
}

#[tokio::test]
async fn update_config_strips_configured_and_returns_data_field() {
    let server = MockServer::start().await;

    let mut persisted = openai_record();
    persisted["system_prompt"] = json!("Updated prompt");

    Mock::given(method("POST"))
        .and(path("/api/management/config"))
        .and(BodyLacksKey("configured"))
        .and(body_partial_json(json!({ "model_provider": "openai" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": persisted })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let form = ConfigForm::from_value(&openai_record()).expect("parse");
    assert_eq!(form.configured, Some(true));

    let updated = client.update_config(&form).await.expect("update");

    let expected = ConfigForm::from_value(&persisted).expect("parse");
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn update_config_surfaces_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/management/config"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid model"))
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let form = ConfigForm::from_value(&openai_record()).expect("parse");
    let err = client.update_config(&form).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "invalid model");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_models_sends_provider_and_provider_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/management/config/models"))
        .and(query_param("provider", "ollama"))
        .and(query_param("provider_url", "http://host:11434"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["llama3.1", "mistral"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let models = client
        .fetch_models("ollama", Some("http://host:11434"))
        .await
        .expect("fetch models");

    assert_eq!(models, vec!["llama3.1".to_string(), "mistral".to_string()]);
}

#[tokio::test]
async fn fetch_models_omits_provider_url_when_absent() {
    let server = MockServer::start().await;

    struct NoProviderUrl;
    impl Match for NoProviderUrl {
        fn matches(&self, request: &Request) -> bool {
            !request
                .url
                .query_pairs()
                .any(|(key, _)| key == "provider_url")
        }
    }

    Mock::given(method("GET"))
        .and(path("/api/management/config/models"))
        .and(query_param("provider", "openai"))
        .and(NoProviderUrl)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["gpt-4o-mini"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let models = client.fetch_models("openai", None).await.expect("fetch models");

    assert_eq!(models, vec!["gpt-4o-mini".to_string()]);
}

#[tokio::test]
async fn fetch_models_surfaces_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/management/config/models"))
        .respond_with(ResponseTemplate::new(502).set_body_string("provider unreachable"))
        .mount(&server)
        .await;

    let client = ManagementClient::new(&server.uri());
    let err = client.fetch_models("ollama", None).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "provider unreachable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
