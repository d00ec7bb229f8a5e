use crewplan_core::{
    GeminiClient, GeneratorBuilder, GeneratorError, ModelClient, Outcome,
    client::CompletionRequest,
    fallback::UNAVAILABLE_SUMMARY,
    models::{Project, ProjectMode},
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", "test-model", Duration::from_secs(5))
        .expect("Failed to create client")
        .with_base_url(server.uri())
}

#[tokio::test]
async fn test_complete_sends_key_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hello", json!({"type": "OBJECT"}));
    let text = client_for(&server).complete(&request).await.unwrap();
    assert_eq!(text, "{\"ok\":true}");
}

#[tokio::test]
async fn test_complete_joins_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        })))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hello", json!({}));
    let text = client_for(&server).complete(&request).await.unwrap();
    assert_eq!(text, "{\"a\":1}");
}

#[tokio::test]
async fn test_api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hello", json!({}));
    let err = client_for(&server).complete(&request).await.unwrap_err();
    assert!(
        matches!(err, GeneratorError::Api { status: 429, ref message } if message == "Resource exhausted")
    );
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hello", json!({}));
    let err = client_for(&server).complete(&request).await.unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyResponse));
}

#[tokio::test]
async fn test_generator_parses_fenced_plan_over_http() {
    let server = MockServer::start().await;
    let fenced = "```json\n{\"summary\":\"Ship it\",\"roles\":[{\"title\":\"Dev\"}],\"tasks\":[{\"title\":\"Build\",\"status\":\"in-progress\"}]}\n```";
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(fenced)))
        .mount(&server)
        .await;

    let generator = GeneratorBuilder::new()
        .with_api_key(Some("test-key"))
        .with_model("test-model")
        .with_base_url(Some(server.uri()))
        .build()
        .unwrap();
    let project = Project::new("Acme", "A dog-walking app", ProjectMode::Solo);

    let generation = generator.generate_project_plan_with_outcome(&project).await;
    assert_eq!(generation.outcome, Outcome::Success);
    assert_eq!(generation.value.summary, "Ship it");
    assert_eq!(generation.value.tasks[0].title, "Build");
}

#[tokio::test]
async fn test_generator_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let generator = GeneratorBuilder::new()
        .with_api_key(Some("test-key"))
        .with_model("test-model")
        .with_base_url(Some(server.uri()))
        .build()
        .unwrap();
    let project = Project::new("Acme", "A dog-walking app", ProjectMode::Team);

    let plan = generator.generate_project_plan(&project).await;
    assert_eq!(plan.summary, UNAVAILABLE_SUMMARY);

    let questions = generator
        .generate_assessment_questions(&project.description, &project.name, project.mode)
        .await;
    assert!(questions.is_empty());
}
