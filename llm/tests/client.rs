use httpmock::Method::POST;
use httpmock::MockServer;
use llm::{Completer, LlmConfig, OllamaClient};

#[tokio::test]
async fn complete_returns_response_text() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"model\":\"gemma3:27b\",\"created_at\":\"now\",\"response\":\"Q: q\\nA: a\",\"done\":true}");
    });

    let config = LlmConfig {
        base_url: server.base_url(),
        model: "gemma3:27b".into(),
    };
    let client = OllamaClient::new(&config).unwrap();
    let text = client.complete("make flashcards").await.unwrap();
    mock.assert();
    assert_eq!(text, "Q: q\nA: a");
}

#[tokio::test]
async fn server_error_is_a_network_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(500);
    });

    let config = LlmConfig {
        base_url: server.base_url(),
        model: "gemma3:27b".into(),
    };
    let client = OllamaClient::new(&config).unwrap();
    assert!(client.complete("make flashcards").await.is_err());
}
