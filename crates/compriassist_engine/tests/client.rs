use std::sync::Once;
use std::time::Duration;

use compriassist_engine::{
    Backend, ChatRequest, ClientSettings, DescriptionRequest, FailureKind, ReqwestBackend,
    SentimentRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(assist_logging::initialize_for_tests);
}

fn backend_for(server: &MockServer) -> ReqwestBackend {
    init_logging();
    ReqwestBackend::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(500),
        ..ClientSettings::default()
    })
    .expect("backend")
}

fn chat_request(message: &str) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        user_id: "invitado_web".to_string(),
    }
}

#[tokio::test]
async fn chat_posts_message_and_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .and(body_json(json!({"message": "hola", "user_id": "invitado_web"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "¡Hola! ¿En qué te ayudo?",
            "suggestions": ["Ver ofertas", "Rastrear pedido"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .chat(&chat_request("hola"))
        .await
        .expect("chat ok");
    assert_eq!(reply.response, "¡Hola! ¿En qué te ayudo?");
    assert_eq!(
        reply.suggestions,
        Some(vec!["Ver ofertas".to_string(), "Rastrear pedido".to_string()])
    );
}

#[tokio::test]
async fn chat_without_suggestions_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .chat(&chat_request("hola"))
        .await
        .expect("chat ok");
    assert_eq!(reply.suggestions, None);
}

#[tokio::test]
async fn http_errors_carry_status_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"detail": "Modelo no disponible"})),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .chat(&chat_request("hola"))
        .await
        .expect_err("503 must fail");
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.message, "Modelo no disponible");
}

#[tokio::test]
async fn missing_required_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "wrong key"})))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .chat(&chat_request("hola"))
        .await
        .expect_err("missing response field");
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sentiment/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .sentiment(&SentimentRequest {
            text: "genial".to_string(),
        })
        .await
        .expect_err("html is not json");
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server).health().await.expect_err("timeout");
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn sentiment_keeps_probability_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sentiment/analyze"))
        .and(body_json(json!({"text": "Excelente producto"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"sentiment":"positive","confidence":0.91,"is_fake":true,"fake_probability":0.62,
                "probabilities":{"positive":0.91,"neutral":0.06,"negative":0.03}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .sentiment(&SentimentRequest {
            text: "Excelente producto".to_string(),
        })
        .await
        .expect("sentiment ok");
    assert_eq!(result.sentiment, "positive");
    assert_eq!(result.fraud_probability().unwrap(), Some(0.62));
    assert_eq!(
        result.probability_entries().unwrap(),
        vec![
            ("positive".to_string(), 0.91),
            ("neutral".to_string(), 0.06),
            ("negative".to_string(), 0.03),
        ]
    );
}

#[tokio::test]
async fn fake_flag_without_probability_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sentiment/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment": "negative",
            "confidence": 0.7,
            "is_fake": true,
            "probabilities": {"negative": 0.7}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .sentiment(&SentimentRequest {
            text: "malo".to_string(),
        })
        .await
        .expect_err("is_fake without probability");
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn describe_sends_spanish_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generative/generar-descripcion"))
        .and(body_json(json!({
            "nombre_producto": "Mochila",
            "caracteristicas": ["impermeable", "15 litros"],
            "categoria": "general",
            "precio": 0.0,
            "temperatura": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"descripcion": "Una mochila ligera.", "modelo_usado": "gpt-2-es"}
        })))
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .describe(&DescriptionRequest {
            nombre_producto: "Mochila".to_string(),
            caracteristicas: vec!["impermeable".to_string(), "15 litros".to_string()],
            categoria: "general".to_string(),
            precio: 0.0,
            temperatura: 0.7,
        })
        .await
        .expect("describe ok");
    assert!(response.success);
    let data = response.data.expect("data");
    assert_eq!(data.descripcion, "Una mochila ligera.");
    assert_eq!(data.modelo_usado.as_deref(), Some("gpt-2-es"));
}

#[tokio::test]
async fn describe_success_without_data_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generative/generar-descripcion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .describe(&DescriptionRequest {
            nombre_producto: "Mochila".to_string(),
            caracteristicas: Vec::new(),
            categoria: "general".to_string(),
            precio: 0.0,
            temperatura: 0.7,
        })
        .await
        .expect_err("no data");
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn declined_generation_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generative/generar-descripcion"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "sin modelo"})),
        )
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .describe(&DescriptionRequest {
            nombre_producto: "Mochila".to_string(),
            caracteristicas: Vec::new(),
            categoria: "general".to_string(),
            precio: 0.0,
            temperatura: 0.7,
        })
        .await
        .expect("declined still parses");
    assert!(!response.success);
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let health = backend_for(&server).health().await.expect("health ok");
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(ClientSettings {
        base_url: format!("{}/", server.uri()),
        ..ClientSettings::default()
    })
    .expect("backend");
    assert!(backend.health().await.is_ok());
}
