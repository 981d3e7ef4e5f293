use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use roaster_api::build_router;
use roaster_app::{AppContext, Settings};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REPLY: &str = "Still love you.\nScore: 61/100\nRoast: Solid picks. Mostly.\nTip: Drop one chat app.";

fn router(vars: &[(&str, String)]) -> Router {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    build_router(AppContext::new(Settings::from_lookup(|key| {
        vars.get(key).cloned()
    })))
}

fn openai_router(server: &mockito::Server) -> Router {
    router(&[
        ("OPENAI_API_KEY", "sk-test".to_string()),
        ("OPENAI_API_URL", format!("{}{}", server.url(), COMPLETIONS_PATH)),
    ])
}

async fn mock_completion(server: &mut mockito::Server, expected: usize) -> mockito::Mock {
    let body = json!({ "choices": [{ "message": { "role": "assistant", "content": REPLY } }] });
    server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected)
        .create_async()
        .await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(router(&[]), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let request = Request::get("/nope").body(Body::empty()).unwrap();
    let (status, body) = send(router(&[]), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_form_page_includes_custom_tools() {
    let app = router(&[(
        "ROASTER_CUSTOM_TOOLS",
        r#"{"security": ["CrowdStrike"]}"#.to_string(),
    )]);
    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="tools" value="CrowdStrike""#));
    assert!(body.contains(r#"name="companyEmail""#));
}

#[tokio::test]
async fn test_form_post_renders_roast() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_completion(&mut server, 1).await;

    let request = post(
        "/roast",
        "application/x-www-form-urlencoded",
        "tools=Slack&tools=Zoom&otherTools=Custom+CRM&companyName=Acme&companySize=11-50&companyEmail=jane%40acme.io",
    );
    let (status, body) = send(openai_router(&server), request).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<span class="score__value">61</span>"#));
    assert!(body.contains("<p>Solid picks. Mostly.</p>"));
    assert!(body.contains("<p>Drop one chat app.</p>"));
    assert!(body.contains("Acme • 11-50"));
    assert!(body.contains("Acme just scored 61/100 in Roast My Tech Stack."));
}

#[tokio::test]
async fn test_form_post_without_tools_shows_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_completion(&mut server, 0).await;

    let request = post(
        "/roast",
        "application/x-www-form-urlencoded",
        "otherTools=+%2C+&companyEmail=jane%40acme.io",
    );
    let (status, body) = send(openai_router(&server), request).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Tell me about at least one tool before I start roasting."));
}

#[tokio::test]
async fn test_rejected_form_keeps_entered_values() {
    let request = post(
        "/roast",
        "application/x-www-form-urlencoded",
        "tools=Slack&otherTools=Custom+CRM&companyName=Acme&companySize=11-50&companyEmail=",
    );
    let (status, body) = send(router(&[]), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Add your work email so we know where to send the roast."));
    assert!(body.contains(r#"value="Slack" checked>"#));
    assert!(body.contains(r#"value="Custom CRM""#));
    assert!(body.contains(r#"name="companyName" value="Acme""#));
    assert!(body.contains(r#"<option value="11-50" selected>"#));
}

#[tokio::test]
async fn test_form_post_without_key_shows_break_message() {
    let request = post(
        "/roast",
        "application/x-www-form-urlencoded",
        "tools=Slack&companyEmail=jane%40acme.io",
    );
    let (status, body) = send(router(&[]), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("The Roast Bot is taking a break. Try again in a minute."));
}

#[tokio::test]
async fn test_json_roast() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_completion(&mut server, 1).await;

    let request = post(
        "/api/roast",
        "application/json",
        r#"{"tools":["Notion"],"companyName":"Acme","email":"jane@acme.io"}"#,
    );
    let (status, body) = send(openai_router(&server), request).await;
    let body: Value = serde_json::from_str(&body).unwrap();

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast"]["scoreRaw"], "61/100");
    assert_eq!(body["roast"]["extras"], json!(["Still love you."]));
    assert_eq!(body["score"]["value"], 61);
    assert_eq!(body["score"]["denominator"], "100");
    assert!(body["shareCaption"]
        .as_str()
        .unwrap()
        .starts_with("Acme just scored 61/100"));
}

#[tokio::test]
async fn test_json_roast_errors_use_envelope() {
    let app = router(&[]);

    let (status, body) = send(app.clone(), post("/api/roast", "application/json", "{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "error": "Invalid JSON payload" })
    );

    let (status, body) = send(
        app,
        post("/api/roast", "application/json", r#"{"tools":[],"email":"jane@acme.io"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(serde_json::from_str::<Value>(&body).unwrap()["error"].is_string());
}

#[tokio::test]
async fn test_lead_routes_reject_get() {
    for uri in ["/api/leads/crm", "/api/leads/document"] {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(router(&[]), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({ "error": "Method Not Allowed" })
        );
    }
}

#[tokio::test]
async fn test_document_route_relays_webhook() {
    let mut server = mockito::Server::new_async().await;
    let hook = server
        .mock("POST", "/hook")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"row":12}"#)
        .expect(1)
        .create_async()
        .await;
    let app = router(&[("GOOGLE_DOCS_WEBHOOK_URL", format!("{}/hook", server.url()))]);

    let (status, body) = send(
        app,
        post("/api/leads/document", "application/json", r#"{"email":"jane@acme.io"}"#),
    )
    .await;

    hook.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "message": "Submission synced to Google Docs", "data": { "row": 12 } })
    );
}
