use super::*;
use crate::crm::config::CrmTimeouts;
use crate::crm::types::LeadRequest;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Captured {
    authorization: Option<String>,
    content_type: Option<String>,
    body: Option<serde_json::Value>,
}

/// Spawn an in-process stand-in for the CRM that answers with `status`.
async fn spawn_upstream(status: StatusCode) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);
    let app = Router::new().route(
        "/v1/buyer",
        post(move |headers: HeaderMap, body: String| {
            let sink = Arc::clone(&sink);
            async move {
                let mut guard = sink.lock().unwrap();
                guard.authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                guard.content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                guard.body = serde_json::from_str(&body).ok();
                (status, "{}")
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), captured)
}

fn config_for(base_url: String) -> CrmConfig {
    CrmConfig {
        base_url,
        api_token: "test-token".into(),
        timeouts: CrmTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn ivan_buyer() -> BuyerRequest {
    BuyerRequest::from_lead(&LeadRequest {
        name: "Ivan".into(),
        email: "i@x.com".into(),
        phone: "123".into(),
        message: "hi".into(),
    })
}

#[tokio::test]
async fn send_buyer_posts_json_with_token() {
    let (base, captured) = spawn_upstream(StatusCode::OK).await;
    let client = CrmClient::new(config_for(base.clone())).unwrap();
    assert_eq!(client.buyer_url(), format!("{base}/v1/buyer"));

    client.send_buyer(&ivan_buyer()).await.unwrap();

    let seen = captured.lock().unwrap();
    assert_eq!(seen.authorization.as_deref(), Some("test-token"));
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        seen.body,
        Some(serde_json::json!({
            "title": "Лид с сайта (Ivan)",
            "description": "hi",
            "contact": { "name": "Ivan", "email": "i@x.com", "phone": "123" }
        }))
    );
}

#[tokio::test]
async fn any_2xx_counts_as_success() {
    let (base, _captured) = spawn_upstream(StatusCode::CREATED).await;
    let client = CrmClient::new(config_for(base)).unwrap();
    assert!(client.create_buyer(&ivan_buyer()).await.is_ok());
}

#[tokio::test]
async fn non_2xx_is_rejected_with_status() {
    let (base, _captured) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = CrmClient::new(config_for(base)).unwrap();
    let err = client.send_buyer(&ivan_buyer()).await.unwrap_err();
    assert!(matches!(err, CrmError::Rejected { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_upstream_is_request_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CrmClient::new(config_for(format!("http://{addr}"))).unwrap();
    let err = client.send_buyer(&ivan_buyer()).await.unwrap_err();
    assert!(matches!(err, CrmError::Request(_)));
}
