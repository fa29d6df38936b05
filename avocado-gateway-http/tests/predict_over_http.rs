//! Exercises the HTTP gateway against a real server bound to a local port.

use std::sync::{Arc, Mutex};

use avocado_core::{
    ConfigError, DraftRecord, GatewayConfig, GatewayError, PredictionGateway, ProductType, Region,
};
use avocado_gateway_http::HttpPredictionGateway;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// Request bodies and content types seen by the fake prediction service.
#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

fn gateway_for(base_url: &str) -> HttpPredictionGateway {
    let config = GatewayConfig::new(base_url).expect("valid test url");
    HttpPredictionGateway::new(Ok(config))
}

fn recording_service(
    seen: Seen,
    status: StatusCode,
    reply: Value,
) -> Router {
    Router::new()
        .route(
            "/predict",
            post(
                move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let content_type = headers
                            .get(CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.requests.lock().unwrap().push((content_type, body));
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(seen)
}

#[tokio::test]
async fn success_returns_predicted_price() {
    let seen = Seen::default();
    let base = spawn_service(recording_service(
        seen.clone(),
        StatusCode::OK,
        json!({ "predicted_price": 142.50 }),
    ))
    .await;

    let price = gateway_for(&base)
        .predict(&DraftRecord::default())
        .await
        .expect("prediction should succeed");

    assert_eq!(price, 142.50);
    assert_eq!(format!("{price:.2}"), "142.50");
}

#[tokio::test]
async fn request_body_uses_wire_schema() {
    let seen = Seen::default();
    let base = spawn_service(recording_service(
        seen.clone(),
        StatusCode::OK,
        json!({ "predicted_price": 1.0 }),
    ))
    .await;

    let record = DraftRecord {
        quality1: 500.0,
        quality2: 250.5,
        quality3: 12.0,
        small_bags: 30.0,
        large_bags: 4.0,
        xlarge_bags: 0.0,
        product_type: ProductType::Organic,
        year: 2025.0,
        region: Region::SouthCentral,
    };
    gateway_for(&base).predict(&record).await.unwrap();

    let requests = seen.requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![(
            Some("application/json".to_string()),
            json!({
                "Quality1": 500,
                "Quality2": 250.5,
                "Quality3": 12,
                "Small Bags": 30,
                "Large Bags": 4,
                "XLarge Bags": 0,
                "type": "organic",
                "year": 2025,
                "region": "SouthCentral",
            })
        )]
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let seen = Seen::default();
    let base = spawn_service(recording_service(
        seen.clone(),
        StatusCode::OK,
        json!({ "predicted_price": 0.99 }),
    ))
    .await;

    let price = gateway_for(&format!("{base}/"))
        .predict(&DraftRecord::default())
        .await
        .unwrap();

    assert_eq!(price, 0.99);
}

#[tokio::test]
async fn error_status_exposes_body() {
    let seen = Seen::default();
    let base = spawn_service(recording_service(
        seen,
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "bad input" }),
    ))
    .await;

    let err = gateway_for(&base)
        .predict(&DraftRecord::default())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains(r#"{"error":"bad input"}"#), "{message}");
    match err {
        GatewayError::Status { status, headers, .. } => {
            assert_eq!(status, 500);
            assert!(headers.iter().any(|(name, _)| name == "content-type"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_is_quoted() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down").into_response() }),
    );
    let base = spawn_service(router).await;

    let err = gateway_for(&base)
        .predict(&DraftRecord::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), r#"Erreur 502: "upstream down""#);
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let base = spawn_service(Router::new()).await;

    let err = gateway_for(&base)
        .predict(&DraftRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_service_reports_no_response() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = gateway_for(&format!("http://{addr}"))
        .predict(&DraftRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::NoResponse(_)), "{err:?}");
    assert!(err.to_string().contains("no response received"));
}

#[tokio::test]
async fn malformed_base_url_is_a_setup_error() {
    let err = gateway_for("not a url")
        .predict(&DraftRecord::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Setup(_)), "{err:?}");
    assert!(!err.alert_text().is_empty());
}

#[tokio::test]
async fn unconfigured_gateway_fails_each_call_with_setup_error() {
    let gateway = HttpPredictionGateway::new(Err(ConfigError::MissingApiUrl));

    for _ in 0..2 {
        let err = gateway.predict(&DraftRecord::default()).await.unwrap_err();
        assert_eq!(err, GatewayError::Setup("API_URL is not set".to_string()));
        assert_eq!(err.alert_text(), "Erreur: API_URL is not set");
    }
}
