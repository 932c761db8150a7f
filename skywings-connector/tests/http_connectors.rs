use std::time::Duration;

use serde_json::json;
use skywings_connector::{ClientSettings, HttpAuthApi, HttpDatabaseApi, RetryPolicy};
use skywings_core::auth::CustomerDirectory;
use skywings_core::connector::{AuthApi, DatabaseApi};
use skywings_core::CoreError;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        retry: RetryPolicy::none(),
        failure_threshold: 2,
        reset_timeout: Duration::from_secs(60),
        ..ClientSettings::new(server.uri())
    }
}

#[tokio::test]
async fn test_customer_lookup_by_email() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/v1/db/customer/email/asha@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customerId": id,
            "name": "Asha",
            "email": "asha@example.com",
            "password": "pw",
            "role": "CUSTOMER"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&settings(&server)).unwrap();
    let customer = db.customer_by_email("asha@example.com").await.unwrap().unwrap();
    assert_eq!(customer.customer_id, id);
    assert_eq!(customer.password.unwrap().expose(), "pw");
}

#[tokio::test]
async fn test_missing_airline_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Airline not found"})))
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&settings(&server)).unwrap();
    assert!(db.get_airline(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_upstream_conflict_keeps_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/db/customer/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "duplicate email"})))
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&settings(&server)).unwrap();
    let err = db.create_customer(&Default::default()).await.unwrap_err();
    assert!(matches!(err, CoreError::Conflict(m) if m == "duplicate email"));
}

#[tokio::test]
async fn test_validate_forwards_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/validate"))
        .and(header("Authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Valid Token"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/validate"))
        .and(header("Authorization", "Bearer bad"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Invalid Token"))
        .mount(&server)
        .await;

    let auth = HttpAuthApi::new(&settings(&server)).unwrap();
    assert!(auth.validate("good").await.unwrap());
    assert!(!auth.validate("bad").await.unwrap());
}

#[tokio::test]
async fn test_server_errors_open_the_circuit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/db/customer"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&settings(&server)).unwrap();
    for _ in 0..2 {
        let err = db.list_customers().await.unwrap_err();
        assert!(matches!(err, CoreError::UpstreamError { status: 503, .. }));
    }

    // Third call never reaches the server.
    let err = db.list_customers().await.unwrap_err();
    assert!(matches!(err, CoreError::Unavailable(_)));
}

fn impatient(server: &MockServer) -> ClientSettings {
    ClientSettings {
        timeout: Duration::from_millis(100),
        retry: RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(1),
        },
        ..settings(server)
    }
}

#[tokio::test]
async fn test_timed_out_create_is_sent_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/db/customer/create"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"name": "Asha", "email": "asha@example.com"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&impatient(&server)).unwrap();
    let err = db.create_customer(&Default::default()).await.unwrap_err();
    assert!(matches!(err, CoreError::Unavailable(_)));

    let received = server.received_requests().await.unwrap().len();
    assert_eq!(received, 1);
}

#[tokio::test]
async fn test_timed_out_read_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/db/customer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let db = HttpDatabaseApi::new(&impatient(&server)).unwrap();
    assert!(db.list_customers().await.is_err());

    let received = server.received_requests().await.unwrap().len();
    assert_eq!(received, 3);
}
