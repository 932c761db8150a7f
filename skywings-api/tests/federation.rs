//! Services wired together over real HTTP: database-api and auth-api are
//! served on ephemeral ports and the other services reach them through the
//! REST connectors.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use skywings_api::state::{AirlineState, AuthState, CustomerState, DatabaseState, EmployeeState};
use skywings_api::{airline_app, auth_app, customer_app, database_app, employee_app};
use skywings_connector::{ClientSettings, HttpAuthApi, HttpDatabaseApi, RetryPolicy};
use skywings_core::airline::AirlineService;
use skywings_core::auth::AuthService;
use skywings_core::customer::CustomerService;
use skywings_core::employee::EmployeeService;
use skywings_core::records::RecordService;
use skywings_core::token::TokenCodec;
use skywings_store::memory_repositories;
use tokio::net::TcpListener;
use tower::ServiceExt;

struct Cluster {
    database: Router,
    customers: Router,
    airlines: Router,
    employees: Router,
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn settings(base_url: &str) -> ClientSettings {
    ClientSettings {
        retry: RetryPolicy::none(),
        timeout: Duration::from_secs(2),
        ..ClientSettings::new(base_url)
    }
}

async fn cluster() -> Cluster {
    let database = database_app(
        DatabaseState {
            records: RecordService::new(memory_repositories()),
        },
        None,
    );
    let db_url = spawn(database.clone()).await;

    let auth = auth_app(
        AuthState {
            auth: AuthService::new(
                TokenCodec::new("federation-secret", 3600),
                Arc::new(HttpDatabaseApi::new(&settings(&db_url)).unwrap()),
            ),
        },
        None,
    );
    let auth_url = spawn(auth).await;

    let db = || Arc::new(HttpDatabaseApi::new(&settings(&db_url)).unwrap());

    Cluster {
        customers: customer_app(
            CustomerState {
                customers: CustomerService::new(
                    db(),
                    Arc::new(HttpAuthApi::new(&settings(&auth_url)).unwrap()),
                ),
            },
            None,
        ),
        airlines: airline_app(
            AirlineState {
                airlines: AirlineService::new(db()),
            },
            None,
        ),
        employees: employee_app(
            EmployeeState {
                employees: EmployeeService::new(db()),
            },
            None,
        ),
        database,
    }
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let cluster = cluster().await;

    let (status, body) = call(
        &cluster.customers,
        "POST",
        "/api/v1/customers/register",
        None,
        Some(json!({"name": "Asha", "email": "asha@example.com", "password": "s3:cret", "role": "CUSTOMER"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_of(&body);
    assert!(created.get("password").is_none());
    let id = created["customerId"].as_str().unwrap().to_string();

    let (status, body) = call(
        &cluster.customers,
        "POST",
        "/api/v1/customers/login?email=asha@example.com&password=s3%3Acret",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = json_of(&body)["token"].as_str().unwrap().to_string();

    let (status, body) = call(&cluster.customers, "GET", "/api/v1/customers/validate", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!(true));

    let (status, body) = call(
        &cluster.customers,
        "GET",
        "/api/v1/customers/email/asha@example.com",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["customerId"], id.as_str());

    let (status, body) = call(
        &cluster.customers,
        "DELETE",
        &format!("/api/v1/customers/delete/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), format!("Customer deleted with id: {}", id));

    let (status, _) = call(
        &cluster.customers,
        "GET",
        &format!("/api/v1/customers/getById/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The stored password is gone with the customer.
    let (_, body) = call(&cluster.customers, "GET", "/api/v1/customers/validate", Some(&token), None).await;
    assert_eq!(json_of(&body), json!(false));
}

#[tokio::test]
async fn test_customer_responses_never_carry_password() {
    let cluster = cluster().await;

    let (status, body) = call(
        &cluster.customers,
        "POST",
        "/api/v1/customers/register",
        None,
        Some(json!({"name": "Mira", "email": "mira@example.com", "password": "hunter2", "role": "CUSTOMER"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json_of(&body)["customerId"].as_str().unwrap().to_string();

    // database-api still holds it.
    let (_, body) = call(&cluster.database, "GET", &format!("/api/v1/db/customer/{}", id), None, None).await;
    assert_eq!(json_of(&body)["password"], "hunter2");

    let reads = [
        ("GET", "/api/v1/customers/getAll".to_string(), None),
        ("GET", format!("/api/v1/customers/getById/{}", id), None),
        ("GET", "/api/v1/customers/email/mira@example.com".to_string(), None),
        (
            "PUT",
            format!("/api/v1/customers/update/{}", id),
            Some(json!({"name": "Mira K", "email": "mira@example.com", "password": "hunter3"})),
        ),
    ];
    for (method, uri, body) in reads {
        let (status, bytes) = call(&cluster.customers, method, &uri, None, body).await;
        assert_eq!(status, StatusCode::OK, "{} {}", method, uri);
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("password"), "{} {} leaked: {}", method, uri, text);
        assert!(!text.contains("hunter"), "{} {} leaked: {}", method, uri, text);
    }
}

#[tokio::test]
async fn test_wrong_password_login_is_unauthorized() {
    let cluster = cluster().await;
    call(
        &cluster.customers,
        "POST",
        "/api/v1/customers/register/details",
        None,
        Some(json!({"name": "Ravi", "email": "ravi@example.com"})),
    )
    .await;

    let (status, _) = call(
        &cluster.customers,
        "POST",
        "/api/v1/customers/login?email=ravi@example.com&password=guess",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_airline_registration_creates_admin() {
    let cluster = cluster().await;

    let (status, body) = call(
        &cluster.airlines,
        "POST",
        "/api/v1/airline/register",
        None,
        Some(json!({
            "name": "SkyWings",
            "officialName": "SkyWings Aviation Ltd",
            "adminName": "Dev",
            "adminEmail": "dev@skywings.test",
            "address": "Terminal 3"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let airline = json_of(&body);
    assert_eq!(airline["status"], "ACTIVE");
    assert_eq!(airline["logo"], "logo");
    let airline_id = airline["airlineId"].as_str().unwrap().to_string();

    let (_, body) = call(&cluster.database, "GET", "/api/v1/db/employee", None, None).await;
    let employees = json_of(&body);
    assert_eq!(employees.as_array().unwrap().len(), 1);
    assert_eq!(employees[0]["employeeRole"], "ADMIN");
    assert_eq!(employees[0]["airlineId"], airline_id.as_str());

    let (status, _) = call(
        &cluster.airlines,
        "POST",
        "/api/v1/airline/register",
        None,
        Some(json!({"name": "NoAdmin", "adminName": "x", "adminEmail": " "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_registration_checks_airline() {
    let cluster = cluster().await;

    let (_, body) = call(
        &cluster.database,
        "POST",
        "/api/v1/db/airline/create",
        None,
        Some(json!({"name": "SkyWings"})),
    )
    .await;
    let airline_id = json_of(&body)["airlineId"].as_str().unwrap().to_string();

    let employee = |airline: &str| {
        json!({
            "name": "Nia",
            "email": "nia@skywings.test",
            "employeeRole": "manager",
            "status": "ON_LEAVE",
            "airlineId": airline
        })
    };

    let (status, _) = call(&cluster.employees, "POST", "/api/v1/airline/employee/register", None, Some(employee("abc"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, _) = call(&cluster.employees, "POST", "/api/v1/airline/employee/register", None, Some(employee(&unknown))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(
        &cluster.employees,
        "POST",
        "/api/v1/airline/employee/register",
        None,
        Some(employee(&airline_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_of(&body);
    assert_eq!(created["employeeRole"], "MANAGER");
    assert_eq!(created["status"], "ACTIVE");
    assert_eq!(created["airlineId"], airline_id.as_str());
}

#[tokio::test]
async fn test_unreachable_database_api_is_unavailable() {
    let app = customer_app(
        CustomerState {
            customers: CustomerService::new(
                Arc::new(HttpDatabaseApi::new(&settings("http://127.0.0.1:1")).unwrap()),
                Arc::new(HttpAuthApi::new(&settings("http://127.0.0.1:1")).unwrap()),
            ),
        },
        None,
    );

    let (status, _) = call(&app, "GET", "/api/v1/customers/getAll", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
