//! Repository behavior against a mock backend.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jwire_client::{
    ApiClient, AuthRepository, ClientConfig, EmployeeRepository, JobRepository,
    NotificationRepository, RecruiterRepository,
};
use jwire_models::{EmployeeProfile, Outcome};
use jwire_session::{CredentialStore, LoginStatus};

fn client_for(server: &MockServer) -> (ApiClient, Arc<CredentialStore>) {
    let session = Arc::new(CredentialStore::in_memory());
    let config = ClientConfig {
        base_url: format!("{}/api", server.uri()),
        ..ClientConfig::default()
    };
    let client = ApiClient::new(config, Arc::clone(&session)).expect("client builds");
    (client, session)
}

fn envelope(status_code: i32, data: Value) -> Value {
    json!({
        "statusCode": status_code,
        "message": "",
        "error": null,
        "data": data,
        "path": "/api",
        "timestamp": "2025-03-01T10:00:00Z",
    })
}

fn login_payload(token: &str) -> Value {
    json!({
        "email": "a@b.com",
        "name": "A",
        "role": "ROLE_EMPLOYEE",
        "imageUrl": "",
        "token": token,
    })
}

#[tokio::test]
async fn login_success_stores_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "a@b.com", "password": "x"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(200, login_payload("tok123"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    let outcome = AuthRepository::new(client).login("a@b.com", "x").await;

    let auth = outcome.success().expect("login succeeds");
    assert_eq!(auth.token, "tok123");
    assert_eq!(session.token().as_deref(), Some("tok123"));
    assert!(session.is_valid());
    assert_eq!(session.login_status(), LoginStatus::Employee);
}

#[tokio::test]
async fn login_business_failure_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 401,
            "message": "Bad credentials",
        })))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    let outcome = AuthRepository::new(client).login("a@b.com", "wrong").await;

    assert_eq!(outcome, Outcome::Failure("Bad credentials".to_string()));
    assert!(session.read().is_none());
    assert!(!session.is_valid());
}

#[tokio::test]
async fn login_missing_data_is_a_failure_not_a_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, Value::Null)))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    let outcome = AuthRepository::new(client).login("a@b.com", "x").await;

    assert_eq!(outcome, Outcome::Failure("Invalid response format".to_string()));
    assert!(session.read().is_none());
}

#[tokio::test]
async fn unauthorized_transport_status_dispatches_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/saved-jobs"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "message": "Token expired",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).saved_jobs().await;

    assert_eq!(outcome, Outcome::Failure("Token expired".to_string()));
    // wiremock verifies the expect(1) on drop: the 401 was not retried.
}

#[tokio::test]
async fn bearer_header_attached_when_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    session.save(&jwire_models::AuthResponse {
        email: "a@b.com".to_string(),
        name: "A".to_string(),
        role: "ROLE_EMPLOYEE".to_string(),
        image_url: String::new(),
        token: "tok123".to_string(),
    });

    let outcome = JobRepository::new(client).list().await;
    assert_eq!(outcome, Outcome::Success(vec![]));
}

#[tokio::test]
async fn no_bearer_header_when_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, json!([]))))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    JobRepository::new(client).list().await;

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn missing_data_on_success_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/newest-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(204, Value::Null)))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).newest().await;

    assert_eq!(outcome, Outcome::Success(vec![]));
}

#[tokio::test]
async fn business_failure_uses_server_message_over_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 500,
            "message": "database unavailable",
            "data": [{"id": 1}],
        })))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).list().await;

    // Failure even though data is present: the status code decides.
    assert_eq!(outcome, Outcome::Failure("database unavailable".to_string()));
}

#[tokio::test]
async fn business_failure_without_message_uses_operation_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list-recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 400})))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).list_recent().await;

    assert_eq!(
        outcome,
        Outcome::Failure("Failed to fetch recent job posts".to_string())
    );
}

#[tokio::test]
async fn unparseable_error_body_collapses_to_unknown_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).list().await;

    assert_eq!(outcome, Outcome::Failure("Unknown error".to_string()));
}

#[tokio::test]
async fn empty_error_body_reports_transport_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).list().await;

    assert_eq!(
        outcome,
        Outcome::Failure("Request failed with status 503".to_string())
    );
}

#[tokio::test]
async fn unparseable_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).list().await;

    assert_eq!(outcome, Outcome::Failure("Invalid response format".to_string()));
}

#[tokio::test]
async fn connection_error_surfaces_as_failure_value() {
    // Point the client at a server that is already gone.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let session = Arc::new(CredentialStore::in_memory());
    let config = ClientConfig {
        base_url: format!("{uri}/api"),
        ..ClientConfig::default()
    };
    let client = ApiClient::new(config, session).expect("client builds");

    let outcome = JobRepository::new(client).list().await;
    assert!(outcome.is_failure());
}

#[tokio::test]
async fn job_detail_missing_data_defaults_to_empty_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobpost/detail"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, Value::Null)))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client).detail(42).await;

    assert_eq!(outcome, Outcome::Success(jwire_models::JobDetail::default()));
}

#[tokio::test]
async fn apply_job_posts_cv_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobpost/apply"))
        .and(body_json(json!({"jobId": 7, "cvUrl": "https://cdn.example.com/cv.pdf"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, Value::Null)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = JobRepository::new(client)
        .apply(7, "https://cdn.example.com/cv.pdf")
        .await;

    assert_eq!(outcome, Outcome::Success(()));
}

#[tokio::test]
async fn search_posts_only_set_filter_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobpost/search"))
        .and(body_json(json!({"title": "rust", "location": "Hanoi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let filter = jwire_models::JobFilter {
        title: Some("rust".to_string()),
        location: Some("Hanoi".to_string()),
        ..jwire_models::JobFilter::default()
    };
    let outcome = JobRepository::new(client).search(&filter).await;

    assert_eq!(outcome, Outcome::Success(vec![]));
}

#[tokio::test]
async fn profile_update_rewrites_credential_subset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(200, login_payload("tok123"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/employee/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            json!({
                "fullName": "A B",
                "email": "new@b.com",
                "phoneNumber": "0123",
                "dateOfBirth": {"day": 1, "month": 2, "year": 1990},
                "gender": "F",
                "location": "Hanoi",
                "token": "tok456",
            }),
        )))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    AuthRepository::new(client.clone()).login("a@b.com", "x").await;

    let profile = EmployeeProfile {
        full_name: "A B".to_string(),
        email: "new@b.com".to_string(),
        phone_number: "0123".to_string(),
        gender: "F".to_string(),
        location: "Hanoi".to_string(),
        ..EmployeeProfile::default()
    };
    let outcome = EmployeeRepository::new(client).update_profile(&profile).await;

    assert!(outcome.is_success());
    let credential = session.read().expect("still logged in");
    assert_eq!(credential.token, "tok456");
    assert_eq!(credential.email, "new@b.com");
    assert_eq!(credential.name, "A B");
    // Untouched by the partial update.
    assert_eq!(credential.role, "ROLE_EMPLOYEE");
}

#[tokio::test]
async fn change_avatar_updates_credential_and_echoes_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(200, login_payload("tok123"))),
        )
        .mount(&server)
        .await;
    // Server confirms without echoing a URL; the client falls back to the
    // one it submitted.
    Mock::given(method("POST"))
        .and(path("/api/employee/change-avatar"))
        .and(body_json(json!({"imageUrl": "https://cdn.example.com/me.png"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, Value::Null)))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    AuthRepository::new(client.clone()).login("a@b.com", "x").await;

    let outcome = EmployeeRepository::new(client)
        .change_avatar("https://cdn.example.com/me.png")
        .await;

    assert_eq!(
        outcome,
        Outcome::Success("https://cdn.example.com/me.png".to_string())
    );
    assert_eq!(
        session.read().unwrap().avatar_url,
        "https://cdn.example.com/me.png"
    );
}

#[tokio::test]
async fn change_password_is_void_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employee/change-password"))
        .and(body_json(json!({
            "current": "old",
            "newPassword": "new",
            "confirmPassword": "new",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, Value::Null)))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = EmployeeRepository::new(client)
        .change_password("old", "new", "new")
        .await;

    assert_eq!(outcome, Outcome::Success(()));
}

#[tokio::test]
async fn notification_mutations_use_query_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/notification/delete"))
        .and(query_param("id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, json!("deleted"))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = NotificationRepository::new(client).delete(9).await;

    assert_eq!(outcome, Outcome::Success(()));
}

#[tokio::test]
async fn recruiter_cvs_decode_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recruiter/get/cv"))
        .and(query_param("id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            json!([{
                "idCV": 11,
                "nameEmployee": "Binh",
                "location": "Da Nang",
                "cvLink": "https://cdn.example.com/cv/11.pdf",
            }]),
        )))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = RecruiterRepository::new(client).cvs(3).await;

    let cvs = outcome.success().expect("cv list");
    assert_eq!(cvs.len(), 1);
    assert_eq!(cvs[0].id, 11);
    assert_eq!(cvs[0].employee_name, "Binh");
}

#[tokio::test]
async fn register_surfaces_server_message_on_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 409,
            "message": "Email already registered",
        })))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);
    let outcome = AuthRepository::new(client)
        .register("EMPLOYEE", "A", "a@b.com", "x")
        .await;

    assert_eq!(
        outcome,
        Outcome::Failure("Email already registered".to_string())
    );
}
