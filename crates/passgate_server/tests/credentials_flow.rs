use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use passgate_auth_stub::FixedUserAuthorizer;
use passgate_core::prelude::*;
use passgate_server::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct CountingReject {
    calls: Arc<AtomicUsize>,
}

impl CredentialsAuthorizer for CountingReject {
    async fn authorize(
        &self,
        _credentials: &Credentials,
        _request: &RequestContext,
    ) -> Result<Option<UserProfile>, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

#[derive(Clone)]
struct Broken;

impl CredentialsAuthorizer for Broken {
    async fn authorize(
        &self,
        _credentials: &Credentials,
        _request: &RequestContext,
    ) -> Result<Option<UserProfile>, AuthError> {
        Err(AuthError::System("user store offline".to_string()))
    }
}

fn stub_app() -> Router {
    PassgateServer::default().build(CredentialsProvider::new(FixedUserAuthorizer))
}

fn login(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[rstest]
#[case::wrong_password("username=alice&password=wrong")]
#[case::both_empty("username=&password=")]
#[case::with_csrf_token("csrfToken=abc123&username=jsmith&password=secret")]
#[tokio::test]
async fn any_credentials_sign_in_as_j_smith(#[case] body: &str) {
    let response = stub_app()
        .oneshot(login("/api/auth/callback/credentials", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json(response).await;
    assert_eq!(
        json["user"],
        serde_json::json!({ "id": 1, "name": "J Smith", "email": "", "image": "" })
    );
    assert!(json["token"].is_string());
    assert!(json["expires"].is_string());
}

#[rstest]
#[case::no_password("username=alice")]
#[case::no_username("password=wrong")]
#[case::empty_body("")]
#[tokio::test]
async fn missing_fields_are_rejected_before_authorize(#[case] body: &str) {
    let authorizer = CountingReject::default();
    let calls = authorizer.calls.clone();
    let app = PassgateServer::default().build(CredentialsProvider::new(authorizer));

    let response = app
        .oneshot(login("/api/auth/callback/credentials", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

fn bare_post(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[rstest]
#[case::no_content_type(bare_post("/api/auth/callback/credentials", ""))]
#[case::json_content_type(
    Request::builder()
        .method(Method::POST)
        .uri("/api/auth/callback/credentials")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"a","password":"b"}"#))
        .unwrap()
)]
#[case::duplicate_field(login(
    "/api/auth/callback/credentials",
    "username=a&username=b&password=c"
))]
#[tokio::test]
async fn unreadable_forms_are_absent_credentials(#[case] request: Request<Body>) {
    let authorizer = CountingReject::default();
    let calls = authorizer.calls.clone();
    let app = PassgateServer::default().build(CredentialsProvider::new(authorizer));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_provider_wins_over_bad_form() {
    let response = stub_app()
        .oneshot(bare_post("/api/auth/callback/github", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_session_lifetime_is_an_internal_error() {
    let config = PassgateServerConfig {
        session_max_age: u64::MAX,
        ..Default::default()
    };
    let app = PassgateServer::new(config).build(CredentialsProvider::new(FixedUserAuthorizer));

    let response = app
        .oneshot(login("/api/auth/callback/credentials", "username=a&password=b"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn rejection_returns_401_without_token() {
    let authorizer = CountingReject::default();
    let calls = authorizer.calls.clone();
    let app = PassgateServer::default().build(CredentialsProvider::new(authorizer));

    let response = app
        .oneshot(login(
            "/api/auth/callback/credentials",
            "username=alice&password=wrong",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!text(response).await.contains("token"));
}

#[tokio::test]
async fn authorizer_failure_is_an_internal_error() {
    let app = PassgateServer::default().build(CredentialsProvider::new(Broken));

    let response = app
        .oneshot(login(
            "/api/auth/callback/credentials",
            "username=alice&password=wrong",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text(response).await, "Auth Error");
}

#[rstest]
#[case::github("/api/auth/callback/github")]
#[case::email("/api/auth/callback/email")]
#[tokio::test]
async fn other_providers_are_not_found(#[case] path: &str) {
    let response = stub_app()
        .oneshot(login(path, "username=alice&password=wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn providers_lists_exactly_the_credentials_provider() {
    let response = stub_app().oneshot(get("/api/auth/providers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json(response).await,
        serde_json::json!({
            "credentials": {
                "id": "credentials",
                "name": "Credentials",
                "type": "credentials",
                "signinUrl": "/api/auth/signin",
                "callbackUrl": "/api/auth/callback/credentials"
            }
        })
    );
}

#[tokio::test]
async fn signin_renders_field_metadata() {
    let response = stub_app().oneshot(get("/api/auth/signin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = text(response).await;
    assert!(html.contains(r#"action="&#x2F;api&#x2F;auth&#x2F;callback&#x2F;credentials""#));
    assert!(html.contains(r#"<input name="username" type="text" placeholder="jsmith">"#));
    assert!(html.contains(r#"<input name="password" type="password">"#));
    assert!(html.contains("Sign in with Credentials"));
}

#[tokio::test]
async fn signin_escapes_markup_in_labels() {
    let provider = CredentialsProvider::new(FixedUserAuthorizer).with_field(CredentialField::new(
        "username",
        "<script>alert(1)</script>",
        "text",
    ));
    let app = PassgateServer::default().build(provider);

    let response = app.oneshot(get("/api/auth/signin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = text(response).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
}

#[tokio::test]
async fn minted_token_resolves_to_session() {
    let app = stub_app();

    let response = app
        .clone()
        .oneshot(login(
            "/api/auth/callback/credentials",
            "username=alice&password=wrong",
        ))
        .await
        .unwrap();
    let signed_in = json(response).await;
    let token = signed_in["token"].as_str().unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let session = json(response).await;
    assert_eq!(session["user"], signed_in["user"]);
    assert_eq!(session["expires"], signed_in["expires"]);
}

#[tokio::test]
async fn session_without_token_is_empty() {
    let response = stub_app().oneshot(get("/api/auth/session")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn session_with_bad_token_is_unauthorized() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();

    let response = stub_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn custom_base_path_and_name_are_respected() {
    let config = PassgateServerConfig {
        base_path: "/auth/".to_string(),
        ..Default::default()
    };
    let provider = CredentialsProvider::new(FixedUserAuthorizer).with_name("Staff");
    let app = PassgateServer::new(config).build(provider);

    let response = app.clone().oneshot(get("/auth/providers")).await.unwrap();
    let json = json(response).await;
    assert_eq!(json["credentials"]["name"], "Staff");
    assert_eq!(json["credentials"]["callbackUrl"], "/auth/callback/credentials");

    let response = app
        .oneshot(login("/auth/callback/credentials", "username=a&password=b"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_is_ok() {
    let response = stub_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "OK");
}
