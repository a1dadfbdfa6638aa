//! Integration tests for the store-backed flows through the real router:
//! registration, login, admin update/delete, and the user listing.
//!
//! These need a live PostgreSQL and are gated on `USERBASE_TEST_DATABASE_URL`;
//! when the variable is unset every test returns early. Each test works with
//! uniquely named accounts so the suite can run in parallel against a shared
//! database without cleaning it.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use userbase_api::{AppState, build_app};
use userbase_auth::TokenEncoder;
use userbase_core::config::auth::AuthConfig;
use userbase_core::config::logging::LoggingConfig;
use userbase_core::config::server::ServerConfig;
use userbase_core::config::{AppConfig, DatabaseConfig};
use userbase_entity::user::UserRole;

const TEST_SECRET: &str = "store-test-secret";

struct TestApp {
    router: Router,
    db_pool: PgPool,
    encoder: TokenEncoder,
}

impl TestApp {
    /// Connect to the test database, run migrations, and build the app.
    ///
    /// Returns `None` when `USERBASE_TEST_DATABASE_URL` is not set.
    async fn new() -> Option<Self> {
        let url = match std::env::var("USERBASE_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("USERBASE_TEST_DATABASE_URL not set; skipping store-backed test");
                return None;
            }
        };

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 0,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: TEST_SECRET.to_string(),
                token_ttl_seconds: 3600,
            },
            logging: LoggingConfig::default(),
        };

        let db_pool = userbase_database::connection::connect(&config.database)
            .await
            .expect("failed to connect to test database");
        userbase_database::migration::run_migrations(&db_pool)
            .await
            .expect("failed to run migrations");

        let encoder = TokenEncoder::new(&config.auth);
        let router = build_app(AppState::new(config, db_pool.clone()));

        Some(Self {
            router,
            db_pool,
            encoder,
        })
    }

    /// Issue a token for an ad-hoc admin identity.
    fn admin_token(&self) -> String {
        self.encoder.issue(Uuid::new_v4(), UserRole::Admin).unwrap()
    }

    /// Look up a registered account's id directly in the store.
    async fn user_id(&self, email: &str) -> Uuid {
        sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.db_pool)
            .await
            .expect("registered user not found")
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
        )
        .await
    }

    async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }
}

/// A username/email pair no other test (or test run) will collide with.
fn unique_account(label: &str) -> (String, String) {
    let tag = Uuid::new_v4().simple().to_string();
    (
        format!("{label}-{tag}"),
        format!("{label}-{tag}@test.example"),
    )
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("roundtrip");

    let (status, body) = app.register(&username, &email, "password123").await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["message"], "User created successfully");

    let (status, body) = app.login(&email, "password123").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let token = body["data"]["token"].as_str().expect("token in response");

    let (status, body) = app.request("GET", "/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["id"], app.user_id(&email).await.to_string());
}

#[tokio::test]
async fn test_duplicate_register_is_400() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("dup");

    let (status, _) = app.register(&username, &email, "password123").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.register(&username, &email, "password123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_generic_401() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("login");
    app.register(&username, &email, "password123").await;

    // Wrong password and unknown email must be indistinguishable so that
    // account existence cannot be probed.
    let (status, wrong_pw) = app.login(&email, "not-the-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown) = app.login("nobody@test.example", "password123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_pw["message"], "Invalid credentials");
    assert_eq!(wrong_pw["message"], unknown["message"]);
}

#[tokio::test]
async fn test_admin_update_changes_email() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("update");
    app.register(&username, &email, "password123").await;
    let id = app.user_id(&email).await;

    let (_, new_email) = unique_account("updated");
    let (status, body) = app
        .request(
            "PUT",
            &format!("/{id}"),
            Some(&app.admin_token()),
            Some(json!({ "email": new_email })),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["email"], new_email);
    assert_eq!(body["data"]["username"], username);
    assert!(body["data"].get("password_hash").is_none());

    // The change is visible to login.
    let (status, _) = app.login(&new_email, "password123").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.login(&email, "password123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_nonexistent_id_is_200_with_null_data() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (status, body) = app
        .request(
            "PUT",
            &format!("/{}", Uuid::new_v4()),
            Some(&app.admin_token()),
            Some(json!({ "username": "ghost-rename" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_delete_removes_account_and_repeats_cleanly() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("delete");
    app.register(&username, &email, "password123").await;
    let id = app.user_id(&email).await;

    let token = app.admin_token();
    let (status, body) = app
        .request("DELETE", &format!("/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "User deleted");

    // Deleting the same id again responds identically.
    let (status, body) = app
        .request("DELETE", &format!("/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "User deleted");

    let (status, _) = app.login(&email, "password123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_never_exposes_password_hashes() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (username, email) = unique_account("list");
    app.register(&username, &email, "password123").await;

    let (status, body) = app.request("GET", "/", Some(&app.admin_token()), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().expect("list response is an array");
    assert!(users.iter().any(|u| u["email"] == email));
    for user in users {
        assert!(user.get("password_hash").is_none());
    }
}
