//! Shared fixtures for handler and gateway tests.

use std::sync::Arc;

use axum_test::TestServer;

use crate::app::{api_router, AppContext};
use crate::core::config::{AppConfig, AuthConfig, Config, StorageConfig, SwaggerConfig};
use crate::core::repository::Repository;
use crate::features::auth::services::{AuthService, TokenService};
use crate::shared::constants::{ROLE_ADMIN, ROLE_CUSTOMER};

pub fn test_config() -> Config {
    let image_dir = std::env::temp_dir()
        .join(format!("villarent-test-{}", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();

    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            public_base_url: "http://localhost:3000".to_string(),
        },
        auth: AuthConfig {
            secret: "test-secret-at-least-32-characters!!".to_string(),
            token_validity_days: 7,
            jwt_leeway_secs: 60,
        },
        storage: StorageConfig {
            image_dir,
            image_url_prefix: "/ProductImage".to_string(),
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "Test API".to_string(),
            version: "0.0.0".to_string(),
            description: "Test".to_string(),
        },
    }
}

pub fn test_auth_service() -> Arc<AuthService> {
    let tokens = Arc::new(TokenService::new(test_config().auth));
    Arc::new(AuthService::new(Repository::new(), tokens))
}

/// Full API router behind an in-process test server, plus the token service
/// that signed its bearer tokens.
pub fn api_test_server() -> (TestServer, Arc<TokenService>) {
    let ctx = AppContext::new(&test_config());
    let tokens = Arc::clone(&ctx.token_service);
    let server = TestServer::new(api_router(&ctx)).expect("test server");
    (server, tokens)
}

/// Full API router served over a real local socket, for clients that speak
/// actual HTTP rather than the in-process transport.
pub fn http_test_server() -> TestServer {
    let ctx = AppContext::new(&test_config());
    TestServer::builder()
        .http_transport()
        .build(api_router(&ctx))
        .expect("http test server")
}

pub fn admin_token(tokens: &TokenService) -> String {
    tokens.issue_token(1, ROLE_ADMIN).expect("admin token")
}

pub fn customer_token(tokens: &TokenService) -> String {
    tokens.issue_token(2, ROLE_CUSTOMER).expect("customer token")
}
