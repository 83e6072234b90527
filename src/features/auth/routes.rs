use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Create routes for the user auth feature
///
/// Note: login and register are public (no authentication required)
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/v1/UserAPI/login", post(handlers::login))
        .route("/api/v1/UserAPI/register", post(handlers::register))
        .with_state(service)
}
