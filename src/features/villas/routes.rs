use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::core::middleware::auth_middleware;
use crate::features::auth::services::TokenService;
use crate::features::villas::handlers::{
    create_villa, delete_villa, get_villa, list_villas, patch_villa, update_villa, VillaApiState,
};

pub fn routes(state: VillaApiState, tokens: Arc<TokenService>) -> Router {
    let public = Router::new()
        .route("/api/v1/VillaAPI", get(list_villas))
        .route("/api/v1/VillaAPI/{id}", get(get_villa))
        .route("/api/v1/VillaAPI/{id}", patch(patch_villa));

    let admin = Router::new()
        .route("/api/v1/VillaAPI", post(create_villa))
        .route("/api/v1/VillaAPI/{id}", put(update_villa))
        .route("/api/v1/VillaAPI/{id}", delete(delete_villa))
        .route_layer(from_fn_with_state(tokens, auth_middleware));

    public.merge(admin).with_state(state)
}
