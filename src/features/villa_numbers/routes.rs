use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::core::middleware::auth_middleware;
use crate::features::auth::services::TokenService;
use crate::features::villa_numbers::handlers::{
    create_villa_number, delete_villa_number, get_villa_number, list_villa_numbers,
    update_villa_number,
};
use crate::features::villa_numbers::services::VillaNumberService;

pub fn routes(service: Arc<VillaNumberService>, tokens: Arc<TokenService>) -> Router {
    let public = Router::new()
        .route("/api/v1/VillaNumberAPI", get(list_villa_numbers))
        .route("/api/v1/VillaNumberAPI/{villa_no}", get(get_villa_number));

    let admin = Router::new()
        .route("/api/v1/VillaNumberAPI", post(create_villa_number))
        .route("/api/v1/VillaNumberAPI/{villa_no}", put(update_villa_number))
        .route(
            "/api/v1/VillaNumberAPI/{villa_no}",
            delete(delete_villa_number),
        )
        .route_layer(from_fn_with_state(tokens, auth_middleware));

    public.merge(admin).with_state(service)
}
