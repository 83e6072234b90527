use std::sync::Arc;

use axum::Router;

use crate::core::config::Config;
use crate::core::repository::Repository;
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::villa_numbers::routes as villa_number_routes;
use crate::features::villa_numbers::services::VillaNumberService;
use crate::features::villas::handlers::VillaApiState;
use crate::features::villas::routes as villa_routes;
use crate::features::villas::services::VillaService;
use crate::modules::storage::ImageStore;

/// Shared service graph behind the router. The villa repository handle is
/// shared with the villa number service for its foreign key checks.
pub struct AppContext {
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub villa_service: Arc<VillaService>,
    pub villa_number_service: Arc<VillaNumberService>,
    pub image_store: Arc<ImageStore>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let villas = Repository::new();

        let token_service = Arc::new(TokenService::new(config.auth.clone()));
        let auth_service = Arc::new(AuthService::new(
            Repository::new(),
            Arc::clone(&token_service),
        ));
        let villa_service = Arc::new(VillaService::new(villas.clone()));
        let villa_number_service =
            Arc::new(VillaNumberService::new(Repository::new(), villas));
        let image_store = Arc::new(ImageStore::new(
            &config.storage,
            &config.app.public_base_url,
        ));

        Self {
            token_service,
            auth_service,
            villa_service,
            villa_number_service,
            image_store,
        }
    }
}

/// API routes only; the swagger router and the cross-cutting layers are
/// stacked on top by the binary entry point.
pub fn api_router(ctx: &AppContext) -> Router {
    Router::new()
        .merge(villa_routes::routes(
            VillaApiState {
                service: Arc::clone(&ctx.villa_service),
                images: Arc::clone(&ctx.image_store),
            },
            Arc::clone(&ctx.token_service),
        ))
        .merge(villa_number_routes::routes(
            Arc::clone(&ctx.villa_number_service),
            Arc::clone(&ctx.token_service),
        ))
        .merge(auth_routes::routes(Arc::clone(&ctx.auth_service)))
}
