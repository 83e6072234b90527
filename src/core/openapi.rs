use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::villa_numbers::{
    dtos as villa_number_dtos, handlers as villa_number_handlers,
};
use crate::features::villas::{dtos as villa_dtos, handlers as villa_handlers};
use crate::shared::types::{ApiResponse, Pagination};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Villas
        villa_handlers::list_villas,
        villa_handlers::get_villa,
        villa_handlers::create_villa,
        villa_handlers::update_villa,
        villa_handlers::patch_villa,
        villa_handlers::delete_villa,
        // Villa numbers
        villa_number_handlers::list_villa_numbers,
        villa_number_handlers::get_villa_number,
        villa_number_handlers::create_villa_number,
        villa_number_handlers::update_villa_number,
        villa_number_handlers::delete_villa_number,
        // Auth
        auth_handlers::login,
        auth_handlers::register,
    ),
    components(
        schemas(
            // Shared
            Pagination,
            // Villas
            villa_dtos::VillaDto,
            villa_dtos::VillaCreateDto,
            villa_dtos::VillaUpdateDto,
            villa_dtos::VillaPatchDto,
            ApiResponse<villa_dtos::VillaDto>,
            ApiResponse<Vec<villa_dtos::VillaDto>>,
            // Villa numbers
            villa_number_dtos::VillaNumberDto,
            villa_number_dtos::VillaNumberCreateDto,
            villa_number_dtos::VillaNumberUpdateDto,
            ApiResponse<villa_number_dtos::VillaNumberDto>,
            ApiResponse<Vec<villa_number_dtos::VillaNumberDto>>,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::RegisterRequestDto,
            auth_dtos::UserDto,
            auth_dtos::LoginResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::UserDto>,
        )
    ),
    tags(
        (name = "villas", description = "Villa catalogue management"),
        (name = "villa-numbers", description = "Bookable villa units"),
        (name = "auth", description = "User registration and login"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "VillaRent API",
        version = "0.1.0",
        description = "Villa rental management API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
