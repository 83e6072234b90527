use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::villas::dtos::{
    ListVillasQuery, VillaCreateDto, VillaDto, VillaPatchDto, VillaUpdateDto,
};
use crate::features::villas::services::VillaService;
use crate::modules::storage::ImageStore;
use crate::shared::constants::{PLACEHOLDER_IMAGE_URL, X_PAGINATION_HEADER};
use crate::shared::types::{ApiResponse, Pagination};
use crate::shared::validation::collect_messages;

#[derive(Clone)]
pub struct VillaApiState {
    pub service: Arc<VillaService>,
    pub images: Arc<ImageStore>,
}

/// Uploaded image part of a villa multipart form.
struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
}

/// Raw villa multipart form; fields stay optional until a DTO is built.
#[derive(Default)]
struct VillaForm {
    id: Option<i32>,
    name: Option<String>,
    details: Option<String>,
    rate: Option<i64>,
    occupancy: Option<i32>,
    sqft: Option<i32>,
    amenity: Option<String>,
    image: Option<ImageUpload>,
}

impl VillaForm {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = VillaForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "id" => form.id = Some(parse_number(&name, &field_text(field).await?)?),
                "name" => form.name = Some(field_text(field).await?),
                "details" => form.details = Some(field_text(field).await?),
                "rate" => form.rate = Some(parse_number(&name, &field_text(field).await?)?),
                "occupancy" => {
                    form.occupancy = Some(parse_number(&name, &field_text(field).await?)?)
                }
                "sqft" => form.sqft = Some(parse_number(&name, &field_text(field).await?)?),
                "amenity" => form.amenity = Some(field_text(field).await?),
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::BadRequest(format!("Failed to read image field: {}", e))
                    })?;
                    if !bytes.is_empty() {
                        form.image = Some(ImageUpload {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn build_create(&self) -> Result<VillaCreateDto> {
        let dto = VillaCreateDto {
            name: self.name.clone().unwrap_or_default(),
            details: self.details.clone().unwrap_or_default(),
            rate: self.rate.unwrap_or_default(),
            occupancy: self.occupancy.unwrap_or_default(),
            sqft: self.sqft.unwrap_or_default(),
            amenity: self.amenity.clone().unwrap_or_default(),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(collect_messages(&e)))?;
        Ok(dto)
    }

    fn build_update(&self, path_id: i32) -> Result<VillaUpdateDto> {
        if let Some(form_id) = self.id {
            if form_id != path_id {
                return Err(AppError::BadRequest(format!(
                    "Id {} in body does not match id {} in path",
                    form_id, path_id
                )));
            }
        }

        let dto = VillaUpdateDto {
            id: path_id,
            name: self.name.clone().unwrap_or_default(),
            details: self.details.clone().unwrap_or_default(),
            rate: self.rate.unwrap_or_default(),
            occupancy: self.occupancy.unwrap_or_default(),
            sqft: self.sqft.unwrap_or_default(),
            amenity: self.amenity.clone().unwrap_or_default(),
        };
        dto.validate()
            .map_err(|e| AppError::Validation(collect_messages(&e)))?;
        Ok(dto)
    }
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {}", e)))
}

fn parse_number<N: std::str::FromStr>(field: &str, raw: &str) -> Result<N> {
    raw.trim()
        .parse::<N>()
        .map_err(|_| AppError::validation(format!("Field '{}' must be a number", field)))
}

fn pagination_header(pagination: Pagination) -> [(HeaderName, String); 1] {
    [(
        HeaderName::from_static(X_PAGINATION_HEADER),
        pagination.header_value(),
    )]
}

/// List villas with optional occupancy/amenity filters and pagination
#[utoipa::path(
    get,
    path = "/api/v1/VillaAPI",
    params(ListVillasQuery),
    responses(
        (status = 200, description = "List of villas with X-Pagination header", body = ApiResponse<Vec<VillaDto>>),
    ),
    tag = "villas"
)]
pub async fn list_villas(
    State(state): State<VillaApiState>,
    Query(query): Query<ListVillasQuery>,
) -> Result<Response> {
    let villas = state
        .service
        .list(
            query.filter_occupancy,
            query.search.as_deref(),
            query.page_size,
            query.page_number,
        )
        .await;
    let dtos: Vec<VillaDto> = villas.into_iter().map(Into::into).collect();

    let pagination = Pagination {
        page_number: query.page_number,
        page_size: query.page_size,
    };

    Ok((
        StatusCode::OK,
        pagination_header(pagination),
        Json(ApiResponse::ok(dtos)),
    )
        .into_response())
}

/// Get a single villa by id
#[utoipa::path(
    get,
    path = "/api/v1/VillaAPI/{id}",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 200, description = "Villa found", body = ApiResponse<VillaDto>),
        (status = 400, description = "Zero id"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas"
)]
pub async fn get_villa(
    State(state): State<VillaApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VillaDto>>> {
    if id == 0 {
        return Err(AppError::BadRequest("Id must not be zero".to_string()));
    }

    let villa = state
        .service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))?;

    Ok(Json(ApiResponse::ok(villa.into())))
}

/// Create a villa (admin only, multipart form with optional image)
#[utoipa::path(
    post,
    path = "/api/v1/VillaAPI",
    responses(
        (status = 201, description = "Villa created, Location header set", body = ApiResponse<VillaDto>),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an admin")
    ),
    tag = "villas",
    security(("bearer_auth" = []))
)]
pub async fn create_villa(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<VillaApiState>,
    multipart: Multipart,
) -> Result<Response> {
    let form = VillaForm::read(multipart).await?;
    let dto = form.build_create()?;

    let villa = state.service.create(dto).await?;

    // File placement happens after the entity operation; the placeholder URL
    // set on create stands when no image was attached.
    let villa = match &form.image {
        Some(image) => {
            let stored = state
                .images
                .save(villa.id, &image.file_name, &image.bytes)
                .await?;
            state
                .service
                .set_image(villa.id, stored.url, stored.local_path)
                .await?
        }
        None => villa,
    };

    let location = format!("/api/v1/VillaAPI/{}", villa.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::created(VillaDto::from(villa))),
    )
        .into_response())
}

/// Replace a villa (admin only, multipart form with optional image)
#[utoipa::path(
    put,
    path = "/api/v1/VillaAPI/{id}",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 200, description = "Villa replaced (envelope statusCode 204)", body = ApiResponse<VillaDto>),
        (status = 400, description = "Validation failure or id mismatch"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas",
    security(("bearer_auth" = []))
)]
pub async fn update_villa(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<VillaApiState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<VillaDto>>> {
    if id == 0 {
        return Err(AppError::BadRequest("Id must not be zero".to_string()));
    }

    let form = VillaForm::read(multipart).await?;
    let dto = form.build_update(id)?;

    let updated = state.service.update(dto).await?;

    // Replacing or dropping the image removes the previous file.
    if !updated.image_local_path.is_empty() {
        state.images.remove(&updated.image_local_path).await?;
    }
    match &form.image {
        Some(image) => {
            let stored = state.images.save(id, &image.file_name, &image.bytes).await?;
            state
                .service
                .set_image(id, stored.url, stored.local_path)
                .await?;
        }
        None => {
            state
                .service
                .set_image(id, PLACEHOLDER_IMAGE_URL.to_string(), String::new())
                .await?;
        }
    }

    Ok(Json(ApiResponse::no_content()))
}

/// Partially update a villa with a merge-style document
#[utoipa::path(
    patch,
    path = "/api/v1/VillaAPI/{id}",
    params(("id" = i32, Path, description = "Villa id")),
    request_body = VillaPatchDto,
    responses(
        (status = 204, description = "Villa patched"),
        (status = 400, description = "Zero id or invalid document"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas"
)]
pub async fn patch_villa(
    State(state): State<VillaApiState>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<VillaPatchDto>,
) -> Result<StatusCode> {
    if id == 0 {
        return Err(AppError::BadRequest("Id must not be zero".to_string()));
    }
    if dto.is_empty() {
        return Err(AppError::BadRequest("Patch document is empty".to_string()));
    }
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    state
        .service
        .patch(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a villa and its stored image (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/VillaAPI/{id}",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 200, description = "Villa deleted (envelope statusCode 204)", body = ApiResponse<VillaDto>),
        (status = 400, description = "Zero id"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas",
    security(("bearer_auth" = []))
)]
pub async fn delete_villa(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<VillaApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VillaDto>>> {
    if id == 0 {
        return Err(AppError::BadRequest("Id must not be zero".to_string()));
    }

    let villa = state
        .service
        .remove(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))?;

    if !villa.image_local_path.is_empty() {
        state.images.remove(&villa.image_local_path).await?;
    }

    Ok(Json(ApiResponse::no_content()))
}
