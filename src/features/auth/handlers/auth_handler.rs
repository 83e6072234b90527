use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, RegisterRequestDto, UserDto};
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::collect_messages;

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/v1/UserAPI/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Incorrect credentials")
    ),
    tag = "users"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    let response = service
        .login(dto)
        .await?
        .ok_or_else(|| AppError::Auth("Username or password is incorrect".to_string()))?;

    Ok(Json(ApiResponse::ok(response)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/UserAPI/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "User registered", body = ApiResponse<UserDto>),
        (status = 400, description = "Duplicate username or invalid input")
    ),
    tag = "users"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<Json<ApiResponse<UserDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    let user = service.register(dto).await?;
    Ok(Json(ApiResponse::ok(user)))
}
