use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::villa_numbers::dtos::{
    VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto,
};
use crate::features::villa_numbers::services::VillaNumberService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::collect_messages;

/// List all villa numbers with their owning villas embedded
#[utoipa::path(
    get,
    path = "/api/v1/VillaNumberAPI",
    responses(
        (status = 200, description = "List of villa numbers", body = ApiResponse<Vec<VillaNumberDto>>),
    ),
    tag = "villa-numbers"
)]
pub async fn list_villa_numbers(
    State(service): State<Arc<VillaNumberService>>,
) -> Json<ApiResponse<Vec<VillaNumberDto>>> {
    Json(ApiResponse::ok(service.list(0, 1).await))
}

/// Get a villa number by room number
#[utoipa::path(
    get,
    path = "/api/v1/VillaNumberAPI/{villa_no}",
    params(("villa_no" = i32, Path, description = "Room number")),
    responses(
        (status = 200, description = "Villa number found", body = ApiResponse<VillaNumberDto>),
        (status = 400, description = "Zero room number"),
        (status = 404, description = "Villa number not found")
    ),
    tag = "villa-numbers"
)]
pub async fn get_villa_number(
    State(service): State<Arc<VillaNumberService>>,
    Path(villa_no): Path<i32>,
) -> Result<Json<ApiResponse<VillaNumberDto>>> {
    if villa_no == 0 {
        return Err(AppError::BadRequest(
            "VillaNo must not be zero".to_string(),
        ));
    }

    let dto = service
        .get(villa_no)
        .await
        .ok_or_else(|| AppError::NotFound(format!("VillaNumber {} not found", villa_no)))?;

    Ok(Json(ApiResponse::ok(dto)))
}

/// Create a villa number (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/VillaNumberAPI",
    request_body = VillaNumberCreateDto,
    responses(
        (status = 201, description = "Villa number created, Location header set", body = ApiResponse<VillaNumberDto>),
        (status = 400, description = "Validation failure or unknown villa id"),
        (status = 409, description = "Room number already exists"),
    ),
    tag = "villa-numbers",
    security(("bearer_auth" = []))
)]
pub async fn create_villa_number(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillaNumberService>>,
    AppJson(dto): AppJson<VillaNumberCreateDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    let created = service.create(dto).await?;

    let location = format!("/api/v1/VillaNumberAPI/{}", created.villa_no);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::created(created)),
    )
        .into_response())
}

/// Replace a villa number (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/VillaNumberAPI/{villa_no}",
    params(("villa_no" = i32, Path, description = "Room number")),
    request_body = VillaNumberUpdateDto,
    responses(
        (status = 200, description = "Villa number replaced (envelope statusCode 204)", body = ApiResponse<VillaNumberDto>),
        (status = 400, description = "Validation failure, id mismatch or unknown villa id"),
        (status = 404, description = "Villa number not found")
    ),
    tag = "villa-numbers",
    security(("bearer_auth" = []))
)]
pub async fn update_villa_number(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillaNumberService>>,
    Path(villa_no): Path<i32>,
    AppJson(dto): AppJson<VillaNumberUpdateDto>,
) -> Result<Json<ApiResponse<VillaNumberDto>>> {
    if villa_no == 0 {
        return Err(AppError::BadRequest(
            "VillaNo must not be zero".to_string(),
        ));
    }
    if dto.villa_no != villa_no {
        return Err(AppError::BadRequest(format!(
            "VillaNo {} in body does not match {} in path",
            dto.villa_no, villa_no
        )));
    }
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    service.update(dto).await?;
    Ok(Json(ApiResponse::no_content()))
}

/// Delete a villa number (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/VillaNumberAPI/{villa_no}",
    params(("villa_no" = i32, Path, description = "Room number")),
    responses(
        (status = 200, description = "Villa number deleted (envelope statusCode 204)", body = ApiResponse<VillaNumberDto>),
        (status = 400, description = "Zero room number"),
        (status = 404, description = "Villa number not found")
    ),
    tag = "villa-numbers",
    security(("bearer_auth" = []))
)]
pub async fn delete_villa_number(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillaNumberService>>,
    Path(villa_no): Path<i32>,
) -> Result<Json<ApiResponse<VillaNumberDto>>> {
    if villa_no == 0 {
        return Err(AppError::BadRequest(
            "VillaNo must not be zero".to_string(),
        ));
    }

    service
        .remove(villa_no)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("VillaNumber {} not found", villa_no)))?;

    Ok(Json(ApiResponse::no_content()))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::shared::test_helpers::{admin_token, api_test_server, customer_token};

    async fn seed_villa(server: &TestServer, token: &str) -> i64 {
        let form = axum_test::multipart::MultipartForm::new()
            .add_text("name", "Villa A")
            .add_text("details", "Sea view")
            .add_text("rate", "100")
            .add_text("occupancy", "4")
            .add_text("sqft", "500")
            .add_text("amenity", "pool");
        let body: serde_json::Value = server
            .post("/api/v1/VillaAPI")
            .authorization_bearer(token)
            .multipart(form)
            .await
            .json();
        body["result"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn create_villa_number_embeds_owning_villa() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);
        let villa_id = seed_villa(&server, &token).await;

        let response = server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&json!({
                "villaNo": 101,
                "villaId": villa_id,
                "specialDetails": "corner unit"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        assert_eq!(
            response.headers().get("location").unwrap().to_str().unwrap(),
            "/api/v1/VillaNumberAPI/101"
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["result"]["villaNo"], 101);
        assert_eq!(body["result"]["villa"]["name"], "Villa A");
    }

    #[tokio::test]
    async fn create_rejects_unknown_villa_id() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);

        let response = server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&json!({ "villaNo": 101, "villaId": 9999 }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["errorMessages"][0], "Villa ID is invalid");
    }

    #[tokio::test]
    async fn create_duplicate_number_conflicts() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);
        let villa_id = seed_villa(&server, &token).await;

        let payload = json!({ "villaNo": 101, "villaId": villa_id });
        server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&payload)
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&payload)
            .await
            .assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn mutations_require_admin_role() {
        let (server, tokens) = api_test_server();

        server
            .post("/api/v1/VillaNumberAPI")
            .json(&json!({ "villaNo": 101, "villaId": 1 }))
            .await
            .assert_status_unauthorized();

        server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&customer_token(&tokens))
            .json(&json!({ "villaNo": 101, "villaId": 1 }))
            .await
            .assert_status_forbidden();
    }

    #[tokio::test]
    async fn update_replaces_details() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);
        let villa_id = seed_villa(&server, &token).await;

        server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&json!({ "villaNo": 101, "villaId": villa_id }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .put("/api/v1/VillaNumberAPI/101")
            .authorization_bearer(&token)
            .json(&json!({
                "villaNo": 101,
                "villaId": villa_id,
                "specialDetails": "renovated"
            }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["statusCode"], 204);

        let body: serde_json::Value = server.get("/api/v1/VillaNumberAPI/101").await.json();
        assert_eq!(body["result"]["specialDetails"], "renovated");
    }

    #[tokio::test]
    async fn update_rejects_number_mismatch() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);
        let villa_id = seed_villa(&server, &token).await;

        server
            .put("/api/v1/VillaNumberAPI/101")
            .authorization_bearer(&token)
            .json(&json!({ "villaNo": 102, "villaId": villa_id }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_and_delete_handle_zero_and_missing() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);

        server
            .get("/api/v1/VillaNumberAPI/0")
            .await
            .assert_status_bad_request();
        server
            .get("/api/v1/VillaNumberAPI/9999")
            .await
            .assert_status_not_found();
        server
            .delete("/api/v1/VillaNumberAPI/9999")
            .authorization_bearer(&token)
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let (server, tokens) = api_test_server();
        let token = admin_token(&tokens);
        let villa_id = seed_villa(&server, &token).await;

        server
            .post("/api/v1/VillaNumberAPI")
            .authorization_bearer(&token)
            .json(&json!({ "villaNo": 101, "villaId": villa_id }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .delete("/api/v1/VillaNumberAPI/101")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["statusCode"], 204);

        server
            .get("/api/v1/VillaNumberAPI/101")
            .await
            .assert_status_not_found();
    }
}
