use std::sync::Arc;

use serde_json::{json, Value};

use crate::modules::gateway::api_client::{ApiClient, ApiRequest};
use crate::shared::types::ApiResponse;

/// Villa endpoints as seen from the front-end side.
pub struct VillaGateway {
    client: Arc<ApiClient>,
}

impl VillaGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResponse<Value> {
        self.client.send(ApiRequest::get("/api/v1/VillaAPI")).await
    }

    pub async fn get(&self, id: i32) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::get(format!("/api/v1/VillaAPI/{}", id)))
            .await
    }

    pub async fn delete(&self, id: i32) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::delete(format!("/api/v1/VillaAPI/{}", id)).with_bearer())
            .await
    }
}

/// Villa number endpoints as seen from the front-end side.
pub struct VillaNumberGateway {
    client: Arc<ApiClient>,
}

impl VillaNumberGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::get("/api/v1/VillaNumberAPI"))
            .await
    }

    pub async fn get(&self, villa_no: i32) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::get(format!("/api/v1/VillaNumberAPI/{}", villa_no)))
            .await
    }

    pub async fn create(&self, data: Value) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::post("/api/v1/VillaNumberAPI", data).with_bearer())
            .await
    }

    pub async fn update(&self, villa_no: i32, data: Value) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::put(format!("/api/v1/VillaNumberAPI/{}", villa_no), data).with_bearer())
            .await
    }

    pub async fn delete(&self, villa_no: i32) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::delete(format!("/api/v1/VillaNumberAPI/{}", villa_no)).with_bearer())
            .await
    }
}

/// Auth endpoints as seen from the front-end side. A successful login
/// stores the returned token on the shared client for later bearer calls.
pub struct AuthGateway {
    client: Arc<ApiClient>,
}

impl AuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(
        &self,
        user_name: &str,
        password: &str,
        name: &str,
        role: &str,
    ) -> ApiResponse<Value> {
        self.client
            .send(ApiRequest::post(
                "/api/v1/UserAPI/register",
                json!({
                    "userName": user_name,
                    "password": password,
                    "name": name,
                    "role": role,
                }),
            ))
            .await
    }

    pub async fn login(&self, user_name: &str, password: &str) -> ApiResponse<Value> {
        let response = self
            .client
            .send(ApiRequest::post(
                "/api/v1/UserAPI/login",
                json!({ "userName": user_name, "password": password }),
            ))
            .await;

        if response.is_success {
            if let Some(token) = response
                .result
                .as_ref()
                .and_then(|r| r["token"].as_str())
            {
                self.client.set_token(token);
            }
        }
        response
    }

    pub fn logout(&self) {
        self.client.clear_token();
    }
}
