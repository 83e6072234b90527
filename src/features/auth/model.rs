use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::repository::Keyed;
use crate::shared::constants::ROLE_ADMIN;

/// Persisted user record. The password is stored only as a salted hash and
/// never leaves the auth service boundary.
#[derive(Debug, Clone)]
pub struct LocalUser {
    pub id: i32,
    pub user_name: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
}

impl Keyed for LocalUser {
    const AUTO_KEY: bool = true;
    const ENTITY: &'static str = "User";

    fn key(&self) -> i32 {
        self.id
    }

    fn set_key(&mut self, key: i32) {
        self.id = key;
    }
}

/// Identity attached to the request by the auth middleware after token
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// JWT claims: user identifier and role, with a fixed validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}
