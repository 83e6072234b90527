use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Issues and validates the HS256 bearer tokens that gate admin-only
/// operations. Tokens embed the user id (`sub`) and role and are valid for a
/// fixed window from issuance.
pub struct TokenService {
    secret: String,
    validity: Duration,
    leeway: u64,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            secret: config.secret,
            validity: Duration::days(config.token_validity_days),
            leeway: config.jwt_leeway_secs,
        }
    }

    pub fn issue_token(&self, user_id: i32, role: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as u64,
            exp: (now + self.validity).timestamp() as u64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;
        let id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized("Invalid subject claim".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            role: claims.role,
        })
    }
}
