use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::repository::Repository;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, RegisterRequestDto, UserDto};
use crate::features::auth::model::LocalUser;
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::auth::services::TokenService;
use crate::shared::constants::{ROLE_ADMIN, ROLE_CUSTOMER};

/// Credential check, token issuance and uniqueness check over local users.
pub struct AuthService {
    users: Repository<LocalUser>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Repository<LocalUser>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// True iff no existing user has that username (case-sensitive exact
    /// match).
    pub async fn is_unique_user(&self, username: &str) -> bool {
        self.users
            .get_one(|u| u.user_name == username)
            .await
            .is_none()
    }

    /// Case-insensitive username match plus constant-time password check.
    ///
    /// A mismatch of either field yields `Ok(None)` rather than an error; the
    /// handler maps that to one undifferentiated 400 so the response does not
    /// leak which field was wrong.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<Option<LoginResponseDto>> {
        let wanted = dto.user_name.to_lowercase();
        let user = self
            .users
            .get_one(|u| u.user_name.to_lowercase() == wanted)
            .await;

        let Some(user) = user else {
            return Ok(None);
        };

        if !verify_password(&dto.password, &user.password_hash) {
            return Ok(None);
        }

        let token = self.tokens.issue_token(user.id, &user.role)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(Some(LoginResponseDto {
            token,
            user: user.into(),
        }))
    }

    /// Insert a new user. The stored record holds only the salted hash and
    /// the returned DTO never echoes the password.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<UserDto> {
        if dto.role != ROLE_ADMIN && dto.role != ROLE_CUSTOMER {
            return Err(AppError::validation(format!(
                "Role must be '{}' or '{}'",
                ROLE_ADMIN, ROLE_CUSTOMER
            )));
        }

        if !self.is_unique_user(&dto.user_name).await {
            return Err(AppError::Auth("Username already exists".to_string()));
        }

        let user = self
            .users
            .create(LocalUser {
                id: 0,
                user_name: dto.user_name,
                password_hash: hash_password(&dto.password),
                name: dto.name,
                role: dto.role,
            })
            .await
            .map_err(|_| AppError::Auth("Error while registering".to_string()))?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;

    fn service() -> AuthService {
        let tokens = Arc::new(TokenService::new(AuthConfig {
            secret: "test-secret-at-least-32-characters!!".to_string(),
            token_validity_days: 7,
            jwt_leeway_secs: 60,
        }));
        AuthService::new(Repository::new(), tokens)
    }

    fn register_dto(user_name: &str, role: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            user_name: user_name.to_string(),
            password: "secret99".to_string(),
            name: "Test User".to_string(),
            role: role.to_string(),
        }
    }

    fn login_dto(user_name: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_returns_user_without_password() {
        let svc = service();
        let user = svc.register(register_dto("alice", ROLE_ADMIN)).await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.user_name, "alice");
        assert_eq!(user.role, ROLE_ADMIN);
    }

    #[tokio::test]
    async fn register_rejects_unknown_role() {
        let svc = service();
        let err = svc
            .register(register_dto("alice", "superuser"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn duplicate_username_fails_without_mutating_store() {
        let svc = service();
        svc.register(register_dto("alice", ROLE_CUSTOMER)).await.unwrap();

        let err = svc
            .register(register_dto("alice", ROLE_CUSTOMER))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(svc.users.count().await, 1);

        // Uniqueness is case-sensitive: "Alice" is a different username.
        assert!(svc.is_unique_user("Alice").await);
        svc.register(register_dto("Alice", ROLE_CUSTOMER)).await.unwrap();
    }

    #[tokio::test]
    async fn login_accepts_any_username_case() {
        let svc = service();
        svc.register(register_dto("alice", ROLE_ADMIN)).await.unwrap();

        let response = svc
            .login(login_dto("ALICE", "secret99"))
            .await
            .unwrap()
            .expect("credentials should match");
        assert!(!response.token.is_empty());
        assert_eq!(response.user.user_name, "alice");
    }

    #[tokio::test]
    async fn login_mismatch_returns_empty_result_not_error() {
        let svc = service();
        svc.register(register_dto("alice", ROLE_ADMIN)).await.unwrap();

        // Wrong username.
        assert!(svc.login(login_dto("bob", "secret99")).await.unwrap().is_none());
        // Wrong password.
        assert!(svc.login(login_dto("alice", "wrong")).await.unwrap().is_none());
        // Passwords stay case-sensitive even though usernames do not.
        assert!(svc.login(login_dto("alice", "SECRET99")).await.unwrap().is_none());
    }
}
