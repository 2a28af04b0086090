use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth;
use crate::domain::{
    entities::users::InsertUserEntity,
    errors::CoreError,
    repositories::users::UserRepository,
    value_objects::enums::user_roles::UserRole,
    value_objects::users::{
        AuthenticatedModel, LoginModel, RegisterUserModel, UpdateUserRoleModel, UserModel,
    },
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct UserUseCase<T>
where
    T: UserRepository + Send + Sync,
{
    user_repository: Arc<T>,
}

impl<T> UserUseCase<T>
where
    T: UserRepository + Send + Sync,
{
    pub fn new(user_repository: Arc<T>) -> Self {
        Self { user_repository }
    }

    pub async fn register(
        &self,
        register_user_model: RegisterUserModel,
    ) -> Result<UserModel, CoreError> {
        if register_user_model.username.trim().is_empty() {
            return Err(CoreError::Validation("username cannot be empty".to_string()));
        }
        if register_user_model.email.trim().is_empty() {
            return Err(CoreError::Validation("email cannot be empty".to_string()));
        }
        if register_user_model.password.len() < MIN_PASSWORD_LEN {
            return Err(CoreError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        let role: UserRole = register_user_model.role.parse()?;

        if self
            .user_repository
            .find_by_username(register_user_model.username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("username already taken".to_string()));
        }

        let password_hash = auth::hash_password(&register_user_model.password)?;
        let now = Utc::now();

        let user_id = self
            .user_repository
            .create(InsertUserEntity {
                username: register_user_model.username,
                email: register_user_model.email,
                password_hash,
                role: role.to_string(),
                profile_image: None,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(%user_id, role = %role, "users: registered");

        let user = self.user_repository.find_by_id(user_id).await?;
        UserModel::try_from(user)
    }

    pub async fn login(&self, login_model: LoginModel) -> Result<AuthenticatedModel, CoreError> {
        let user = self
            .user_repository
            .find_by_username(login_model.username.clone())
            .await?
            .ok_or_else(|| {
                warn!(username = %login_model.username, "users: login with unknown username");
                CoreError::Unauthorized("invalid username or password".to_string())
            })?;

        if !auth::verify_password(&login_model.password, &user.password_hash)? {
            warn!(user_id = %user.id, "users: login with wrong password");
            return Err(CoreError::Unauthorized(
                "invalid username or password".to_string(),
            ));
        }

        let role: UserRole = user.role.parse()?;
        let (access_token, refresh_token) = auth::generate_tokens(user.id, role)?;

        info!(user_id = %user.id, "users: logged in");

        Ok(AuthenticatedModel {
            user: UserModel::try_from(user)?,
            access_token,
            refresh_token,
        })
    }

    /// Exchanges a valid refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthenticatedModel, CoreError> {
        let claims = auth::validate_refresh_token(refresh_token)
            .map_err(|_| CoreError::Unauthorized("invalid refresh token".to_string()))?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| CoreError::Unauthorized("invalid refresh token".to_string()))?;

        let user = self.user_repository.find_by_id(user_id).await?;
        let role: UserRole = user.role.parse()?;
        let (access_token, refresh_token) = auth::generate_tokens(user.id, role)?;

        Ok(AuthenticatedModel {
            user: UserModel::try_from(user)?,
            access_token,
            refresh_token,
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserModel, CoreError> {
        let user = self.user_repository.find_by_id(user_id).await?;
        UserModel::try_from(user)
    }

    pub async fn list(&self) -> Result<Vec<UserModel>, CoreError> {
        let users = self.user_repository.list().await?;
        users.into_iter().map(UserModel::try_from).collect()
    }

    pub async fn update_role(
        &self,
        user_id: Uuid,
        update_user_role_model: UpdateUserRoleModel,
    ) -> Result<UserModel, CoreError> {
        let role: UserRole = update_user_role_model.role.parse()?;

        let user = self.user_repository.update_role(user_id, role).await?;
        info!(%user_id, role = %role, "users: role updated");
        UserModel::try_from(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::users::MockUserRepository;

    fn user(id: Uuid, username: &str, password_hash: &str, role: UserRole) -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: password_hash.to_string(),
            role: role.to_string(),
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn register_rejects_taken_username() {
        let existing = user(Uuid::new_v4(), "alex", "hash", UserRole::Donor);
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_username()
            .returning(move |_| Ok(Some(existing.clone())));
        mock.expect_create().never();

        let usecase = UserUseCase::new(Arc::new(mock));
        let err = usecase
            .register(RegisterUserModel {
                username: "alex".to_string(),
                email: "alex@example.com".to_string(),
                password: "longenoughpw".to_string(),
                role: "donor".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_username().never();

        let usecase = UserUseCase::new(Arc::new(mock));
        let err = usecase
            .register(RegisterUserModel {
                username: "alex".to_string(),
                email: "alex@example.com".to_string(),
                password: "short".to_string(),
                role: "donor".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let password_hash = auth::hash_password("correct-horse").unwrap();
        let stored = user(Uuid::new_v4(), "alex", &password_hash, UserRole::Donor);

        let mut mock = MockUserRepository::new();
        mock.expect_find_by_username()
            .returning(move |_| Ok(Some(stored.clone())));

        let usecase = UserUseCase::new(Arc::new(mock));
        let err = usecase
            .login(LoginModel {
                username: "alex".to_string(),
                password: "battery-staple".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn update_role_parses_role_once() {
        let mut mock = MockUserRepository::new();
        mock.expect_update_role().never();

        let usecase = UserUseCase::new(Arc::new(mock));
        let err = usecase
            .update_role(
                Uuid::new_v4(),
                UpdateUserRoleModel {
                    role: "superuser".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));
    }
}
