use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::UserEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserEntity> for UserModel {
    type Error = CoreError;

    fn try_from(entity: UserEntity) -> Result<Self, Self::Error> {
        Ok(UserModel {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role.parse()?,
            profile_image: entity.profile_image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Compact author/donor reference embedded in other responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub user_id: Uuid,
    pub username: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserModel {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginModel {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedModel {
    pub user: UserModel,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRoleModel {
    pub role: String,
}
