use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::{InsertUserEntity, UserEntity};
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::user_roles::UserRole;

#[automock]
#[async_trait]
pub trait UserRepository {
    async fn create(&self, insert_user_entity: InsertUserEntity) -> Result<Uuid, CoreError>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserEntity, CoreError>;
    async fn find_by_username(&self, username: String) -> Result<Option<UserEntity>, CoreError>;
    async fn list(&self) -> Result<Vec<UserEntity>, CoreError>;
    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<UserEntity, CoreError>;
}
