use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use uuid::Uuid;

use crate::domain::{
    entities::users::{InsertUserEntity, UserEntity},
    errors::CoreError,
    repositories::users::UserRepository,
    value_objects::enums::user_roles::UserRole,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::app_users;

pub struct UserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepository for UserPostgres {
    async fn create(&self, insert_user_entity: InsertUserEntity) -> Result<Uuid, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = diesel::insert_into(app_users::table)
            .values(&insert_user_entity)
            .returning(app_users::id)
            .get_result::<Uuid>(&mut conn);

        match result {
            Ok(user_id) => Ok(user_id),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(CoreError::Conflict("username already taken".to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<UserEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        app_users::table
            .find(user_id)
            .select(UserEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(CoreError::UserNotFound(user_id))
    }

    async fn find_by_username(&self, username: String) -> Result<Option<UserEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let user = app_users::table
            .filter(app_users::username.eq(username))
            .select(UserEntity::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let users = app_users::table
            .order(app_users::created_at.desc())
            .select(UserEntity::as_select())
            .load(&mut conn)?;

        Ok(users)
    }

    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<UserEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(app_users::table.find(user_id))
            .set((
                app_users::role.eq(role.to_string()),
                app_users::updated_at.eq(Utc::now()),
            ))
            .returning(UserEntity::as_returning())
            .get_result(&mut conn)
            .optional()?
            .ok_or(CoreError::UserNotFound(user_id))
    }
}
