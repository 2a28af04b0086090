use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use uuid::Uuid;

use crate::domain::{
    entities::campaigns::CampaignEntity,
    entities::follows::{FollowEntity, InsertFollowEntity},
    errors::CoreError,
    repositories::follows::FollowRepository,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{campaigns, follows};

pub struct FollowPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl FollowPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl FollowRepository for FollowPostgres {
    async fn follow(
        &self,
        insert_follow_entity: InsertFollowEntity,
    ) -> Result<FollowEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = diesel::insert_into(follows::table)
            .values(&insert_follow_entity)
            .returning(FollowEntity::as_returning())
            .get_result(&mut conn);

        match result {
            Ok(follow) => Ok(follow),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(CoreError::Conflict(
                    "already following this campaign".to_string(),
                ))
            }
            Err(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                _,
            )) => Err(CoreError::CampaignNotFound(insert_follow_entity.campaign_id)),
            Err(error) => Err(error.into()),
        }
    }

    async fn unfollow(&self, user_id: Uuid, campaign_id: i64) -> Result<(), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = diesel::delete(
            follows::table
                .filter(follows::user_id.eq(user_id))
                .filter(follows::campaign_id.eq(campaign_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(CoreError::NotFound(format!(
                "no follow found for campaign {}",
                campaign_id
            )));
        }
        Ok(())
    }

    async fn list_followed_campaigns(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CampaignEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let campaigns = follows::table
            .inner_join(campaigns::table)
            .filter(follows::user_id.eq(user_id))
            .order(follows::created_at.desc())
            .select(CampaignEntity::as_select())
            .load(&mut conn)?;

        Ok(campaigns)
    }
}
