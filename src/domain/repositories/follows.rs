use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::campaigns::CampaignEntity;
use crate::domain::entities::follows::{FollowEntity, InsertFollowEntity};
use crate::domain::errors::CoreError;

#[automock]
#[async_trait]
pub trait FollowRepository {
    async fn follow(&self, insert_follow_entity: InsertFollowEntity)
    -> Result<FollowEntity, CoreError>;
    async fn unfollow(&self, user_id: Uuid, campaign_id: i64) -> Result<(), CoreError>;
    async fn list_followed_campaigns(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CampaignEntity>, CoreError>;
}
