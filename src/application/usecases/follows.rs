use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::follows::InsertFollowEntity,
    errors::CoreError,
    repositories::follows::FollowRepository,
    value_objects::campaigns::CampaignModel,
    value_objects::follows::{FollowModel, InsertFollowModel},
};

pub struct FollowUseCase<T>
where
    T: FollowRepository + Send + Sync,
{
    follow_repository: Arc<T>,
}

impl<T> FollowUseCase<T>
where
    T: FollowRepository + Send + Sync,
{
    pub fn new(follow_repository: Arc<T>) -> Self {
        Self { follow_repository }
    }

    pub async fn follow(
        &self,
        user_id: Uuid,
        insert_follow_model: InsertFollowModel,
    ) -> Result<FollowModel, CoreError> {
        let follow = self
            .follow_repository
            .follow(InsertFollowEntity {
                user_id,
                campaign_id: insert_follow_model.campaign_id,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            %user_id,
            campaign_id = follow.campaign_id,
            "follows: campaign followed"
        );
        Ok(FollowModel::from(follow))
    }

    pub async fn unfollow(&self, user_id: Uuid, campaign_id: i64) -> Result<(), CoreError> {
        self.follow_repository.unfollow(user_id, campaign_id).await?;
        info!(%user_id, campaign_id, "follows: campaign unfollowed");
        Ok(())
    }

    pub async fn list_followed_campaigns(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CampaignModel>, CoreError> {
        let campaigns = self
            .follow_repository
            .list_followed_campaigns(user_id)
            .await?;
        campaigns.into_iter().map(CampaignModel::try_from).collect()
    }
}
