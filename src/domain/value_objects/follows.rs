use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::follows::FollowEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowModel {
    pub id: i64,
    pub user_id: Uuid,
    pub campaign_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<FollowEntity> for FollowModel {
    fn from(entity: FollowEntity) -> Self {
        FollowModel {
            id: entity.id,
            user_id: entity.user_id,
            campaign_id: entity.campaign_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertFollowModel {
    pub campaign_id: i64,
}
