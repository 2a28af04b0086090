use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::admin_reviews::AdminReviewEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::review_decisions::ReviewDecision;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminReviewModel {
    pub id: i64,
    pub admin_id: Uuid,
    pub campaign_id: i64,
    pub decision: ReviewDecision,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AdminReviewEntity> for AdminReviewModel {
    type Error = CoreError;

    fn try_from(entity: AdminReviewEntity) -> Result<Self, Self::Error> {
        Ok(AdminReviewModel {
            id: entity.id,
            admin_id: entity.admin_id,
            campaign_id: entity.campaign_id,
            decision: entity.decision.parse()?,
            comments: entity.comments,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertAdminReviewModel {
    pub campaign_id: i64,
    pub decision: String,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAdminReviewModel {
    pub decision: Option<String>,
    pub comments: Option<String>,
}
