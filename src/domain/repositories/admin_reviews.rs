use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::admin_reviews::{AdminReviewEntity, InsertAdminReviewEntity};
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::review_decisions::ReviewDecision;

#[automock]
#[async_trait]
pub trait AdminReviewRepository {
    async fn create(
        &self,
        insert_admin_review_entity: InsertAdminReviewEntity,
    ) -> Result<AdminReviewEntity, CoreError>;
    async fn find_by_id(&self, review_id: i64) -> Result<AdminReviewEntity, CoreError>;
    async fn list_by_admin(&self, admin_id: Uuid) -> Result<Vec<AdminReviewEntity>, CoreError>;
    async fn list_by_campaign(&self, campaign_id: i64)
    -> Result<Vec<AdminReviewEntity>, CoreError>;
    async fn update(
        &self,
        review_id: i64,
        decision: Option<ReviewDecision>,
        comments: Option<String>,
    ) -> Result<AdminReviewEntity, CoreError>;
    async fn delete(&self, review_id: i64) -> Result<(), CoreError>;
}
