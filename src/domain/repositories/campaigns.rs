use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::campaign_updates::CampaignUpdateEntity;
use crate::domain::entities::campaigns::{
    CampaignEntity, EditCampaignEntity, InsertCampaignEntity,
};
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::{
    campaign_categories::CampaignCategory, campaign_statuses::CampaignStatus,
    sort_order::SortOrder,
};

#[automock]
#[async_trait]
pub trait CampaignRepository {
    async fn create(&self, insert_campaign_entity: InsertCampaignEntity)
    -> Result<i64, CoreError>;
    async fn find_by_id(&self, campaign_id: i64) -> Result<CampaignEntity, CoreError>;
    async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<CampaignEntity>, CoreError>;
    async fn search_by_title(&self, title: String) -> Result<Vec<CampaignEntity>, CoreError>;
    async fn list(
        &self,
        page: i64,
        per_page: i64,
        category: Option<CampaignCategory>,
        status: Option<CampaignStatus>,
        sort_order: SortOrder,
    ) -> Result<Vec<CampaignEntity>, CoreError>;
    /// Applies the edit and records the change log entry in one transaction.
    async fn update_fields(
        &self,
        campaign_id: i64,
        edit_campaign_entity: EditCampaignEntity,
        change_log: String,
    ) -> Result<CampaignEntity, CoreError>;
    /// Administrative status move; the transition table is enforced under
    /// the campaign row lock and the change is recorded as a campaign
    /// update. A same-status call is a no-op.
    async fn admin_set_status(
        &self,
        campaign_id: i64,
        new_status: CampaignStatus,
    ) -> Result<CampaignEntity, CoreError>;
    async fn delete(&self, campaign_id: i64) -> Result<(), CoreError>;
    /// Goal minus pending+completed donation amounts, floored at zero.
    async fn available_capacity(&self, campaign_id: i64) -> Result<i64, CoreError>;
    async fn list_updates(&self, campaign_id: i64)
    -> Result<Vec<CampaignUpdateEntity>, CoreError>;
}
