use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::donations::DonationEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::donation_statuses::DonationStatus;

#[automock]
#[async_trait]
pub trait DonationRepository {
    /// Admits the donation against the campaign's remaining capacity and
    /// inserts it as `pending`. The capacity check and the insert run in
    /// one transaction with the campaign row locked, so two concurrent
    /// donations cannot both pass the check.
    async fn create(
        &self,
        donor_id: Uuid,
        campaign_id: i64,
        amount_minor: i32,
    ) -> Result<DonationEntity, CoreError>;
    async fn find_by_id(&self, donation_id: i64) -> Result<DonationEntity, CoreError>;
    async fn list_by_donor(&self, donor_id: Uuid) -> Result<Vec<DonationEntity>, CoreError>;
    async fn list_by_campaign(&self, campaign_id: i64) -> Result<Vec<DonationEntity>, CoreError>;
    /// Moves a non-completed donation to `cancelled`.
    async fn cancel(&self, donation_id: i64) -> Result<DonationEntity, CoreError>;
    /// Caller-supplied status change; transitions into `completed` are
    /// rejected here, that edge belongs to payment reconciliation.
    async fn set_status(
        &self,
        donation_id: i64,
        new_status: DonationStatus,
    ) -> Result<DonationEntity, CoreError>;
}
