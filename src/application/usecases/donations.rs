use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    errors::CoreError,
    repositories::donations::DonationRepository,
    value_objects::donations::{DonationModel, InsertDonationModel, UpdateDonationStatusModel},
    value_objects::enums::donation_statuses::DonationStatus,
};

pub struct DonationUseCase<T>
where
    T: DonationRepository + Send + Sync,
{
    donation_repository: Arc<T>,
}

impl<T> DonationUseCase<T>
where
    T: DonationRepository + Send + Sync,
{
    pub fn new(donation_repository: Arc<T>) -> Self {
        Self {
            donation_repository,
        }
    }

    pub async fn create(
        &self,
        donor_id: Uuid,
        insert_donation_model: InsertDonationModel,
    ) -> Result<DonationModel, CoreError> {
        if insert_donation_model.amount_minor <= 0 {
            warn!(
                %donor_id,
                amount_minor = insert_donation_model.amount_minor,
                "donations: rejected non-positive amount"
            );
            return Err(CoreError::InvalidAmount);
        }

        let donation = self
            .donation_repository
            .create(
                donor_id,
                insert_donation_model.campaign_id,
                insert_donation_model.amount_minor,
            )
            .await
            .map_err(|err| {
                warn!(
                    %donor_id,
                    campaign_id = insert_donation_model.campaign_id,
                    error = %err,
                    "donations: admission failed"
                );
                err
            })?;

        info!(
            donation_id = donation.id,
            campaign_id = donation.campaign_id,
            amount_minor = donation.amount_minor,
            "donations: pending donation admitted"
        );

        DonationModel::try_from(donation)
    }

    pub async fn view(&self, donation_id: i64) -> Result<DonationModel, CoreError> {
        let donation = self.donation_repository.find_by_id(donation_id).await?;
        DonationModel::try_from(donation)
    }

    pub async fn list_by_donor(&self, donor_id: Uuid) -> Result<Vec<DonationModel>, CoreError> {
        let donations = self.donation_repository.list_by_donor(donor_id).await?;
        donations.into_iter().map(DonationModel::try_from).collect()
    }

    pub async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<DonationModel>, CoreError> {
        let donations = self
            .donation_repository
            .list_by_campaign(campaign_id)
            .await?;
        donations.into_iter().map(DonationModel::try_from).collect()
    }

    pub async fn cancel(&self, donation_id: i64) -> Result<DonationModel, CoreError> {
        let donation = self
            .donation_repository
            .cancel(donation_id)
            .await
            .map_err(|err| {
                warn!(donation_id, error = %err, "donations: cancel refused");
                err
            })?;

        info!(donation_id, "donations: donation cancelled");
        DonationModel::try_from(donation)
    }

    /// Caller-supplied status change. Parsing happens here, once; moving a
    /// donation into `completed` is reserved for payment reconciliation
    /// and is rejected below the repository boundary as well.
    pub async fn set_status(
        &self,
        donation_id: i64,
        update_donation_status_model: UpdateDonationStatusModel,
    ) -> Result<DonationModel, CoreError> {
        let new_status: DonationStatus = update_donation_status_model.status.parse()?;

        let donation = self
            .donation_repository
            .set_status(donation_id, new_status)
            .await
            .map_err(|err| {
                warn!(
                    donation_id,
                    new_status = %new_status,
                    error = %err,
                    "donations: status change refused"
                );
                err
            })?;

        info!(donation_id, status = %new_status, "donations: status changed");
        DonationModel::try_from(donation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::donations::DonationEntity;
    use crate::domain::repositories::donations::MockDonationRepository;
    use chrono::Utc;

    fn pending_donation(id: i64, campaign_id: i64, amount_minor: i32) -> DonationEntity {
        DonationEntity {
            id,
            donor_id: Uuid::new_v4(),
            campaign_id,
            amount_minor,
            status: DonationStatus::Pending.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_rejects_non_positive_amount_without_touching_storage() {
        let mut mock = MockDonationRepository::new();
        mock.expect_create().never();

        let usecase = DonationUseCase::new(Arc::new(mock));
        let result = usecase
            .create(
                Uuid::new_v4(),
                InsertDonationModel {
                    campaign_id: 1,
                    amount_minor: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::InvalidAmount)));
    }

    #[tokio::test]
    async fn create_returns_pending_donation() {
        let mut mock = MockDonationRepository::new();
        mock.expect_create()
            .withf(|_, campaign_id, amount| *campaign_id == 7 && *amount == 400_00)
            .returning(|_, campaign_id, amount| Ok(pending_donation(1, campaign_id, amount)));

        let usecase = DonationUseCase::new(Arc::new(mock));
        let donation = usecase
            .create(
                Uuid::new_v4(),
                InsertDonationModel {
                    campaign_id: 7,
                    amount_minor: 400_00,
                },
            )
            .await
            .unwrap();

        assert_eq!(donation.status, DonationStatus::Pending);
        assert_eq!(donation.amount_minor, 400_00);
    }

    #[tokio::test]
    async fn create_propagates_capacity_refusal() {
        let mut mock = MockDonationRepository::new();
        mock.expect_create().returning(|_, _, _| {
            Err(CoreError::ExceedsRemainingGoal {
                available_minor: 600_00,
            })
        });

        let usecase = DonationUseCase::new(Arc::new(mock));
        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertDonationModel {
                    campaign_id: 7,
                    amount_minor: 700_00,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::ExceedsRemainingGoal {
                available_minor: 600_00
            }
        ));
        assert!(err.to_string().contains("60000"));
    }

    #[tokio::test]
    async fn cancel_propagates_completed_conflict() {
        let mut mock = MockDonationRepository::new();
        mock.expect_cancel()
            .returning(|_| Err(CoreError::DonationAlreadyCompleted));

        let usecase = DonationUseCase::new(Arc::new(mock));
        let err = usecase.cancel(3).await.unwrap_err();
        assert!(matches!(err, CoreError::DonationAlreadyCompleted));
    }

    #[tokio::test]
    async fn set_status_rejects_unknown_values_before_storage() {
        let mut mock = MockDonationRepository::new();
        mock.expect_set_status().never();

        let usecase = DonationUseCase::new(Arc::new(mock));
        let err = usecase
            .set_status(
                3,
                UpdateDonationStatusModel {
                    status: "archived".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));
    }

    #[tokio::test]
    async fn set_status_propagates_manual_completion_guard() {
        let mut mock = MockDonationRepository::new();
        mock.expect_set_status()
            .withf(|_, status| *status == DonationStatus::Completed)
            .returning(|_, _| Err(CoreError::ManualCompletionRejected));

        let usecase = DonationUseCase::new(Arc::new(mock));
        let err = usecase
            .set_status(
                3,
                UpdateDonationStatusModel {
                    status: "completed".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ManualCompletionRejected));
    }
}
