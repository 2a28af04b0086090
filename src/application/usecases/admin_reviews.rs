use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::admin_reviews::InsertAdminReviewEntity,
    errors::CoreError,
    notification::{ReviewEvent, ReviewEventSink},
    repositories::{admin_reviews::AdminReviewRepository, campaigns::CampaignRepository},
    value_objects::admin_reviews::{
        AdminReviewModel, InsertAdminReviewModel, UpdateAdminReviewModel,
    },
    value_objects::enums::review_decisions::ReviewDecision,
};

pub struct AdminReviewUseCase<R, C>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    admin_review_repository: Arc<R>,
    campaign_repository: Arc<C>,
    review_event_sink: Arc<dyn ReviewEventSink>,
}

impl<R, C> AdminReviewUseCase<R, C>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    pub fn new(
        admin_review_repository: Arc<R>,
        campaign_repository: Arc<C>,
        review_event_sink: Arc<dyn ReviewEventSink>,
    ) -> Self {
        Self {
            admin_review_repository,
            campaign_repository,
            review_event_sink,
        }
    }

    /// Records an admin decision. The campaign transition runs first and
    /// enforces the transition table; the review row is written after it,
    /// then the event is emitted. Event delivery is fire-and-forget and
    /// cannot fail this operation.
    pub async fn create(
        &self,
        admin_id: Uuid,
        insert_admin_review_model: InsertAdminReviewModel,
    ) -> Result<AdminReviewModel, CoreError> {
        let decision: ReviewDecision = insert_admin_review_model.decision.parse()?;

        let campaign = self
            .campaign_repository
            .admin_set_status(insert_admin_review_model.campaign_id, decision.target_status())
            .await
            .map_err(|err| {
                warn!(
                    campaign_id = insert_admin_review_model.campaign_id,
                    decision = %decision,
                    error = %err,
                    "admin_reviews: campaign transition refused"
                );
                err
            })?;

        let review = self
            .admin_review_repository
            .create(InsertAdminReviewEntity {
                admin_id,
                campaign_id: campaign.id,
                decision: decision.to_string(),
                comments: insert_admin_review_model.comments,
                created_at: Utc::now(),
            })
            .await
            .map_err(|err| {
                error!(
                    campaign_id = campaign.id,
                    db_error = ?err,
                    "admin_reviews: campaign transitioned but review record failed"
                );
                err
            })?;

        info!(
            review_id = review.id,
            campaign_id = campaign.id,
            decision = %decision,
            "admin_reviews: decision recorded"
        );

        if matches!(decision, ReviewDecision::Approved | ReviewDecision::Rejected) {
            self.review_event_sink.review_decided(ReviewEvent {
                campaign_id: campaign.id,
                campaign_title: campaign.title,
                decision,
                reviewed_at: review.created_at,
            });
        }

        AdminReviewModel::try_from(review)
    }

    pub async fn view(&self, review_id: i64) -> Result<AdminReviewModel, CoreError> {
        let review = self.admin_review_repository.find_by_id(review_id).await?;
        AdminReviewModel::try_from(review)
    }

    pub async fn list_by_admin(&self, admin_id: Uuid) -> Result<Vec<AdminReviewModel>, CoreError> {
        let reviews = self.admin_review_repository.list_by_admin(admin_id).await?;
        reviews.into_iter().map(AdminReviewModel::try_from).collect()
    }

    pub async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<AdminReviewModel>, CoreError> {
        let reviews = self
            .admin_review_repository
            .list_by_campaign(campaign_id)
            .await?;
        reviews.into_iter().map(AdminReviewModel::try_from).collect()
    }

    /// Edits the review record only; re-deciding a campaign goes through
    /// `create` so the transition table and event hook stay involved.
    pub async fn update(
        &self,
        review_id: i64,
        update_admin_review_model: UpdateAdminReviewModel,
    ) -> Result<AdminReviewModel, CoreError> {
        let decision = update_admin_review_model
            .decision
            .as_deref()
            .map(str::parse::<ReviewDecision>)
            .transpose()?;

        let review = self
            .admin_review_repository
            .update(review_id, decision, update_admin_review_model.comments)
            .await?;
        AdminReviewModel::try_from(review)
    }

    pub async fn delete(&self, review_id: i64) -> Result<(), CoreError> {
        self.admin_review_repository.delete(review_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::admin_reviews::AdminReviewEntity;
    use crate::domain::entities::campaigns::CampaignEntity;
    use crate::domain::notification::MockReviewEventSink;
    use crate::domain::repositories::admin_reviews::MockAdminReviewRepository;
    use crate::domain::repositories::campaigns::MockCampaignRepository;
    use crate::domain::value_objects::enums::campaign_categories::CampaignCategory;
    use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;

    fn campaign(id: i64, status: CampaignStatus) -> CampaignEntity {
        let now = Utc::now();
        CampaignEntity {
            id,
            creator_id: Uuid::new_v4(),
            title: "Shelter roof".to_string(),
            description: "Fix the roof".to_string(),
            category: CampaignCategory::Animals.to_string(),
            goal_minor: 500_00,
            raised_minor: 0,
            status: status.to_string(),
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn review(id: i64, campaign_id: i64, decision: ReviewDecision) -> AdminReviewEntity {
        AdminReviewEntity {
            id,
            admin_id: Uuid::new_v4(),
            campaign_id,
            decision: decision.to_string(),
            comments: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn approval_transitions_campaign_and_emits_event() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_admin_set_status()
            .withf(|_, status| *status == CampaignStatus::Active)
            .returning(|id, _| Ok(campaign(id, CampaignStatus::Active)));

        let mut reviews = MockAdminReviewRepository::new();
        reviews
            .expect_create()
            .returning(|entity| Ok(review(1, entity.campaign_id, ReviewDecision::Approved)));

        let mut sink = MockReviewEventSink::new();
        sink.expect_review_decided()
            .withf(|event| event.decision == ReviewDecision::Approved && event.campaign_id == 7)
            .times(1)
            .return_const(());

        let usecase =
            AdminReviewUseCase::new(Arc::new(reviews), Arc::new(campaigns), Arc::new(sink));
        let created = usecase
            .create(
                Uuid::new_v4(),
                InsertAdminReviewModel {
                    campaign_id: 7,
                    decision: "approved".to_string(),
                    comments: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.decision, ReviewDecision::Approved);
    }

    #[tokio::test]
    async fn refused_transition_records_no_review_and_no_event() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_admin_set_status().returning(|_, to| {
            Err(CoreError::InvalidStatusTransition {
                from: CampaignStatus::Completed,
                to,
            })
        });

        let mut reviews = MockAdminReviewRepository::new();
        reviews.expect_create().never();

        let mut sink = MockReviewEventSink::new();
        sink.expect_review_decided().never();

        let usecase =
            AdminReviewUseCase::new(Arc::new(reviews), Arc::new(campaigns), Arc::new(sink));
        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertAdminReviewModel {
                    campaign_id: 7,
                    decision: "approved".to_string(),
                    comments: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidStatusTransition { .. }));
    }

    #[tokio::test]
    async fn unknown_decision_is_rejected_at_the_boundary() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_admin_set_status().never();
        let mut reviews = MockAdminReviewRepository::new();
        reviews.expect_create().never();
        let sink = MockReviewEventSink::new();

        let usecase =
            AdminReviewUseCase::new(Arc::new(reviews), Arc::new(campaigns), Arc::new(sink));
        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertAdminReviewModel {
                    campaign_id: 7,
                    decision: "maybe".to_string(),
                    comments: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));
    }
}
