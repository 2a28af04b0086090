use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::campaigns::InsertCampaignEntity,
    errors::CoreError,
    repositories::campaigns::CampaignRepository,
    value_objects::campaigns::{
        AvailableCapacityModel, CampaignListFilter, CampaignModel, CampaignUpdateModel,
        InsertCampaignModel, UpdateCampaignModel, UpdateCampaignStatusModel,
    },
    value_objects::enums::{
        campaign_categories::CampaignCategory, campaign_statuses::CampaignStatus,
    },
};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

pub struct CampaignUseCase<T>
where
    T: CampaignRepository + Send + Sync,
{
    campaign_repository: Arc<T>,
}

impl<T> CampaignUseCase<T>
where
    T: CampaignRepository + Send + Sync,
{
    pub fn new(campaign_repository: Arc<T>) -> Self {
        Self {
            campaign_repository,
        }
    }

    /// New campaigns always start in `pending`, waiting for admin review.
    pub async fn create(
        &self,
        creator_id: Uuid,
        insert_campaign_model: InsertCampaignModel,
    ) -> Result<CampaignModel, CoreError> {
        if insert_campaign_model.title.trim().is_empty() {
            return Err(CoreError::Validation("title cannot be empty".to_string()));
        }
        if insert_campaign_model.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "description cannot be empty".to_string(),
            ));
        }
        if insert_campaign_model.goal_minor <= 0 {
            return Err(CoreError::Validation(
                "goal amount must be greater than zero".to_string(),
            ));
        }
        let category: CampaignCategory = insert_campaign_model.category.parse()?;

        let now = Utc::now();
        let insert_campaign_entity = InsertCampaignEntity {
            creator_id,
            title: insert_campaign_model.title,
            description: insert_campaign_model.description,
            category: category.to_string(),
            goal_minor: insert_campaign_model.goal_minor,
            raised_minor: 0,
            status: CampaignStatus::Pending.to_string(),
            start_date: insert_campaign_model.start_date,
            end_date: insert_campaign_model.end_date,
            created_at: now,
            updated_at: now,
        };

        let campaign_id = self
            .campaign_repository
            .create(insert_campaign_entity)
            .await?;

        info!(campaign_id, %creator_id, "campaigns: campaign created, pending review");

        let campaign = self.campaign_repository.find_by_id(campaign_id).await?;
        CampaignModel::try_from(campaign)
    }

    pub async fn view(&self, campaign_id: i64) -> Result<CampaignModel, CoreError> {
        let campaign = self.campaign_repository.find_by_id(campaign_id).await?;
        CampaignModel::try_from(campaign)
    }

    pub async fn list(
        &self,
        filter: CampaignListFilter,
    ) -> Result<Vec<CampaignModel>, CoreError> {
        let category = filter
            .category
            .map(|raw| raw.parse::<CampaignCategory>())
            .transpose()?;
        let status = filter
            .status
            .map(|raw| raw.parse::<CampaignStatus>())
            .transpose()?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter
            .per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let campaigns = self
            .campaign_repository
            .list(page, per_page, category, status, filter.sort_order)
            .await?;
        campaigns.into_iter().map(CampaignModel::try_from).collect()
    }

    pub async fn list_by_creator(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<CampaignModel>, CoreError> {
        let campaigns = self.campaign_repository.list_by_creator(creator_id).await?;
        campaigns.into_iter().map(CampaignModel::try_from).collect()
    }

    pub async fn search_by_title(&self, title: String) -> Result<Vec<CampaignModel>, CoreError> {
        let campaigns = self.campaign_repository.search_by_title(title).await?;
        campaigns.into_iter().map(CampaignModel::try_from).collect()
    }

    /// Updates the editable fields only. The raised amount is not
    /// expressible through this path; it belongs to payment
    /// reconciliation.
    pub async fn update(
        &self,
        campaign_id: i64,
        update_campaign_model: UpdateCampaignModel,
    ) -> Result<CampaignModel, CoreError> {
        if update_campaign_model.is_empty() {
            let current = self.campaign_repository.find_by_id(campaign_id).await?;
            return CampaignModel::try_from(current);
        }

        if let Some(goal_minor) = update_campaign_model.goal_minor {
            if goal_minor <= 0 {
                return Err(CoreError::Validation(
                    "goal amount must be greater than zero".to_string(),
                ));
            }
        }
        let category = update_campaign_model
            .category
            .as_deref()
            .map(str::parse::<CampaignCategory>)
            .transpose()?;

        let current = self.campaign_repository.find_by_id(campaign_id).await?;
        let change_log = describe_changes(&current, &update_campaign_model);

        let updated = self
            .campaign_repository
            .update_fields(
                campaign_id,
                update_campaign_model.to_entity(category),
                change_log,
            )
            .await?;

        info!(campaign_id, "campaigns: campaign fields updated");
        CampaignModel::try_from(updated)
    }

    /// Explicit administrative status change. The transition table lives
    /// on `CampaignStatus`; `completed` is never reachable through here.
    pub async fn set_status(
        &self,
        campaign_id: i64,
        update_campaign_status_model: UpdateCampaignStatusModel,
    ) -> Result<CampaignModel, CoreError> {
        let new_status: CampaignStatus = update_campaign_status_model.status.parse()?;

        let campaign = self
            .campaign_repository
            .admin_set_status(campaign_id, new_status)
            .await
            .map_err(|err| {
                warn!(
                    campaign_id,
                    new_status = %new_status,
                    error = %err,
                    "campaigns: status change refused"
                );
                err
            })?;

        info!(campaign_id, status = %new_status, "campaigns: status changed");
        CampaignModel::try_from(campaign)
    }

    pub async fn delete(&self, campaign_id: i64) -> Result<(), CoreError> {
        self.campaign_repository.delete(campaign_id).await?;
        info!(campaign_id, "campaigns: campaign deleted");
        Ok(())
    }

    pub async fn available_amount(
        &self,
        campaign_id: i64,
    ) -> Result<AvailableCapacityModel, CoreError> {
        let available_minor = self
            .campaign_repository
            .available_capacity(campaign_id)
            .await?;

        Ok(AvailableCapacityModel {
            campaign_id,
            available_minor,
        })
    }

    pub async fn updates(&self, campaign_id: i64) -> Result<Vec<CampaignUpdateModel>, CoreError> {
        let updates = self.campaign_repository.list_updates(campaign_id).await?;
        Ok(updates.into_iter().map(CampaignUpdateModel::from).collect())
    }
}

fn describe_changes(
    current: &crate::domain::entities::campaigns::CampaignEntity,
    update: &UpdateCampaignModel,
) -> String {
    let mut changes = Vec::new();
    if let Some(title) = &update.title {
        if *title != current.title {
            changes.push(format!("title: {} -> {}", current.title, title));
        }
    }
    if let Some(description) = &update.description {
        if *description != current.description {
            changes.push("description updated".to_string());
        }
    }
    if let Some(category) = &update.category {
        if *category != current.category {
            changes.push(format!("category: {} -> {}", current.category, category));
        }
    }
    if let Some(goal_minor) = update.goal_minor {
        if goal_minor != current.goal_minor {
            changes.push(format!(
                "goal_minor: {} -> {}",
                current.goal_minor, goal_minor
            ));
        }
    }
    changes.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::campaigns::CampaignEntity;
    use crate::domain::repositories::campaigns::MockCampaignRepository;
    use crate::domain::value_objects::enums::sort_order::SortOrder;

    fn campaign(id: i64, status: CampaignStatus) -> CampaignEntity {
        let now = Utc::now();
        CampaignEntity {
            id,
            creator_id: Uuid::new_v4(),
            title: "Clean water".to_string(),
            description: "Wells for the valley".to_string(),
            category: CampaignCategory::Charity.to_string(),
            goal_minor: 1000_00,
            raised_minor: 0,
            status: status.to_string(),
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_starts_campaigns_in_pending() {
        let mut mock = MockCampaignRepository::new();
        mock.expect_create()
            .withf(|entity| {
                entity.status == CampaignStatus::Pending.to_string() && entity.raised_minor == 0
            })
            .returning(|_| Ok(5));
        mock.expect_find_by_id()
            .returning(|id| Ok(campaign(id, CampaignStatus::Pending)));

        let usecase = CampaignUseCase::new(Arc::new(mock));
        let created = usecase
            .create(
                Uuid::new_v4(),
                InsertCampaignModel {
                    title: "Clean water".to_string(),
                    description: "Wells for the valley".to_string(),
                    category: "charity".to_string(),
                    goal_minor: 1000_00,
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.status, CampaignStatus::Pending);
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let mut mock = MockCampaignRepository::new();
        mock.expect_create().never();

        let usecase = CampaignUseCase::new(Arc::new(mock));
        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertCampaignModel {
                    title: "t".to_string(),
                    description: "d".to_string(),
                    category: "crypto".to_string(),
                    goal_minor: 100,
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));
    }

    #[tokio::test]
    async fn set_status_propagates_transition_refusal() {
        let mut mock = MockCampaignRepository::new();
        mock.expect_admin_set_status().returning(|_, to| {
            Err(CoreError::InvalidStatusTransition {
                from: CampaignStatus::Completed,
                to,
            })
        });

        let usecase = CampaignUseCase::new(Arc::new(mock));
        let err = usecase
            .set_status(
                5,
                UpdateCampaignStatusModel {
                    status: "active".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidStatusTransition { .. }));
    }

    #[tokio::test]
    async fn empty_update_returns_current_campaign_untouched() {
        let mut mock = MockCampaignRepository::new();
        mock.expect_find_by_id()
            .returning(|id| Ok(campaign(id, CampaignStatus::Active)));
        mock.expect_update_fields().never();

        let usecase = CampaignUseCase::new(Arc::new(mock));
        let unchanged = usecase
            .update(5, UpdateCampaignModel::default())
            .await
            .unwrap();

        assert_eq!(unchanged.id, 5);
    }

    #[tokio::test]
    async fn list_clamps_pagination() {
        let mut mock = MockCampaignRepository::new();
        mock.expect_list()
            .withf(|page, per_page, _, _, _| *page == 1 && *per_page == MAX_PAGE_SIZE)
            .returning(|_, _, _, _, _| Ok(vec![]));

        let usecase = CampaignUseCase::new(Arc::new(mock));
        let campaigns = usecase
            .list(CampaignListFilter {
                page: Some(-3),
                per_page: Some(5000),
                category: None,
                status: None,
                sort_order: SortOrder::default(),
            })
            .await
            .unwrap();

        assert!(campaigns.is_empty());
    }
}
