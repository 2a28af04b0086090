use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    errors::CoreError,
    repositories::{campaigns::CampaignRepository, reporting::ReportingRepository},
    value_objects::enums::donation_statuses::DonationStatus,
    value_objects::reporting::{
        AdminKeyStats, CampaignDonationStats, DonorStats, PlatformStats, StatusBucket,
        TransactionRecord,
    },
};

pub struct ReportingUseCase<R, C>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    reporting_repository: Arc<R>,
    campaign_repository: Arc<C>,
}

impl<R, C> ReportingUseCase<R, C>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    pub fn new(reporting_repository: Arc<R>, campaign_repository: Arc<C>) -> Self {
        Self {
            reporting_repository,
            campaign_repository,
        }
    }

    /// Per-status donation counts and totals for one campaign. Statuses
    /// with no donations come back as zeroed buckets.
    pub async fn campaign_stats(
        &self,
        campaign_id: i64,
    ) -> Result<CampaignDonationStats, CoreError> {
        let campaign = self.campaign_repository.find_by_id(campaign_id).await?;
        let buckets = self
            .reporting_repository
            .campaign_status_buckets(campaign_id)
            .await?;

        let mut stats = CampaignDonationStats {
            campaign_id,
            goal_minor: campaign.goal_minor,
            raised_minor: campaign.raised_minor,
            pending: StatusBucket::default(),
            completed: StatusBucket::default(),
            cancelled: StatusBucket::default(),
            refunded: StatusBucket::default(),
        };

        for (status, count, total_minor) in buckets {
            let bucket = StatusBucket { count, total_minor };
            match status.parse::<DonationStatus>()? {
                DonationStatus::Pending => stats.pending = bucket,
                DonationStatus::Completed => stats.completed = bucket,
                DonationStatus::Cancelled => stats.cancelled = bucket,
                DonationStatus::Refunded => stats.refunded = bucket,
            }
        }

        Ok(stats)
    }

    pub async fn donor_stats(&self, donor_id: Uuid) -> Result<DonorStats, CoreError> {
        let aggregates = self.reporting_repository.donor_aggregates(donor_id).await?;

        Ok(DonorStats {
            donor_id,
            total_donated_minor: aggregates.total_donated_minor,
            campaigns_supported: aggregates.campaigns_supported,
            completed_campaigns_supported: aggregates.completed_campaigns_supported,
            impact_score: impact_score(
                aggregates.completed_campaigns_supported,
                aggregates.campaigns_supported,
            ),
            recent_campaign: aggregates.recent_campaign,
        })
    }

    pub async fn platform_stats(&self) -> Result<PlatformStats, CoreError> {
        let aggregates = self.reporting_repository.platform_aggregates().await?;

        Ok(PlatformStats {
            total_raised_minor: aggregates.total_raised_minor,
            total_donors: aggregates.total_donors,
            success_rate: success_rate(aggregates.completed_campaigns, aggregates.total_campaigns),
            active_campaigns: aggregates.active_campaigns,
        })
    }

    pub async fn admin_key_stats(&self) -> Result<AdminKeyStats, CoreError> {
        self.reporting_repository.admin_key_stats().await
    }

    pub async fn transaction_history(&self) -> Result<Vec<TransactionRecord>, CoreError> {
        self.reporting_repository.transaction_history().await
    }
}

/// 0–5 score from the donor's completion ratio, rounded to one decimal.
/// A donor with no supported campaigns scores 0.0.
fn impact_score(completed_supported: i64, total_supported: i64) -> f64 {
    if total_supported <= 0 {
        return 0.0;
    }
    let ratio = completed_supported as f64 / total_supported as f64;
    (ratio * 5.0 * 10.0).round() / 10.0
}

/// Percentage of campaigns that reached their goal, rounded to two
/// decimals. Zero campaigns means a 0.0 rate, not a division error.
fn success_rate(completed_campaigns: i64, total_campaigns: i64) -> f64 {
    if total_campaigns <= 0 {
        return 0.0;
    }
    let rate = completed_campaigns as f64 / total_campaigns as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::campaigns::MockCampaignRepository;
    use crate::domain::repositories::reporting::MockReportingRepository;
    use crate::domain::value_objects::reporting::DonorAggregates;

    #[test]
    fn impact_score_handles_empty_and_partial_support() {
        assert_eq!(impact_score(0, 0), 0.0);
        assert_eq!(impact_score(2, 3), 3.3);
        assert_eq!(impact_score(3, 3), 5.0);
        assert_eq!(impact_score(1, 4), 1.3);
    }

    #[test]
    fn success_rate_handles_empty_platform() {
        assert_eq!(success_rate(0, 0), 0.0);
        assert_eq!(success_rate(1, 3), 33.33);
        assert_eq!(success_rate(2, 2), 100.0);
    }

    #[tokio::test]
    async fn donor_stats_derive_impact_score_from_aggregates() {
        let mut reporting = MockReportingRepository::new();
        reporting.expect_donor_aggregates().returning(|_| {
            Ok(DonorAggregates {
                total_donated_minor: 750_00,
                campaigns_supported: 3,
                completed_campaigns_supported: 2,
                recent_campaign: None,
            })
        });
        let campaigns = MockCampaignRepository::new();

        let usecase = ReportingUseCase::new(Arc::new(reporting), Arc::new(campaigns));
        let stats = usecase.donor_stats(Uuid::new_v4()).await.unwrap();

        assert_eq!(stats.impact_score, 3.3);
        assert_eq!(stats.total_donated_minor, 750_00);
    }

    #[tokio::test]
    async fn campaign_stats_zero_missing_buckets() {
        let mut reporting = MockReportingRepository::new();
        reporting
            .expect_campaign_status_buckets()
            .returning(|_| Ok(vec![("completed".to_string(), 2, 500_00)]));

        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_find_by_id().returning(|id| {
            use crate::domain::entities::campaigns::CampaignEntity;
            use crate::domain::value_objects::enums::campaign_categories::CampaignCategory;
            use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;
            let now = chrono::Utc::now();
            Ok(CampaignEntity {
                id,
                creator_id: Uuid::new_v4(),
                title: "t".to_string(),
                description: "d".to_string(),
                category: CampaignCategory::Other.to_string(),
                goal_minor: 1000_00,
                raised_minor: 500_00,
                status: CampaignStatus::Active.to_string(),
                start_date: None,
                end_date: None,
                created_at: now,
                updated_at: now,
            })
        });

        let usecase = ReportingUseCase::new(Arc::new(reporting), Arc::new(campaigns));
        let stats = usecase.campaign_stats(1).await.unwrap();

        assert_eq!(stats.completed.count, 2);
        assert_eq!(stats.completed.total_minor, 500_00);
        assert_eq!(stats.pending, StatusBucket::default());
        assert_eq!(stats.cancelled.count, 0);
    }
}
