use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::errors::CoreError;
use crate::domain::value_objects::reporting::{
    AdminKeyStats, DonorAggregates, PlatformAggregates, TransactionRecord,
};

/// Read-only aggregation over the ledger. Implementations must return
/// zeroed aggregates for empty result sets, never an error.
#[automock]
#[async_trait]
pub trait ReportingRepository {
    /// (status, count, total_minor) rows for one campaign's donations.
    async fn campaign_status_buckets(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<(String, i64, i64)>, CoreError>;
    async fn donor_aggregates(&self, donor_id: Uuid) -> Result<DonorAggregates, CoreError>;
    async fn platform_aggregates(&self) -> Result<PlatformAggregates, CoreError>;
    async fn admin_key_stats(&self) -> Result<AdminKeyStats, CoreError>;
    async fn transaction_history(&self) -> Result<Vec<TransactionRecord>, CoreError>;
}
