use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;
use crate::domain::value_objects::users::UserSummary;

/// Count + minor-unit total for one donation status. Defaults to zero so
/// empty campaigns report zeroed buckets instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusBucket {
    pub count: i64,
    pub total_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignDonationStats {
    pub campaign_id: i64,
    pub goal_minor: i32,
    pub raised_minor: i32,
    pub pending: StatusBucket,
    pub completed: StatusBucket,
    pub cancelled: StatusBucket,
    pub refunded: StatusBucket,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignRef {
    pub campaign_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonorStats {
    pub donor_id: Uuid,
    pub total_donated_minor: i64,
    pub campaigns_supported: i64,
    pub completed_campaigns_supported: i64,
    pub impact_score: f64,
    pub recent_campaign: Option<CampaignRef>,
}

/// Raw donor aggregates as read from storage; the usecase derives the
/// impact score from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DonorAggregates {
    pub total_donated_minor: i64,
    pub campaigns_supported: i64,
    pub completed_campaigns_supported: i64,
    pub recent_campaign: Option<CampaignRef>,
}

/// Raw platform counters; the usecase derives the success rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformAggregates {
    pub total_raised_minor: i64,
    pub total_donors: i64,
    pub total_campaigns: i64,
    pub completed_campaigns: i64,
    pub active_campaigns: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub total_raised_minor: i64,
    pub total_donors: i64,
    pub success_rate: f64,
    pub active_campaigns: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignCounts {
    pub count: i64,
    pub active: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCounts {
    pub count: i64,
    pub creators: i64,
    pub donors: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCampaign {
    pub title: String,
    pub raised_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminKeyStats {
    pub total_campaigns: CampaignCounts,
    pub total_raised_minor: i64,
    pub total_users: UserCounts,
    pub pending_campaigns: i64,
    pub top_campaign: Option<TopCampaign>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub payment_id: i64,
    pub amount_minor: i32,
    pub status: PaymentStatus,
    pub transaction_date: DateTime<Utc>,
    pub donor: UserSummary,
    pub campaign: CampaignRef,
}
