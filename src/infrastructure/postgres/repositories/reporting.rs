use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::{count_distinct, count_star, sum};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    errors::CoreError,
    repositories::reporting::ReportingRepository,
    value_objects::enums::{
        campaign_statuses::CampaignStatus, donation_statuses::DonationStatus,
        payment_statuses::PaymentStatus, user_roles::UserRole,
    },
    value_objects::reporting::{
        AdminKeyStats, CampaignCounts, CampaignRef, DonorAggregates, PlatformAggregates,
        TopCampaign, TransactionRecord, UserCounts,
    },
    value_objects::users::UserSummary,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{app_users, campaigns, donations, payments};

pub struct ReportingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReportingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReportingRepository for ReportingPostgres {
    async fn campaign_status_buckets(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<(String, i64, i64)>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows: Vec<(String, i64, Option<i64>)> = donations::table
            .filter(donations::campaign_id.eq(campaign_id))
            .group_by(donations::status)
            .select((
                donations::status,
                count_star(),
                sum(donations::amount_minor),
            ))
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(status, count, total)| (status, count, total.unwrap_or(0)))
            .collect())
    }

    async fn donor_aggregates(&self, donor_id: Uuid) -> Result<DonorAggregates, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total_donated: Option<i64> = donations::table
            .filter(donations::donor_id.eq(donor_id))
            .filter(donations::status.eq(DonationStatus::Completed.to_string()))
            .select(sum(donations::amount_minor))
            .first(&mut conn)?;

        let campaigns_supported: i64 = donations::table
            .filter(donations::donor_id.eq(donor_id))
            .select(count_distinct(donations::campaign_id))
            .first(&mut conn)?;

        let completed_campaigns_supported: i64 = donations::table
            .inner_join(campaigns::table)
            .filter(donations::donor_id.eq(donor_id))
            .filter(campaigns::status.eq(CampaignStatus::Completed.to_string()))
            .select(count_distinct(donations::campaign_id))
            .first(&mut conn)?;

        let recent: Option<(i64, String)> = donations::table
            .inner_join(campaigns::table)
            .filter(donations::donor_id.eq(donor_id))
            .order(donations::created_at.desc())
            .select((campaigns::id, campaigns::title))
            .first(&mut conn)
            .optional()?;

        Ok(DonorAggregates {
            total_donated_minor: total_donated.unwrap_or(0),
            campaigns_supported,
            completed_campaigns_supported,
            recent_campaign: recent.map(|(campaign_id, title)| CampaignRef {
                campaign_id,
                title,
            }),
        })
    }

    async fn platform_aggregates(&self) -> Result<PlatformAggregates, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Total raised counts successful payments only; pending donations
        // are commitments, not money.
        let total_raised: Option<i64> = payments::table
            .filter(payments::status.eq(PaymentStatus::Successful.to_string()))
            .select(sum(payments::amount_minor))
            .first(&mut conn)?;

        let total_donors: i64 = app_users::table
            .filter(app_users::role.eq(UserRole::Donor.to_string()))
            .count()
            .get_result(&mut conn)?;

        let total_campaigns: i64 = campaigns::table.count().get_result(&mut conn)?;

        let completed_campaigns: i64 = campaigns::table
            .filter(campaigns::status.eq(CampaignStatus::Completed.to_string()))
            .count()
            .get_result(&mut conn)?;

        let active_campaigns: i64 = campaigns::table
            .filter(campaigns::status.eq(CampaignStatus::Active.to_string()))
            .count()
            .get_result(&mut conn)?;

        Ok(PlatformAggregates {
            total_raised_minor: total_raised.unwrap_or(0),
            total_donors,
            total_campaigns,
            completed_campaigns,
            active_campaigns,
        })
    }

    async fn admin_key_stats(&self) -> Result<AdminKeyStats, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total: i64 = campaigns::table.count().get_result(&mut conn)?;
        let active: i64 = campaigns::table
            .filter(campaigns::status.eq(CampaignStatus::Active.to_string()))
            .count()
            .get_result(&mut conn)?;
        let pending_campaigns: i64 = campaigns::table
            .filter(campaigns::status.eq(CampaignStatus::Pending.to_string()))
            .count()
            .get_result(&mut conn)?;

        let total_raised: Option<i64> = payments::table
            .filter(payments::status.eq(PaymentStatus::Successful.to_string()))
            .select(sum(payments::amount_minor))
            .first(&mut conn)?;

        let total_users: i64 = app_users::table.count().get_result(&mut conn)?;
        let creators: i64 = app_users::table
            .filter(app_users::role.eq(UserRole::Creator.to_string()))
            .count()
            .get_result(&mut conn)?;
        let donors: i64 = app_users::table
            .filter(app_users::role.eq(UserRole::Donor.to_string()))
            .count()
            .get_result(&mut conn)?;

        let top: Option<(String, Option<i64>)> = campaigns::table
            .left_join(donations::table)
            .group_by((campaigns::id, campaigns::title))
            .select((
                campaigns::title,
                sum(donations::amount_minor.nullable()),
            ))
            .order(sum(donations::amount_minor.nullable()).desc())
            .first(&mut conn)
            .optional()?;

        Ok(AdminKeyStats {
            total_campaigns: CampaignCounts {
                count: total,
                active,
            },
            total_raised_minor: total_raised.unwrap_or(0),
            total_users: UserCounts {
                count: total_users,
                creators,
                donors,
            },
            pending_campaigns,
            top_campaign: top.map(|(title, raised)| TopCampaign {
                title,
                raised_minor: raised.unwrap_or(0),
            }),
        })
    }

    async fn transaction_history(&self) -> Result<Vec<TransactionRecord>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        type Row = (
            i64,
            i32,
            String,
            DateTime<Utc>,
            Uuid,
            String,
            Option<String>,
            i64,
            String,
        );

        let rows: Vec<Row> = donations::table
            .inner_join(payments::table)
            .inner_join(app_users::table)
            .inner_join(campaigns::table)
            .order(payments::transaction_date.desc())
            .select((
                payments::id,
                payments::amount_minor,
                payments::status,
                payments::transaction_date,
                app_users::id,
                app_users::username,
                app_users::profile_image,
                campaigns::id,
                campaigns::title,
            ))
            .load(&mut conn)?;

        rows.into_iter()
            .map(
                |(
                    payment_id,
                    amount_minor,
                    status,
                    transaction_date,
                    user_id,
                    username,
                    profile_image,
                    campaign_id,
                    title,
                )|
                 -> Result<TransactionRecord, CoreError> {
                    Ok(TransactionRecord {
                        payment_id,
                        amount_minor,
                        status: status.parse()?,
                        transaction_date,
                        donor: UserSummary {
                            user_id,
                            username,
                            profile_image,
                        },
                        campaign: CampaignRef { campaign_id, title },
                    })
                },
            )
            .collect()
    }
}
