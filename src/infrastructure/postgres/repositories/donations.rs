use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sum;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    entities::campaigns::CampaignEntity,
    entities::donations::{DonationEntity, InsertDonationEntity},
    errors::CoreError,
    repositories::donations::DonationRepository,
    value_objects::enums::{
        campaign_statuses::CampaignStatus, donation_statuses::DonationStatus,
    },
    value_objects::funding,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{campaigns, donations};

pub struct DonationPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DonationPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DonationRepository for DonationPostgres {
    async fn create(
        &self,
        donor_id: Uuid,
        campaign_id: i64,
        amount_minor: i32,
    ) -> Result<DonationEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // The campaign row lock serializes capacity checks per campaign:
        // two concurrent donations cannot both pass against the same
        // remaining capacity.
        conn.transaction::<DonationEntity, CoreError, _>(|conn| {
            let campaign = campaigns::table
                .find(campaign_id)
                .for_update()
                .select(CampaignEntity::as_select())
                .first::<CampaignEntity>(conn)
                .optional()?
                .ok_or(CoreError::CampaignNotFound(campaign_id))?;

            let status: CampaignStatus = campaign.status.parse()?;
            if status != CampaignStatus::Active {
                return Err(CoreError::CampaignNotActive {
                    campaign_id,
                    status,
                });
            }

            let committed: Option<i64> = donations::table
                .filter(donations::campaign_id.eq(campaign_id))
                .filter(donations::status.eq_any(vec![
                    DonationStatus::Pending.to_string(),
                    DonationStatus::Completed.to_string(),
                ]))
                .select(sum(donations::amount_minor))
                .first(conn)?;

            funding::admit_donation(
                i64::from(campaign.goal_minor),
                committed.unwrap_or(0),
                i64::from(amount_minor),
            )?;

            let donation = diesel::insert_into(donations::table)
                .values(InsertDonationEntity {
                    donor_id,
                    campaign_id,
                    amount_minor,
                    status: DonationStatus::Pending.to_string(),
                    created_at: Utc::now(),
                })
                .returning(DonationEntity::as_returning())
                .get_result(conn)?;

            Ok(donation)
        })
    }

    async fn find_by_id(&self, donation_id: i64) -> Result<DonationEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        donations::table
            .find(donation_id)
            .select(DonationEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(CoreError::DonationNotFound(donation_id))
    }

    async fn list_by_donor(&self, donor_id: Uuid) -> Result<Vec<DonationEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let donations = donations::table
            .filter(donations::donor_id.eq(donor_id))
            .order(donations::created_at.desc())
            .select(DonationEntity::as_select())
            .load(&mut conn)?;

        Ok(donations)
    }

    async fn list_by_campaign(&self, campaign_id: i64) -> Result<Vec<DonationEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let donations = donations::table
            .filter(donations::campaign_id.eq(campaign_id))
            .order(donations::created_at.desc())
            .select(DonationEntity::as_select())
            .load(&mut conn)?;

        Ok(donations)
    }

    async fn cancel(&self, donation_id: i64) -> Result<DonationEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<DonationEntity, CoreError, _>(|conn| {
            let donation = donations::table
                .find(donation_id)
                .for_update()
                .select(DonationEntity::as_select())
                .first::<DonationEntity>(conn)
                .optional()?
                .ok_or(CoreError::DonationNotFound(donation_id))?;

            let status: DonationStatus = donation.status.parse()?;
            if status == DonationStatus::Completed {
                return Err(CoreError::DonationAlreadyCompleted);
            }

            let cancelled = diesel::update(donations::table.find(donation_id))
                .set(donations::status.eq(DonationStatus::Cancelled.to_string()))
                .returning(DonationEntity::as_returning())
                .get_result(conn)?;

            Ok(cancelled)
        })
    }

    async fn set_status(
        &self,
        donation_id: i64,
        new_status: DonationStatus,
    ) -> Result<DonationEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<DonationEntity, CoreError, _>(|conn| {
            let donation = donations::table
                .find(donation_id)
                .for_update()
                .select(DonationEntity::as_select())
                .first::<DonationEntity>(conn)
                .optional()?
                .ok_or(CoreError::DonationNotFound(donation_id))?;

            let current: DonationStatus = donation.status.parse()?;
            DonationStatus::guard_manual_transition(current, new_status)?;

            if current == new_status {
                return Ok(donation);
            }

            let updated = diesel::update(donations::table.find(donation_id))
                .set(donations::status.eq(new_status.to_string()))
                .returning(DonationEntity::as_returning())
                .get_result(conn)?;

            Ok(updated)
        })
    }
}
