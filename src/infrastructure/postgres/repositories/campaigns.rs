use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sum;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    entities::campaign_updates::{CampaignUpdateEntity, InsertCampaignUpdateEntity},
    entities::campaigns::{CampaignEntity, EditCampaignEntity, InsertCampaignEntity},
    errors::CoreError,
    repositories::campaigns::CampaignRepository,
    value_objects::enums::{
        campaign_categories::CampaignCategory, campaign_statuses::CampaignStatus,
        donation_statuses::DonationStatus, sort_order::SortOrder,
    },
    value_objects::funding,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{campaign_updates, campaigns, donations};

pub struct CampaignPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CampaignPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn record_update(
    conn: &mut PgConnection,
    campaign_id: i64,
    content: String,
) -> Result<(), CoreError> {
    diesel::insert_into(campaign_updates::table)
        .values(InsertCampaignUpdateEntity {
            campaign_id,
            content,
            created_at: Utc::now(),
        })
        .execute(conn)?;
    Ok(())
}

#[async_trait]
impl CampaignRepository for CampaignPostgres {
    async fn create(
        &self,
        insert_campaign_entity: InsertCampaignEntity,
    ) -> Result<i64, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let campaign_id = diesel::insert_into(campaigns::table)
            .values(&insert_campaign_entity)
            .returning(campaigns::id)
            .get_result::<i64>(&mut conn)?;

        Ok(campaign_id)
    }

    async fn find_by_id(&self, campaign_id: i64) -> Result<CampaignEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        campaigns::table
            .find(campaign_id)
            .select(CampaignEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(CoreError::CampaignNotFound(campaign_id))
    }

    async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<CampaignEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let campaigns = campaigns::table
            .filter(campaigns::creator_id.eq(creator_id))
            .order(campaigns::created_at.desc())
            .select(CampaignEntity::as_select())
            .load(&mut conn)?;

        Ok(campaigns)
    }

    async fn search_by_title(&self, title: String) -> Result<Vec<CampaignEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let campaigns = campaigns::table
            .filter(campaigns::title.ilike(format!("%{}%", title)))
            .order(campaigns::created_at.desc())
            .select(CampaignEntity::as_select())
            .load(&mut conn)?;

        Ok(campaigns)
    }

    async fn list(
        &self,
        page: i64,
        per_page: i64,
        category: Option<CampaignCategory>,
        status: Option<CampaignStatus>,
        sort_order: SortOrder,
    ) -> Result<Vec<CampaignEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = campaigns::table
            .select(CampaignEntity::as_select())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(campaigns::category.eq(category.to_string()));
        }
        if let Some(status) = status {
            query = query.filter(campaigns::status.eq(status.to_string()));
        }
        query = match sort_order {
            SortOrder::Desc => query.order(campaigns::created_at.desc()),
            SortOrder::Asc => query.order(campaigns::created_at.asc()),
        };

        let campaigns = query
            .limit(per_page)
            .offset((page - 1) * per_page)
            .load(&mut conn)?;

        Ok(campaigns)
    }

    async fn update_fields(
        &self,
        campaign_id: i64,
        edit_campaign_entity: EditCampaignEntity,
        change_log: String,
    ) -> Result<CampaignEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<CampaignEntity, CoreError, _>(|conn| {
            let updated = diesel::update(campaigns::table.find(campaign_id))
                .set(&edit_campaign_entity)
                .returning(CampaignEntity::as_returning())
                .get_result::<CampaignEntity>(conn)
                .optional()?
                .ok_or(CoreError::CampaignNotFound(campaign_id))?;

            if !change_log.is_empty() {
                record_update(conn, campaign_id, change_log)?;
            }

            Ok(updated)
        })
    }

    async fn admin_set_status(
        &self,
        campaign_id: i64,
        new_status: CampaignStatus,
    ) -> Result<CampaignEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<CampaignEntity, CoreError, _>(|conn| {
            let campaign = campaigns::table
                .find(campaign_id)
                .for_update()
                .select(CampaignEntity::as_select())
                .first::<CampaignEntity>(conn)
                .optional()?
                .ok_or(CoreError::CampaignNotFound(campaign_id))?;

            let current: CampaignStatus = campaign.status.parse()?;
            if current == new_status {
                return Ok(campaign);
            }
            if !current.admin_transition_allowed(new_status) {
                return Err(CoreError::InvalidStatusTransition {
                    from: current,
                    to: new_status,
                });
            }

            let updated = diesel::update(campaigns::table.find(campaign_id))
                .set((
                    campaigns::status.eq(new_status.to_string()),
                    campaigns::updated_at.eq(Utc::now()),
                ))
                .returning(CampaignEntity::as_returning())
                .get_result(conn)?;

            record_update(
                conn,
                campaign_id,
                format!("status: {} -> {}", current, new_status),
            )?;

            Ok(updated)
        })
    }

    async fn delete(&self, campaign_id: i64) -> Result<(), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = diesel::delete(campaigns::table.find(campaign_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(CoreError::CampaignNotFound(campaign_id));
        }
        Ok(())
    }

    async fn available_capacity(&self, campaign_id: i64) -> Result<i64, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let campaign = campaigns::table
            .find(campaign_id)
            .select(CampaignEntity::as_select())
            .first::<CampaignEntity>(&mut conn)
            .optional()?
            .ok_or(CoreError::CampaignNotFound(campaign_id))?;

        let committed: Option<i64> = donations::table
            .filter(donations::campaign_id.eq(campaign_id))
            .filter(donations::status.eq_any(vec![
                DonationStatus::Pending.to_string(),
                DonationStatus::Completed.to_string(),
            ]))
            .select(sum(donations::amount_minor))
            .first(&mut conn)?;

        Ok(funding::remaining_capacity(
            i64::from(campaign.goal_minor),
            committed.unwrap_or(0),
        ))
    }

    async fn list_updates(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<CampaignUpdateEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let updates = campaign_updates::table
            .filter(campaign_updates::campaign_id.eq(campaign_id))
            .order(campaign_updates::created_at.desc())
            .select(CampaignUpdateEntity::as_select())
            .load(&mut conn)?;

        Ok(updates)
    }
}
