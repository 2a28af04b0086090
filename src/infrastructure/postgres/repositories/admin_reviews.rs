use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    entities::admin_reviews::{AdminReviewEntity, InsertAdminReviewEntity},
    errors::CoreError,
    repositories::admin_reviews::AdminReviewRepository,
    value_objects::enums::review_decisions::ReviewDecision,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::admin_reviews;

pub struct AdminReviewPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminReviewPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminReviewRepository for AdminReviewPostgres {
    async fn create(
        &self,
        insert_admin_review_entity: InsertAdminReviewEntity,
    ) -> Result<AdminReviewEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let review = diesel::insert_into(admin_reviews::table)
            .values(&insert_admin_review_entity)
            .returning(AdminReviewEntity::as_returning())
            .get_result(&mut conn)?;

        Ok(review)
    }

    async fn find_by_id(&self, review_id: i64) -> Result<AdminReviewEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        admin_reviews::table
            .find(review_id)
            .select(AdminReviewEntity::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| CoreError::NotFound(format!("admin review {} not found", review_id)))
    }

    async fn list_by_admin(&self, admin_id: Uuid) -> Result<Vec<AdminReviewEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let reviews = admin_reviews::table
            .filter(admin_reviews::admin_id.eq(admin_id))
            .order(admin_reviews::created_at.desc())
            .select(AdminReviewEntity::as_select())
            .load(&mut conn)?;

        Ok(reviews)
    }

    async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<AdminReviewEntity>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let reviews = admin_reviews::table
            .filter(admin_reviews::campaign_id.eq(campaign_id))
            .order(admin_reviews::created_at.desc())
            .select(AdminReviewEntity::as_select())
            .load(&mut conn)?;

        Ok(reviews)
    }

    async fn update(
        &self,
        review_id: i64,
        decision: Option<ReviewDecision>,
        comments: Option<String>,
    ) -> Result<AdminReviewEntity, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<AdminReviewEntity, CoreError, _>(|conn| {
            let review = admin_reviews::table
                .find(review_id)
                .for_update()
                .select(AdminReviewEntity::as_select())
                .first::<AdminReviewEntity>(conn)
                .optional()?
                .ok_or_else(|| {
                    CoreError::NotFound(format!("admin review {} not found", review_id))
                })?;

            if decision.is_none() && comments.is_none() {
                return Ok(review);
            }

            let updated = diesel::update(admin_reviews::table.find(review_id))
                .set((
                    admin_reviews::decision
                        .eq(decision.map(|d| d.to_string()).unwrap_or(review.decision)),
                    admin_reviews::comments.eq(comments.or(review.comments)),
                ))
                .returning(AdminReviewEntity::as_returning())
                .get_result(conn)?;

            Ok(updated)
        })
    }

    async fn delete(&self, review_id: i64) -> Result<(), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            diesel::delete(admin_reviews::table.find(review_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(CoreError::NotFound(format!(
                "admin review {} not found",
                review_id
            )));
        }
        Ok(())
    }
}
