use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::admin_reviews;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = admin_reviews)]
pub struct AdminReviewEntity {
    pub id: i64,
    pub admin_id: Uuid,
    pub campaign_id: i64,
    pub decision: String,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admin_reviews)]
pub struct InsertAdminReviewEntity {
    pub admin_id: Uuid,
    pub campaign_id: i64,
    pub decision: String,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
