use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::campaigns;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = campaigns)]
pub struct CampaignEntity {
    pub id: i64,
    pub creator_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_minor: i32,
    pub raised_minor: i32,
    pub status: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaigns)]
pub struct InsertCampaignEntity {
    pub creator_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_minor: i32,
    pub raised_minor: i32,
    pub status: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields only. `raised_minor` and `status` are deliberately
/// absent: the ledger and the review state machine own those columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = campaigns)]
pub struct EditCampaignEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub goal_minor: Option<i32>,
    pub updated_at: DateTime<Utc>,
}
