use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::campaign_updates;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = campaign_updates)]
pub struct CampaignUpdateEntity {
    pub id: i64,
    pub campaign_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaign_updates)]
pub struct InsertCampaignUpdateEntity {
    pub campaign_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
