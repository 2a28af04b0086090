use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::donations;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = donations)]
pub struct DonationEntity {
    pub id: i64,
    pub donor_id: Uuid,
    pub campaign_id: i64,
    pub amount_minor: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donations)]
pub struct InsertDonationEntity {
    pub donor_id: Uuid,
    pub campaign_id: i64,
    pub amount_minor: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
