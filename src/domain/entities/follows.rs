use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::follows;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = follows)]
pub struct FollowEntity {
    pub id: i64,
    pub user_id: Uuid,
    pub campaign_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = follows)]
pub struct InsertFollowEntity {
    pub user_id: Uuid,
    pub campaign_id: i64,
    pub created_at: DateTime<Utc>,
}
