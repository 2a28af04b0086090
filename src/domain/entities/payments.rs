use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::payments;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payments)]
pub struct PaymentEntity {
    pub id: i64,
    pub donation_id: i64,
    pub amount_minor: i32,
    pub method: String,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub struct InsertPaymentEntity {
    pub donation_id: i64,
    pub amount_minor: i32,
    pub method: String,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
}
