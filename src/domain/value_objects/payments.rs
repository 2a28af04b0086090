use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::payments::PaymentEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentModel {
    pub id: i64,
    pub donation_id: i64,
    pub amount_minor: i32,
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_date: DateTime<Utc>,
}

impl TryFrom<PaymentEntity> for PaymentModel {
    type Error = CoreError;

    fn try_from(entity: PaymentEntity) -> Result<Self, Self::Error> {
        Ok(PaymentModel {
            id: entity.id,
            donation_id: entity.donation_id,
            amount_minor: entity.amount_minor,
            method: entity.method,
            status: entity.status.parse()?,
            transaction_date: entity.transaction_date,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPaymentModel {
    pub donation_id: i64,
    pub amount_minor: i32,
    pub method: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentStatusModel {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentMethodModel {
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentListFilter {
    pub status: Option<String>,
    pub method: Option<String>,
}
