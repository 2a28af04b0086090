use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::donations::DonationEntity;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::donation_statuses::DonationStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationModel {
    pub id: i64,
    pub donor_id: Uuid,
    pub campaign_id: i64,
    pub amount_minor: i32,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DonationEntity> for DonationModel {
    type Error = CoreError;

    fn try_from(entity: DonationEntity) -> Result<Self, Self::Error> {
        Ok(DonationModel {
            id: entity.id,
            donor_id: entity.donor_id,
            campaign_id: entity.campaign_id,
            amount_minor: entity.amount_minor,
            status: entity.status.parse()?,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertDonationModel {
    pub campaign_id: i64,
    pub amount_minor: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDonationStatusModel {
    pub status: String,
}
