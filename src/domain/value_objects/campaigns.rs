use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::campaign_updates::CampaignUpdateEntity;
use crate::domain::entities::campaigns::{CampaignEntity, EditCampaignEntity};
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::{
    campaign_categories::CampaignCategory, campaign_statuses::CampaignStatus,
    sort_order::SortOrder,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignModel {
    pub id: i64,
    pub creator_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: CampaignCategory,
    pub goal_minor: i32,
    pub raised_minor: i32,
    pub status: CampaignStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CampaignEntity> for CampaignModel {
    type Error = CoreError;

    fn try_from(entity: CampaignEntity) -> Result<Self, Self::Error> {
        Ok(CampaignModel {
            id: entity.id,
            creator_id: entity.creator_id,
            title: entity.title,
            description: entity.description,
            category: entity.category.parse()?,
            goal_minor: entity.goal_minor,
            raised_minor: entity.raised_minor,
            status: entity.status.parse()?,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertCampaignModel {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_minor: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Only these fields are editable after creation. There is intentionally no
/// way to express a `raised_minor` change here; that column belongs to
/// payment reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCampaignModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub goal_minor: Option<i32>,
}

impl UpdateCampaignModel {
    pub fn to_entity(&self, category: Option<CampaignCategory>) -> EditCampaignEntity {
        EditCampaignEntity {
            title: self.title.clone(),
            description: self.description.clone(),
            category: category.map(|c| c.to_string()),
            goal_minor: self.goal_minor,
            updated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.goal_minor.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampaignListFilter {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCampaignStatusModel {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableCapacityModel {
    pub campaign_id: i64,
    pub available_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignUpdateModel {
    pub id: i64,
    pub campaign_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CampaignUpdateEntity> for CampaignUpdateModel {
    fn from(entity: CampaignUpdateEntity) -> Self {
        CampaignUpdateModel {
            id: entity.id,
            campaign_id: entity.campaign_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
