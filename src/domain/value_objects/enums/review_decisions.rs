use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
    Pending,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approved => "approved",
            ReviewDecision::Rejected => "rejected",
            ReviewDecision::Pending => "pending",
        }
    }

    /// The campaign status an admin decision drives the campaign toward.
    pub fn target_status(&self) -> CampaignStatus {
        match self {
            ReviewDecision::Approved => CampaignStatus::Active,
            ReviewDecision::Rejected => CampaignStatus::Rejected,
            ReviewDecision::Pending => CampaignStatus::Pending,
        }
    }
}

impl Display for ReviewDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewDecision {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "approved" => Ok(ReviewDecision::Approved),
            "rejected" => Ok(ReviewDecision::Rejected),
            "pending" => Ok(ReviewDecision::Pending),
            other => Err(CoreError::InvalidEnumValue {
                field: "review decision",
                value: other.to_string(),
            }),
        }
    }
}
