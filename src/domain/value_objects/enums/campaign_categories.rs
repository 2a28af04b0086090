use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignCategory {
    Education,
    Healthcare,
    Environment,
    Animals,
    Personal,
    Emergency,
    Charity,
    Medical,
    Other,
}

impl CampaignCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignCategory::Education => "education",
            CampaignCategory::Healthcare => "healthcare",
            CampaignCategory::Environment => "environment",
            CampaignCategory::Animals => "animals",
            CampaignCategory::Personal => "personal",
            CampaignCategory::Emergency => "emergency",
            CampaignCategory::Charity => "charity",
            CampaignCategory::Medical => "medical",
            CampaignCategory::Other => "other",
        }
    }
}

impl Display for CampaignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "education" => Ok(CampaignCategory::Education),
            "healthcare" => Ok(CampaignCategory::Healthcare),
            "environment" => Ok(CampaignCategory::Environment),
            "animals" => Ok(CampaignCategory::Animals),
            "personal" => Ok(CampaignCategory::Personal),
            "emergency" => Ok(CampaignCategory::Emergency),
            "charity" => Ok(CampaignCategory::Charity),
            "medical" => Ok(CampaignCategory::Medical),
            "other" => Ok(CampaignCategory::Other),
            other => Err(CoreError::InvalidEnumValue {
                field: "campaign category",
                value: other.to_string(),
            }),
        }
    }
}
