use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Rejected,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Pending => "pending",
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Rejected => "rejected",
        }
    }

    /// Only active campaigns may have funds applied by payment reconciliation.
    pub fn accepts_funds(&self) -> bool {
        matches!(self, CampaignStatus::Active)
    }

    /// Administrative transitions cover pending/active/rejected in any
    /// direction. `Completed` is terminal and only reachable through the
    /// funding path, never by an admin decision.
    pub fn admin_transition_allowed(&self, to: CampaignStatus) -> bool {
        if *self == to {
            return false;
        }
        !matches!(self, CampaignStatus::Completed) && !matches!(to, CampaignStatus::Completed)
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(CampaignStatus::Pending),
            "active" => Ok(CampaignStatus::Active),
            "completed" => Ok(CampaignStatus::Completed),
            "rejected" => Ok(CampaignStatus::Rejected),
            other => Err(CoreError::InvalidEnumValue {
                field: "campaign status",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_is_terminal_for_admins() {
        assert!(!CampaignStatus::Completed.admin_transition_allowed(CampaignStatus::Active));
        assert!(!CampaignStatus::Completed.admin_transition_allowed(CampaignStatus::Pending));
        assert!(!CampaignStatus::Active.admin_transition_allowed(CampaignStatus::Completed));
    }

    #[test]
    fn admins_move_freely_between_review_states() {
        assert!(CampaignStatus::Pending.admin_transition_allowed(CampaignStatus::Active));
        assert!(CampaignStatus::Pending.admin_transition_allowed(CampaignStatus::Rejected));
        assert!(CampaignStatus::Rejected.admin_transition_allowed(CampaignStatus::Pending));
        assert!(CampaignStatus::Active.admin_transition_allowed(CampaignStatus::Rejected));
        assert!(!CampaignStatus::Active.admin_transition_allowed(CampaignStatus::Active));
    }

    #[test]
    fn parses_known_values_only() {
        assert_eq!(
            "active".parse::<CampaignStatus>().unwrap(),
            CampaignStatus::Active
        );
        assert!("archived".parse::<CampaignStatus>().is_err());
    }
}
