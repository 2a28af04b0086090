use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    Refunded,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Completed => "completed",
            DonationStatus::Cancelled => "cancelled",
            DonationStatus::Refunded => "refunded",
        }
    }

    /// Guard for the caller-supplied status setter: moving a donation into
    /// `completed` is reserved for payment reconciliation. Re-stating
    /// `completed` on an already-completed donation is a no-op, not an
    /// error.
    pub fn guard_manual_transition(current: Self, new: Self) -> Result<(), CoreError> {
        if new == DonationStatus::Completed && current != DonationStatus::Completed {
            return Err(CoreError::ManualCompletionRejected);
        }
        Ok(())
    }
}

impl Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(DonationStatus::Pending),
            "completed" => Ok(DonationStatus::Completed),
            "cancelled" => Ok(DonationStatus::Cancelled),
            "refunded" => Ok(DonationStatus::Refunded),
            other => Err(CoreError::InvalidEnumValue {
                field: "donation status",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_completion_is_rejected() {
        assert!(matches!(
            DonationStatus::guard_manual_transition(
                DonationStatus::Pending,
                DonationStatus::Completed
            ),
            Err(CoreError::ManualCompletionRejected)
        ));
    }

    #[test]
    fn restating_completed_is_a_noop() {
        assert!(
            DonationStatus::guard_manual_transition(
                DonationStatus::Completed,
                DonationStatus::Completed
            )
            .is_ok()
        );
    }

    #[test]
    fn other_manual_transitions_pass() {
        assert!(
            DonationStatus::guard_manual_transition(
                DonationStatus::Pending,
                DonationStatus::Cancelled
            )
            .is_ok()
        );
        assert!(
            DonationStatus::guard_manual_transition(
                DonationStatus::Completed,
                DonationStatus::Refunded
            )
            .is_ok()
        );
    }
}
