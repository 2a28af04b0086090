use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;

/// `pending ⇄ failed ⇄ refunded` move freely; any of them may move to
/// `successful` exactly once, after which the payment is immutable.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Successful,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Successful => "successful",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Successful)
    }

    /// Plan a status change. A successful payment accepts only a no-op
    /// re-application of `successful`; the first move into `successful`
    /// must run the three-way reconciliation update.
    pub fn plan_transition(from: Self, to: Self) -> Result<StatusChange, CoreError> {
        if from == PaymentStatus::Successful {
            if to == PaymentStatus::Successful {
                return Ok(StatusChange::Noop);
            }
            return Err(CoreError::CompletedPaymentImmutable);
        }
        if to == PaymentStatus::Successful {
            return Ok(StatusChange::Reconcile);
        }
        Ok(StatusChange::Plain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Already successful, re-stated: nothing to do.
    Noop,
    /// Plain move between non-successful statuses.
    Plain,
    /// First transition into successful: complete the donation and credit
    /// the campaign in the same transaction.
    Reconcile,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(PaymentStatus::Pending),
            "successful" => Ok(PaymentStatus::Successful),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(CoreError::InvalidEnumValue {
                field: "payment status",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_is_terminal() {
        for target in [
            PaymentStatus::Pending,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert!(matches!(
                PaymentStatus::plan_transition(PaymentStatus::Successful, target),
                Err(CoreError::CompletedPaymentImmutable)
            ));
        }
    }

    #[test]
    fn restating_successful_is_a_noop() {
        assert_eq!(
            PaymentStatus::plan_transition(PaymentStatus::Successful, PaymentStatus::Successful)
                .unwrap(),
            StatusChange::Noop
        );
    }

    #[test]
    fn first_success_reconciles() {
        for from in [
            PaymentStatus::Pending,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert_eq!(
                PaymentStatus::plan_transition(from, PaymentStatus::Successful).unwrap(),
                StatusChange::Reconcile
            );
        }
    }

    #[test]
    fn non_successful_statuses_move_freely() {
        assert_eq!(
            PaymentStatus::plan_transition(PaymentStatus::Pending, PaymentStatus::Failed).unwrap(),
            StatusChange::Plain
        );
        assert_eq!(
            PaymentStatus::plan_transition(PaymentStatus::Failed, PaymentStatus::Refunded).unwrap(),
            StatusChange::Plain
        );
        assert_eq!(
            PaymentStatus::plan_transition(PaymentStatus::Refunded, PaymentStatus::Pending)
                .unwrap(),
            StatusChange::Plain
        );
    }
}
