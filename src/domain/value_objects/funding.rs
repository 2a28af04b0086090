//! Pure funding arithmetic for the campaign ledger. All amounts are integer
//! minor units; aggregates are widened to i64 before any addition so a
//! campaign near the i32 goal ceiling cannot overflow mid-check.
//!
//! These functions are the only place capacity admission and fund
//! application are decided. Repositories call them inside the transaction
//! that holds the campaign row lock.

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;

/// Remaining amount a campaign can accept before reaching its goal,
/// considering pending and completed donations. Never negative.
pub fn remaining_capacity(goal_minor: i64, committed_minor: i64) -> i64 {
    (goal_minor - committed_minor).max(0)
}

/// Decide whether a new donation of `amount_minor` fits the campaign's
/// remaining capacity. `committed_minor` is the sum over donations in
/// pending or completed status at the moment of the check.
pub fn admit_donation(
    goal_minor: i64,
    committed_minor: i64,
    amount_minor: i64,
) -> Result<(), CoreError> {
    if amount_minor <= 0 {
        return Err(CoreError::InvalidAmount);
    }
    if committed_minor >= goal_minor {
        return Err(CoreError::GoalAlreadyReached);
    }
    if committed_minor + amount_minor > goal_minor {
        return Err(CoreError::ExceedsRemainingGoal {
            available_minor: remaining_capacity(goal_minor, committed_minor),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundsApplied {
    pub raised_minor: i32,
    pub status: CampaignStatus,
}

/// Credit a successful payment to the campaign ledger. Overshoot from the
/// final donation clamps `raised` to the goal exactly, and reaching the
/// goal moves the campaign to `completed`.
pub fn apply_funds(
    goal_minor: i32,
    raised_minor: i32,
    amount_minor: i32,
    status: CampaignStatus,
) -> FundsApplied {
    let raised = i64::from(raised_minor) + i64::from(amount_minor);

    if raised >= i64::from(goal_minor) {
        return FundsApplied {
            raised_minor: goal_minor,
            status: CampaignStatus::Completed,
        };
    }

    FundsApplied {
        raised_minor: raised as i32,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_floored_at_zero() {
        assert_eq!(remaining_capacity(1000_00, 400_00), 600_00);
        assert_eq!(remaining_capacity(1000_00, 1000_00), 0);
        assert_eq!(remaining_capacity(1000_00, 1200_00), 0);
    }

    #[test]
    fn admits_a_donation_within_capacity() {
        assert!(admit_donation(1000_00, 0, 400_00).is_ok());
        assert!(admit_donation(1000_00, 400_00, 600_00).is_ok());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(matches!(
            admit_donation(1000_00, 0, 0),
            Err(CoreError::InvalidAmount)
        ));
        assert!(matches!(
            admit_donation(1000_00, 0, -5),
            Err(CoreError::InvalidAmount)
        ));
    }

    #[test]
    fn rejects_when_goal_already_reached() {
        assert!(matches!(
            admit_donation(1000_00, 1000_00, 1_00),
            Err(CoreError::GoalAlreadyReached)
        ));
    }

    #[test]
    fn reports_exact_remaining_capacity_on_overflow() {
        // Scenario A: goal 1000, 400 pending, a 700 donation must name 600.
        let err = admit_donation(1000_00, 400_00, 700_00).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ExceedsRemainingGoal {
                available_minor: 600_00
            }
        ));

        // Scenario C: committed 900, donating 150 must name 100.
        let err = admit_donation(1000_00, 900_00, 150_00).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ExceedsRemainingGoal {
                available_minor: 100_00
            }
        ));
    }

    #[test]
    fn applying_funds_below_goal_keeps_campaign_active() {
        // Scenario B: 400 against a 1000 goal leaves the campaign active.
        let applied = apply_funds(1000_00, 0, 400_00, CampaignStatus::Active);
        assert_eq!(applied.raised_minor, 400_00);
        assert_eq!(applied.status, CampaignStatus::Active);
    }

    #[test]
    fn reaching_goal_exactly_completes_the_campaign() {
        // Scenario D: 900 + 100 == goal, clamp is a no-op, status flips.
        let applied = apply_funds(1000_00, 900_00, 100_00, CampaignStatus::Active);
        assert_eq!(applied.raised_minor, 1000_00);
        assert_eq!(applied.status, CampaignStatus::Completed);
    }

    #[test]
    fn overshoot_clamps_to_goal() {
        let applied = apply_funds(1000_00, 950_00, 100_00, CampaignStatus::Active);
        assert_eq!(applied.raised_minor, 1000_00);
        assert_eq!(applied.status, CampaignStatus::Completed);
    }

    #[test]
    fn raised_never_leaves_bounds() {
        let mut raised = 0;
        let mut status = CampaignStatus::Active;
        for amount in [250_00, 250_00, 250_00, 400_00] {
            let applied = apply_funds(1000_00, raised, amount, status);
            raised = applied.raised_minor;
            status = applied.status;
            assert!(raised >= 0 && raised <= 1000_00);
        }
        assert_eq!(raised, 1000_00);
        assert_eq!(status, CampaignStatus::Completed);
    }
}
