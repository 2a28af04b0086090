use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_objects::enums::campaign_statuses::CampaignStatus;

/// Broad classes the HTTP layer maps to status codes. The core never
/// produces transport-specific strings; routers translate the kind once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Persistence,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("payment method cannot be empty")]
    EmptyPaymentMethod,

    #[error("invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("campaign {0} not found")]
    CampaignNotFound(i64),

    #[error("donation {0} not found")]
    DonationNotFound(i64),

    #[error("payment {0} not found")]
    PaymentNotFound(i64),

    #[error("user {0} not found")]
    UserNotFound(Uuid),

    #[error("{0}")]
    NotFound(String),

    #[error("campaign {campaign_id} is not active (current status: {status})")]
    CampaignNotActive {
        campaign_id: i64,
        status: CampaignStatus,
    },

    #[error("campaign {campaign_id} is not accepting funds (current status: {status})")]
    CampaignNotAcceptingFunds {
        campaign_id: i64,
        status: CampaignStatus,
    },

    #[error("campaign has already reached its goal amount, including pending donations")]
    GoalAlreadyReached,

    #[error(
        "donation amount exceeds the campaign's remaining goal; maximum allowed: {available_minor}"
    )]
    ExceedsRemainingGoal { available_minor: i64 },

    #[error("cannot cancel a completed donation; its payment has already been applied")]
    DonationAlreadyCompleted,

    #[error("donations are only completed through the payment system")]
    ManualCompletionRejected,

    #[error("a payment already exists for donation {donation_id}")]
    DuplicatePayment { donation_id: i64 },

    #[error("payment amount {payment_minor} does not match donation amount {donation_minor}")]
    AmountMismatch {
        payment_minor: i32,
        donation_minor: i32,
    },

    #[error("a successful payment cannot be changed or deleted")]
    CompletedPaymentImmutable,

    #[error("campaign status cannot change from {from} to {to}")]
    InvalidStatusTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidAmount
            | CoreError::EmptyPaymentMethod
            | CoreError::InvalidEnumValue { .. }
            | CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::Unauthorized(_) => ErrorKind::Unauthorized,
            CoreError::Forbidden(_) => ErrorKind::Forbidden,
            CoreError::CampaignNotFound(_)
            | CoreError::DonationNotFound(_)
            | CoreError::PaymentNotFound(_)
            | CoreError::UserNotFound(_)
            | CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::CampaignNotActive { .. }
            | CoreError::CampaignNotAcceptingFunds { .. }
            | CoreError::GoalAlreadyReached
            | CoreError::ExceedsRemainingGoal { .. }
            | CoreError::DonationAlreadyCompleted
            | CoreError::ManualCompletionRejected
            | CoreError::DuplicatePayment { .. }
            | CoreError::AmountMismatch { .. }
            | CoreError::CompletedPaymentImmutable
            | CoreError::InvalidStatusTransition { .. }
            | CoreError::Conflict(_) => ErrorKind::Conflict,
            CoreError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl From<diesel::result::Error> for CoreError {
    fn from(error: diesel::result::Error) -> Self {
        CoreError::Persistence(anyhow::Error::new(error))
    }
}

impl From<diesel::r2d2::PoolError> for CoreError {
    fn from(error: diesel::r2d2::PoolError) -> Self {
        CoreError::Persistence(anyhow::Error::new(error))
    }
}
