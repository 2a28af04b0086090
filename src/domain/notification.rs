use chrono::{DateTime, Utc};
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::review_decisions::ReviewDecision;

/// Emitted when an admin decision lands on a campaign. Consumed by the
/// notification collaborator; delivery is fire-and-forget and must never
/// fail or delay the admin transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewEvent {
    pub campaign_id: i64,
    pub campaign_title: String,
    pub decision: ReviewDecision,
    pub reviewed_at: DateTime<Utc>,
}

#[automock]
pub trait ReviewEventSink: Send + Sync {
    fn review_decided(&self, event: ReviewEvent);
}
