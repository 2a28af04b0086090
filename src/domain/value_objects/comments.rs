use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::users::UserSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentModel {
    pub id: i64,
    pub campaign_id: i64,
    pub content: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertCommentModel {
    pub campaign_id: i64,
    pub content: String,
}

/// Result of a like toggle: the new counter and whether the caller now
/// likes the comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentLikeModel {
    pub comment_id: i64,
    pub likes: i32,
    pub liked: bool,
}
