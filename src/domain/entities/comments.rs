use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::{comments, user_comment_likes};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = comments)]
pub struct CommentEntity {
    pub id: i64,
    pub campaign_id: i64,
    pub user_id: Uuid,
    pub content: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct InsertCommentEntity {
    pub campaign_id: i64,
    pub user_id: Uuid,
    pub content: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Insertable)]
#[diesel(primary_key(user_id, comment_id))]
#[diesel(table_name = user_comment_likes)]
pub struct UserCommentLikeEntity {
    pub user_id: Uuid,
    pub comment_id: i64,
}
