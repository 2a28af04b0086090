use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::comments::{CommentEntity, InsertCommentEntity};
use crate::domain::entities::users::UserEntity;
use crate::domain::errors::CoreError;

#[automock]
#[async_trait]
pub trait CommentRepository {
    /// Inserts the comment and returns it together with its author row.
    async fn create(
        &self,
        insert_comment_entity: InsertCommentEntity,
    ) -> Result<(CommentEntity, UserEntity), CoreError>;
    async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<(CommentEntity, UserEntity)>, CoreError>;
    /// Flips the caller's like and keeps the counter consistent with the
    /// join table in one transaction. Returns the comment and whether the
    /// caller now likes it.
    async fn toggle_like(
        &self,
        comment_id: i64,
        user_id: Uuid,
    ) -> Result<(CommentEntity, bool), CoreError>;
}
