use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::comments::InsertCommentEntity,
    errors::CoreError,
    repositories::comments::CommentRepository,
    value_objects::comments::{CommentLikeModel, CommentModel, InsertCommentModel},
    value_objects::users::UserSummary,
};

const MAX_COMMENT_LEN: usize = 255;

pub struct CommentUseCase<T>
where
    T: CommentRepository + Send + Sync,
{
    comment_repository: Arc<T>,
}

impl<T> CommentUseCase<T>
where
    T: CommentRepository + Send + Sync,
{
    pub fn new(comment_repository: Arc<T>) -> Self {
        Self { comment_repository }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        insert_comment_model: InsertCommentModel,
    ) -> Result<CommentModel, CoreError> {
        let content = insert_comment_model.content.trim().to_string();
        if content.is_empty() {
            return Err(CoreError::Validation("comment cannot be empty".to_string()));
        }
        if content.chars().count() > MAX_COMMENT_LEN {
            return Err(CoreError::Validation(format!(
                "comment cannot exceed {} characters",
                MAX_COMMENT_LEN
            )));
        }

        let (comment, user) = self
            .comment_repository
            .create(InsertCommentEntity {
                campaign_id: insert_comment_model.campaign_id,
                user_id,
                content,
                likes: 0,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            comment_id = comment.id,
            campaign_id = comment.campaign_id,
            "comments: comment posted"
        );

        Ok(CommentModel {
            id: comment.id,
            campaign_id: comment.campaign_id,
            content: comment.content,
            likes: comment.likes,
            created_at: comment.created_at,
            user: UserSummary {
                user_id: user.id,
                username: user.username,
                profile_image: user.profile_image,
            },
        })
    }

    pub async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<CommentModel>, CoreError> {
        let rows = self.comment_repository.list_by_campaign(campaign_id).await?;

        Ok(rows
            .into_iter()
            .map(|(comment, user)| CommentModel {
                id: comment.id,
                campaign_id: comment.campaign_id,
                content: comment.content,
                likes: comment.likes,
                created_at: comment.created_at,
                user: UserSummary {
                    user_id: user.id,
                    username: user.username,
                    profile_image: user.profile_image,
                },
            })
            .collect())
    }

    pub async fn toggle_like(
        &self,
        comment_id: i64,
        user_id: Uuid,
    ) -> Result<CommentLikeModel, CoreError> {
        let (comment, liked) = self
            .comment_repository
            .toggle_like(comment_id, user_id)
            .await?;

        Ok(CommentLikeModel {
            comment_id: comment.id,
            likes: comment.likes,
            liked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::comments::MockCommentRepository;

    #[tokio::test]
    async fn create_rejects_blank_and_oversized_comments() {
        let mut mock = MockCommentRepository::new();
        mock.expect_create().never();

        let usecase = CommentUseCase::new(Arc::new(mock));

        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertCommentModel {
                    campaign_id: 1,
                    content: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = usecase
            .create(
                Uuid::new_v4(),
                InsertCommentModel {
                    campaign_id: 1,
                    content: "x".repeat(MAX_COMMENT_LEN + 1),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
