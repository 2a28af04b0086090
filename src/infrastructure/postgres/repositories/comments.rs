use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    entities::comments::{CommentEntity, InsertCommentEntity, UserCommentLikeEntity},
    entities::users::UserEntity,
    errors::CoreError,
    repositories::comments::CommentRepository,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::{app_users, comments, user_comment_likes};

pub struct CommentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CommentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CommentRepository for CommentPostgres {
    async fn create(
        &self,
        insert_comment_entity: InsertCommentEntity,
    ) -> Result<(CommentEntity, UserEntity), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<(CommentEntity, UserEntity), CoreError, _>(|conn| {
            let user_id = insert_comment_entity.user_id;

            let comment = diesel::insert_into(comments::table)
                .values(&insert_comment_entity)
                .returning(CommentEntity::as_returning())
                .get_result(conn)?;

            let user = app_users::table
                .find(user_id)
                .select(UserEntity::as_select())
                .first::<UserEntity>(conn)
                .optional()?
                .ok_or(CoreError::UserNotFound(user_id))?;

            Ok((comment, user))
        })
    }

    async fn list_by_campaign(
        &self,
        campaign_id: i64,
    ) -> Result<Vec<(CommentEntity, UserEntity)>, CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = comments::table
            .inner_join(app_users::table)
            .filter(comments::campaign_id.eq(campaign_id))
            .order(comments::created_at.desc())
            .select((CommentEntity::as_select(), UserEntity::as_select()))
            .load(&mut conn)?;

        Ok(rows)
    }

    async fn toggle_like(
        &self,
        comment_id: i64,
        user_id: Uuid,
    ) -> Result<(CommentEntity, bool), CoreError> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        conn.transaction::<(CommentEntity, bool), CoreError, _>(|conn| {
            comments::table
                .find(comment_id)
                .for_update()
                .select(CommentEntity::as_select())
                .first::<CommentEntity>(conn)
                .optional()?
                .ok_or_else(|| {
                    CoreError::NotFound(format!("comment {} not found", comment_id))
                })?;

            let already_liked: i64 = user_comment_likes::table
                .filter(user_comment_likes::user_id.eq(user_id))
                .filter(user_comment_likes::comment_id.eq(comment_id))
                .count()
                .get_result(conn)?;

            let liked = if already_liked > 0 {
                diesel::delete(
                    user_comment_likes::table
                        .filter(user_comment_likes::user_id.eq(user_id))
                        .filter(user_comment_likes::comment_id.eq(comment_id)),
                )
                .execute(conn)?;
                false
            } else {
                diesel::insert_into(user_comment_likes::table)
                    .values(UserCommentLikeEntity {
                        user_id,
                        comment_id,
                    })
                    .execute(conn)?;
                true
            };

            let delta = if liked { 1 } else { -1 };
            let comment = diesel::update(comments::table.find(comment_id))
                .set(comments::likes.eq(comments::likes + delta))
                .returning(CommentEntity::as_returning())
                .get_result(conn)?;

            Ok((comment, liked))
        })
    }
}
