use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    application::usecases::comments::CommentUseCase,
    auth::AuthUser,
    domain::{
        errors::CoreError, repositories::comments::CommentRepository,
        value_objects::comments::InsertCommentModel,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::comments::CommentPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let comment_repository = CommentPostgres::new(Arc::clone(&db_pool));
    let comment_usecase = CommentUseCase::new(Arc::new(comment_repository));

    Router::new()
        .route("/", post(create::<CommentPostgres>))
        .route(
            "/campaign/:campaign_id",
            get(list_by_campaign::<CommentPostgres>),
        )
        .route("/:comment_id/like", post(toggle_like::<CommentPostgres>))
        .with_state(Arc::new(comment_usecase))
}

pub async fn create<T>(
    State(comment_usecase): State<Arc<CommentUseCase<T>>>,
    auth_user: AuthUser,
    Json(insert_comment_model): Json<InsertCommentModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CommentRepository + Send + Sync,
{
    let comment = comment_usecase
        .create(auth_user.user_id, insert_comment_model)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn list_by_campaign<T>(
    State(comment_usecase): State<Arc<CommentUseCase<T>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CommentRepository + Send + Sync,
{
    let comments = comment_usecase.list_by_campaign(campaign_id).await?;
    Ok(Json(comments))
}

pub async fn toggle_like<T>(
    State(comment_usecase): State<Arc<CommentUseCase<T>>>,
    auth_user: AuthUser,
    Path(comment_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CommentRepository + Send + Sync,
{
    let like = comment_usecase
        .toggle_like(comment_id, auth_user.user_id)
        .await?;
    Ok(Json(like))
}
