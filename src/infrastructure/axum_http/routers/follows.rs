use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use crate::{
    application::usecases::follows::FollowUseCase,
    auth::AuthUser,
    domain::{
        errors::CoreError, repositories::follows::FollowRepository,
        value_objects::follows::InsertFollowModel,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::follows::FollowPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let follow_repository = FollowPostgres::new(Arc::clone(&db_pool));
    let follow_usecase = FollowUseCase::new(Arc::new(follow_repository));

    Router::new()
        .route(
            "/",
            post(follow::<FollowPostgres>).get(list::<FollowPostgres>),
        )
        .route("/:campaign_id", delete(unfollow::<FollowPostgres>))
        .with_state(Arc::new(follow_usecase))
}

pub async fn follow<T>(
    State(follow_usecase): State<Arc<FollowUseCase<T>>>,
    auth_user: AuthUser,
    Json(insert_follow_model): Json<InsertFollowModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: FollowRepository + Send + Sync,
{
    let follow = follow_usecase
        .follow(auth_user.user_id, insert_follow_model)
        .await?;
    Ok((StatusCode::CREATED, Json(follow)))
}

pub async fn unfollow<T>(
    State(follow_usecase): State<Arc<FollowUseCase<T>>>,
    auth_user: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: FollowRepository + Send + Sync,
{
    follow_usecase.unfollow(auth_user.user_id, campaign_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list<T>(
    State(follow_usecase): State<Arc<FollowUseCase<T>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    T: FollowRepository + Send + Sync,
{
    let campaigns = follow_usecase
        .list_followed_campaigns(auth_user.user_id)
        .await?;
    Ok(Json(campaigns))
}
