use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    application::usecases::admin_reviews::AdminReviewUseCase,
    auth::{self, AuthUser},
    domain::{
        errors::CoreError,
        notification::ReviewEventSink,
        repositories::{admin_reviews::AdminReviewRepository, campaigns::CampaignRepository},
        value_objects::admin_reviews::{InsertAdminReviewModel, UpdateAdminReviewModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{admin_reviews::AdminReviewPostgres, campaigns::CampaignPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, review_event_sink: Arc<dyn ReviewEventSink>) -> Router {
    let admin_review_repository = AdminReviewPostgres::new(Arc::clone(&db_pool));
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let admin_review_usecase = AdminReviewUseCase::new(
        Arc::new(admin_review_repository),
        Arc::new(campaign_repository),
        review_event_sink,
    );

    Router::new()
        .route("/", post(create::<AdminReviewPostgres, CampaignPostgres>))
        .route(
            "/me",
            get(list_my_reviews::<AdminReviewPostgres, CampaignPostgres>),
        )
        .route(
            "/:review_id",
            get(view::<AdminReviewPostgres, CampaignPostgres>)
                .patch(update::<AdminReviewPostgres, CampaignPostgres>)
                .delete(remove::<AdminReviewPostgres, CampaignPostgres>),
        )
        .route(
            "/campaign/:campaign_id",
            get(list_by_campaign::<AdminReviewPostgres, CampaignPostgres>),
        )
        .with_state(Arc::new(admin_review_usecase))
}

pub async fn create<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
    Json(insert_admin_review_model): Json<InsertAdminReviewModel>,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let review = admin_review_usecase
        .create(auth_user.user_id, insert_admin_review_model)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn view<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
    Path(review_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let review = admin_review_usecase.view(review_id).await?;
    Ok(Json(review))
}

pub async fn list_my_reviews<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let reviews = admin_review_usecase.list_by_admin(auth_user.user_id).await?;
    Ok(Json(reviews))
}

pub async fn list_by_campaign<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let reviews = admin_review_usecase.list_by_campaign(campaign_id).await?;
    Ok(Json(reviews))
}

pub async fn update<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
    Path(review_id): Path<i64>,
    Json(update_admin_review_model): Json<UpdateAdminReviewModel>,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let review = admin_review_usecase
        .update(review_id, update_admin_review_model)
        .await?;
    Ok(Json(review))
}

pub async fn remove<R, C>(
    State(admin_review_usecase): State<Arc<AdminReviewUseCase<R, C>>>,
    auth_user: AuthUser,
    Path(review_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    R: AdminReviewRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    admin_review_usecase.delete(review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
