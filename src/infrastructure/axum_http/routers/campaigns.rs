use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    application::usecases::campaigns::CampaignUseCase,
    auth::{self, AuthUser},
    domain::{
        errors::CoreError,
        repositories::campaigns::CampaignRepository,
        value_objects::campaigns::{
            CampaignListFilter, InsertCampaignModel, UpdateCampaignModel,
            UpdateCampaignStatusModel,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::campaigns::CampaignPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let campaign_usecase = CampaignUseCase::new(Arc::new(campaign_repository));

    Router::new()
        .route(
            "/",
            post(create::<CampaignPostgres>).get(list::<CampaignPostgres>),
        )
        .route(
            "/:campaign_id",
            get(view::<CampaignPostgres>)
                .patch(update::<CampaignPostgres>)
                .delete(remove::<CampaignPostgres>),
        )
        .route(
            "/:campaign_id/status",
            patch(set_status::<CampaignPostgres>),
        )
        .route(
            "/:campaign_id/available",
            get(available_amount::<CampaignPostgres>),
        )
        .route("/:campaign_id/updates", get(updates::<CampaignPostgres>))
        .route(
            "/creator/:creator_id",
            get(list_by_creator::<CampaignPostgres>),
        )
        .route("/search/:title", get(search::<CampaignPostgres>))
        .with_state(Arc::new(campaign_usecase))
}

pub async fn create<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    auth_user: AuthUser,
    Json(insert_campaign_model): Json<InsertCampaignModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaign = campaign_usecase
        .create(auth_user.user_id, insert_campaign_model)
        .await?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

pub async fn view<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaign = campaign_usecase.view(campaign_id).await?;
    Ok(Json(campaign))
}

pub async fn list<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Query(filter): Query<CampaignListFilter>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaigns = campaign_usecase.list(filter).await?;
    Ok(Json(campaigns))
}

pub async fn list_by_creator<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Path(creator_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaigns = campaign_usecase.list_by_creator(creator_id).await?;
    Ok(Json(campaigns))
}

pub async fn search<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaigns = campaign_usecase.search_by_title(title).await?;
    Ok(Json(campaigns))
}

pub async fn update<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    _auth_user: AuthUser,
    Path(campaign_id): Path<i64>,
    Json(update_campaign_model): Json<UpdateCampaignModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let campaign = campaign_usecase
        .update(campaign_id, update_campaign_model)
        .await?;
    Ok(Json(campaign))
}

pub async fn set_status<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    auth_user: AuthUser,
    Path(campaign_id): Path<i64>,
    Json(update_campaign_status_model): Json<UpdateCampaignStatusModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let campaign = campaign_usecase
        .set_status(campaign_id, update_campaign_status_model)
        .await?;
    Ok(Json(campaign))
}

pub async fn remove<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    _auth_user: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    campaign_usecase.delete(campaign_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn available_amount<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let capacity = campaign_usecase.available_amount(campaign_id).await?;
    Ok(Json(capacity))
}

pub async fn updates<T>(
    State(campaign_usecase): State<Arc<CampaignUseCase<T>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: CampaignRepository + Send + Sync,
{
    let updates = campaign_usecase.updates(campaign_id).await?;
    Ok(Json(updates))
}
