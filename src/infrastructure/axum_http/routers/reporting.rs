use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{
    application::usecases::reporting::ReportingUseCase,
    auth::{self, AuthUser},
    domain::{
        errors::CoreError,
        repositories::{campaigns::CampaignRepository, reporting::ReportingRepository},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{campaigns::CampaignPostgres, reporting::ReportingPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let reporting_repository = ReportingPostgres::new(Arc::clone(&db_pool));
    let campaign_repository = CampaignPostgres::new(Arc::clone(&db_pool));
    let reporting_usecase = ReportingUseCase::new(
        Arc::new(reporting_repository),
        Arc::new(campaign_repository),
    );

    Router::new()
        .route(
            "/platform",
            get(platform_stats::<ReportingPostgres, CampaignPostgres>),
        )
        .route(
            "/campaign/:campaign_id",
            get(campaign_stats::<ReportingPostgres, CampaignPostgres>),
        )
        .route(
            "/donor/:donor_id",
            get(donor_stats::<ReportingPostgres, CampaignPostgres>),
        )
        .route(
            "/admin-key-stats",
            get(admin_key_stats::<ReportingPostgres, CampaignPostgres>),
        )
        .route(
            "/transaction-history",
            get(transaction_history::<ReportingPostgres, CampaignPostgres>),
        )
        .with_state(Arc::new(reporting_usecase))
}

pub async fn platform_stats<R, C>(
    State(reporting_usecase): State<Arc<ReportingUseCase<R, C>>>,
) -> Result<impl IntoResponse, CoreError>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    let stats = reporting_usecase.platform_stats().await?;
    Ok(Json(stats))
}

pub async fn campaign_stats<R, C>(
    State(reporting_usecase): State<Arc<ReportingUseCase<R, C>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    let stats = reporting_usecase.campaign_stats(campaign_id).await?;
    Ok(Json(stats))
}

pub async fn donor_stats<R, C>(
    State(reporting_usecase): State<Arc<ReportingUseCase<R, C>>>,
    Path(donor_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoreError>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    let stats = reporting_usecase.donor_stats(donor_id).await?;
    Ok(Json(stats))
}

pub async fn admin_key_stats<R, C>(
    State(reporting_usecase): State<Arc<ReportingUseCase<R, C>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let stats = reporting_usecase.admin_key_stats().await?;
    Ok(Json(stats))
}

pub async fn transaction_history<R, C>(
    State(reporting_usecase): State<Arc<ReportingUseCase<R, C>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    R: ReportingRepository + Send + Sync,
    C: CampaignRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let history = reporting_usecase.transaction_history().await?;
    Ok(Json(history))
}
