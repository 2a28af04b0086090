use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use crate::{
    application::usecases::donations::DonationUseCase,
    auth::{self, AuthUser},
    domain::{
        errors::CoreError,
        repositories::donations::DonationRepository,
        value_objects::donations::{InsertDonationModel, UpdateDonationStatusModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::donations::DonationPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let donation_repository = DonationPostgres::new(Arc::clone(&db_pool));
    let donation_usecase = DonationUseCase::new(Arc::new(donation_repository));

    Router::new()
        .route("/", post(donate::<DonationPostgres>))
        .route("/me", get(list_my_donations::<DonationPostgres>))
        .route("/:donation_id", get(view::<DonationPostgres>))
        .route(
            "/campaign/:campaign_id",
            get(list_by_campaign::<DonationPostgres>),
        )
        .route("/:donation_id/cancel", post(cancel::<DonationPostgres>))
        .route("/:donation_id/status", patch(set_status::<DonationPostgres>))
        .with_state(Arc::new(donation_usecase))
}

pub async fn donate<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    auth_user: AuthUser,
    Json(insert_donation_model): Json<InsertDonationModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    let donation = donation_usecase
        .create(auth_user.user_id, insert_donation_model)
        .await?;
    Ok((StatusCode::CREATED, Json(donation)))
}

pub async fn view<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    Path(donation_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    let donation = donation_usecase.view(donation_id).await?;
    Ok(Json(donation))
}

pub async fn list_my_donations<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    let donations = donation_usecase.list_by_donor(auth_user.user_id).await?;
    Ok(Json(donations))
}

pub async fn list_by_campaign<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    Path(campaign_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    let donations = donation_usecase.list_by_campaign(campaign_id).await?;
    Ok(Json(donations))
}

pub async fn cancel<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    _auth_user: AuthUser,
    Path(donation_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    let donation = donation_usecase.cancel(donation_id).await?;
    Ok(Json(donation))
}

/// Admin-only maintenance path. Transitions into `completed` are rejected
/// by the core regardless of role.
pub async fn set_status<T>(
    State(donation_usecase): State<Arc<DonationUseCase<T>>>,
    auth_user: AuthUser,
    Path(donation_id): Path<i64>,
    Json(update_donation_status_model): Json<UpdateDonationStatusModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: DonationRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let donation = donation_usecase
        .set_status(donation_id, update_donation_status_model)
        .await?;
    Ok(Json(donation))
}
