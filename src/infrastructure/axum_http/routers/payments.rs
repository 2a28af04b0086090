use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use crate::{
    application::usecases::payments::PaymentUseCase,
    auth::{self, AuthUser},
    domain::{
        errors::CoreError,
        repositories::payments::PaymentRepository,
        value_objects::payments::{
            InsertPaymentModel, PaymentListFilter, UpdatePaymentMethodModel,
            UpdatePaymentStatusModel,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::payments::PaymentPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));
    let payment_usecase = PaymentUseCase::new(Arc::new(payment_repository));

    Router::new()
        .route(
            "/",
            post(create::<PaymentPostgres>).get(list::<PaymentPostgres>),
        )
        .route(
            "/:payment_id",
            get(view::<PaymentPostgres>).delete(remove::<PaymentPostgres>),
        )
        .route(
            "/donation/:donation_id",
            get(view_by_donation::<PaymentPostgres>),
        )
        .route(
            "/:payment_id/status",
            patch(update_status::<PaymentPostgres>),
        )
        .route(
            "/:payment_id/method",
            patch(update_method::<PaymentPostgres>),
        )
        .with_state(Arc::new(payment_usecase))
}

pub async fn create<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    _auth_user: AuthUser,
    Json(insert_payment_model): Json<InsertPaymentModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    let payment = payment_usecase.create(insert_payment_model).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn view<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    Path(payment_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    let payment = payment_usecase.view(payment_id).await?;
    Ok(Json(payment))
}

pub async fn view_by_donation<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    Path(donation_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    let payment = payment_usecase.view_by_donation(donation_id).await?;
    Ok(Json(payment))
}

pub async fn list<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    auth_user: AuthUser,
    Query(filter): Query<PaymentListFilter>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let payments = payment_usecase.list(filter).await?;
    Ok(Json(payments))
}

pub async fn update_status<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    _auth_user: AuthUser,
    Path(payment_id): Path<i64>,
    Json(update_payment_status_model): Json<UpdatePaymentStatusModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    let payment = payment_usecase
        .update_status(payment_id, update_payment_status_model)
        .await?;
    Ok(Json(payment))
}

pub async fn update_method<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    _auth_user: AuthUser,
    Path(payment_id): Path<i64>,
    Json(update_payment_method_model): Json<UpdatePaymentMethodModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    let payment = payment_usecase
        .update_method(payment_id, update_payment_method_model)
        .await?;
    Ok(Json(payment))
}

pub async fn remove<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    auth_user: AuthUser,
    Path(payment_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError>
where
    T: PaymentRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    payment_usecase.delete(payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
