use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::{
    application::usecases::users::UserUseCase,
    auth::{self, AuthUser},
    config::{config_loader, stage::Stage},
    domain::{
        errors::CoreError,
        repositories::users::UserRepository,
        value_objects::users::{LoginModel, RegisterUserModel, UpdateUserRoleModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::users::UserPostgres,
    },
};

const REFRESH_COOKIE: &str = "refresh_token";

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let user_usecase = UserUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/register", post(register::<UserPostgres>))
        .route("/login", post(login::<UserPostgres>))
        .route("/refresh", post(refresh::<UserPostgres>))
        .route("/me", get(me::<UserPostgres>))
        .route("/", get(list::<UserPostgres>))
        .route("/:user_id/role", patch(update_role::<UserPostgres>))
        .with_state(Arc::new(user_usecase))
}

fn refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(matches!(config_loader::get_stage(), Stage::Production))
        .build()
}

pub async fn register<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Json(register_user_model): Json<RegisterUserModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.register(register_user_model).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    jar: CookieJar,
    Json(login_model): Json<LoginModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    let authenticated = user_usecase.login(login_model).await?;
    let jar = jar.add(refresh_cookie(authenticated.refresh_token.clone()));
    Ok((jar, Json(authenticated)))
}

pub async fn refresh<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| CoreError::Unauthorized("missing refresh token".to_string()))?;

    let authenticated = user_usecase.refresh(&token).await?;
    let jar = jar.add(refresh_cookie(authenticated.refresh_token.clone()));
    Ok((jar, Json(authenticated)))
}

pub async fn me<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.me(auth_user.user_id).await?;
    Ok(Json(user))
}

pub async fn list<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    auth_user: AuthUser,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let users = user_usecase.list().await?;
    Ok(Json(users))
}

pub async fn update_role<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(update_user_role_model): Json<UpdateUserRoleModel>,
) -> Result<impl IntoResponse, CoreError>
where
    T: UserRepository + Send + Sync,
{
    auth::require_admin(&auth_user)?;
    let user = user_usecase
        .update_role(user_id, update_user_role_model)
        .await?;
    Ok(Json(user))
}
