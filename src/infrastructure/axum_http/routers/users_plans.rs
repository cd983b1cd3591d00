use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};

use crate::application::usecases::users_plans::UsersPlansUseCase;
use crate::domain::{
    repositories::users_plans::UsersPlansRepository,
    value_objects::users_plans::{AssignPlanModel, UpdateUsersPlansModel},
};
use crate::infrastructure::axum_http::auth::{AdminUser, AuthUser};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::users_plans::UsersPlansPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let users_plans_repository = UsersPlansPostgres::new(Arc::clone(&db_pool));
    let users_plans_usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

    Router::new()
        .route("/", post(assign_plan).get(get_all_users_plans))
        .route("/user/:user_id", get(get_users_plans_by_user_id))
        .route("/active", get(get_active_users_plans))
        .route("/inactive", get(get_inactive_users_plans))
        .route("/user/:user_id/active", get(get_active_users_plans_by_user_id))
        .route("/:users_plans_id", put(update_users_plan))
        .with_state(Arc::new(users_plans_usecase))
}

pub async fn assign_plan<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _admin: AdminUser,
    Json(assign_plan_model): Json<AssignPlanModel>,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase.assign_plan(assign_plan_model).await {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_all_users_plans<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _admin: AdminUser,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase.get_all_users_plans().await {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_users_plans_by_user_id<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase
        .get_users_plans_by_user_id(user_id)
        .await
    {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_active_users_plans<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _auth: AuthUser,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase.get_active_users_plans().await {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_inactive_users_plans<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _auth: AuthUser,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase.get_inactive_users_plans().await {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_active_users_plans_by_user_id<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase
        .get_active_users_plans_by_user_id(user_id)
        .await
    {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_users_plan<T>(
    State(users_plans_usecase): State<Arc<UsersPlansUseCase<T>>>,
    _auth: AuthUser,
    Path(users_plans_id): Path<i64>,
    Json(update_users_plans_model): Json<UpdateUsersPlansModel>,
) -> Response
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    match users_plans_usecase
        .update_users_plan(users_plans_id, update_users_plans_model)
        .await
    {
        Ok(assignment) => (StatusCode::OK, Json(assignment)).into_response(),
        Err(err) => err.into_response(),
    }
}
