use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::usecases::plans::PlanUseCase;
use crate::domain::{
    repositories::plans::PlanRepository,
    value_objects::plans::{CreatePlanModel, UpdatePlanModel},
};
use crate::infrastructure::axum_http::auth::AdminUser;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let plan_usecase = PlanUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", post(create_plan).get(list_active_plans))
        .route(
            "/:plan_id",
            get(get_plan_by_id).put(update_plan).delete(delete_plan),
        )
        .with_state(Arc::new(plan_usecase))
}

pub async fn create_plan<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _admin: AdminUser,
    Json(create_plan_model): Json<CreatePlanModel>,
) -> Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.create_plan(create_plan_model).await {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_active_plans<T>(State(plan_usecase): State<Arc<PlanUseCase<T>>>) -> Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.list_active_plans().await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_plan_by_id<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    Path(plan_id): Path<i64>,
) -> Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.get_plan_by_id(plan_id).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_plan<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _admin: AdminUser,
    Path(plan_id): Path<i64>,
    Json(update_plan_model): Json<UpdatePlanModel>,
) -> Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.update_plan(plan_id, update_plan_model).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_plan<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    _admin: AdminUser,
    Path(plan_id): Path<i64>,
) -> Response
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plan_usecase.delete_plan(plan_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
