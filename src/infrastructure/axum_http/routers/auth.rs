use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::application::usecases::auth::AuthUseCase;
use crate::config::config_model::AuthSecret;
use crate::domain::{
    repositories::users::UserRepository,
    value_objects::iam::{LoginModel, RegisterUserModel},
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::users::UserPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>, auth_secret: AuthSecret) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let auth_usecase = AuthUseCase::new(Arc::new(user_repository), auth_secret);

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(Arc::new(auth_usecase))
}

pub async fn register<T>(
    State(auth_usecase): State<Arc<AuthUseCase<T>>>,
    Json(register_user_model): Json<RegisterUserModel>,
) -> Response
where
    T: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.register(register_user_model).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn login<T>(
    State(auth_usecase): State<Arc<AuthUseCase<T>>>,
    Json(login_model): Json<LoginModel>,
) -> Response
where
    T: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.login(login_model).await {
        Ok(logged_in) => (StatusCode::OK, Json(logged_in)).into_response(),
        Err(err) => err.into_response(),
    }
}
