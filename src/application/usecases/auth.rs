use std::sync::Arc;

use anyhow::Result as AnyResult;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rand::rngs::OsRng;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::usecases::is_unique_violation;
use crate::config::config_model::AuthSecret;
use crate::domain::{
    entities::users::UserEntity,
    repositories::users::UserRepository,
    value_objects::iam::{Claims, LoggedInModel, LoginModel, RegisterUserModel, UserModel},
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

pub struct AuthUseCase<T>
where
    T: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<T>,
    auth_secret: AuthSecret,
}

impl<T> AuthUseCase<T>
where
    T: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<T>, auth_secret: AuthSecret) -> Self {
        Self {
            user_repository,
            auth_secret,
        }
    }

    pub async fn register(
        &self,
        register_user_model: RegisterUserModel,
    ) -> UseCaseResult<UserModel> {
        info!(email = %register_user_model.email, "auth: registering user");

        let password_hash = hash_password(&register_user_model.password).map_err(|err| {
            error!(
                email = %register_user_model.email,
                error = ?err,
                "auth: failed to hash password"
            );
            AuthError::Internal(err)
        })?;

        let user = self
            .user_repository
            .register(register_user_model.to_entity(password_hash))
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    warn!(
                        email = %register_user_model.email,
                        "auth: email already registered"
                    );
                    AuthError::EmailTaken
                } else {
                    error!(
                        email = %register_user_model.email,
                        db_error = ?err,
                        "auth: failed to insert user"
                    );
                    AuthError::Internal(err)
                }
            })?;

        info!(user_id = user.id, "auth: user registered");
        Ok(UserModel::from(user))
    }

    pub async fn login(&self, login_model: LoginModel) -> UseCaseResult<LoggedInModel> {
        info!(email = %login_model.email, "auth: login requested");

        let user = self
            .user_repository
            .find_by_email(&login_model.email)
            .await
            .map_err(|err| {
                error!(
                    email = %login_model.email,
                    db_error = ?err,
                    "auth: failed to look up user by email"
                );
                AuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(email = %login_model.email, "auth: unknown email");
                AuthError::InvalidCredentials
            })?;

        let password_matches =
            verify_password(&login_model.password, &user.password).map_err(|err| {
                error!(
                    user_id = user.id,
                    error = ?err,
                    "auth: stored password hash is unreadable"
                );
                AuthError::Internal(err)
            })?;

        if !password_matches {
            warn!(user_id = user.id, "auth: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sign_token(&user)?;

        info!(user_id = user.id, "auth: login succeeded");
        Ok(LoggedInModel {
            token,
            user: UserModel::from(user),
        })
    }

    fn sign_token(&self, user: &UserEntity) -> UseCaseResult<String> {
        let ttl = i64::try_from(self.auth_secret.token_ttl_seconds)
            .map_err(|_| AuthError::Internal(anyhow::anyhow!("token ttl is too large")))?;

        let now = Utc::now();
        let exp = now.checked_add_signed(Duration::seconds(ttl)).ok_or_else(|| {
            AuthError::Internal(anyhow::anyhow!("failed to compute token expiration"))
        })?;

        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.clone(),
            email: user.email.clone(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.auth_secret.secret.as_bytes()),
        )
        .map_err(|err| {
            error!(user_id = user.id, error = ?err, "auth: failed to sign token");
            AuthError::Internal(err.into())
        })
    }
}

fn hash_password(password: &str) -> AnyResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow::anyhow!("failed to hash password: {}", err))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> AnyResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|err| anyhow::anyhow!("stored password hash is malformed: {}", err))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
