use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::users::{RegisterUserEntity, UserEntity},
    value_objects::enums::user_roles::UserRole,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub full_name: String,
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: UserRole::from_str(&entity.role),
            full_name: entity.full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserModel {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl RegisterUserModel {
    /// The stored `password` column holds the argon2 hash, never the raw secret.
    pub fn to_entity(&self, password_hash: String) -> RegisterUserEntity {
        RegisterUserEntity {
            email: self.email.clone(),
            password: password_hash,
            role: self.role.to_string(),
            full_name: self.full_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedInModel {
    pub token: String,
    pub user: UserModel,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}
