use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users_plans::{
    InsertUsersPlansEntity, UpdateUsersPlansEntity, UsersPlansEntity,
};

/// Status literal for an assignment currently in force. The column is free
/// text, so anything else counts as not active.
pub const ACTIVE_ASSIGNMENT_STATUS: &str = "ACTIVE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsersPlansModel {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub status: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl From<UsersPlansEntity> for UsersPlansModel {
    fn from(entity: UsersPlansEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            plan_id: entity.plan_id,
            status: entity.status,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPlanModel {
    pub user_id: i64,
    pub plan_id: i64,
    pub status: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl AssignPlanModel {
    pub fn to_entity(&self) -> InsertUsersPlansEntity {
        InsertUsersPlansEntity {
            user_id: self.user_id,
            plan_id: self.plan_id,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| ACTIVE_ASSIGNMENT_STATUS.to_string()),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsersPlansModel {
    pub status: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl UpdateUsersPlansModel {
    pub fn to_entity(&self) -> UpdateUsersPlansEntity {
        UpdateUsersPlansEntity {
            status: self.status.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListUsersPlansFilter {
    pub user_id: Option<i64>,
    pub status: Option<AssignmentStatusFilter>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum AssignmentStatusFilter {
    Active,
    NotActive,
}
