use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::users_plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = users_plans)]
pub struct UsersPlansEntity {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub status: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users_plans)]
pub struct InsertUsersPlansEntity {
    pub user_id: i64,
    pub plan_id: i64,
    pub status: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users_plans)]
pub struct UpdateUsersPlansEntity {
    pub status: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl UpdateUsersPlansEntity {
    /// Diesel rejects an empty changeset, so callers treat an all-`None` patch as a read.
    pub fn has_changes(&self) -> bool {
        self.status.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }
}
