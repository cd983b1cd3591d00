use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanEntity {
    pub id: i64,
    pub name: String,
    pub max_instances: i32,
    pub price_id_mercadopago: i32,
    pub description: Option<String>,
    pub state: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plans)]
pub struct InsertPlanEntity {
    pub name: String,
    pub max_instances: i32,
    pub price_id_mercadopago: i32,
    pub description: Option<String>,
    pub state: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial patch: `None` fields are left untouched, `updated_at` is always refreshed.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = plans)]
pub struct UpdatePlanEntity {
    pub name: Option<String>,
    pub max_instances: Option<i32>,
    pub price_id_mercadopago: Option<i32>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub updated_at: NaiveDateTime,
}
