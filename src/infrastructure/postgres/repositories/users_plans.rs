use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};

use crate::domain::{
    entities::users_plans::{InsertUsersPlansEntity, UpdateUsersPlansEntity, UsersPlansEntity},
    repositories::users_plans::UsersPlansRepository,
    value_objects::users_plans::{
        ACTIVE_ASSIGNMENT_STATUS, AssignmentStatusFilter, ListUsersPlansFilter,
    },
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::users_plans};

pub struct UsersPlansPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UsersPlansPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UsersPlansRepository for UsersPlansPostgres {
    async fn create(
        &self,
        insert_users_plans_entity: InsertUsersPlansEntity,
    ) -> Result<UsersPlansEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let assignment = insert_into(users_plans::table)
            .values(&insert_users_plans_entity)
            .returning(UsersPlansEntity::as_select())
            .get_result::<UsersPlansEntity>(&mut conn)?;

        Ok(assignment)
    }

    async fn list(&self, filter: &ListUsersPlansFilter) -> Result<Vec<UsersPlansEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = users_plans::table
            .select(UsersPlansEntity::as_select())
            .order(users_plans::id.asc())
            .into_boxed();

        if let Some(user_id) = filter.user_id {
            query = query.filter(users_plans::user_id.eq(user_id));
        }

        match filter.status {
            Some(AssignmentStatusFilter::Active) => {
                query = query.filter(users_plans::status.eq(ACTIVE_ASSIGNMENT_STATUS));
            }
            Some(AssignmentStatusFilter::NotActive) => {
                query = query.filter(users_plans::status.ne(ACTIVE_ASSIGNMENT_STATUS));
            }
            None => {}
        }

        let results = query.load::<UsersPlansEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        users_plans_id: i64,
        update_users_plans_entity: UpdateUsersPlansEntity,
    ) -> Result<Option<UsersPlansEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // An all-`None` patch would build an empty changeset, which diesel rejects.
        if !update_users_plans_entity.has_changes() {
            let unchanged = users_plans::table
                .find(users_plans_id)
                .select(UsersPlansEntity::as_select())
                .first::<UsersPlansEntity>(&mut conn)
                .optional()?;
            return Ok(unchanged);
        }

        let assignment = update(users_plans::table.find(users_plans_id))
            .set(&update_users_plans_entity)
            .returning(UsersPlansEntity::as_select())
            .get_result::<UsersPlansEntity>(&mut conn)
            .optional()?;

        Ok(assignment)
    }
}
