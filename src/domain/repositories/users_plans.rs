use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::users_plans::{
    InsertUsersPlansEntity, UpdateUsersPlansEntity, UsersPlansEntity,
};
use crate::domain::value_objects::users_plans::ListUsersPlansFilter;

#[async_trait]
#[automock]
pub trait UsersPlansRepository {
    async fn create(
        &self,
        insert_users_plans_entity: InsertUsersPlansEntity,
    ) -> Result<UsersPlansEntity>;
    async fn list(&self, filter: &ListUsersPlansFilter) -> Result<Vec<UsersPlansEntity>>;
    async fn update(
        &self,
        users_plans_id: i64,
        update_users_plans_entity: UpdateUsersPlansEntity,
    ) -> Result<Option<UsersPlansEntity>>;
}
