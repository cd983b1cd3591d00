use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::usecases::is_foreign_key_violation;
use crate::domain::{
    repositories::users_plans::UsersPlansRepository,
    value_objects::users_plans::{
        AssignPlanModel, AssignmentStatusFilter, ListUsersPlansFilter, UpdateUsersPlansModel,
        UsersPlansModel,
    },
};

#[derive(Debug, Error)]
pub enum UsersPlansError {
    #[error("plan assignment not found")]
    NotFound,
    #[error("user or plan not found")]
    UserOrPlanNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UsersPlansError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            UsersPlansError::NotFound => StatusCode::NOT_FOUND,
            UsersPlansError::UserOrPlanNotFound => StatusCode::NOT_FOUND,
            UsersPlansError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UsersPlansError>;

pub struct UsersPlansUseCase<T>
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    users_plans_repository: Arc<T>,
}

impl<T> UsersPlansUseCase<T>
where
    T: UsersPlansRepository + Send + Sync + 'static,
{
    pub fn new(users_plans_repository: Arc<T>) -> Self {
        Self {
            users_plans_repository,
        }
    }

    pub async fn get_all_users_plans(&self) -> UseCaseResult<Vec<UsersPlansModel>> {
        info!("users_plans: listing all plan assignments");
        self.list_assignments(ListUsersPlansFilter {
            user_id: None,
            status: None,
        })
        .await
    }

    pub async fn get_users_plans_by_user_id(
        &self,
        user_id: i64,
    ) -> UseCaseResult<Vec<UsersPlansModel>> {
        info!(user_id, "users_plans: listing plan assignments for user");
        self.list_assignments(ListUsersPlansFilter {
            user_id: Some(user_id),
            status: None,
        })
        .await
    }

    pub async fn get_active_users_plans(&self) -> UseCaseResult<Vec<UsersPlansModel>> {
        info!("users_plans: listing active plan assignments");
        self.list_assignments(ListUsersPlansFilter {
            user_id: None,
            status: Some(AssignmentStatusFilter::Active),
        })
        .await
    }

    /// Inactive means any status other than the active literal, not a fixed value.
    pub async fn get_inactive_users_plans(&self) -> UseCaseResult<Vec<UsersPlansModel>> {
        info!("users_plans: listing non-active plan assignments");
        self.list_assignments(ListUsersPlansFilter {
            user_id: None,
            status: Some(AssignmentStatusFilter::NotActive),
        })
        .await
    }

    pub async fn get_active_users_plans_by_user_id(
        &self,
        user_id: i64,
    ) -> UseCaseResult<Vec<UsersPlansModel>> {
        info!(user_id, "users_plans: listing active plan assignments for user");
        self.list_assignments(ListUsersPlansFilter {
            user_id: Some(user_id),
            status: Some(AssignmentStatusFilter::Active),
        })
        .await
    }

    pub async fn assign_plan(
        &self,
        assign_plan_model: AssignPlanModel,
    ) -> UseCaseResult<UsersPlansModel> {
        info!(
            user_id = assign_plan_model.user_id,
            plan_id = assign_plan_model.plan_id,
            "users_plans: assigning plan to user"
        );

        let assignment = self
            .users_plans_repository
            .create(assign_plan_model.to_entity())
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    warn!(
                        user_id = assign_plan_model.user_id,
                        plan_id = assign_plan_model.plan_id,
                        "users_plans: user or plan does not exist"
                    );
                    UsersPlansError::UserOrPlanNotFound
                } else {
                    error!(
                        user_id = assign_plan_model.user_id,
                        plan_id = assign_plan_model.plan_id,
                        db_error = ?err,
                        "users_plans: failed to assign plan"
                    );
                    UsersPlansError::Internal(err)
                }
            })?;

        info!(users_plans_id = assignment.id, "users_plans: plan assigned");
        Ok(UsersPlansModel::from(assignment))
    }

    pub async fn update_users_plan(
        &self,
        users_plans_id: i64,
        update_users_plans_model: UpdateUsersPlansModel,
    ) -> UseCaseResult<UsersPlansModel> {
        info!(users_plans_id, "users_plans: updating plan assignment");

        let assignment = self
            .users_plans_repository
            .update(users_plans_id, update_users_plans_model.to_entity())
            .await
            .map_err(|err| {
                error!(
                    users_plans_id,
                    db_error = ?err,
                    "users_plans: failed to update plan assignment"
                );
                UsersPlansError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(users_plans_id, "users_plans: plan assignment not found");
                UsersPlansError::NotFound
            })?;

        info!(users_plans_id, "users_plans: plan assignment updated");
        Ok(UsersPlansModel::from(assignment))
    }

    async fn list_assignments(
        &self,
        filter: ListUsersPlansFilter,
    ) -> UseCaseResult<Vec<UsersPlansModel>> {
        let assignments = self
            .users_plans_repository
            .list(&filter)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "users_plans: failed to list plan assignments");
                UsersPlansError::Internal(err)
            })?;

        let assignment_count = assignments.len();
        info!(assignment_count, "users_plans: plan assignments loaded");
        Ok(assignments.into_iter().map(UsersPlansModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users_plans::UsersPlansEntity;
    use crate::domain::repositories::users_plans::MockUsersPlansRepository;

    fn sample_assignment(id: i64, user_id: i64, plan_id: i64, status: &str) -> UsersPlansEntity {
        UsersPlansEntity {
            id,
            user_id,
            plan_id,
            status: status.to_string(),
            start_date: None,
            end_date: None,
        }
    }

    #[tokio::test]
    async fn assign_plan_defaults_status_to_active() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_create()
            .withf(|entity| entity.user_id == 42 && entity.plan_id == 7 && entity.status == "ACTIVE")
            .returning(|entity| {
                Box::pin(async move {
                    Ok(UsersPlansEntity {
                        id: 1,
                        user_id: entity.user_id,
                        plan_id: entity.plan_id,
                        status: entity.status,
                        start_date: entity.start_date,
                        end_date: entity.end_date,
                    })
                })
            });

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let assignment = usecase
            .assign_plan(AssignPlanModel {
                user_id: 42,
                plan_id: 7,
                status: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap();

        assert_eq!(assignment.status, "ACTIVE");
    }

    #[tokio::test]
    async fn assign_plan_maps_missing_user_or_plan_to_not_found() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository.expect_create().returning(|_| {
            Box::pin(async {
                Err(anyhow::Error::from(diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                    Box::new(
                        "insert or update on table \"users_plans\" violates foreign key constraint"
                            .to_string(),
                    ),
                )))
            })
        });

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let err = usecase
            .assign_plan(AssignPlanModel {
                user_id: 999,
                plan_id: 7,
                status: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UsersPlansError::UserOrPlanNotFound));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assign_plan_allows_overlapping_assignments_for_same_pair() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_create()
            .times(2)
            .returning(|entity| {
                Box::pin(async move {
                    Ok(UsersPlansEntity {
                        id: 1,
                        user_id: entity.user_id,
                        plan_id: entity.plan_id,
                        status: entity.status,
                        start_date: entity.start_date,
                        end_date: entity.end_date,
                    })
                })
            });

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let model = AssignPlanModel {
            user_id: 42,
            plan_id: 7,
            status: None,
            start_date: None,
            end_date: None,
        };

        assert!(usecase.assign_plan(model.clone()).await.is_ok());
        assert!(usecase.assign_plan(model).await.is_ok());
    }

    #[tokio::test]
    async fn get_all_users_plans_uses_unfiltered_query() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_list()
            .withf(|filter| filter.user_id.is_none() && filter.status.is_none())
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        sample_assignment(1, 42, 7, "ACTIVE"),
                        sample_assignment(2, 43, 7, "CANCELLED"),
                    ])
                })
            });

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let assignments = usecase.get_all_users_plans().await.unwrap();
        assert_eq!(assignments.len(), 2);
    }

    #[tokio::test]
    async fn get_inactive_users_plans_asks_for_non_active_statuses() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_list()
            .withf(|filter| {
                filter.user_id.is_none()
                    && filter.status == Some(AssignmentStatusFilter::NotActive)
            })
            .returning(|_| Box::pin(async { Ok(vec![sample_assignment(2, 43, 7, "EXPIRED")]) }));

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let assignments = usecase.get_inactive_users_plans().await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].status, "EXPIRED");
    }

    #[tokio::test]
    async fn get_active_users_plans_by_user_id_filters_user_and_status() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_list()
            .withf(|filter| {
                filter.user_id == Some(42)
                    && filter.status == Some(AssignmentStatusFilter::Active)
            })
            .returning(|_| Box::pin(async { Ok(vec![sample_assignment(1, 42, 7, "ACTIVE")]) }));

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let assignments = usecase.get_active_users_plans_by_user_id(42).await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].user_id, 42);
    }

    #[tokio::test]
    async fn update_users_plan_maps_missing_assignment_to_not_found() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_update()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let err = usecase
            .update_users_plan(
                404,
                UpdateUsersPlansModel {
                    status: Some("CANCELLED".to_string()),
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UsersPlansError::NotFound));
    }

    #[tokio::test]
    async fn update_users_plan_forwards_patch_fields() {
        let mut users_plans_repository = MockUsersPlansRepository::new();

        users_plans_repository
            .expect_update()
            .withf(|users_plans_id, entity| {
                *users_plans_id == 1
                    && entity.status.as_deref() == Some("CANCELLED")
                    && entity.start_date.is_none()
                    && entity.end_date.is_none()
            })
            .returning(|_, _| {
                Box::pin(async { Ok(Some(sample_assignment(1, 42, 7, "CANCELLED"))) })
            });

        let usecase = UsersPlansUseCase::new(Arc::new(users_plans_repository));

        let assignment = usecase
            .update_users_plan(
                1,
                UpdateUsersPlansModel {
                    status: Some("CANCELLED".to_string()),
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(assignment.status, "CANCELLED");
    }
}
