use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::usecases::is_unique_violation;
use crate::domain::{
    repositories::plans::PlanRepository,
    value_objects::{
        enums::plan_states::PlanState,
        plans::{CreatePlanModel, PlanModel, UpdatePlanModel},
    },
};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan not found")]
    NotFound,
    #[error("plan name is already in use")]
    DuplicateName,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PlanError::NotFound => StatusCode::NOT_FOUND,
            PlanError::DuplicateName => StatusCode::CONFLICT,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PlanError>;

pub struct PlanUseCase<T>
where
    T: PlanRepository + Send + Sync + 'static,
{
    plan_repository: Arc<T>,
}

impl<T> PlanUseCase<T>
where
    T: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repository: Arc<T>) -> Self {
        Self { plan_repository }
    }

    pub async fn create_plan(&self, create_plan_model: CreatePlanModel) -> UseCaseResult<PlanModel> {
        info!(plan_name = %create_plan_model.name, "plans: creating plan");

        let plan = self
            .plan_repository
            .create(create_plan_model.to_entity())
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    warn!(
                        plan_name = %create_plan_model.name,
                        "plans: plan name already in use"
                    );
                    PlanError::DuplicateName
                } else {
                    error!(
                        plan_name = %create_plan_model.name,
                        db_error = ?err,
                        "plans: failed to create plan"
                    );
                    PlanError::Internal(err)
                }
            })?;

        info!(plan_id = plan.id, "plans: plan created");
        Ok(PlanModel::from(plan))
    }

    /// Listing is the public catalog view, so only active plans come back.
    pub async fn list_active_plans(&self) -> UseCaseResult<Vec<PlanModel>> {
        info!("plans: listing active plans");

        let plans = self
            .plan_repository
            .list_by_state(&PlanState::Active.to_string())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "plans: failed to list active plans");
                PlanError::Internal(err)
            })?;

        let plan_count = plans.len();
        info!(plan_count, "plans: active plans loaded");
        Ok(plans.into_iter().map(PlanModel::from).collect())
    }

    /// Lookups by id do not filter on state, so inactive plans stay reachable.
    pub async fn get_plan_by_id(&self, plan_id: i64) -> UseCaseResult<PlanModel> {
        info!(plan_id, "plans: loading plan by id");

        let plan = self
            .plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "plans: failed to load plan by id");
                PlanError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(plan_id, "plans: plan not found");
                PlanError::NotFound
            })?;

        Ok(PlanModel::from(plan))
    }

    pub async fn update_plan(
        &self,
        plan_id: i64,
        update_plan_model: UpdatePlanModel,
    ) -> UseCaseResult<PlanModel> {
        info!(plan_id, "plans: updating plan");

        let plan = self
            .plan_repository
            .update(plan_id, update_plan_model.to_entity())
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    warn!(plan_id, "plans: plan name already in use");
                    PlanError::DuplicateName
                } else {
                    error!(plan_id, db_error = ?err, "plans: failed to update plan");
                    PlanError::Internal(err)
                }
            })?
            .ok_or_else(|| {
                warn!(plan_id, "plans: plan not found for update");
                PlanError::NotFound
            })?;

        info!(plan_id, "plans: plan updated");
        Ok(PlanModel::from(plan))
    }

    pub async fn delete_plan(&self, plan_id: i64) -> UseCaseResult<()> {
        info!(plan_id, "plans: deleting plan");

        let deleted_rows = self
            .plan_repository
            .delete(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "plans: failed to delete plan");
                PlanError::Internal(err)
            })?;

        if deleted_rows == 0 {
            warn!(plan_id, "plans: plan not found for delete");
            return Err(PlanError::NotFound);
        }

        info!(plan_id, "plans: plan deleted");
        Ok(())
    }
}
