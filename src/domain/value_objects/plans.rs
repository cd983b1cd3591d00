use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity},
    value_objects::enums::plan_states::PlanState,
};

/// Public view of a plan. Pricing and bookkeeping columns stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanModel {
    pub id: i64,
    pub name: String,
    pub max_instances: i32,
    pub description: Option<String>,
    pub state: PlanState,
}

impl From<PlanEntity> for PlanModel {
    fn from(entity: PlanEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            max_instances: entity.max_instances,
            description: entity.description,
            state: PlanState::from_str(&entity.state),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanModel {
    pub name: String,
    pub max_instances: i32,
    pub price_id_mercado_pago: i32,
    pub description: Option<String>,
    pub state: Option<PlanState>,
}

impl CreatePlanModel {
    pub fn to_entity(&self) -> InsertPlanEntity {
        InsertPlanEntity {
            name: self.name.clone(),
            max_instances: self.max_instances,
            price_id_mercadopago: self.price_id_mercado_pago,
            description: self.description.clone(),
            state: self.state.unwrap_or_default().to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanModel {
    pub name: Option<String>,
    pub max_instances: Option<i32>,
    pub price_id_mercado_pago: Option<i32>,
    pub description: Option<String>,
    pub state: Option<PlanState>,
}

impl UpdatePlanModel {
    pub fn to_entity(&self) -> UpdatePlanEntity {
        UpdatePlanEntity {
            name: self.name.clone(),
            max_instances: self.max_instances,
            price_id_mercadopago: self.price_id_mercado_pago,
            description: self.description.clone(),
            state: self.state.map(|state| state.to_string()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
