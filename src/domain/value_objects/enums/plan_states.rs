use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanState {
    #[default]
    Active,
    Inactive,
}

impl Display for PlanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            PlanState::Active => "ACTIVE",
            PlanState::Inactive => "INACTIVE",
        };
        write!(f, "{}", state)
    }
}

impl PlanState {
    pub fn from_str(value: &str) -> Self {
        match value {
            "ACTIVE" => PlanState::Active,
            "INACTIVE" => PlanState::Inactive,
            _ => PlanState::Inactive,
        }
    }
}
