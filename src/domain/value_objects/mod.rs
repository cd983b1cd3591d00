pub mod enums;
pub mod iam;
pub mod plans;
pub mod users_plans;
