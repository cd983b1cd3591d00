pub mod auth;
pub mod plans;
pub mod users_plans;
