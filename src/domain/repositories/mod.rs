pub mod plans;
pub mod users;
pub mod users_plans;
