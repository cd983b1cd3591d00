pub mod plan_states;
pub mod user_roles;
