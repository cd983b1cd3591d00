use diesel::result::{DatabaseErrorKind, Error as DieselError};

pub mod auth;
pub mod plans;
pub mod users_plans;

/// Repositories surface database failures as `anyhow::Error`. Constraint
/// violations are recovered here so usecases can map them to client errors.
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DieselError>(),
        Some(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _
        ))
    )
}

pub(crate) fn is_foreign_key_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DieselError>(),
        Some(DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            _
        ))
    )
}
