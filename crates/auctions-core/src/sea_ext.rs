use sea_orm::{DbErr, SqlErr};

/// Classification helpers for driver errors surfaced through sea-orm.
pub trait DbErrExt {
    /// `true` when the statement hit a UNIQUE / primary-key constraint.
    fn is_unique_violation(&self) -> bool;
}

impl DbErrExt for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}
