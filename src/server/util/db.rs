//! Classification of datastore constraint violations.

use sea_orm::{DbErr, SqlErr};

/// Whether the error was raised by a unique or primary key constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether the error was raised by a foreign key constraint.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
