use sea_orm::{DbBackend, DbErr, RuntimeErr, sqlx::error::ErrorKind};

pub mod postgres;

/// Rewrites `?` placeholders into the backend's native form (`$1, $2, …` on PostgreSQL).
///
/// Only trusted statement text goes through here; user input is always bound.
pub fn bind_placeholders(sql: &str, backend: DbBackend) -> String {
    match backend {
        DbBackend::Postgres => {
            let mut bound = String::with_capacity(sql.len() + 8);
            let mut index = 0;
            for ch in sql.chars() {
                if ch == '?' {
                    index += 1;
                    bound.push('$');
                    bound.push_str(&index.to_string());
                } else {
                    bound.push(ch);
                }
            }
            bound
        }
        _ => sql.to_string(),
    }
}

/// Constraint violations the services translate into client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Classifies a failed statement by the driver's error kind, which sqlx derives from the
/// SQLSTATE code.
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(db_err)))) = err
    else {
        return None;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::Unique),
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_placeholders_numbers_in_order() {
        assert_eq!(
            bind_placeholders("a = ? AND (b LIKE ? OR c LIKE ?) LIMIT ? OFFSET ?", DbBackend::Postgres),
            "a = $1 AND (b LIKE $2 OR c LIKE $3) LIMIT $4 OFFSET $5"
        );
        assert_eq!(
            bind_placeholders("a = ? LIMIT ?", DbBackend::MySql),
            "a = ? LIMIT ?"
        );
    }

    #[test]
    fn test_plain_errors_are_not_constraint_violations() {
        assert_eq!(constraint_violation(&DbErr::Custom("boom".to_string())), None);
        assert_eq!(
            constraint_violation(&test_errors::exec_error(ErrorKind::CheckViolation)),
            None
        );
    }

    #[test]
    fn test_driver_error_kinds_are_classified() {
        assert_eq!(
            constraint_violation(&test_errors::query_error(ErrorKind::UniqueViolation)),
            Some(ConstraintViolation::Unique)
        );
        assert_eq!(
            constraint_violation(&test_errors::exec_error(ErrorKind::ForeignKeyViolation)),
            Some(ConstraintViolation::ForeignKey)
        );
    }
}
