use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.message(), info.constraint_name(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "Resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        message: &str,
        constraint_name: Option<&str>,
        operation: &str,
    ) -> AppError {
        let parsed = match kind {
            DatabaseErrorKind::UniqueViolation => {
                ConstraintParser::parse_key_violation(message, constraint_name).map(
                    |(entity, field, value)| AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                )
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                ConstraintParser::parse_key_violation(message, constraint_name).map(
                    |(entity, field, value)| AppError::Validation {
                        field,
                        reason: format!("Invalid reference from {} with value '{}'", entity, value),
                    },
                )
            }
            DatabaseErrorKind::NotNullViolation => {
                ConstraintParser::parse_column_violation(message, constraint_name).map(
                    |(entity, field)| AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    },
                )
            }
            DatabaseErrorKind::CheckViolation => {
                ConstraintParser::parse_column_violation(message, constraint_name).map(
                    |(entity, field)| AppError::Validation {
                        field,
                        reason: format!("Check constraint failed for {} field", entity),
                    },
                )
            }
            _ => None,
        };

        parsed.unwrap_or_else(|| AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("Database error: {}", message)),
        })
    }
}
