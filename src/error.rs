use thiserror::Error;

use crate::validation::ValidationErrors;

/// Failures raised when a generator is handed a statement it cannot turn
/// into complete SQL. Soft problems go through [`ValidationErrors`] instead;
/// this channel is for preconditions the caller must not violate.
#[derive(Error, Debug)]
pub enum GenerateSqlError {
    #[error("upsert statement for table {table} has no primary key columns")]
    EmptyPrimaryKey { table: String },

    #[error("statement for table {table} has no column values")]
    NoColumnValues { table: String },

    #[error("statement failed validation: {0}")]
    Validation(ValidationErrors),
}
