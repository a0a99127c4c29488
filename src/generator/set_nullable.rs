use tracing::debug;

use crate::dialect::Dialect;
use crate::error::GenerateSqlError;
use crate::sql::{Affected, Sql};
use crate::statement::SetNullableStatement;
use crate::validation::ValidationErrors;

use super::{SqlGenerator, PRIORITY_DATABASE};

/// Nullable-constraint changes via `ALTER TABLE ... ALTER COLUMN`.
///
/// DB2 for i releases before version 4 cannot modify null constraints at
/// all, so the capability is gated on the probed major version. An unknown
/// version skips the gate: the server will reject the statement itself if
/// it has to, which beats blocking every migration on a soft probe.
pub struct SetNullableGenerator;

impl SqlGenerator for SetNullableGenerator {
    type Statement = SetNullableStatement;

    fn supports(&self, _statement: &Self::Statement, dialect: &dyn Dialect) -> bool {
        dialect.short_name() == "db2i"
    }

    fn priority(&self) -> i32 {
        PRIORITY_DATABASE
    }

    fn validate(&self, statement: &Self::Statement, dialect: &dyn Dialect) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", statement.table());
        errors.check_required_field("columnName", statement.column());

        match dialect.major_version() {
            Some(version) if version > 0 && version < 4 => {
                errors.add_error(
                    "DB2 for i versions less than 4 do not support modifying null constraints",
                );
            }
            Some(_) => {}
            None => {
                debug!("major version unknown, skipping null constraint capability check");
            }
        }

        errors
    }

    fn generate(
        &self,
        statement: &Self::Statement,
        dialect: &dyn Dialect,
    ) -> Result<Vec<Sql>, GenerateSqlError> {
        let errors = self.validate(statement, dialect);
        if !errors.is_empty() {
            return Err(GenerateSqlError::Validation(errors));
        }

        let table =
            dialect.escape_table_name(statement.catalog(), statement.schema(), statement.table());
        let column = dialect.escape_column_name(statement.column());
        let constraint = if statement.nullable() { "DROP NOT NULL" } else { "SET NOT NULL" };

        Ok(vec![Sql::new(
            format!("ALTER TABLE {table} ALTER COLUMN {column} {constraint}"),
            Affected::column(statement.table(), statement.column()),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Db2i;

    #[test]
    fn old_versions_are_rejected() {
        let dialect = Db2i::with_major_version(3);
        let statement = SetNullableStatement::new(None, None, "accounts", "name", false);

        let errors = SetNullableGenerator.validate(&statement, &dialect);
        assert_eq!(
            errors.messages(),
            vec!["DB2 for i versions less than 4 do not support modifying null constraints"]
        );
    }

    #[test]
    fn version_four_passes() {
        let dialect = Db2i::with_major_version(4);
        let statement = SetNullableStatement::new(None, None, "accounts", "name", false);
        assert!(SetNullableGenerator.validate(&statement, &dialect).is_empty());
    }

    #[test]
    fn unknown_version_is_not_an_error() {
        let dialect = Db2i::new();
        let statement = SetNullableStatement::new(None, None, "accounts", "name", false);
        assert!(SetNullableGenerator.validate(&statement, &dialect).is_empty());
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let dialect = Db2i::new();
        let statement = SetNullableStatement::new(None, None, "", "", false);

        let errors = SetNullableGenerator.validate(&statement, &dialect);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn generates_set_not_null() {
        let dialect = Db2i::with_major_version(7);
        let statement = SetNullableStatement::new(None, Some("bank"), "accounts", "name", false);

        let sql = SetNullableGenerator.generate(&statement, &dialect).unwrap();
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].as_str(), "ALTER TABLE bank.accounts ALTER COLUMN name SET NOT NULL");
    }

    #[test]
    fn generates_drop_not_null() {
        let dialect = Db2i::with_major_version(7);
        let statement = SetNullableStatement::new(None, None, "accounts", "name", true);

        let sql = SetNullableGenerator.generate(&statement, &dialect).unwrap();
        assert_eq!(sql[0].as_str(), "ALTER TABLE accounts ALTER COLUMN name DROP NOT NULL");
    }

    #[test]
    fn generate_surfaces_validation_errors() {
        let dialect = Db2i::with_major_version(3);
        let statement = SetNullableStatement::new(None, None, "accounts", "name", false);

        let error = SetNullableGenerator.generate(&statement, &dialect).unwrap_err();
        assert!(matches!(error, GenerateSqlError::Validation(_)));
    }
}
