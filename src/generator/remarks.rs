use crate::dialect::Dialect;
use crate::error::GenerateSqlError;
use crate::sql::{Affected, Sql};
use crate::statement::{SetColumnRemarksStatement, SetTableRemarksStatement};
use crate::validation::ValidationErrors;

use super::{SqlGenerator, PRIORITY_DATABASE};

/// Table remarks via `LABEL ON TABLE`.
///
/// DB2 for i has no standard `COMMENT ON` support for this, so the rewrite
/// is mandatory whenever the dialect matches.
pub struct SetTableRemarksGenerator;

impl SqlGenerator for SetTableRemarksGenerator {
    type Statement = SetTableRemarksStatement;

    fn supports(&self, _statement: &Self::Statement, dialect: &dyn Dialect) -> bool {
        dialect.short_name() == "db2i"
    }

    fn priority(&self) -> i32 {
        PRIORITY_DATABASE
    }

    fn validate(&self, statement: &Self::Statement, _dialect: &dyn Dialect) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", statement.table());
        errors
    }

    fn generate(
        &self,
        statement: &Self::Statement,
        dialect: &dyn Dialect,
    ) -> Result<Vec<Sql>, GenerateSqlError> {
        let table =
            dialect.escape_table_name(statement.catalog(), statement.schema(), statement.table());
        let remarks = dialect.escape_string_literal(statement.remarks());

        Ok(vec![Sql::new(
            format!("LABEL ON TABLE {table} IS '{remarks}'"),
            Affected::table(statement.table()),
        )])
    }
}

/// Column remarks via `LABEL ON`.
///
/// Always two statements: the first sets the short display label, the
/// second the long column comment. Both are required on DB2 for i.
pub struct SetColumnRemarksGenerator;

impl SqlGenerator for SetColumnRemarksGenerator {
    type Statement = SetColumnRemarksStatement;

    fn supports(&self, _statement: &Self::Statement, dialect: &dyn Dialect) -> bool {
        dialect.short_name() == "db2i"
    }

    fn priority(&self) -> i32 {
        PRIORITY_DATABASE
    }

    fn validate(&self, statement: &Self::Statement, _dialect: &dyn Dialect) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", statement.table());
        errors.check_required_field("columnName", statement.column());
        errors
    }

    fn generate(
        &self,
        statement: &Self::Statement,
        dialect: &dyn Dialect,
    ) -> Result<Vec<Sql>, GenerateSqlError> {
        let table =
            dialect.escape_table_name(statement.catalog(), statement.schema(), statement.table());
        let column = dialect.escape_column_name(statement.column());
        let remarks = dialect.escape_string_literal(statement.remarks());
        let affected = Affected::column(statement.table(), statement.column());

        Ok(vec![
            Sql::new(
                format!("LABEL ON {table} ({column} TEXT IS '{remarks}')"),
                affected.clone(),
            ),
            Sql::new(
                format!("LABEL ON COLUMN {table}.{column} IS '{remarks}'"),
                affected,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Db2i;

    #[test]
    fn table_remarks_is_one_label_statement() {
        let dialect = Db2i::new();
        let statement =
            SetTableRemarksStatement::new(None, Some("bank"), "accounts", "Customer accounts");

        let sql = SetTableRemarksGenerator.generate(&statement, &dialect).unwrap();
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].as_str(), "LABEL ON TABLE bank.accounts IS 'Customer accounts'");
    }

    #[test]
    fn column_remarks_always_produces_two_statements() {
        let dialect = Db2i::new();
        let statement =
            SetColumnRemarksStatement::new(None, None, "accounts", "acct_no", "Account number");

        let sql = SetColumnRemarksGenerator.generate(&statement, &dialect).unwrap();
        assert_eq!(sql.len(), 2);
        assert_eq!(sql[0].as_str(), "LABEL ON accounts (acct_no TEXT IS 'Account number')");
        assert_eq!(sql[1].as_str(), "LABEL ON COLUMN accounts.acct_no IS 'Account number'");
        assert_eq!(*sql[0].affected(), Affected::column("accounts", "acct_no"));
        assert_eq!(*sql[1].affected(), Affected::column("accounts", "acct_no"));
    }

    #[test]
    fn remarks_text_is_escaped() {
        let dialect = Db2i::new();
        let statement = SetTableRemarksStatement::new(None, None, "t", "customer's data");

        let sql = SetTableRemarksGenerator.generate(&statement, &dialect).unwrap();
        assert_eq!(sql[0].as_str(), "LABEL ON TABLE t IS 'customer''s data'");
    }

    #[test]
    fn remarks_generators_use_the_database_rank() {
        assert_eq!(SetTableRemarksGenerator.priority(), PRIORITY_DATABASE);
        assert_eq!(SetColumnRemarksGenerator.priority(), PRIORITY_DATABASE);
    }
}
