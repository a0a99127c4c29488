use tracing::debug;

use crate::dialect::Dialect;
use crate::error::GenerateSqlError;
use crate::sql::{Affected, Sql};
use crate::statement::InsertSetStatement;
use crate::validation::ValidationErrors;
use crate::value::render_row_tuple;

use super::{SqlGenerator, DIALECT_PRIORITY_OFFSET, PRIORITY_DEFAULT};

/// Batch-bounded multi-row INSERT emitter for DB2 for i.
///
/// Rows are partitioned in order into chunks of at most the statement's
/// batch threshold; each chunk becomes one complete INSERT statement with
/// its own header. Zero rows produce zero statements.
pub struct InsertSetGenerator;

impl SqlGenerator for InsertSetGenerator {
    type Statement = InsertSetStatement;

    fn supports(&self, _statement: &Self::Statement, dialect: &dyn Dialect) -> bool {
        dialect.short_name() == "db2i"
    }

    fn priority(&self) -> i32 {
        PRIORITY_DEFAULT + DIALECT_PRIORITY_OFFSET
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
        if statement.rows().is_empty() {
            return Ok(Vec::new());
        }

        let table =
            dialect.escape_table_name(statement.catalog(), statement.schema(), statement.table());

        let statements = statement
            .rows()
            .chunks(statement.batch_threshold())
            .map(|batch| {
                // every row in a batch shares the first row's column layout
                let columns = batch[0]
                    .columns()
                    .iter()
                    .map(|(name, _)| dialect.escape_column_name(name))
                    .collect::<Vec<_>>()
                    .join(", ");

                let tuples = batch
                    .iter()
                    .map(|row| render_row_tuple(dialect, row.columns()))
                    .collect::<Vec<_>>()
                    .join(", ");

                Sql::new(
                    format!("INSERT INTO {table} ({columns}) VALUES {tuples}"),
                    Affected::table(statement.table()),
                )
            })
            .collect::<Vec<_>>();

        debug!(
            "partitioned {} rows into {} INSERT statements for {}",
            statement.rows().len(),
            statements.len(),
            statement.table()
        );

        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::InsertStatement;
    use crate::dialect::Db2i;
    use crate::value::ColumnValue;

    fn row(table: &str, id: u32) -> InsertStatement {
        InsertStatement::new(table)
            .with_column_value("id", ColumnValue::Raw(id.to_string()))
            .with_column_value("name", ColumnValue::text(format!("row{id}")))
    }

    #[test]
    fn five_rows_with_threshold_two_yield_three_statements() {
        let dialect = Db2i::new();
        let mut set = InsertSetStatement::new(None, None, "audit_log", 2);
        for id in 1..=5 {
            set.add_row(row("audit_log", id));
        }

        let sql = InsertSetGenerator.generate(&set, &dialect).unwrap();
        assert_eq!(sql.len(), 3);
        assert_eq!(
            sql[0].as_str(),
            "INSERT INTO audit_log (id, name) VALUES (1, 'row1'), (2, 'row2')"
        );
        assert_eq!(
            sql[1].as_str(),
            "INSERT INTO audit_log (id, name) VALUES (3, 'row3'), (4, 'row4')"
        );
        assert_eq!(sql[2].as_str(), "INSERT INTO audit_log (id, name) VALUES (5, 'row5')");
    }

    #[test]
    fn row_order_is_preserved_across_batches() {
        let dialect = Db2i::new();
        let mut set = InsertSetStatement::new(None, None, "audit_log", 3);
        for id in 1..=7 {
            set.add_row(row("audit_log", id));
        }

        let sql = InsertSetGenerator.generate(&set, &dialect).unwrap();
        let joined = sql.iter().map(Sql::as_str).collect::<Vec<_>>().join(" ");
        let positions: Vec<usize> =
            (1..=7).map(|id| joined.find(&format!("'row{id}'")).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn no_rows_produce_no_statements() {
        let dialect = Db2i::new();
        let set = InsertSetStatement::new(None, None, "audit_log", 10);
        let sql = InsertSetGenerator.generate(&set, &dialect).unwrap();
        assert!(sql.is_empty());
    }

    #[test]
    fn every_statement_is_complete_and_tagged() {
        let dialect = Db2i::new();
        let mut set = InsertSetStatement::new(None, Some("app"), "audit_log", 2);
        for id in 1..=3 {
            set.add_row(row("audit_log", id));
        }

        let sql = InsertSetGenerator.generate(&set, &dialect).unwrap();
        for statement in &sql {
            assert!(statement.as_str().starts_with("INSERT INTO app.audit_log (id, name) VALUES ("));
            assert!(!statement.as_str().ends_with(','));
            assert_eq!(*statement.affected(), Affected::table("audit_log"));
        }
    }

    #[test]
    fn outranks_the_generic_generator() {
        assert!(InsertSetGenerator.priority() > PRIORITY_DEFAULT);
    }
}
