use crate::value::ColumnValue;

/// An insert-or-update request against one table, keyed by one or more
/// primary key columns.
#[derive(Debug, Clone)]
pub struct InsertOrUpdateStatement {
    catalog: Option<String>,
    schema: Option<String>,
    table: String,
    primary_key: Vec<String>,
    columns: Vec<(String, ColumnValue)>,
}

impl InsertOrUpdateStatement {
    /// `primary_key` is a comma-delimited list of key column names and is
    /// split exactly once here. Key column names containing a comma are
    /// not supported.
    pub fn new(
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        primary_key: &str,
    ) -> Self {
        InsertOrUpdateStatement {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
            primary_key: primary_key
                .split(',')
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .collect(),
            columns: Vec::new(),
        }
    }

    /// Appends a column value. Insertion order is significant: every column
    /// list derived from this statement preserves it.
    pub fn with_column_value(mut self, column: &str, value: ColumnValue) -> Self {
        self.columns.push((column.to_string(), value));
        self
    }

    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    pub fn columns(&self) -> &[(String, ColumnValue)] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_is_parsed_once_at_construction() {
        let statement = InsertOrUpdateStatement::new(None, None, "accounts", "tenant_id, acct_no");
        assert_eq!(statement.primary_key(), &["tenant_id", "acct_no"]);
    }

    #[test]
    fn blank_key_segments_are_dropped() {
        let statement = InsertOrUpdateStatement::new(None, None, "accounts", "id,");
        assert_eq!(statement.primary_key(), &["id"]);
    }

    #[test]
    fn column_insertion_order_is_preserved() {
        let statement = InsertOrUpdateStatement::new(None, None, "accounts", "id")
            .with_column_value("id", ColumnValue::Raw("1".to_string()))
            .with_column_value("name", ColumnValue::text("ada"))
            .with_column_value("active", ColumnValue::Boolean(true));

        let names: Vec<&str> =
            statement.columns().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "active"]);
    }
}
