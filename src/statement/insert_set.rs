use crate::value::ColumnValue;

/// A single row to insert.
#[derive(Debug, Clone)]
pub struct InsertStatement {
    table: String,
    columns: Vec<(String, ColumnValue)>,
}

impl InsertStatement {
    pub fn new(table: &str) -> Self {
        InsertStatement { table: table.to_string(), columns: Vec::new() }
    }

    pub fn with_column_value(mut self, column: &str, value: ColumnValue) -> Self {
        self.columns.push((column.to_string(), value));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[(String, ColumnValue)] {
        &self.columns
    }
}

/// An ordered set of row inserts flushed as multi-row INSERT statements of
/// at most `batch_threshold` rows each.
#[derive(Debug, Clone)]
pub struct InsertSetStatement {
    catalog: Option<String>,
    schema: Option<String>,
    table: String,
    batch_threshold: usize,
    rows: Vec<InsertStatement>,
}

impl InsertSetStatement {
    /// A threshold below 1 is clamped to 1.
    pub fn new(
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        batch_threshold: usize,
    ) -> Self {
        InsertSetStatement {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
            batch_threshold: batch_threshold.max(1),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: InsertStatement) {
        self.rows.push(row);
    }

    pub fn with_row(mut self, row: InsertStatement) -> Self {
        self.rows.push(row);
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

    pub fn batch_threshold(&self) -> usize {
        self.batch_threshold
    }

    pub fn rows(&self) -> &[InsertStatement] {
        &self.rows
    }
}
