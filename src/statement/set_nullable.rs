/// A request to change a column's nullable constraint.
#[derive(Debug, Clone)]
pub struct SetNullableStatement {
    catalog: Option<String>,
    schema: Option<String>,
    table: String,
    column: String,
    nullable: bool,
}

impl SetNullableStatement {
    pub fn new(
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        column: &str,
        nullable: bool,
    ) -> Self {
        SetNullableStatement {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
            column: column.to_string(),
            nullable,
        }
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

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
