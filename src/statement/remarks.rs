/// Attaches human-readable remarks to a table.
#[derive(Debug, Clone)]
pub struct SetTableRemarksStatement {
    catalog: Option<String>,
    schema: Option<String>,
    table: String,
    remarks: String,
}

impl SetTableRemarksStatement {
    pub fn new(catalog: Option<&str>, schema: Option<&str>, table: &str, remarks: &str) -> Self {
        SetTableRemarksStatement {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
            remarks: remarks.to_string(),
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

    pub fn remarks(&self) -> &str {
        &self.remarks
    }
}

/// Attaches human-readable remarks to a column.
#[derive(Debug, Clone)]
pub struct SetColumnRemarksStatement {
    catalog: Option<String>,
    schema: Option<String>,
    table: String,
    column: String,
    remarks: String,
}

impl SetColumnRemarksStatement {
    pub fn new(
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        column: &str,
        remarks: &str,
    ) -> Self {
        SetColumnRemarksStatement {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.to_string(),
            column: column.to_string(),
            remarks: remarks.to_string(),
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

    pub fn remarks(&self) -> &str {
        &self.remarks
    }
}
