use std::fmt::Display;

/// Database object a generated statement affects, carried alongside the
/// statement text so callers can track which part of the schema changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affected {
    Table { table: String },
    Column { table: String, column: String },
}

impl Affected {
    pub fn table(table: &str) -> Self {
        Affected::Table { table: table.to_string() }
    }

    pub fn column(table: &str, column: &str) -> Self {
        Affected::Column { table: table.to_string(), column: column.to_string() }
    }
}

/// A single ready-to-execute SQL statement.
///
/// The text carries no trailing statement terminator; termination is the
/// executor's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sql {
    statement: String,
    affected: Affected,
}

impl Sql {
    pub fn new(statement: String, affected: Affected) -> Self {
        Sql { statement, affected }
    }

    pub fn as_str(&self) -> &str {
        &self.statement
    }

    pub fn affected(&self) -> &Affected {
        &self.affected
    }

    pub fn into_statement(self) -> String {
        self.statement
    }
}

impl Display for Sql {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statement)
    }
}
