mod db2i;

pub use db2i::Db2i;

use chrono::NaiveDateTime;

/// Database-specific formatting, escaping and capability rules the
/// statement generators depend on.
///
/// Generators never hand-build identifiers or literals; everything
/// dialect-shaped goes through this seam.
pub trait Dialect: Send + Sync {
    /// Dialect short name, used in logs and by generator selection.
    fn short_name(&self) -> &'static str;

    /// Escapes a fully qualified table name.
    fn escape_table_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> String;

    /// Escapes a bare column name.
    fn escape_column_name(&self, column: &str) -> String;

    /// Escapes free text for embedding inside a string literal.
    fn escape_string_literal(&self, text: &str) -> String;

    /// Quoted string literal for a text value.
    fn quote_string_literal(&self, text: &str) -> String {
        format!("'{}'", self.escape_string_literal(text))
    }

    /// Date or timestamp literal.
    fn date_literal(&self, value: &NaiveDateTime) -> String;

    /// Canonical true literal. Dialects without a native boolean type
    /// substitute at the value level.
    fn true_literal(&self) -> &'static str;

    /// Canonical false literal.
    fn false_literal(&self) -> &'static str;

    /// Whether a text value should be treated as a function expression
    /// rather than a string literal.
    fn looks_like_function_call(&self, text: &str) -> bool;

    /// Major version reported by the host's probe, if one ran. `None`
    /// means the probe failed or never ran; capability checks treat that
    /// as unknown, not as an error.
    fn major_version(&self) -> Option<u32>;
}
